//! Fields — pure, line-scoped extractors for CRM log header fields.
//!
//! Every extractor takes one line and returns either the field value or its
//! documented default. None of them fail: a missing label and a malformed
//! value are treated the same.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::{COMMENT_MARKER, ORGANIZATION_KEY, REQUEST_ID_KEY, THREAD_UNPARSED, USER_KEY};
use super::model::LogLevel;

pub use super::classify::is_stack_frame_line;
pub use super::guid::extract_guid_after_key;

/// `[yyyy-MM-dd HH:mm:ss.fff]` anchored at line start.
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{4})-(\d{2})-(\d{2}) (\d{2}):(\d{2}):(\d{2})\.(\d{3})\]")
        .unwrap_or_else(|_| unreachable!())
});

static PROCESS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Process:\s*([^ |]+)").unwrap_or_else(|_| unreachable!()));

static CATEGORY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Category:\s*([^ |]+)").unwrap_or_else(|_| unreachable!()));

static LEVEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Level:\s*([^ |]+)").unwrap_or_else(|_| unreachable!()));

/// Digits followed by one more character of any kind. Thread numbers are
/// often followed directly by an annotation, e.g. `7(MSCRM:-RegistryWatcher)`.
static THREAD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Thread:\s+(\d+(?: |\||.))").unwrap_or_else(|_| unreachable!()));

/// Applied to the text after the last pipe.
static OPERATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+([^ ]*)").unwrap_or_else(|_| unreachable!()));

/// Header fields other than the timestamp, extracted from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    pub process: String,
    pub organization_id: Option<Uuid>,
    pub thread: i32,
    pub category: String,
    pub user_id: Option<Uuid>,
    pub log_level: LogLevel,
    pub request_id: Option<Uuid>,
    pub operation: String,
}

impl HeaderFields {
    pub fn extract(line: &str) -> Self {
        Self {
            process: extract_process(line),
            organization_id: extract_organization_id(line),
            thread: extract_thread(line),
            category: extract_category(line),
            user_id: extract_user_id(line),
            log_level: extract_log_level(line),
            request_id: extract_request_id(line),
            operation: extract_operation(line),
        }
    }
}

/// Banner and comment lines start with `#`.
pub fn is_header_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

/// Parse the leading bracketed timestamp.
///
/// A line can match the bracket shape and still name an impossible instant
/// (`[2015-13-40 99:99:99.999]`); that is reported as no timestamp.
pub fn extract_timestamp(line: &str) -> Option<NaiveDateTime> {
    let caps = TIMESTAMP_REGEX.captures(line)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = i32::try_from(num(1)?).ok()?;
    NaiveDate::from_ymd_opt(year, num(2)?, num(3)?)?
        .and_hms_milli_opt(num(4)?, num(5)?, num(6)?, num(7)?)
}

pub fn extract_process(line: &str) -> String {
    capture_token(&PROCESS_REGEX, line)
}

pub fn extract_category(line: &str) -> String {
    capture_token(&CATEGORY_REGEX, line)
}

pub fn extract_log_level(line: &str) -> LogLevel {
    LEVEL_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| LogLevel::from_label(m.as_str().trim()))
        .unwrap_or_default()
}

/// Thread number after `Thread:`, or `THREAD_UNPARSED`.
///
/// All non-digit characters are stripped from the match before parsing, so
/// the trailing character is kept when it is itself a digit. A lone digit
/// at end of line has no trailing character and does not match.
pub fn extract_thread(line: &str) -> i32 {
    let Some(m) = THREAD_REGEX.captures(line).and_then(|caps| caps.get(1)) else {
        return THREAD_UNPARSED;
    };

    let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(THREAD_UNPARSED)
}

/// Token after the rightmost `|`, which must be followed by whitespace.
pub fn extract_operation(line: &str) -> String {
    let Some(idx) = line.rfind('|') else {
        return String::new();
    };

    OPERATION_REGEX
        .captures(&line[idx + 1..])
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

pub fn extract_organization_id(line: &str) -> Option<Uuid> {
    extract_guid_after_key(line, ORGANIZATION_KEY)
}

pub fn extract_user_id(line: &str) -> Option<Uuid> {
    extract_guid_after_key(line, USER_KEY)
}

pub fn extract_request_id(line: &str) -> Option<Uuid> {
    extract_guid_after_key(line, REQUEST_ID_KEY)
}

fn capture_token(regex: &Regex, line: &str) -> String {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
