use std::fmt;
use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};
use uuid::Uuid;
use super::fields::HeaderFields;
use super::serde_utils::{serialize_timestamp, deserialize_timestamp};
use super::{THREAD_UNPARSED, TIMESTAMP_FORMAT};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Verbose,
    Info,
    Warning,
    Error,
    /// Level label absent or not one of the four known values
    #[default]
    None,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Verbose => "Verbose",
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::None => "None",
        }
    }

    /// Exact, case-sensitive match. Anything else is `LogLevel::None`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Verbose" => LogLevel::Verbose,
            "Info" => LogLevel::Info,
            "Warning" => LogLevel::Warning,
            "Error" => LogLevel::Error,
            _ => LogLevel::None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One header line plus its continuation lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Header timestamp, millisecond precision
    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub timestamp: NaiveDateTime,

    pub process: String,

    pub organization_id: Option<Uuid>,

    /// Never present in the header grammar; left empty for callers to fill
    pub organization_name: String,

    /// `THREAD_UNPARSED` when the thread field could not be read
    pub thread: i32,

    pub category: String,

    pub user_id: Option<Uuid>,

    /// Never present in the header grammar; left empty for callers to fill
    pub user_name: String,

    pub log_level: LogLevel,

    pub request_id: Option<Uuid>,

    pub operation: String,

    /// Stack-frame continuation lines, each followed by `\n`
    pub stack_trace: String,

    /// Trace message continuation lines, each followed by `\n`
    pub trace_message: String,
}

impl LogEntry {
    /// Create an entry with every field at its default
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            process: String::new(),
            organization_id: None,
            organization_name: String::new(),
            thread: THREAD_UNPARSED,
            category: String::new(),
            user_id: None,
            user_name: String::new(),
            log_level: LogLevel::None,
            request_id: None,
            operation: String::new(),
            stack_trace: String::new(),
            trace_message: String::new(),
        }
    }

    /// Open an entry from the fields of its header line
    pub fn from_header(timestamp: NaiveDateTime, header: HeaderFields) -> Self {
        Self {
            process: header.process,
            organization_id: header.organization_id,
            thread: header.thread,
            category: header.category,
            user_id: header.user_id,
            log_level: header.log_level,
            request_id: header.request_id,
            operation: header.operation,
            ..Self::new(timestamp)
        }
    }

    pub fn append_stack_frame(&mut self, line: &str) {
        self.stack_trace.push_str(line);
        self.stack_trace.push('\n');
    }

    pub fn append_trace_message(&mut self, line: &str) {
        self.trace_message.push_str(line);
        self.trace_message.push('\n');
    }

    /// Stack-frame lines in order, without their trailing newlines
    pub fn stack_frames(&self) -> impl Iterator<Item = &str> {
        self.stack_trace.lines()
    }

    pub fn has_continuation(&self) -> bool {
        !self.stack_trace.is_empty() || !self.trace_message.is_empty()
    }
}

fn fmt_uuid(id: &Option<Uuid>) -> String {
    id.map(|u| u.to_string()).unwrap_or_default()
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timestamp:\t{}", self.timestamp.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Process:\t{}", self.process)?;
        writeln!(f, "ORG Guid:\t{}", fmt_uuid(&self.organization_id))?;
        writeln!(f, "Thread:\t\t{}", self.thread)?;
        writeln!(f, "Category:\t{}", self.category)?;
        writeln!(f, "User Guid:\t{}", fmt_uuid(&self.user_id))?;
        writeln!(f, "Log Level:\t{}", self.log_level)?;
        writeln!(f, "ReqID:\t\t{}", fmt_uuid(&self.request_id))?;
        writeln!(f, "Operation:\t{}", self.operation)?;
        f.write_str(&self.stack_trace)?;
        f.write_str(&self.trace_message)?;
        f.write_str(" END OF ENTRY \n\n")
    }
}

/// Parsed entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedLog {
    entries: Vec<LogEntry>,
}

impl ParsedLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}

impl IntoIterator for ParsedLog {
    type Item = LogEntry;
    type IntoIter = std::vec::IntoIter<LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<LogEntry>> for ParsedLog {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }
}
