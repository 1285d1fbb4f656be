//! Classify — the per-line decision shared by extraction and assembly.
//!
//! Precedence is fixed: comment, then header (parseable timestamp), then the
//! frame classifier. A `#` line inside a stack trace is therefore skipped, and
//! a header line always opens a new entry even when the classifier would
//! accept it as a frame.

use chrono::NaiveDateTime;

use super::fields::{extract_timestamp, is_header_comment};
use super::traits::FrameClassifier;

/// Stack-frame policy: a non-empty line whose first character is whitespace.
///
/// Lines without leading whitespace (including empty lines) end the current
/// stack-trace run and are recorded as trace message text.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentedFrame;

impl FrameClassifier for IndentedFrame {
    fn is_stack_frame(&self, line: &str) -> bool {
        line.starts_with(char::is_whitespace)
    }
}

/// Stack-frame check with the default policy.
pub fn is_stack_frame_line(line: &str) -> bool {
    IndentedFrame.is_stack_frame(line)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#` banner or comment, ignored entirely
    Comment,
    /// Starts a new entry
    Header(NaiveDateTime),
    /// Continuation accepted by the frame classifier
    StackFrame,
    /// Any other continuation
    TraceMessage,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Comment => "comment",
            LineKind::Header(_) => "header",
            LineKind::StackFrame => "stack_frame",
            LineKind::TraceMessage => "trace_message",
        }
    }
}

pub fn classify_line<C>(line: &str, classifier: &C) -> LineKind
where
    C: FrameClassifier + ?Sized,
{
    if is_header_comment(line) {
        return LineKind::Comment;
    }

    if let Some(timestamp) = extract_timestamp(line) {
        return LineKind::Header(timestamp);
    }

    if classifier.is_stack_frame(line) {
        LineKind::StackFrame
    } else {
        LineKind::TraceMessage
    }
}
