use tracing::{debug, trace, warn};

use super::classify::{classify_line, IndentedFrame, LineKind};
use super::fields::HeaderFields;
use super::model::{LogEntry, ParsedLog};
use super::stats::ParseStats;
use super::traits::FrameClassifier;

enum LineAction {
    SealAndOpen,
    Open,
    AppendFrame,
    AppendMessage,
    Skip,
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    /// No header seen yet, or the last entry was just sealed by `finish`
    NoEntry,
    /// An entry was opened by the previous line
    InHeader,
    /// The previous line was appended to the stack trace
    InStackTrace,
    /// The previous line was appended to the trace message
    InTraceMessage,
}

/// Single-pass assembler turning CRM log lines into entries.
///
/// Each line is handled in a fixed order:
/// - `#` comment lines are skipped without touching the open entry
/// - a line with a parseable timestamp seals the open entry and opens a new one
/// - any other line is a continuation: frame lines go to the stack trace,
///   the rest to the trace message
/// - continuation text before the first header is discarded
///
/// Lines are fed one at a time through `push`, which hands back the entry
/// sealed by that line (if any). `finish` seals whatever is still open.
/// Stopping early is just not calling `push` again.
pub struct EntryAssembler<C = IndentedFrame> {
    current: Option<LogEntry>,
    state: AssemblerState,
    classifier: C,
    stats: ParseStats,
}

impl EntryAssembler<IndentedFrame> {
    pub fn new() -> Self {
        Self::with_classifier(IndentedFrame)
    }
}

impl Default for EntryAssembler<IndentedFrame> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FrameClassifier> EntryAssembler<C> {
    /// Create an assembler using `classifier` as the stack-frame policy.
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            current: None,
            state: AssemblerState::NoEntry,
            classifier,
            stats: ParseStats::new(),
        }
    }

    pub fn state(&self) -> AssemblerState {
        self.state
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Returns true if an entry is open and has not been emitted yet.
    pub fn has_pending(&self) -> bool {
        self.current.is_some()
    }

    /// Feed one line. Returns the previous entry when this line seals it.
    pub fn push(&mut self, line: &str) -> Option<LogEntry> {
        let kind = classify_line(line, &self.classifier);

        let action = match (kind, self.current.is_some()) {
            (LineKind::Comment, _) => LineAction::Skip,
            (LineKind::Header(_), true) => LineAction::SealAndOpen,
            (LineKind::Header(_), false) => LineAction::Open,
            (LineKind::StackFrame, true) => LineAction::AppendFrame,
            (LineKind::TraceMessage, true) => LineAction::AppendMessage,
            (LineKind::StackFrame | LineKind::TraceMessage, false) => LineAction::Discard,
        };

        match action {
            LineAction::Skip => {
                trace!(kind = kind.as_str(), "assembler: skipping comment line");
                self.stats.record(kind);
                None
            }
            LineAction::SealAndOpen | LineAction::Open => {
                let sealed = self.seal();
                if let LineKind::Header(timestamp) = kind {
                    self.current = Some(LogEntry::from_header(timestamp, HeaderFields::extract(line)));
                    self.state = AssemblerState::InHeader;
                }
                self.stats.record(kind);
                sealed
            }
            LineAction::AppendFrame => {
                if let Some(ref mut entry) = self.current {
                    entry.append_stack_frame(line);
                    self.state = AssemblerState::InStackTrace;
                }
                self.stats.record(kind);
                None
            }
            LineAction::AppendMessage => {
                if let Some(ref mut entry) = self.current {
                    entry.append_trace_message(line);
                    self.state = AssemblerState::InTraceMessage;
                }
                self.stats.record(kind);
                None
            }
            LineAction::Discard => {
                self.stats.record_orphan();
                if self.stats.orphan_lines == 1 {
                    warn!("assembler: discarding continuation text found before the first header");
                }
                trace!(kind = kind.as_str(), "assembler: orphan line discarded");
                None
            }
        }
    }

    /// Seal the open entry, if any (call at end of input).
    pub fn finish(&mut self) -> Option<LogEntry> {
        self.seal()
    }

    /// Run every line through the assembler and collect the entries.
    pub fn assemble<I, S>(mut self, lines: I) -> (ParsedLog, ParseStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = ParsedLog::new();
        for line in lines {
            if let Some(entry) = self.push(line.as_ref()) {
                parsed.push(entry);
            }
        }
        if let Some(entry) = self.finish() {
            parsed.push(entry);
        }

        debug!(
            entries = parsed.len(),
            lines = self.stats.total_lines,
            orphans = self.stats.orphan_lines,
            "assembler: parse complete"
        );
        (parsed, self.stats)
    }

    fn seal(&mut self) -> Option<LogEntry> {
        let entry = self.current.take()?;
        self.state = AssemblerState::NoEntry;
        trace!(
            timestamp = %entry.timestamp,
            stack_bytes = entry.stack_trace.len(),
            message_bytes = entry.trace_message.len(),
            "assembler: entry sealed"
        );
        Some(entry)
    }
}

/// Parse a sequence of lines with the default stack-frame policy.
pub fn parse<I, S>(lines: I) -> ParsedLog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    EntryAssembler::new().assemble(lines).0
}

/// Parse a sequence of lines with a caller-supplied stack-frame policy.
pub fn parse_with<I, S, C>(lines: I, classifier: C) -> ParsedLog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: FrameClassifier,
{
    EntryAssembler::with_classifier(classifier).assemble(lines).0
}
