use std::collections::HashMap;
use serde::Serialize;
use super::classify::LineKind;

/// Line counters for one parse.
///
/// The assembler is single-threaded and owns its stats outright, so plain
/// counters are enough. Every line fed to the assembler lands in exactly one
/// of the per-kind counters, which keeps
/// `total_lines == comments + headers + stack_frame_lines + trace_message_lines + orphan_lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub total_lines: u64,
    pub comments: u64,
    /// Header lines seen; equal to the number of entries produced
    pub headers: u64,
    pub stack_frame_lines: u64,
    pub trace_message_lines: u64,
    /// Continuation text seen before the first header, discarded
    pub orphan_lines: u64,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line that was attributed according to its kind
    #[inline]
    pub fn record(&mut self, kind: LineKind) {
        self.total_lines += 1;
        match kind {
            LineKind::Comment => self.comments += 1,
            LineKind::Header(_) => self.headers += 1,
            LineKind::StackFrame => self.stack_frame_lines += 1,
            LineKind::TraceMessage => self.trace_message_lines += 1,
        }
    }

    /// Record a continuation line with no open entry
    #[inline]
    pub fn record_orphan(&mut self) {
        self.total_lines += 1;
        self.orphan_lines += 1;
    }

    /// Share of non-comment lines that ended up attributed to an entry
    pub fn attributed_ratio(&self) -> f64 {
        let content = self.total_lines - self.comments;
        if content == 0 {
            return 1.0;
        }
        (content - self.orphan_lines) as f64 / content as f64
    }

    /// Flatten into string pairs for logging or display
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("total_lines".to_string(), self.total_lines.to_string());
        map.insert("comments".to_string(), self.comments.to_string());
        map.insert("headers".to_string(), self.headers.to_string());
        map.insert("stack_frame_lines".to_string(), self.stack_frame_lines.to_string());
        map.insert("trace_message_lines".to_string(), self.trace_message_lines.to_string());
        map.insert("orphan_lines".to_string(), self.orphan_lines.to_string());
        map.insert("attributed_ratio".to_string(), format!("{:.2}", self.attributed_ratio()));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_new_stats_are_empty() {
        let stats = ParseStats::new();
        assert_eq!(stats.total_lines, 0);
        assert_eq!(stats.attributed_ratio(), 1.0);
    }

    #[test]
    fn test_record_by_kind() {
        let mut stats = ParseStats::new();
        stats.record(LineKind::Comment);
        stats.record(LineKind::Header(NaiveDateTime::default()));
        stats.record(LineKind::StackFrame);
        stats.record(LineKind::StackFrame);
        stats.record(LineKind::TraceMessage);
        stats.record_orphan();

        assert_eq!(stats.total_lines, 6);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.headers, 1);
        assert_eq!(stats.stack_frame_lines, 2);
        assert_eq!(stats.trace_message_lines, 1);
        assert_eq!(stats.orphan_lines, 1);
    }

    #[test]
    fn test_attributed_ratio_ignores_comments() {
        let mut stats = ParseStats::new();
        stats.record(LineKind::Comment);
        stats.record(LineKind::Comment);
        stats.record_orphan();
        stats.record(LineKind::Header(NaiveDateTime::default()));

        assert_eq!(stats.attributed_ratio(), 0.5);
    }

    #[test]
    fn test_to_map() {
        let mut stats = ParseStats::new();
        stats.record(LineKind::Header(NaiveDateTime::default()));
        let map = stats.to_map();
        assert_eq!(map.get("headers").map(String::as_str), Some("1"));
        assert_eq!(map.get("attributed_ratio").map(String::as_str), Some("1.00"));
    }
}
