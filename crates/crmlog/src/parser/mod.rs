/// CRM log parsing and entry assembly module
///
/// This module turns the plain-text lines of a CRM trace log into
/// structured `LogEntry` records.
///
/// # Architecture
///
/// - `fields.rs`: Field extractors, one pure function per header field
/// - `guid.rs`: UUID extraction after a key (four textual forms)
/// - `traits.rs`: The continuation-line classifier seam
/// - `classify.rs`: Default classifier and per-line `LineKind` decision
/// - `assembler.rs`: Single-pass entry assembly state machine
/// - `model.rs`: `LogEntry`, `LogLevel`, `ParsedLog`
/// - `stats.rs`: Per-parse line counters
///
/// # Guarantees
///
/// - Extraction never fails: a missing or malformed field degrades to its
///   documented default and the rest of the entry parses normally
/// - An entry exists only for a line with a parseable timestamp
/// - Entries are never mutated after the next header line or end of input

pub mod traits;
pub mod fields;
pub mod guid;
pub mod classify;
pub mod assembler;
pub mod model;
pub mod stats;
mod serde_utils;

// Re-export commonly used types
pub use assembler::{parse, parse_with, EntryAssembler, AssemblerState};
pub use classify::{IndentedFrame, LineKind};
pub use fields::HeaderFields;
pub use model::{LogEntry, LogLevel, ParsedLog};
pub use stats::ParseStats;
pub use traits::FrameClassifier;

// Constants
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
pub const COMMENT_MARKER: char = '#';
pub const THREAD_UNPARSED: i32 = -1;
pub const ORGANIZATION_KEY: &str = "Organization:";
pub const USER_KEY: &str = "User:";
pub const REQUEST_ID_KEY: &str = "ReqId:";
