// Module structure for the CRM log objectifier.

// Core
pub mod parser;

// Surfaces around the core
pub mod source;
pub mod conf;
pub mod runtime;
pub mod error;

pub use error::{CrmLogError, Result};
pub use parser::{parse, parse_with, EntryAssembler, FrameClassifier, LogEntry, LogLevel, ParsedLog};
