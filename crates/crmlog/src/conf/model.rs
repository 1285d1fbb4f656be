//! Model — CrmLogConfig and related types.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrmLogConfig {
    /// Log file to parse; the first CLI argument takes precedence
    pub input_path: Option<String>,
    pub output: OutputFormat,
    /// Render only the entry at this index instead of all entries
    pub entry: Option<usize>,
    /// Print `Parsed N log entries` before the entries (text output only)
    pub summary: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable entry blocks
    #[default]
    Text,
    /// JSON array of entries
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl Default for CrmLogConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output: OutputFormat::Text,
            entry: None,
            summary: true,
        }
    }
}
