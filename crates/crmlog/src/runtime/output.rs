//! Output — render parsed entries as text blocks or JSON.

use std::io::Write;

use crate::conf::{CrmLogConfig, OutputFormat};
use crate::error::{CrmLogError, Result};
use crate::parser::{LogEntry, ParsedLog};

/// Write the entries selected by `config` to `out`.
///
/// With `config.entry` set only that entry is written; an index past the end
/// is an error. Otherwise every entry is written in file order.
pub fn render<W: Write>(parsed: &ParsedLog, config: &CrmLogConfig, out: &mut W) -> Result<()> {
    let selected: Vec<&LogEntry> = match config.entry {
        Some(index) => {
            let entry = parsed.get(index).ok_or(CrmLogError::EntryOutOfRange {
                index,
                count: parsed.len(),
            })?;
            vec![entry]
        }
        None => parsed.iter().collect(),
    };

    match config.output {
        OutputFormat::Text => {
            if config.summary {
                writeln!(out, "Parsed {} log entries", parsed.len())?;
            }
            for entry in selected {
                write!(out, "{}", entry)?;
            }
        }
        OutputFormat::Json => {
            match config.entry {
                Some(_) => serde_json::to_writer_pretty(&mut *out, &selected[0])?,
                None => serde_json::to_writer_pretty(&mut *out, &selected)?,
            }
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
