//! Run — read the configured file, assemble entries, render them to stdout.

use std::io;
use tracing::{debug, info};

use crate::conf::CrmLogConfig;
use crate::error::{CrmLogError, Result};
use crate::parser::{EntryAssembler, ParseStats, ParsedLog};
use crate::runtime::output::render;
use crate::source::read_lines;

/// Parse the file named by `config.input_path`.
pub fn parse_file(config: &CrmLogConfig) -> Result<(ParsedLog, ParseStats)> {
    let path = config
        .input_path
        .as_deref()
        .ok_or_else(|| CrmLogError::InvalidConfig("input_path is not configured".to_string()))?;

    let lines = read_lines(path)?;
    let (parsed, stats) = EntryAssembler::new().assemble(&lines);

    info!(
        path,
        entries = parsed.len(),
        lines = stats.total_lines,
        comments = stats.comments,
        orphans = stats.orphan_lines,
        attributed = stats.attributed_ratio(),
        "Parsed log file"
    );
    debug!(stats = ?stats.to_map(), "parse stats");
    Ok((parsed, stats))
}

/// Parse and render to stdout.
pub fn run(config: &CrmLogConfig) -> Result<ParseStats> {
    let (parsed, stats) = parse_file(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&parsed, config, &mut out)?;
    Ok(stats)
}
