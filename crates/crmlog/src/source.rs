//! Source — reads the lines of a log file for the parser.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

const UTF8_BOM: char = '\u{feff}';

/// Read every line of `path`.
///
/// Invalid UTF-8 is replaced rather than rejected, a leading byte-order mark
/// is dropped, and both `\n` and `\r\n` endings are accepted. A trailing
/// newline does not produce an extra empty line.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let lines = split_lines(&String::from_utf8_lossy(&bytes));
    tracing::debug!(path = %path.display(), lines = lines.len(), bytes = bytes.len(), "source: read log file");
    Ok(lines)
}

/// Split already-decoded text into lines with the same rules as `read_lines`.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_lines_endings() {
        assert_eq!(split_lines("a\r\nb\nc\n"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_strips_bom() {
        assert_eq!(split_lines("\u{feff}# banner\nx"), vec!["# banner", "x"]);
    }

    #[test]
    fn test_split_lines_keeps_indentation() {
        assert_eq!(split_lines("   at A()\n\tat B()"), vec!["   at A()", "\tat B()"]);
    }

    #[test]
    fn test_read_lines_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[2015-12-08 10:15:30.123] Process: w3wp\r\n   at A()\r\n>msg\r\n").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["[2015-12-08 10:15:30.123] Process: w3wp", "   at A()", ">msg"]);
    }

    #[test]
    fn test_read_lines_invalid_utf8_is_lossy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ok\n\xFF\xFEbad\n").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("bad"));
    }

    #[test]
    fn test_read_lines_missing_file() {
        assert!(read_lines("/definitely/not/here.log").is_err());
    }
}
