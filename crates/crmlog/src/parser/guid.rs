//! Guid — UUID extraction after a key such as `User:`.
//!
//! Four textual forms are recognized:
//! - `ca761232ed4211cebacd00aa0057b223`
//! - `CA761232-ED42-11CE-BACD-00AA0057B223`
//! - `{CA761232-ED42-11CE-BACD-00AA0057B223}`
//! - `(CA761232-ED42-11CE-BACD-00AA0057B223)`

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

/// Optional whitespace, then one of the four forms. Wrapped forms come first
/// so a bracket pair is consumed as part of the value. Bare forms also take a
/// trailing closer, so an unopened `}` or `)` reaches `parse_guid_text` and is
/// rejected there.
static GUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*(",
        r"\{[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}\}",
        r"|\([0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}\)",
        r"|[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}[)}]?",
        r"|[0-9A-Fa-f]{32}[)}]?",
        r")",
    ))
    .unwrap_or_else(|_| unreachable!())
});

/// Find the first occurrence of `key` that is followed by a UUID and return it.
///
/// Returns `None` when the key is absent or no occurrence of it is followed by
/// a well-formed UUID.
pub fn extract_guid_after_key(line: &str, key: &str) -> Option<Uuid> {
    if key.is_empty() {
        return None;
    }

    line.match_indices(key).find_map(|(idx, _)| {
        let rest = &line[idx + key.len()..];
        GUID_REGEX
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .and_then(|m| parse_guid_text(m.as_str()))
    })
}

/// Parse one of the four textual forms. Unbalanced wrappers are rejected.
pub fn parse_guid_text(text: &str) -> Option<Uuid> {
    let (inner, wrapped) = match (text.chars().next(), text.chars().last()) {
        (Some('{'), Some('}')) | (Some('('), Some(')')) if text.len() >= 2 => {
            (&text[1..text.len() - 1], true)
        }
        (Some('{' | '('), _) | (_, Some('}' | ')')) => return None,
        _ => (text, false),
    };

    // Wrapped values are always hyphenated
    match (inner.len(), wrapped) {
        (36, _) | (32, false) => Uuid::parse_str(inner).ok(),
        _ => None,
    }
}
