//! Utilities for the records output format
//!
//! Every records document starts with a header line
//! `H lostfound=1 mode=<command> key=value...`, followed by one line per item.
//! Free text is always double-quoted.

/// Records format version written in the header
pub const RECORDS_VERSION: u32 = 1;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Quote a free-text field, collapsing newlines
pub fn quoted(s: &str) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    format!("\"{}\"", escape_quotes(&flat))
}

/// Header line for a records document
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H lostfound={} mode={}", RECORDS_VERSION, mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}
