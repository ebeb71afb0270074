//! Shared output helpers for commands

use serde::Serialize;

use lostfound_core::error::Result;
use lostfound_core::records;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a records header line
pub fn print_records_header(mode: &str, fields: &[(&str, String)]) {
    println!("{}", records::header(mode, fields));
}

/// Two-decimal rendering used for scores in human and records output
pub fn score(value: f64) -> String {
    format!("{:.2}", value)
}
