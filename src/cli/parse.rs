use chrono::{DateTime, Utc};

use lostfound_core::category::Category;
use lostfound_core::report::{parse_timestamp as parse_report_timestamp, ReportKey, ReportKind};

/// Parse a threshold value. Out-of-range numbers are kept and clamped into
/// `(0, 1]` by the command, with a warning.
pub fn parse_threshold(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_nan() {
        return Err(format!("'{s}' is not a number"));
    }
    Ok(value)
}

/// Parse report kind from string
pub fn parse_report_kind(s: &str) -> std::result::Result<ReportKind, String> {
    s.parse::<ReportKind>().map_err(|e| e.to_string())
}

/// Parse a `KIND:ID` report reference
pub fn parse_report_key(s: &str) -> std::result::Result<ReportKey, String> {
    s.parse::<ReportKey>().map_err(|e| e.to_string())
}

/// Parse category name from string
pub fn parse_category(s: &str) -> std::result::Result<Category, String> {
    s.parse::<Category>().map_err(|e| e.to_string())
}

/// Parse an RFC 3339 (or zone-less UTC) timestamp
pub fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    parse_report_timestamp(s).ok_or_else(|| format!("'{s}' is not an RFC 3339 timestamp"))
}
