//! Output format flag, parsed through the core `OutputFormat::from_str`

pub use lostfound_core::format::OutputFormat;

/// Value parser for `--format`
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
