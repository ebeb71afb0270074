//! CLI argument parsing for lostfound
//!
//! Global flags: --config, --input, --format, --quiet, --verbose, --log-level,
//! --log-json

pub mod output;
pub mod parse;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use lostfound_core::category::Category;
use lostfound_core::report::{ReportKey, ReportKind};
pub use output::OutputFormat;
use output::parse_output_format;
use parse::{parse_category, parse_report_key, parse_report_kind, parse_threshold, parse_timestamp};

/// Lostfound - duplicate detection and reporting for campus lost & found
#[derive(Parser, Debug)]
#[command(name = "lostfound")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: $LOSTFOUND_CONFIG, then lostfound.toml in
    /// the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report snapshot to analyse
    #[arg(long, short, global = true, default_value = "reports.json")]
    pub input: PathBuf,

    /// Output format: human, json or records
    #[arg(
        long,
        global = true,
        value_name = "FORMAT",
        default_value = "human",
        value_parser = parse_output_format
    )]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timings on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Group reports that probably describe the same item
    Duplicates {
        /// Minimum similarity for grouping, clamped into (0, 1]
        #[arg(long, short, value_parser = parse_threshold)]
        threshold: Option<f64>,

        /// Only show groups with a member whose title or description contains this text
        #[arg(long, short)]
        search: Option<String>,

        /// Only show groups containing a report of this kind
        #[arg(long, short = 'k', value_parser = parse_report_kind)]
        kind: Option<ReportKind>,

        /// Newest reports read per table
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Explain the similarity between two reports
    Similarity {
        /// First report, as KIND:ID (e.g. lost:12)
        #[arg(value_parser = parse_report_key)]
        first: ReportKey,

        /// Second report, as KIND:ID
        #[arg(value_parser = parse_report_key)]
        second: ReportKey,
    },

    /// Predict a category for every report
    Categorize {
        /// Minimum confidence to list or apply a prediction, clamped into [0, 1]
        #[arg(long, short, value_parser = parse_threshold)]
        confidence: Option<f64>,

        /// Only list predictions of this category
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,

        /// Print the category updates that would be written to the store
        #[arg(long)]
        plan: bool,
    },

    /// Executive summary: overview, trends, insights, recommendations
    Summary {
        /// Reference time (RFC 3339), defaults to the current time
        #[arg(long, value_parser = parse_timestamp)]
        now: Option<DateTime<Utc>>,
    },

    /// Recompute duplicate groups whenever the snapshot changes
    Watch {
        /// Minimum similarity for grouping, clamped into (0, 1]
        #[arg(long, short, value_parser = parse_threshold)]
        threshold: Option<f64>,

        /// Poll interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}
