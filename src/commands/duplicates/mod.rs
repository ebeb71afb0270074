//! `lostfound duplicates` command - group probable duplicate reports
//!
//! - `--threshold` overrides `[duplicates] threshold`
//! - `--limit` overrides `[duplicates] feed_limit` (newest rows per table)
//! - `--search` / `--kind` hide groups after clustering; they never change
//!   which groups form

pub mod format;

use lostfound_core::duplicates::{ClusteringConfig, DuplicateGroup, DuplicateReport, GroupFilter};
use lostfound_core::error::Result;
use lostfound_core::report::ReportKind;

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;

use self::format::{output_human, output_json, output_records};

/// Options for the duplicates command
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicatesOptions<'a> {
    pub threshold: Option<f64>,
    pub search: Option<&'a str>,
    pub kind: Option<ReportKind>,
    pub limit: Option<usize>,
}

/// Execute the duplicates command
pub fn execute(ctx: &CommandContext, options: DuplicatesOptions) -> Result<()> {
    let clustering = options
        .threshold
        .map_or_else(|| ctx.config.clustering(), ClusteringConfig::new);
    let limit = options.limit.unwrap_or(ctx.config.duplicates.feed_limit);

    let snapshot = ctx.load_snapshot()?;
    let reports = snapshot.reports(Some(limit));

    let result = DuplicateReport::detect(&reports, &clustering);
    trace_command!(ctx.cli, ctx.start, "find_duplicate_groups");

    let filter = GroupFilter::new()
        .with_search(options.search)
        .with_kind(options.kind);
    render(ctx.cli, &result, &filter, clustering.threshold())
}

/// Print a detection result in the selected format
pub fn render(
    cli: &Cli,
    result: &DuplicateReport,
    filter: &GroupFilter,
    threshold: f64,
) -> Result<()> {
    let groups: Vec<&DuplicateGroup> = result.filtered(filter).collect();
    match cli.format {
        OutputFormat::Human => {
            output_human(cli, &result.stats, &groups, threshold);
            Ok(())
        }
        OutputFormat::Json => output_json(&result.stats, &groups, threshold),
        OutputFormat::Records => {
            output_records(&result.stats, &groups, threshold);
            Ok(())
        }
    }
}
