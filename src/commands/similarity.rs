//! `lostfound similarity` command - per-factor breakdown for one pair

use serde_json::json;

use lostfound_core::error::{LostFoundError, Result};
use lostfound_core::feed::Snapshot;
use lostfound_core::records::quoted;
use lostfound_core::report::{Report, ReportKey};
use lostfound_core::similarity::{explain, SimilarityBreakdown};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header, score};

/// Execute the similarity command
pub fn execute(ctx: &CommandContext, first: &ReportKey, second: &ReportKey) -> Result<()> {
    let snapshot = ctx.load_snapshot()?;
    let a = find_report(&snapshot, first)?;
    let b = find_report(&snapshot, second)?;

    let breakdown = explain(&a, &b);
    tracing::debug!(first = %first, second = %second, score = breakdown.score, "pair scored");

    match ctx.cli.format {
        OutputFormat::Human => output_human(&a, &b, &breakdown),
        OutputFormat::Json => {
            let output = json!({
                "first": first.to_string(),
                "second": second.to_string(),
                "similarity": breakdown,
            });
            print_json(&output)?;
        }
        OutputFormat::Records => {
            print_records_header(
                "similarity",
                &[
                    ("first", first.to_string()),
                    ("second", second.to_string()),
                    ("score", score(breakdown.score)),
                ],
            );
            println!("R {} {}", first, quoted(&a.title));
            println!("R {} {}", second, quoted(&b.title));
            println!(
                "S title={} description={} location={} category={}",
                score(breakdown.title),
                score(breakdown.description),
                score(breakdown.location),
                score(breakdown.category)
            );
        }
    }
    Ok(())
}

fn find_report(snapshot: &Snapshot, key: &ReportKey) -> Result<Report> {
    snapshot
        .table(key.kind, None)
        .into_iter()
        .find(|r| r.id == key.id)
        .ok_or_else(|| LostFoundError::ReportNotFound {
            key: key.to_string(),
        })
}

fn output_human(a: &Report, b: &Report, breakdown: &SimilarityBreakdown) {
    println!("{}  {}", a.key(), a.title);
    println!("{}  {}", b.key(), b.title);
    println!();
    println!("  title        {}  (x4)", score(breakdown.title));
    println!("  description  {}  (x3)", score(breakdown.description));
    println!("  location     {}  (x2)", score(breakdown.location));
    println!("  category     {}  (x1)", score(breakdown.category));
    println!();
    println!("Similarity: {}", score(breakdown.score));
}
