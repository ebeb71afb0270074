//! `lostfound categorize` command - keyword category predictions
//!
//! Lists predictions passing the confidence threshold (and `--category`),
//! with counters and the per-category distribution. `--plan` prints the
//! store updates instead.

use serde_json::json;

use lostfound_core::category::Category;
use lostfound_core::error::Result;
use lostfound_core::records::quoted;
use lostfound_core::tagging::{
    categorize, category_distribution, clamp_confidence_threshold, plan_updates,
    CategorizedReport, CategoryUpdate, TaggingFilter, TaggingStats,
};

use crate::cli::OutputFormat;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header, score};

/// Execute the categorize command
pub fn execute(
    ctx: &CommandContext,
    confidence: Option<f64>,
    category: Option<Category>,
    plan: bool,
) -> Result<()> {
    let threshold =
        clamp_confidence_threshold(confidence.unwrap_or(ctx.config.tagging.confidence_threshold));
    let snapshot = ctx.load_snapshot()?;
    let reports = snapshot.reports(Some(ctx.config.tagging.feed_limit));

    let items = categorize(&reports);
    trace_command!(ctx.cli, ctx.start, "categorize");

    if plan {
        let updates = plan_updates(&items, threshold);
        return output_plan(ctx, &updates, threshold);
    }

    let filter = TaggingFilter {
        category,
        confidence_threshold: threshold,
    };
    let shown: Vec<&CategorizedReport> = items.iter().filter(|i| filter.matches(i)).collect();
    let stats = TaggingStats::compute(&items, threshold);

    match ctx.cli.format {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "{} reports, {} categorized at confidence {} ({:.1}%), {} categories",
                    stats.total_items,
                    stats.categorized_items,
                    score(threshold),
                    stats.accuracy,
                    stats.categories_found
                );
                for share in category_distribution(&items).iter().filter(|s| s.count > 0) {
                    println!("  {:<12} {:>4}  {:.1}%", share.category, share.count, share.percentage);
                }
                println!();
            }
            if shown.is_empty() && !ctx.cli.quiet {
                println!("No predictions at this confidence");
            }
            for item in &shown {
                println!(
                    "{:<12} {}  {}  {}",
                    item.category,
                    score(item.confidence),
                    item.report.key(),
                    item.report.title
                );
            }
        }
        OutputFormat::Json => {
            let predictions: Vec<_> = shown
                .iter()
                .map(|i| {
                    json!({
                        "id": i.report.id,
                        "type": i.report.kind,
                        "title": i.report.title,
                        "category": i.category,
                        "confidence": i.confidence,
                    })
                })
                .collect();
            print_json(&json!({
                "confidence_threshold": threshold,
                "stats": stats,
                "distribution": category_distribution(&items),
                "predictions": predictions,
            }))?;
        }
        OutputFormat::Records => {
            print_records_header(
                "categorize",
                &[
                    ("confidence", score(threshold)),
                    ("items", stats.total_items.to_string()),
                    ("categorized", stats.categorized_items.to_string()),
                ],
            );
            for item in &shown {
                println!(
                    "P {} category={} confidence={} {}",
                    item.report.key(),
                    item.category,
                    score(item.confidence),
                    quoted(&item.report.title)
                );
            }
        }
    }
    Ok(())
}

fn output_plan(ctx: &CommandContext, updates: &[CategoryUpdate], threshold: f64) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Human => {
            if updates.is_empty() {
                if !ctx.cli.quiet {
                    println!("No category updates at confidence {}", score(threshold));
                }
                return Ok(());
            }
            for update in updates {
                println!(
                    "{}.{} -> {} ({})",
                    update.table,
                    update.id,
                    update.category,
                    score(update.confidence_score)
                );
            }
        }
        OutputFormat::Json => print_json(updates)?,
        OutputFormat::Records => {
            print_records_header(
                "categorize-plan",
                &[
                    ("confidence", score(threshold)),
                    ("updates", updates.len().to_string()),
                ],
            );
            for update in updates {
                println!(
                    "U {} table={} category={} confidence={}",
                    update.key(),
                    update.table,
                    update.category,
                    score(update.confidence_score)
                );
            }
        }
    }
    Ok(())
}
