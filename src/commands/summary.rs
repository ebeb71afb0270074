//! `lostfound summary` command - executive summary of the snapshot

use chrono::{DateTime, Utc};

use lostfound_core::error::Result;
use lostfound_core::records::quoted;
use lostfound_core::report::ReportKind;
use lostfound_core::summary::{format_hours, summarize, ExecutiveSummary, PeriodStats};

use crate::cli::OutputFormat;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};

/// Execute the summary command
pub fn execute(ctx: &CommandContext, now: Option<DateTime<Utc>>) -> Result<()> {
    let now = now.unwrap_or_else(Utc::now);
    let limit = Some(ctx.config.summary.feed_limit);

    let snapshot = ctx.load_snapshot()?;
    let lost = snapshot.table(ReportKind::Lost, limit);
    let found = snapshot.table(ReportKind::Found, limit);

    let summary = summarize(&lost, &found, snapshot.profile_count(), now);
    trace_command!(ctx.cli, ctx.start, "summarize");

    match ctx.cli.format {
        OutputFormat::Human => output_human(&summary),
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Records => output_records(&summary, now),
    }
    Ok(())
}

fn output_human(summary: &ExecutiveSummary) {
    let o = &summary.overview;
    println!("Overview");
    println!(
        "  {} reports ({} lost, {} found), {} resolved, {} users",
        o.total_items, o.lost_items, o.found_items, o.resolved_items, o.active_users
    );
    println!("  Success rate: {:.2}%", o.success_rate);

    println!();
    println!("Last 7 days");
    print_periods(&summary.trends.daily);
    println!();
    println!("Last 4 weeks");
    print_periods(&summary.trends.weekly);

    let insights = &summary.insights;
    println!();
    println!("Insights");
    if !insights.top_locations.is_empty() {
        let locations: Vec<String> = insights
            .top_locations
            .iter()
            .map(|l| format!("{} ({})", l.location, l.count))
            .collect();
        println!("  Top locations: {}", locations.join(", "));
    }
    if !insights.common_categories.is_empty() {
        let categories: Vec<String> = insights
            .common_categories
            .iter()
            .map(|c| format!("{} ({})", c.category, c.count))
            .collect();
        println!("  Common categories: {}", categories.join(", "));
    }
    if !insights.peak_hours.is_empty() {
        let hours: Vec<String> = insights
            .peak_hours
            .iter()
            .map(|h| format!("{}:00 ({})", h.hour, h.count))
            .collect();
        println!("  Peak hours (UTC): {}", hours.join(", "));
    }
    if insights.resolution_time_hours > 0.0 {
        println!(
            "  Average resolution: {}",
            format_hours(insights.resolution_time_hours)
        );
    }

    if !summary.recommendations.is_empty() {
        println!();
        println!("Recommendations");
        for r in &summary.recommendations {
            println!("  [{}] {}: {}", r.kind, r.title, r.description);
            println!("      -> {}", r.action);
        }
    }
}

fn print_periods(periods: &[PeriodStats]) {
    for p in periods {
        println!(
            "  {:<10}  lost {:>3}  found {:>3}  resolved {:>3}",
            p.label, p.lost, p.found, p.resolved
        );
    }
}

fn output_records(summary: &ExecutiveSummary, now: DateTime<Utc>) {
    let o = &summary.overview;
    print_records_header(
        "summary",
        &[
            ("now", now.to_rfc3339()),
            ("items", o.total_items.to_string()),
            ("lost", o.lost_items.to_string()),
            ("found", o.found_items.to_string()),
            ("resolved", o.resolved_items.to_string()),
            ("users", o.active_users.to_string()),
            ("success_rate", format!("{:.2}", o.success_rate)),
        ],
    );
    for p in &summary.trends.daily {
        println!("D {} lost={} found={} resolved={}", p.label, p.lost, p.found, p.resolved);
    }
    for p in &summary.trends.weekly {
        println!(
            "W {} lost={} found={} resolved={}",
            quoted(&p.label),
            p.lost,
            p.found,
            p.resolved
        );
    }
    for l in &summary.insights.top_locations {
        println!("L {} count={}", quoted(&l.location), l.count);
    }
    for c in &summary.insights.common_categories {
        println!("C {} count={}", c.category, c.count);
    }
    for h in &summary.insights.peak_hours {
        println!("T hour={} count={}", h.hour, h.count);
    }
    for r in &summary.recommendations {
        println!("R {} {} {}", r.kind, quoted(&r.title), quoted(&r.description));
    }
}
