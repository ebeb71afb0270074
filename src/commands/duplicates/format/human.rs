//! Human-readable output formatting for duplicates command

use lostfound_core::duplicates::{DuplicateGroup, DuplicateStats};

use crate::cli::Cli;
use crate::commands::format::score;

/// Output in human-readable format
pub fn output_human(cli: &Cli, stats: &DuplicateStats, groups: &[&DuplicateGroup], threshold: f64) {
    if !cli.quiet {
        println!(
            "Scanned {} reports at threshold {}: {} groups, {} potential matches",
            stats.total_items,
            score(threshold),
            stats.duplicate_groups,
            stats.potential_matches
        );
    }

    if groups.is_empty() {
        if !cli.quiet {
            println!("No duplicate groups found");
        }
        return;
    }

    for group in groups {
        println!();
        println!(
            "{}  confidence {} ({}), {} reports",
            group.id(),
            score(group.confidence()),
            group.confidence_level(),
            group.len()
        );
        for report in group.members() {
            let place = if report.place.trim().is_empty() {
                String::new()
            } else {
                format!(" @ {}", report.place.trim())
            };
            println!(
                "  [{:<5}] {} {}{}",
                report.kind.label(),
                report.key(),
                report.title,
                place
            );
        }
    }
}
