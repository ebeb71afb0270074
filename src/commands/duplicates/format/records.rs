//! Records output formatting for duplicates command

use lostfound_core::duplicates::{DuplicateGroup, DuplicateStats};
use lostfound_core::records::quoted;

use crate::commands::format::{print_records_header, score};

/// Output in records format
///
/// ```text
/// H lostfound=1 mode=duplicates threshold=0.70 items=7 groups=1 matches=2
/// G group_lost:1 confidence=0.85 level=high members=2
/// M group_lost:1 lost:1 "Blue Wallet" place="Library"
/// ```
pub fn output_records(stats: &DuplicateStats, groups: &[&DuplicateGroup], threshold: f64) {
    print_records_header(
        "duplicates",
        &[
            ("threshold", score(threshold)),
            ("items", stats.total_items.to_string()),
            ("groups", stats.duplicate_groups.to_string()),
            ("matches", stats.potential_matches.to_string()),
        ],
    );

    for group in groups {
        let id = group.id();
        println!(
            "G {} confidence={} level={} members={}",
            id,
            score(group.confidence()),
            group.confidence_level(),
            group.len()
        );
        for report in group.members() {
            println!(
                "M {} {} {} place={}",
                id,
                report.key(),
                quoted(&report.title),
                quoted(&report.place)
            );
        }
    }
}
