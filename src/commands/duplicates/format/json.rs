//! JSON output formatting for duplicates command

use serde_json::{json, Value};

use lostfound_core::duplicates::{DuplicateGroup, DuplicateStats};
use lostfound_core::error::Result;

use crate::commands::format::print_json;

/// JSON object for one group; `confidence` and `average_similarity` carry the
/// same value
pub fn group_json(group: &DuplicateGroup) -> Value {
    let items: Vec<Value> = group
        .members()
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "type": r.kind,
                "title": r.title,
                "description": r.description,
                "place": r.place,
                "status": r.status,
                "created_at": r.created_at,
            })
        })
        .collect();

    json!({
        "id": group.id(),
        "confidence": group.confidence(),
        "average_similarity": group.average_similarity(),
        "confidence_level": group.confidence_level(),
        "items": items,
    })
}

/// Output in JSON format
pub fn output_json(stats: &DuplicateStats, groups: &[&DuplicateGroup], threshold: f64) -> Result<()> {
    let output = json!({
        "threshold": threshold,
        "stats": stats,
        "groups": groups.iter().map(|g| group_json(g)).collect::<Vec<_>>(),
    });
    print_json(&output)
}
