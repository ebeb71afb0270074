//! Post-filters applied to detected groups before display

use crate::duplicates::DuplicateGroup;
use crate::report::ReportKind;

/// Search and kind filter for the group list.
///
/// Never an input to clustering; it only hides groups after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFilter {
    search_term: String,
    kind: Option<ReportKind>,
}

impl GroupFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep groups with a member whose title or description contains `term`
    pub fn with_search(mut self, term: Option<&str>) -> Self {
        self.search_term = term.map(|t| t.trim().to_lowercase()).unwrap_or_default();
        self
    }

    /// Keep groups with at least one member of `kind`
    pub fn with_kind(mut self, kind: Option<ReportKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn matches(&self, group: &DuplicateGroup) -> bool {
        let matches_search = self.search_term.is_empty()
            || group.members().iter().any(|r| {
                r.title.to_lowercase().contains(&self.search_term)
                    || r.description.to_lowercase().contains(&self.search_term)
            });

        let matches_kind = self.kind.is_none_or(|kind| group.has_kind(kind));

        matches_search && matches_kind
    }
}
