use serde::{Deserialize, Serialize};

use crate::models::{CandidateItem, TagSet};

/// Narrowing applied to a candidate pool before anything is scored
///
/// An empty filter keeps every candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilter {
    /// Free-text search over the candidate name and tags
    #[serde(default)]
    pub query: Option<String>,
    /// Candidate must carry at least one of these tags
    #[serde(default)]
    pub required_tags: TagSet,
}

impl CandidateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_required_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.required_tags.extend(tags);
        self
    }

    /// True when the filter cannot exclude anything
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().map_or(true, |q| q.trim().is_empty()) && self.required_tags.is_empty()
    }

    /// Check a candidate against both the search query and the required tags
    pub fn matches(&self, candidate: &CandidateItem) -> bool {
        let query = self.query.as_deref().unwrap_or("");
        matches_query(candidate, query) && matches_required_tags(candidate, &self.required_tags)
    }
}

/// Case-insensitive substring search over the name and every tag
///
/// Teammates are searched by user id and by all tags on their profile,
/// skills included. A blank query matches everything.
#[inline]
pub fn matches_query(candidate: &CandidateItem, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    if candidate.name().to_lowercase().contains(&needle) {
        return true;
    }

    candidate
        .tags()
        .iter()
        .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Any-of match between the required tags and the candidate's tags
///
/// Exact, case-insensitive tag comparison. No required tags means no constraint.
#[inline]
pub fn matches_required_tags(candidate: &CandidateItem, required: &TagSet) -> bool {
    if required.is_empty() {
        return true;
    }

    let tags = candidate.tags();
    required.iter().any(|tag| tags.contains(tag))
}
