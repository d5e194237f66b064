//! Autocomplete Suggestions
//!
//! Collects field values that contain or fuzzily resemble a partial
//! query, deduplicates them in first-seen order, and ranks prefix hits
//! ahead of everything else.

use std::collections::HashSet;

use super::fuzzy::{fuzzy_match, MatchOptions};
use super::record::{ClientRecord, Field};

/// Default cap on returned suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;
/// Queries shorter than this yield no suggestions.
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 2;

/// Tighter similarity floor for suggestion values than for full search.
const SUGGESTION_SIMILARITY_THRESHOLD: f64 = 0.7;
/// Minimum fuzzy score for a non-containing value to qualify.
const SUGGESTION_SCORE_FLOOR: f64 = 30.0;

/// Suggestion generation knobs
#[derive(Debug, Clone)]
pub struct SuggestOptions {
    pub max_suggestions: usize,
    pub min_query_length: usize,
    /// Fields whose values feed the suggestion pool
    pub include_fields: Vec<Field>,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            include_fields: vec![Field::Name, Field::Email, Field::Phone, Field::Services],
        }
    }
}

impl SuggestOptions {
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn with_include_fields(mut self, include_fields: Vec<Field>) -> Self {
        self.include_fields = include_fields;
        self
    }
}

/// Generate autocomplete suggestions for a partial query.
///
/// List fields contribute one candidate per item, verbatim. Dedup is
/// case-sensitive on the literal value and keeps the first occurrence, so
/// output order is deterministic for a given roster order before the
/// final ranking pass.
pub fn suggestions(
    records: &[ClientRecord],
    query: &str,
    options: &SuggestOptions,
) -> Vec<String> {
    if query.chars().count() < options.min_query_length {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    let match_options =
        MatchOptions::default().with_similarity_threshold(SUGGESTION_SIMILARITY_THRESHOLD);

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates: Vec<String> = Vec::new();

    for record in records {
        for &field in &options.include_fields {
            for value in record.field_values(field) {
                if seen.contains(&value) {
                    continue;
                }

                let qualifies = value.to_lowercase().contains(&query_lower)
                    || fuzzy_match(&value, query, &match_options).score > SUGGESTION_SCORE_FLOOR;

                if qualifies {
                    seen.insert(value.clone());
                    candidates.push(value);
                }
            }
        }
    }

    // Prefix hits first, then shorter values within each group. The sort
    // is stable, so equal keys keep first-seen order.
    candidates.sort_by_key(|value| {
        (
            !value.to_lowercase().starts_with(&query_lower),
            value.chars().count(),
        )
    });
    candidates.truncate(options.max_suggestions);
    candidates
}
