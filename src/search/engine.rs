//! Multi-Field Aggregation & Batch Ranking
//!
//! Runs the single-field matcher across every weighted field of a record,
//! sums the weighted contributions into an aggregate score, and ranks a
//! whole roster against a query.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use super::fuzzy::{fuzzy_match, MatchOptions, MatchResult};
use super::record::{ClientRecord, Field, FieldWeights};

/// Default minimum aggregate score for a record to stay in the results.
pub const DEFAULT_MIN_SCORE: f64 = 10.0;
/// Default cap on the number of ranked results.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Match detail for a single field of a scored record
#[derive(Debug, Clone, Serialize)]
pub struct FieldMatch {
    /// Raw single-field match
    pub result: MatchResult,
    /// Weight the field carried in the table
    pub weight: f64,
    /// `result.score * weight`, the field's contribution to the total
    pub weighted_score: f64,
}

/// A record annotated with its aggregate relevance.
///
/// The aggregate score is the sum of the per-field weighted scores, so it
/// can only grow as fields match; a record with no matching field scores 0.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    pub record: ClientRecord,
    pub score: f64,
    /// Per-field match detail, keyed by field
    pub matches: BTreeMap<Field, FieldMatch>,
    /// Field with the single highest weighted contribution
    pub best_match: Option<Field>,
}

impl ScoredRecord {
    fn unscored(record: ClientRecord) -> Self {
        ScoredRecord {
            record,
            score: 0.0,
            matches: BTreeMap::new(),
            best_match: None,
        }
    }
}

/// Batch search knobs
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub field_weights: FieldWeights,
    pub min_score: f64,
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            field_weights: FieldWeights::default(),
            min_score: DEFAULT_MIN_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchOptions {
    pub fn with_field_weights(mut self, field_weights: FieldWeights) -> Self {
        self.field_weights = field_weights;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Score one record against a query across every weighted field.
///
/// Fields absent from the record, or absent from the weight table, are
/// skipped; a field only lands in `matches` when its raw score is
/// positive.
pub fn score_record(record: &ClientRecord, query: &str, weights: &FieldWeights) -> ScoredRecord {
    let match_options = MatchOptions::default();

    let mut total = 0.0;
    let mut matches = BTreeMap::new();
    let mut best: Option<(Field, f64)> = None;

    for (field, weight) in weights.iter() {
        let Some(text) = record.field_text(field) else {
            continue;
        };

        let result = fuzzy_match(&text, query, &match_options);
        if result.score <= 0.0 {
            continue;
        }

        let weighted_score = result.score * weight;
        total += weighted_score;

        if best.is_none_or(|(_, score)| weighted_score > score) {
            best = Some((field, weighted_score));
        }

        matches.insert(
            field,
            FieldMatch {
                result,
                weight,
                weighted_score,
            },
        );
    }

    ScoredRecord {
        record: record.clone(),
        score: total,
        matches,
        best_match: best.map(|(field, _)| field),
    }
}

/// Rank a roster against a query, keeping the per-field annotations.
///
/// An empty query or empty roster short-circuits to the input wrapped with
/// zero scores, in input order. Otherwise records below `min_score` are
/// dropped, the rest sort descending by aggregate score (stable, so equal
/// scores keep input order), and the list truncates to `max_results`.
pub fn search_scored(
    records: &[ClientRecord],
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredRecord> {
    if records.is_empty() || query.trim().is_empty() {
        return records.iter().cloned().map(ScoredRecord::unscored).collect();
    }

    let started = Instant::now();

    let mut scored: Vec<ScoredRecord> = records
        .iter()
        .map(|record| score_record(record, query, &options.field_weights))
        .filter(|scored| scored.score >= options.min_score)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(options.max_results);

    debug!(
        query,
        candidates = records.len(),
        hits = scored.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "ranked roster"
    );

    scored
}

/// Rank a roster and return the bare records, annotations stripped.
pub fn search(records: &[ClientRecord], query: &str, options: &SearchOptions) -> Vec<ClientRecord> {
    search_scored(records, query, options)
        .into_iter()
        .map(|scored| scored.record)
        .collect()
}
