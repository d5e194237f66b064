//! Fuzzy client search
//!
//! Scores free-text queries against multi-field client records: exact,
//! substring, edit-distance, phonetic and per-word signals per field,
//! weighted aggregation per record, batch ranking, autocomplete
//! suggestions and highlight partitioning.

pub mod distance;
pub mod engine;
pub mod fuzzy;
pub mod highlight;
pub mod phonetic;
pub mod record;
pub mod suggest;


pub use engine::{search, search_scored, FieldMatch, ScoredRecord, SearchOptions};
pub use fuzzy::{fuzzy_match, MatchOptions, MatchResult, MatchType, Span};
pub use highlight::{highlight_matches, render_marked, Segment, SegmentKind};
pub use record::{ClientRecord, Field, FieldWeights};
pub use suggest::{suggestions, SuggestOptions};
