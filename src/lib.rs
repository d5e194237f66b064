//! rosterfind: fuzzy client search for booking rosters
//!
//! Library surface behind the `rosterfind` CLI. Everything here is a
//! synchronous, in-memory transform over caller-supplied records:
//! - `search` - per-field fuzzy scoring, weighted aggregation and ranking
//! - `export` - CSV rendering of a roster
//! - `roster` - JSON roster loading for the CLI and tests

pub mod error;
pub mod export;
pub mod roster;
pub mod search;
