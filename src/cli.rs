//! CLI argument definitions
//!
//! One subcommand per roster operation: search, suggest, export.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// rosterfind CLI
#[derive(Parser)]
#[command(name = "rosterfind")]
#[command(about = "Fuzzy client search, autocomplete and CSV export for booking rosters", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the roster JSON file (an array of client records)
    #[arg(short = 'f', long, global = true, default_value = "roster.json")]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank roster records against a query
    Search(SearchArgs),
    /// Generate autocomplete suggestions for a partial query
    Suggest(SuggestArgs),
    /// Export the roster as CSV
    Export(ExportArgs),
}

/// Search command arguments
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search terms (case-insensitive)
    #[arg(short = 'q', long)]
    pub query: String,

    /// Maximum number of results
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Minimum aggregate score for a record to be listed
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Emit annotated records as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Suggest command arguments
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Partial query to complete
    #[arg(short = 'q', long)]
    pub query: String,

    /// Maximum number of suggestions
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,
}

/// Export command arguments
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Fields to export, in column order (e.g. name,email,total_spent)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Output path; the CSV goes to stdout when omitted
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
