//! rosterfind CLI
//!
//! Thin binary over the rosterfind library: loads a roster JSON file and
//! runs search, suggestion generation, or CSV export against it.

mod cli;

use std::fs;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands, ExportArgs, SearchArgs, SuggestArgs};
use rosterfind::error::validate_query;
use rosterfind::export::{export_csv, ExportOptions};
use rosterfind::roster::load_roster;
use rosterfind::search::record::{ClientRecord, Field};
use rosterfind::search::{
    render_marked, search_scored, suggestions, ScoredRecord, SearchOptions, SuggestOptions,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to stderr to keep stdout clean for results and CSV payloads
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let records = load_roster(&cli.file)?;

    match cli.command {
        Commands::Search(args) => run_search(&records, args),
        Commands::Suggest(args) => run_suggest(&records, args),
        Commands::Export(args) => run_export(&records, args),
    }
}

fn run_search(records: &[ClientRecord], args: SearchArgs) -> Result<()> {
    validate_query(&args.query)?;

    let mut options = SearchOptions::default();
    if let Some(limit) = args.limit {
        options = options.with_max_results(limit);
    }
    if let Some(min_score) = args.min_score {
        options = options.with_min_score(min_score);
    }

    let results = search_scored(records, &args.query, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    info!(hits = results.len(), "search complete");
    for scored in &results {
        println!("{:>7.1}  {}", scored.score, describe_hit(scored));
    }
    Ok(())
}

/// One line per hit: the best-matching field with its matched characters
/// emphasized, falling back to the record name when nothing matched.
fn describe_hit(scored: &ScoredRecord) -> String {
    match scored.best_match {
        Some(field) => {
            let text = scored.record.field_text(field).unwrap_or_default();
            let spans = scored
                .matches
                .get(&field)
                .map(|field_match| field_match.result.spans.as_slice())
                .unwrap_or(&[]);
            format!("{}: {}", field, render_marked(&text, spans))
        }
        None => scored
            .record
            .name
            .clone()
            .unwrap_or_else(|| "(unnamed)".to_string()),
    }
}

fn run_suggest(records: &[ClientRecord], args: SuggestArgs) -> Result<()> {
    let mut options = SuggestOptions::default();
    if let Some(limit) = args.limit {
        options = options.with_max_suggestions(limit);
    }

    for suggestion in suggestions(records, &args.query, &options) {
        println!("{suggestion}");
    }
    Ok(())
}

fn run_export(records: &[ClientRecord], args: ExportArgs) -> Result<()> {
    let mut options = ExportOptions::default();
    if !args.fields.is_empty() {
        let fields = args
            .fields
            .iter()
            .map(|name| name.parse::<Field>())
            .collect::<Result<Vec<_>, _>>()?;
        options = options.with_fields(fields);
    }
    if let Some(path) = &args.output {
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            options = options.with_filename(name);
        }
    }

    let export = export_csv(records, &options)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &export.content)?;
            info!(
                path = %path.display(),
                bytes = export.content.len(),
                "wrote CSV export"
            );
        }
        None => print!("{}", export.content),
    }
    Ok(())
}
