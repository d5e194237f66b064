//! CSV Export
//!
//! Renders a roster as an RFC-4180-style CSV payload: quoted and
//! quote-doubled where a value carries commas, quotes or newlines, with
//! money and visit-date fields formatted for spreadsheets.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::error::AppError;
use crate::search::record::{ClientRecord, Field};

/// MIME type attached to export payloads.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";
/// Filename used when the caller does not pick one.
pub const DEFAULT_EXPORT_FILENAME: &str = "clients.csv";

/// Separator for list-valued fields inside one CSV cell.
const LIST_SEPARATOR: &str = "; ";

/// Export knobs
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Fields to emit, in column order
    pub fields: Vec<Field>,
    /// Display-name overrides for the header row; a field missing here
    /// falls back to its plain name
    pub headers: BTreeMap<Field, String>,
    pub filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            fields: Field::ALL.to_vec(),
            headers: BTreeMap::new(),
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl ExportOptions {
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_header(mut self, field: Field, display: impl Into<String>) -> Self {
        self.headers.insert(field, display.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }
}

/// A rendered CSV document
#[derive(Debug, Clone, Serialize)]
pub struct CsvExport {
    pub content: String,
    pub filename: String,
    pub mime_type: String,
}

/// Render `records` as CSV.
///
/// The only failing input is an empty roster; every per-field oddity
/// degrades to an empty cell instead.
pub fn export_csv(records: &[ClientRecord], options: &ExportOptions) -> Result<CsvExport, AppError> {
    if records.is_empty() {
        return Err(AppError::InvalidInput(
            "No records to export".to_string(),
        ));
    }

    let mut content = String::new();

    let header_row: Vec<String> = options
        .fields
        .iter()
        .map(|field| {
            let display = options
                .headers
                .get(field)
                .cloned()
                .unwrap_or_else(|| field.as_str().to_string());
            csv_escape(display)
        })
        .collect();
    content.push_str(&header_row.join(","));
    content.push('\n');

    for record in records {
        let row: Vec<String> = options
            .fields
            .iter()
            .map(|&field| csv_escape(format_field(record, field)))
            .collect();
        content.push_str(&row.join(","));
        content.push('\n');
    }

    Ok(CsvExport {
        content,
        filename: options.filename.clone(),
        mime_type: CSV_MIME_TYPE.to_string(),
    })
}

/// Spreadsheet-facing rendering of one field of one record.
fn format_field(record: &ClientRecord, field: Field) -> String {
    match field {
        Field::TotalSpent => record
            .total_spent
            .map(|amount| format!("${amount:.2}"))
            .unwrap_or_default(),
        Field::LastVisit => record
            .last_visit
            .as_deref()
            .map(format_visit_date)
            .unwrap_or_default(),
        Field::Services => record
            .services
            .as_ref()
            .map(|items| items.join(LIST_SEPARATOR))
            .unwrap_or_default(),
        Field::Tags => record
            .tags
            .as_ref()
            .map(|items| items.join(LIST_SEPARATOR))
            .unwrap_or_default(),
        other => record.field_text(other).unwrap_or_default(),
    }
}

/// `M/D/YYYY` from a `YYYY-MM-DD` or RFC 3339 visit date; anything
/// unparseable passes through verbatim.
fn format_visit_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Quote and double-quote a value when it carries a comma, quote or line
/// break.
fn csv_escape(value: String) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value
    }
}
