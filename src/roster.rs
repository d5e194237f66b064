//! Roster Loading
//!
//! Reads a client roster (a JSON array of records) from disk for the CLI
//! and integration tests.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::AppError;
use crate::search::record::ClientRecord;

/// Load a roster from a JSON file containing an array of client records.
pub fn load_roster(path: &Path) -> Result<Vec<ClientRecord>, AppError> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<ClientRecord> = serde_json::from_str(&raw)?;

    debug!(path = %path.display(), count = records.len(), "loaded roster");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_roster() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Marcus Johnson", "email": "marcus@example.com"}},
                {{"name": "Dana Lee", "services": ["Fade"], "total_spent": 120.0}}
            ]"#
        )
        .unwrap();

        let records = load_roster(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Marcus Johnson"));
        assert_eq!(records[1].total_spent, Some(120.0));
    }

    #[test]
    fn test_load_roster_empty_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(load_roster(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_roster_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_roster(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "roster_parse_failed");
    }

    #[test]
    fn test_load_roster_missing_file() {
        let err = load_roster(Path::new("/nonexistent/roster.json")).unwrap_err();
        assert_eq!(err.error_code(), "io_error");
    }
}
