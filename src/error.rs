//! Error types and input validation for rosterfind

use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Roster parse failed: {0}")]
    RosterParse(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Stable machine-readable code for CLI consumers
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::UnknownField(_) => "unknown_field",
            AppError::RosterParse(_) => "roster_parse_failed",
            AppError::Io(_) => "io_error",
        }
    }
}

/// Maximum accepted query length for CLI invocations
pub const MAX_QUERY_LENGTH: usize = 500;

/// Validate a query string before it reaches the engine
pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.trim().is_empty() {
        return Err(AppError::InvalidInput("Query cannot be empty".to_string()));
    }

    if query.len() > MAX_QUERY_LENGTH {
        return Err(AppError::InvalidInput(
            "Query too long, maximum 500 characters".to_string(),
        ));
    }

    Ok(())
}
