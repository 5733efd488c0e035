//! Error types for the roster and real-estate flows

use crate::transform::ConversionError;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, RealtyError>;

#[derive(Error, Debug)]
pub enum RealtyError {
    #[error("Could not open database at {target}: {source}")]
    Connection {
        target: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Row {row}: {source}")]
    Conversion {
        row: u64,
        #[source]
        source: ConversionError,
    },

    #[error("Query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Row {row}: insert failed: {source}")]
    Insert {
        row: u64,
        #[source]
        source: rusqlite::Error,
    },

    #[error("CSV header is missing required columns: {}", .missing.join(", "))]
    InvalidHeader { missing: Vec<&'static str> },

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{what} not provided and {env_var} environment variable not set")]
    MissingConfig { what: String, env_var: String },
}

impl RealtyError {
    /// The CSV column responsible for a failed import, if the failure was a bad field.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            RealtyError::Conversion { source, .. } => Some(source.column()),
            _ => None,
        }
    }

    /// The 1-based data row an import failure is attributed to.
    pub fn row(&self) -> Option<u64> {
        match self {
            RealtyError::Conversion { row, .. } | RealtyError::Insert { row, .. } => Some(*row),
            _ => None,
        }
    }
}
