//! Error types for the baseball statistics CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BbError>;


#[derive(Error, Debug)]
pub enum BbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid API URL {url}: {message}")]
    InvalidApiUrl { url: String, message: String },

    #[error("Invalid player id: {id:?}")]
    InvalidPlayerId { id: String },

    #[error("Invalid franchise id: {id:?}")]
    InvalidFranchiseId { id: String },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Column is not visible: {field}")]
    ColumnNotVisible { field: String },

    #[error("Invalid filter threshold: {value}")]
    InvalidThreshold { value: String },

    #[error("Invalid action: {input}")]
    InvalidAction { input: String },

    #[error("Invalid column move {spec:?}, expected FIELD:POSITION")]
    InvalidColumnMove { spec: String },

    #[error("Year {year} is outside the selectable range {first}..={last}")]
    InvalidYear { year: i32, first: i32, last: i32 },

    #[error("End year {end} is before start year {start}")]
    InvalidYearRange { start: i32, end: i32 },
}

impl BbError {
    /// Errors raised by the view engine for a rejected action. The
    /// interactive session reports these and keeps going.
    pub fn is_view_error(&self) -> bool {
        matches!(
            self,
            BbError::UnknownField { .. }
                | BbError::ColumnNotVisible { .. }
                | BbError::InvalidThreshold { .. }
                | BbError::InvalidAction { .. }
        )
    }
}
