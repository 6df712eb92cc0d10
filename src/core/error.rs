use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("Inconsistent array lengths: {field} has {found} entries, expected {expected}")]
    InconsistentArrayLengths {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Unparseable date '{value}': expected YYYY-MM-DD")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Insufficient data error: {0}")]
    InsufficientData(String),

    #[error("Dimension mismatch error: {0}")]
    DimensionMismatch(String),

    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
