use thiserror::Error;

/// Errors that can occur during recipe ingestion
#[derive(Error, Debug)]
pub enum IngestError {
    /// Failed to read the input export file
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the tabular export
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP request to the store failed
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
