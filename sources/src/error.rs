use thiserror::Error;

/// Custom error type for the access module, allow us to differentiate between errors.
///
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("Bad configuration parameter: {0}")]
    BadParam(String),
    #[error("No such site {0}")]
    UnknownSite(String),
    #[error("Invalid site {0}")]
    InvalidSite(String),
    #[error("Can not create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Everything that can go wrong while getting a snapshot, all fatal for the query.
///
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP Error: {0}")]
    HTTP(#[from] reqwest::Error),
    #[error("Error({code}) from {url}")]
    Status { code: u16, url: String },
    #[error("Can not decode payload: {0}")]
    Decoding(#[from] serde_json::Error),
    #[error("Unsupported format {0}")]
    Format(String),
}
