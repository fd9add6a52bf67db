use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status {0}")]
    Status(u16),
}
