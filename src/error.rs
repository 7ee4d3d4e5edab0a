//! Error types for brotato-scrape.
//!
//! Only run-level failures are representable here: a failed fetch, a
//! non-success HTTP status, or an I/O / serialization problem while
//! writing output. Row- and field-level problems never become errors;
//! they are absorbed as documented defaults or per-row skips recorded
//! in [`crate::records::Extraction::warnings`].

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request itself failed (DNS, connection, TLS, body read).
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// Serializing the record set to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the output file failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
