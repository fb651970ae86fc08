//! Error types for `unrelated-mcp-mapping`.
//!
//! Only source loading can fail; classification and rendering are total.

use thiserror::Error;

/// Main error type for endpoint source loading.
#[derive(Error, Debug)]
pub enum AssessError {
    /// Malformed source location (bad URL, unsupported scheme).
    #[error("Source error: {0}")]
    Source(String),

    #[error("Source error: failed to fetch '{url}': {message}")]
    SourceFetch { url: String, message: String },

    #[error("Source error: failed to read body from '{url}': {message}")]
    SourceReadBody { url: String, message: String },

    #[error("Source error: failed to read file '{path}': {source}")]
    SourceReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Source error: failed to parse document from '{location}': {source}")]
    SourceParse {
        location: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The source URL answered with a non-success status (e.g. a live application that does not
    /// expose its route table at that address).
    #[error("Lookup error: '{url}' returned HTTP {status}")]
    Lookup { url: String, status: u16 },

    /// The document parsed, but does not have the expected shape.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type alias for source loading.
pub type Result<T> = std::result::Result<T, AssessError>;
