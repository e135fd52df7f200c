//! Error types for the hadley application.
//!
//! This module defines a comprehensive error enum that covers all possible
//! error conditions in the application. Every failure is logged with its
//! underlying cause at the boundary that produced it; the messages below are
//! the only detail that crosses the HTTP boundary.

use thiserror::Error;

/// The main error type for hadley operations.
#[derive(Error, Debug)]
pub enum HadleyError {
    /// The request body was absent or could not be parsed as a JSON object
    #[error("Invalid request: {message}")]
    MalformedInput { message: String },

    /// One or more required request fields were absent or null
    #[error("Missing parameters: {}", fields.join(", "))]
    MissingParameters { fields: Vec<String> },

    /// Latitude or longitude was not a JSON number
    #[error("Invalid data type for latitude or longitude. Must be float or integer.")]
    InvalidType,

    /// A date field was not a string in YYYY-MM-DD form naming a real date
    #[error("Invalid date format for start_date or end_date. Use YYYY-MM-DD.")]
    InvalidDateFormat,

    /// The file-content endpoint was called without a file name
    #[error("File name cannot be empty.")]
    MissingFileName,

    /// The storage bucket is not configured on the server
    #[error("Server configuration error: GCS bucket not set.")]
    Misconfigured,

    /// The weather provider was unreachable or rejected the query
    #[error("Failed to fetch weather data from external API.")]
    UpstreamFetch,

    /// The object store rejected a write
    #[error("Failed to store weather data in GCS.")]
    StorageWrite,

    /// The object store rejected a listing
    #[error("Failed to retrieve file list from GCS.")]
    StorageList,

    /// The object is absent, unreadable, or not valid JSON
    #[error("File '{file_name}' not found or unable to retrieve/parse content.")]
    FileNotFound { file_name: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with HadleyError
pub type Result<T> = std::result::Result<T, HadleyError>;
