//! Error types for the data-loader crate.
//!
//! Every failure while retrieving the movie dataset is a `FetchError`.
//! Problems inside a single record are never errors: optional fields that
//! are missing or malformed simply degrade to `None`.

use thiserror::Error;

/// Errors that can occur while retrieving and decoding the dataset
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` based on the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The dataset file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request never produced a response (DNS, TLS, connection reset...)
    #[error("Transport error while fetching {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The server answered, but not with a success status
    #[error("HTTP {status} while fetching {url}")]
    Status { url: String, status: u16 },

    /// The payload is not a JSON array of movie objects
    #[error("Malformed dataset in {source_name}: {reason}")]
    Malformed { source_name: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FetchError>;
