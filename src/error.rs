//! Error types for the pagesift library.

use std::io;
use thiserror::Error;

/// Result type alias for pagesift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while acquiring or analyzing a document.
///
/// Layout heuristics themselves are total over their geometric input: a
/// request that matches nothing produces an empty value, not an error.
/// Only document acquisition and provider failures surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the byte stream or the cache.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A local document reference does not exist.
    #[error("Local file not found: {0}")]
    NotFound(String),

    /// A remote object reference is not of the form `s3://bucket/key`.
    #[error("Invalid object URI format: {0}")]
    InvalidObjectUri(String),

    /// The remote object store could not produce the document bytes.
    #[error("Failed to load remote object {reference}: {message}")]
    RemoteFetch {
        /// The object reference that was being fetched.
        reference: String,
        /// The transport failure, flattened to text.
        message: String,
    },

    /// The layout provider could not make sense of the byte stream.
    #[error("Malformed layout document: {0}")]
    MalformedLayout(String),

    /// An outline destination could not be mapped to a page identifier.
    #[error("Unresolved destination: {0}")]
    UnresolvedDestination(String),
}
