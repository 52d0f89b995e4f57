//! Unified error type for cat-card.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a card.
#[derive(Debug, Error)]
pub enum CardError {
    /// The picture service answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A fetched payload is not a decodable image.
    #[error("Failed to decode {which} image: {message}")]
    Decode {
        /// Which payload failed (`"first"` or `"second"`).
        which: &'static str,
        /// Decoder message.
        message: String,
    },

    /// The composite could not be encoded.
    #[error("Failed to encode composite: {0}")]
    Encode(String),

    /// The composite could not be written to disk.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A failure captured on a cassette, replayed with its original message.
    #[error("{0}")]
    Recorded(String),

    /// A cassette could not serve the requested interaction.
    #[error("Replay error: {0}")]
    Replay(String),
}
