use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for purrsona-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the Purrsona chat client
///
/// Rendering never produces these; they cover the ambient edges
/// (configuration, transcript files, logging setup).
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Transcript file errors
    #[error("transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Errors raised while loading a transcript file
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// The transcript file does not exist
    #[error("transcript file not found: {0}")]
    NotFound(PathBuf),

    /// The transcript file is not a JSON array of messages
    #[error("malformed transcript {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(format!("TOML parse error: {}", err))
    }
}
