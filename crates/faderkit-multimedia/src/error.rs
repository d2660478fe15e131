//! Error types for the multimedia module.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Multimedia-specific errors.
#[derive(Error, Debug)]
pub enum MultimediaError {
    /// The audio file could not be opened or read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data is not in a format the decoder understands.
    #[error("Failed to decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    /// The audio decoded but its layout is not supported.
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),
}

/// A specialized Result type for multimedia operations.
pub type Result<T> = std::result::Result<T, MultimediaError>;
