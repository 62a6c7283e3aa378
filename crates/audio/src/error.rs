//! Error types for audio streams.

use std::path::PathBuf;
use thiserror::Error;

use crate::StreamId;

/// Error type for loading stream samples.
#[derive(Error, Debug)]
pub enum AudioError {
    /// The id was never registered with the bank.
    #[error("Unknown audio stream {0:?}")]
    UnknownStream(StreamId),

    /// The sample file could not be read.
    #[error("Failed to read audio file '{path}': {source}")]
    Read {
        /// Path of the sample file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The sample file has no content.
    #[error("Audio file '{0}' is empty")]
    Empty(PathBuf),
}

/// Result type alias for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;
