//! Core error types

use thiserror::Error;

/// Errors produced by the relay and the segmenter backends
#[derive(Error, Debug)]
pub enum OsalauError {
    /// I/O error on the input stream, the output stream, or the pipe
    /// to the segmenter
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The segmenter subprocess could not be launched
    #[error("failed to launch segmenter `{command}`: {source}")]
    Spawn {
        /// The command that was attempted
        command: String,
        /// The underlying spawn failure
        source: std::io::Error,
    },

    /// The segmenter subprocess closed its output stream before answering
    #[error("segmenter closed its output stream unexpectedly")]
    SegmenterClosed,

    /// The segmenter's analysis could not be parsed as clause-annotated JSON
    #[error("malformed analysis: {0}")]
    MalformedAnalysis(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, OsalauError>;
