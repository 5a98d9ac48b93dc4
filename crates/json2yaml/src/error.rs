//! Error types for JSON → YAML transcoding and file conversion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, transcoding, or writing a document.
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// The input path does not exist.
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The input path exists but could not be read as UTF-8 text.
    #[error("failed to read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input text was not valid JSON.
    #[error("JSON parse error: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// The output path could not be opened or written.
    #[error("failed to write output file {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The YAML serializer rejected the value tree.
    #[error("YAML emit error: {0}")]
    Emit(#[from] serde_yaml::Error),

    /// The value tree is nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {limit} levels")]
    RecursionLimitExceeded { limit: usize },
}

/// Convenience alias used throughout json2yaml.
pub type Result<T> = std::result::Result<T, TranscodeError>;
