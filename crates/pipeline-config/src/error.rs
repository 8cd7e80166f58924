//! Error types for pipeline-config

use crate::value::Category;
use std::path::PathBuf;

/// Result type for pipeline-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or merging configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two layers hold irreconcilable value types under the same key
    #[error(
        "Overlapping keys exist with different types: original is {existing}, new value is {incoming} for key: {key}"
    )]
    TypeConflict {
        key: String,
        existing: Category,
        incoming: Category,
    },

    /// Merge was called with fewer than two layers
    #[error("Merging requires at least two layers, got {count}")]
    NotEnoughLayers { count: usize },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    Parse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize config as {format}: {message}")]
    Serialize { format: String, message: String },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    /// The document root of a layer file is not a mapping
    #[error("Config at {path} is not a mapping")]
    NotAMapping { path: PathBuf },

    /// A `key=value` override could not be parsed
    #[error("Invalid override '{input}': {reason}")]
    InvalidOverride { input: String, reason: String },

    /// Explicitly requested configuration file does not exist
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, format: &str, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            format: format.into(),
            message: message.to_string(),
        }
    }
}
