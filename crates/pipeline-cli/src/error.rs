//! Error types for pipeline-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from pipeline-config
    #[error(transparent)]
    Config(#[from] pipeline_config::Error),

    /// Error from pipeline-plugins
    #[error(transparent)]
    Plugins(#[from] pipeline_plugins::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
