//! Error types for pipeline-plugins

/// Result type for pipeline-plugins operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, building or running plugins
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No factory is registered under this name in the bound category
    #[error("Plugin '{name}' is not registered under {category}")]
    PluginNotFound { category: String, name: String },

    /// Every plugin declared in a section failed to load
    #[error("No plugins were successfully loaded from {section}")]
    NoPlugins { section: String },

    /// The configuration has no such plugin section
    #[error("Configuration section '{section}' not found")]
    MissingSection { section: String },

    /// The plugin section is not a list of plugin specifications
    #[error("Invalid plugin section '{section}': {reason}")]
    InvalidSection { section: String, reason: String },

    /// Declared arguments do not fit the plugin's argument schema
    #[error("Invalid arguments for plugin '{name}': {source}")]
    InvalidArguments {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The factory rejected its arguments
    #[error("Failed to construct plugin '{name}': {reason}")]
    Construction { name: String, reason: String },

    /// A loaded plugin failed while processing
    #[error("Plugin '{name}' failed: {reason}")]
    Processing { name: String, reason: String },

    /// Configuration error from pipeline-config
    #[error(transparent)]
    Config(#[from] pipeline_config::Error),
}

impl Error {
    pub fn construction(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Construction {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
