//! Configuration resolution with layered merge
//!
//! The `ConfigResolver` collects configuration layers in precedence order and
//! merges them into a single canonical mapping:
//!
//! 1. Process defaults supplied by the caller
//! 2. User config (`<config_dir>/pipeline/config.yaml`), skipped when missing
//! 3. Explicit configuration files
//! 4. Per-call `dotted.key=value` overrides
//!
//! Later layers override earlier ones according to the merge rules in
//! [`crate::merge`].

use crate::loader::{load_layer, to_json_string, to_yaml_string};
use crate::merge::{MergeOptions, merge_layers_with};
use crate::path::{dot2dict, nested_get_dotted, override_fragment};
use crate::value::Map;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config directory.
pub const USER_CONFIG_DIR: &str = "pipeline";

/// File names tried for the user config, in order.
pub const USER_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Where a configuration layer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerSource {
    /// Defaults baked into the calling process
    Defaults,
    /// The per-user configuration file
    User,
    /// An explicitly supplied configuration file
    File,
    /// A per-call override
    Override,
}

/// One configuration layer together with its provenance.
#[derive(Debug, Clone)]
pub struct ConfigLayer {
    pub source: LayerSource,
    /// File the layer was read from, if any
    pub path: Option<PathBuf>,
    pub values: Map,
}

impl ConfigLayer {
    pub fn new(source: LayerSource, values: Map) -> Self {
        Self {
            source,
            path: None,
            values,
        }
    }

    /// Read a layer from a file.
    pub fn from_file(source: LayerSource, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = load_layer(&path)?;
        Ok(Self {
            source,
            path: Some(path),
            values,
        })
    }
}

/// The canonical configuration produced by [`ConfigResolver::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    values: Map,
}

impl ResolvedConfig {
    pub fn new(values: Map) -> Self {
        Self { values }
    }

    /// Look up a dotted key such as `outputs.path`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        nested_get_dotted(key, &self.values)
    }

    /// Fetch a top-level section by name.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn as_map(&self) -> &Map {
        &self.values
    }

    pub fn into_inner(self) -> Map {
        self.values
    }

    pub fn to_yaml(&self) -> Result<String> {
        to_yaml_string(&self.values)
    }

    pub fn to_json(&self) -> Result<String> {
        to_json_string(&self.values)
    }
}

impl From<Map> for ResolvedConfig {
    fn from(values: Map) -> Self {
        Self::new(values)
    }
}

/// Resolves configuration by merging multiple layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    layers: Vec<ConfigLayer>,
    options: MergeOptions,
    /// Override for the user config directory (used for testing).
    /// When `None`, `dirs::config_dir()/pipeline` is used.
    user_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver that applies layers with the given merge options.
    pub fn with_options(options: MergeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Use a custom user config directory instead of the platform default.
    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir_override = Some(dir.into());
        self
    }

    /// Determine the user config directory.
    fn user_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.user_config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR))
    }

    pub fn push_layer(&mut self, layer: ConfigLayer) {
        tracing::debug!(source = ?layer.source, path = ?layer.path, "Adding config layer");
        self.layers.push(layer);
    }

    pub fn push_defaults(&mut self, values: Map) {
        self.push_layer(ConfigLayer::new(LayerSource::Defaults, values));
    }

    /// Add the user config layer if one exists.
    ///
    /// Returns whether a layer was added.
    pub fn push_user_config(&mut self) -> Result<bool> {
        let Some(dir) = self.user_config_dir() else {
            tracing::debug!("No user config directory on this platform, skipping");
            return Ok(false);
        };

        for name in USER_CONFIG_FILES {
            let path = dir.join(name);
            if path.is_file() {
                self.push_layer(ConfigLayer::from_file(LayerSource::User, path)?);
                return Ok(true);
            }
        }

        tracing::debug!(?dir, "No user config found, skipping");
        Ok(false)
    }

    /// Add a required configuration file layer.
    pub fn push_file(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        self.push_layer(ConfigLayer::from_file(LayerSource::File, path)?);
        Ok(())
    }

    /// Add a single dotted-key override.
    ///
    /// An empty key replaces the whole document and so requires a mapping.
    pub fn push_override(&mut self, key: &str, value: Value) -> Result<()> {
        let Value::Object(values) = dot2dict(key, value) else {
            return Err(Error::InvalidOverride {
                input: key.to_string(),
                reason: "an empty key requires a mapping value".into(),
            });
        };
        self.push_layer(ConfigLayer::new(LayerSource::Override, values));
        Ok(())
    }

    /// Parse and add a `dotted.key=value` override.
    pub fn push_override_str(&mut self, input: &str) -> Result<()> {
        let values = override_fragment(input)?;
        self.push_layer(ConfigLayer::new(LayerSource::Override, values));
        Ok(())
    }

    pub fn layers(&self) -> &[ConfigLayer] {
        &self.layers
    }

    /// Merge all layers into the canonical configuration.
    ///
    /// No layers yield an empty configuration and a single layer is returned
    /// as is; otherwise the layers are merged in order.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let values = match self.layers.as_slice() {
            [] => Map::new(),
            [only] => only.values.clone(),
            layers => merge_layers_with(layers.iter().map(|l| &l.values), self.options)?,
        };

        tracing::debug!(
            layers = self.layers.len(),
            keys = values.len(),
            "Resolved configuration"
        );
        Ok(ResolvedConfig::new(values))
    }
}
