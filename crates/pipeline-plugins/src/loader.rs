//! Loading plugin sections from a resolved configuration
//!
//! A section is a list of plugin specifications:
//!
//! ```yaml
//! pre_processors:
//!   - name: set_property
//!     key: properties.collection
//!     value: cmip6
//!   - name: uri_prefix
//!     prefix: https://data.example.org
//! ```
//!
//! Entries are built in order. An entry whose plugin is unknown or whose
//! construction fails is logged and skipped; the load only fails when no
//! entry succeeds.

use crate::plugin::{PluginInstance, PluginSpec};
use crate::registry::{HandlerRegistry, PluginCatalog, PluginCategory};
use crate::{Error, Result};
use pipeline_config::Map;
use serde_json::Value;
use std::sync::Arc;

/// Build every plugin declared in `section` of `config` from `category`.
pub fn load_plugins(
    config: &Map,
    catalog: Arc<PluginCatalog>,
    category: impl Into<PluginCategory>,
    section: &str,
) -> Result<Vec<PluginInstance>> {
    PluginLoader::new(HandlerRegistry::new(catalog, category)).load(config, section)
}

/// Read the plugin specifications of a section without building them.
pub fn read_section(config: &Map, section: &str) -> Result<Vec<PluginSpec>> {
    let invalid = |reason: String| Error::InvalidSection {
        section: section.to_string(),
        reason,
    };

    let entries = match config.get(section) {
        None => {
            return Err(Error::MissingSection {
                section: section.to_string(),
            });
        }
        Some(Value::Array(entries)) => entries,
        Some(other) => return Err(invalid(format!("expected a list, found {other}"))),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            PluginSpec::from_value(entry).map_err(|reason| invalid(format!("entry {index}: {reason}")))
        })
        .collect()
}

/// Loads plugin sections against one bound registry.
#[derive(Debug, Clone)]
pub struct PluginLoader {
    registry: HandlerRegistry,
}

impl PluginLoader {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Build the plugins of `section`, in declaration order.
    pub fn load(&self, config: &Map, section: &str) -> Result<Vec<PluginInstance>> {
        let specs = read_section(config, section)?;
        let mut plugins = Vec::with_capacity(specs.len());

        for spec in &specs {
            match self.registry.get_processor(&spec.name, &spec.arguments) {
                Ok(plugin) => {
                    tracing::debug!(section, plugin = %spec.name, "Loaded plugin");
                    plugins.push(plugin);
                }
                Err(e) => {
                    tracing::error!(section, plugin = %spec.name, error = %e, "Failed to load plugin");
                }
            }
        }

        if plugins.is_empty() {
            return Err(Error::NoPlugins {
                section: section.to_string(),
            });
        }

        tracing::debug!(
            section,
            loaded = plugins.len(),
            declared = specs.len(),
            "Loaded plugin section"
        );
        Ok(plugins)
    }
}
