//! Plugin catalog storage and category-bound lookup

use super::{PluginCategory, PluginRegistration};
use crate::plugin::PluginInstance;
use crate::{Error, Result};
use pipeline_config::Map;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, LazyLock};

static GLOBAL_CATALOG: LazyLock<Arc<PluginCatalog>> =
    LazyLock::new(|| Arc::new(PluginCatalog::with_builtins()));

/// Capability table of plugin factories keyed by category and name.
///
/// Populate it during startup, then share it behind an [`Arc`]; lookups never
/// mutate the catalog.
#[derive(Debug, Clone, Default)]
pub struct PluginCatalog {
    plugins: HashMap<PluginCategory, BTreeMap<String, PluginRegistration>>,
}

impl PluginCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with all built-in plugins.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for reg in super::builtins::builtin_registrations() {
            catalog.register(reg);
        }
        catalog
    }

    /// Shared catalog holding the built-in plugins.
    pub fn global() -> Arc<PluginCatalog> {
        Arc::clone(&GLOBAL_CATALOG)
    }

    /// Register a plugin. A second registration under the same category and
    /// name replaces the first.
    pub fn register(&mut self, reg: PluginRegistration) {
        let entries = self.plugins.entry(reg.category.clone()).or_default();
        if entries.contains_key(&reg.name) {
            tracing::warn!(
                category = %reg.category,
                name = %reg.name,
                "Replacing existing plugin registration"
            );
        }
        entries.insert(reg.name.clone(), reg);
    }

    /// Get a registration by category and name.
    pub fn get(&self, category: &str, name: &str) -> Option<&PluginRegistration> {
        self.plugins.get(category)?.get(name)
    }

    /// Check if a plugin is registered.
    pub fn contains(&self, category: &str, name: &str) -> bool {
        self.get(category, name).is_some()
    }

    /// Get the number of registered plugins across all categories.
    pub fn len(&self) -> usize {
        self.plugins.values().map(BTreeMap::len).sum()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// List all categories (sorted).
    pub fn categories(&self) -> Vec<&PluginCategory> {
        let mut categories: Vec<_> = self
            .plugins
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(category, _)| category)
            .collect();
        categories.sort();
        categories
    }

    /// List plugin names within a category (sorted).
    pub fn names(&self, category: &str) -> Vec<&str> {
        self.plugins
            .get(category)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Iterate over all registrations, grouped by category.
    pub fn iter(&self) -> impl Iterator<Item = &PluginRegistration> {
        self.categories()
            .into_iter()
            .flat_map(move |category| self.plugins[category.as_str()].values())
    }
}

/// Resolves plugin names to constructed instances within one category.
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    catalog: Arc<PluginCatalog>,
    category: PluginCategory,
}

impl HandlerRegistry {
    /// Bind a registry to `category` of `catalog`.
    ///
    /// Binding never fails; an unknown category simply has no plugins.
    pub fn new(catalog: Arc<PluginCatalog>, category: impl Into<PluginCategory>) -> Self {
        let category = category.into();
        tracing::debug!(
            %category,
            plugins = catalog.names(category.as_str()).len(),
            "Bound handler registry"
        );
        Self { catalog, category }
    }

    pub fn category(&self) -> &PluginCategory {
        &self.category
    }

    /// Check if `name` is available in this category.
    pub fn contains(&self, name: &str) -> bool {
        self.catalog.contains(self.category.as_str(), name)
    }

    /// List the available plugin names (sorted).
    pub fn names(&self) -> Vec<&str> {
        self.catalog.names(self.category.as_str())
    }

    /// Construct the plugin registered as `name` with `arguments`.
    pub fn get_processor(&self, name: &str, arguments: &Map) -> Result<PluginInstance> {
        let reg = self
            .catalog
            .get(self.category.as_str(), name)
            .ok_or_else(|| Error::PluginNotFound {
                category: self.category.to_string(),
                name: name.to_string(),
            })?;

        tracing::debug!(category = %self.category, name, "Constructing plugin");
        reg.build(arguments)
    }
}
