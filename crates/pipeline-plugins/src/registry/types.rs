//! Core types for the plugin registry

use crate::plugin::{Plugin, PluginInstance, decode_args};
use crate::Result;
use pipeline_config::Map;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Named group of plugins, e.g. `extractors`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginCategory(String);

impl PluginCategory {
    pub const PRE_PROCESSORS: &'static str = "pre_processors";
    pub const EXTRACTORS: &'static str = "extractors";
    pub const POST_PROCESSORS: &'static str = "post_processors";
    pub const GENERATORS: &'static str = "generators";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PluginCategory {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PluginCategory {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PluginCategory {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&PluginCategory> for PluginCategory {
    fn from(category: &PluginCategory) -> Self {
        category.clone()
    }
}

/// Builds a plugin from its argument mapping.
pub type PluginFactory = Arc<dyn Fn(&Map) -> Result<PluginInstance> + Send + Sync>;

/// A plugin factory registered under a category and name.
#[derive(Clone)]
pub struct PluginRegistration {
    pub category: PluginCategory,
    pub name: String,
    /// One-line summary shown by listings
    pub description: String,
    factory: PluginFactory,
}

impl PluginRegistration {
    /// Register a factory that receives the raw argument mapping.
    pub fn new<F>(category: impl Into<PluginCategory>, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&Map) -> Result<PluginInstance> + Send + Sync + 'static,
    {
        Self {
            category: category.into(),
            name: name.into(),
            description: String::new(),
            factory: Arc::new(factory),
        }
    }

    /// Register a factory taking a typed argument record.
    ///
    /// The argument mapping is decoded into `A` before `build` runs; decode
    /// failures surface as [`crate::Error::InvalidArguments`].
    pub fn typed<A, P, F>(
        category: impl Into<PluginCategory>,
        name: impl Into<String>,
        build: F,
    ) -> Self
    where
        A: DeserializeOwned,
        P: Plugin + 'static,
        F: Fn(A) -> Result<P> + Send + Sync + 'static,
    {
        let name = name.into();
        let plugin_name = name.clone();
        Self::new(category, name, move |arguments: &Map| {
            let args: A = decode_args(&plugin_name, arguments)?;
            Ok(Box::new(build(args)?) as PluginInstance)
        })
    }

    /// Set the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Construct a plugin instance.
    pub fn build(&self, arguments: &Map) -> Result<PluginInstance> {
        (self.factory)(arguments)
    }
}

impl fmt::Debug for PluginRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistration")
            .field("category", &self.category)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
