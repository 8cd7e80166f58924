//! Recording plugins for loader and pipeline tests.
//!
//! [`test_catalog`] registers under [`TEST_CATEGORY`]:
//!
//! - `first`, `second`, `third`: [`RecordingPlugin`]s that tag the properties
//! - `failing`: a factory that always fails
//! - `typed`: requires a `label` string argument

use pipeline_config::Map;
use pipeline_plugins::{
    Error, Plugin, PluginCatalog, PluginInstance, PluginRegistration, Result,
};
use serde_json::Value;
use std::sync::Arc;

/// Category used by [`test_catalog`].
pub const TEST_CATEGORY: &str = "test_plugins";

/// Appends its name to the `visited` list of each processed item.
#[derive(Debug, Clone)]
pub struct RecordingPlugin {
    name: String,
    /// Arguments the factory received
    pub arguments: Map,
}

impl RecordingPlugin {
    pub fn new(name: impl Into<String>, arguments: Map) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

impl Plugin for RecordingPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, uri: &str, properties: &mut Map) -> Result<String> {
        let visited = properties
            .entry("visited")
            .or_insert_with(|| Value::Array(Vec::new()));
        match visited {
            Value::Array(items) => items.push(Value::String(self.name.clone())),
            _ => {
                return Err(Error::Processing {
                    name: self.name.clone(),
                    reason: "'visited' is not a list".into(),
                });
            }
        }
        Ok(uri.to_string())
    }
}

fn recording(category: &str, name: &'static str) -> PluginRegistration {
    PluginRegistration::new(category, name, move |arguments: &Map| {
        Ok(Box::new(RecordingPlugin::new(name, arguments.clone())) as PluginInstance)
    })
}

#[derive(Debug, serde::Deserialize)]
struct TypedArgs {
    label: String,
}

/// Catalog holding the recording plugins.
pub fn test_catalog() -> PluginCatalog {
    let mut catalog = PluginCatalog::new();
    for name in ["first", "second", "third"] {
        catalog.register(recording(TEST_CATEGORY, name));
    }
    catalog.register(PluginRegistration::new(
        TEST_CATEGORY,
        "failing",
        |_: &Map| Err(Error::construction("failing", "always fails")),
    ));
    catalog.register(PluginRegistration::typed(
        TEST_CATEGORY,
        "typed",
        |args: TypedArgs| Ok(RecordingPlugin::new(args.label, Map::new())),
    ));
    catalog
}

/// [`test_catalog`] behind an [`Arc`], ready for a registry.
pub fn shared_test_catalog() -> Arc<PluginCatalog> {
    Arc::new(test_catalog())
}
