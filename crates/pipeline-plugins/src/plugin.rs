//! The plugin contract and plugin specifications

use crate::{Error, Result};
use pipeline_config::Map;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;

/// Keys that name the plugin within a specification entry.
const NAME_KEYS: [&str; 2] = ["name", "method"];

/// Key whose mapping is flattened into the plugin arguments.
const INPUTS_KEY: &str = "inputs";

/// A constructed pipeline step.
///
/// Each call receives the item URI and its property mapping; the plugin may
/// edit the properties in place and returns the URI to pass on.
pub trait Plugin: Send + Sync + Debug {
    /// Registered name of the plugin.
    fn name(&self) -> &str;

    /// Process one item.
    fn process(&self, uri: &str, properties: &mut Map) -> Result<String>;
}

/// Constructed plugin instance.
pub type PluginInstance = Box<dyn Plugin>;

/// One entry of a plugin section: a plugin name plus its arguments.
///
/// ```yaml
/// extractors:
///   - name: regex
///     regex: '^/data/(?P<model>\w+)/'
///   - method: iso_date
///     inputs:
///       field: start_time
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PluginSpec {
    pub name: String,
    pub arguments: Map,
}

impl PluginSpec {
    pub fn new(name: impl Into<String>, arguments: Map) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Read a specification entry.
    ///
    /// The name comes from `name` (or `method`); a non-string name such as
    /// `name: 3` becomes its JSON text. All other keys become
    /// arguments, and a mapping under `inputs` is flattened into them without
    /// replacing keys given at the top level.
    pub fn from_value(value: &Value) -> std::result::Result<Self, String> {
        let Value::Object(entry) = value else {
            return Err(format!("expected a mapping, found {value}"));
        };

        let name = NAME_KEYS
            .iter()
            .find_map(|key| entry.get(*key))
            .ok_or_else(|| "entry has no 'name'".to_string())?;
        // A non-string name is kept as its JSON text so the lookup fails
        // for that entry alone.
        let name = match name {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        };

        let mut arguments = Map::new();
        let mut inputs = None;
        for (key, value) in entry {
            if NAME_KEYS.contains(&key.as_str()) {
                continue;
            }
            match (key.as_str(), value) {
                (INPUTS_KEY, Value::Object(nested)) => inputs = Some(nested),
                _ => {
                    arguments.insert(key.clone(), value.clone());
                }
            }
        }
        if let Some(inputs) = inputs {
            for (key, value) in inputs {
                if !arguments.contains_key(key) {
                    arguments.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(Self::new(name, arguments))
    }
}

/// Decode a plugin's argument mapping into its typed argument record.
pub fn decode_args<T: DeserializeOwned>(name: &str, arguments: &Map) -> Result<T> {
    serde_json::from_value(Value::Object(arguments.clone())).map_err(|source| {
        Error::InvalidArguments {
            name: name.to_string(),
            source,
        }
    })
}
