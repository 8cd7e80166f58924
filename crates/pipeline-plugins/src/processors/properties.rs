//! Property-setting plugins
//!
//! `set_property` merges one dotted key into the item properties and
//! `default_properties` fills in values the item does not have yet.

use crate::plugin::Plugin;
use crate::{Error, Result};
use pipeline_config::{Map, dot2dict, merge_layers, merge_values};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct SetPropertyArgs {
    /// Dotted path of the property, e.g. `properties.collection`
    pub key: String,
    pub value: Value,
}

/// Merges a single dotted property into the item properties.
#[derive(Debug, Clone)]
pub struct SetProperty {
    fragment: Value,
}

impl SetProperty {
    pub const NAME: &'static str = "set_property";

    pub fn new(args: SetPropertyArgs) -> Result<Self> {
        match dot2dict(&args.key, args.value) {
            fragment @ Value::Object(_) => Ok(Self { fragment }),
            _ => Err(Error::construction(Self::NAME, "key must not be empty")),
        }
    }
}

impl Plugin for SetProperty {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process(&self, uri: &str, properties: &mut Map) -> Result<String> {
        apply_fragment(properties, &self.fragment)?;
        Ok(uri.to_string())
    }
}

/// Merge a mapping fragment into `properties` in place.
pub(crate) fn apply_fragment(properties: &mut Map, fragment: &Value) -> Result<()> {
    let merged = merge_values(&Value::Object(properties.clone()), fragment)?;
    if let Value::Object(merged) = merged {
        *properties = merged;
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultPropertiesArgs {
    pub properties: Map,
}

/// Fills in properties the item does not already carry.
#[derive(Debug, Clone)]
pub struct DefaultProperties {
    defaults: Map,
}

impl DefaultProperties {
    pub const NAME: &'static str = "default_properties";

    pub fn new(args: DefaultPropertiesArgs) -> Result<Self> {
        Ok(Self {
            defaults: args.properties,
        })
    }
}

impl Plugin for DefaultProperties {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process(&self, uri: &str, properties: &mut Map) -> Result<String> {
        *properties = merge_layers([&self.defaults, &*properties])?;
        Ok(uri.to_string())
    }
}
