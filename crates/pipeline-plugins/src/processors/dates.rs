//! Date normalisation plugin

use super::properties::apply_fragment;
use crate::plugin::Plugin;
use crate::Result;
use pipeline_config::{Map, dot2dict, nested_get_dotted};
use pipeline_formats::isoformat_date;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct IsoDateArgs {
    /// Dotted path of the date property
    pub field: String,
    /// strftime-style layout tried before the generic parser
    #[serde(default)]
    pub format: Option<String>,
}

/// Rewrites a date property as an ISO 8601 string.
///
/// Missing, non-string, or unparseable values are left as they are.
#[derive(Debug, Clone)]
pub struct IsoDate {
    field: String,
    format: Option<String>,
}

impl IsoDate {
    pub const NAME: &'static str = "iso_date";

    pub fn new(args: IsoDateArgs) -> Result<Self> {
        Ok(Self {
            field: args.field,
            format: args.format,
        })
    }
}

impl Plugin for IsoDate {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process(&self, uri: &str, properties: &mut Map) -> Result<String> {
        let Some(Value::String(raw)) = nested_get_dotted(&self.field, properties) else {
            return Ok(uri.to_string());
        };

        let (formatted, _) = isoformat_date(raw, self.format.as_deref());
        let Some(formatted) = formatted else {
            return Ok(uri.to_string());
        };

        apply_fragment(properties, &dot2dict(&self.field, Value::String(formatted)))?;
        Ok(uri.to_string())
    }
}
