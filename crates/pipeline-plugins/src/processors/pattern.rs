//! Regex extractor plugin

use crate::plugin::Plugin;
use crate::{Error, Result};
use pipeline_config::Map;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct RegexExtractorArgs {
    pub regex: String,
}

/// Extracts named capture groups from the item URI into properties.
#[derive(Debug, Clone)]
pub struct RegexExtractor {
    regex: Regex,
}

impl RegexExtractor {
    pub const NAME: &'static str = "regex";

    pub fn new(args: RegexExtractorArgs) -> Result<Self> {
        let regex = Regex::new(&args.regex).map_err(|e| Error::construction(Self::NAME, e))?;
        Ok(Self { regex })
    }
}

impl Plugin for RegexExtractor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process(&self, uri: &str, properties: &mut Map) -> Result<String> {
        let Some(captures) = self.regex.captures(uri) else {
            tracing::debug!(uri, regex = %self.regex, "No regex match");
            return Ok(uri.to_string());
        };

        for name in self.regex.capture_names().flatten() {
            if let Some(matched) = captures.name(name) {
                properties.insert(name.to_string(), Value::String(matched.as_str().to_string()));
            }
        }
        Ok(uri.to_string())
    }
}
