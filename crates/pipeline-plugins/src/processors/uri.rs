//! URI rewriting plugin

use crate::plugin::Plugin;
use crate::Result;
use pipeline_config::Map;
use pipeline_formats::is_remote_uri;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UriPrefixArgs {
    pub prefix: String,
}

/// Prepends a prefix to local URIs.
#[derive(Debug, Clone)]
pub struct UriPrefix {
    prefix: String,
}

impl UriPrefix {
    pub const NAME: &'static str = "uri_prefix";

    pub fn new(args: UriPrefixArgs) -> Result<Self> {
        Ok(Self {
            prefix: args.prefix,
        })
    }
}

impl Plugin for UriPrefix {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process(&self, uri: &str, _properties: &mut Map) -> Result<String> {
        if is_remote_uri(uri) {
            return Ok(uri.to_string());
        }
        Ok(format!("{}{}", self.prefix, uri))
    }
}
