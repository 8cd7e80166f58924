//! Built-in plugin registrations
//!
//! Every plugin shipped with the crate is listed here; the global catalog
//! and `with_builtins()` derive from this function.

use super::{PluginCategory, PluginRegistration};
use crate::processors::{DefaultProperties, IsoDate, RegexExtractor, SetProperty, UriPrefix};

/// Number of built-in plugins.
pub const BUILTIN_COUNT: usize = 5;

/// Returns all built-in plugin registrations.
pub fn builtin_registrations() -> Vec<PluginRegistration> {
    vec![
        // Pre-processors (4 plugins)
        PluginRegistration::typed(
            PluginCategory::PRE_PROCESSORS,
            SetProperty::NAME,
            SetProperty::new,
        )
        .with_description("Merge a dotted key and value into the item properties"),
        PluginRegistration::typed(
            PluginCategory::PRE_PROCESSORS,
            DefaultProperties::NAME,
            DefaultProperties::new,
        )
        .with_description("Fill in properties the item does not already have"),
        PluginRegistration::typed(PluginCategory::PRE_PROCESSORS, IsoDate::NAME, IsoDate::new)
            .with_description("Normalise a date property to ISO 8601"),
        PluginRegistration::typed(PluginCategory::PRE_PROCESSORS, UriPrefix::NAME, UriPrefix::new)
            .with_description("Prepend a prefix to local URIs"),
        // Extractors (1 plugin)
        PluginRegistration::typed(
            PluginCategory::EXTRACTORS,
            RegexExtractor::NAME,
            RegexExtractor::new,
        )
        .with_description("Extract named regex groups from the URI"),
    ]
}
