//! Built-in plugin implementations

mod dates;
mod pattern;
mod properties;
mod uri;

pub use dates::{IsoDate, IsoDateArgs};
pub use pattern::{RegexExtractor, RegexExtractorArgs};
pub use properties::{DefaultProperties, DefaultPropertiesArgs, SetProperty, SetPropertyArgs};
pub use uri::{UriPrefix, UriPrefixArgs};
