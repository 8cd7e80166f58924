//! Layered configuration resolution for plugin pipelines
//!
//! This crate turns several configuration sources into one canonical mapping:
//!
//! - **Value categories**: mappings, sequences and scalars drive the merge rules
//! - **Deep merge**: ordered layer merge with sequence union and type-conflict detection
//! - **Dotted paths**: `a.b.c` keys materialised as nested fragments, and safe nested lookup
//! - **Layer loading**: YAML, JSON and TOML layer files plus description-file discovery
//! - **Resolution**: defaults, user config, files and overrides combined in precedence order
//!
//! # Example
//!
//! ```
//! use pipeline_config::ConfigResolver;
//! use serde_json::{json, Value};
//!
//! let Value::Object(defaults) = json!({"outputs": {"format": "json"}}) else { unreachable!() };
//!
//! let mut resolver = ConfigResolver::new();
//! resolver.push_defaults(defaults);
//! resolver.push_override_str("outputs.path=/tmp/out").unwrap();
//!
//! let config = resolver.resolve().unwrap();
//! assert_eq!(config.get("outputs.path"), Some(&json!("/tmp/out")));
//! assert_eq!(config.get("outputs.format"), Some(&json!("json")));
//! ```

pub mod error;
pub mod loader;
pub mod merge;
pub mod path;
pub mod resolver;
pub mod value;

pub use error::{Error, Result};
pub use loader::{load_description_files, load_layer, load_yaml};
pub use merge::{MergeOptions, merge_layers, merge_layers_with, merge_values};
pub use path::{
    dot2dict, nested_get, nested_get_dotted, override_fragment, parse_override, split_key_path,
};
pub use resolver::{ConfigLayer, ConfigResolver, LayerSource, ResolvedConfig};
pub use value::{Category, Map, is_falsy};
