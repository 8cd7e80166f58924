//! Plugin registry and loader for configuration-driven pipelines
//!
//! Plugins are registered in a [`PluginCatalog`] under a category such as
//! `pre_processors` or `extractors`. A configuration section lists the
//! plugins to build, and [`load_plugins`] turns it into ordered instances:
//!
//! ```
//! use pipeline_plugins::{PluginCatalog, PluginCategory, load_plugins};
//! use serde_json::json;
//!
//! let config = json!({
//!     "extractors": [{"name": "regex", "regex": r"^/data/(?P<model>\w+)/"}]
//! });
//! let config = config.as_object().unwrap();
//!
//! let plugins = load_plugins(
//!     config,
//!     PluginCatalog::global(),
//!     PluginCategory::EXTRACTORS,
//!     "extractors",
//! )
//! .unwrap();
//!
//! let mut properties = serde_json::Map::new();
//! plugins[0].process("/data/ukesm/tas.nc", &mut properties).unwrap();
//! assert_eq!(properties["model"], "ukesm");
//! ```

pub mod error;
pub mod loader;
pub mod logging;
pub mod plugin;
pub mod processors;
pub mod registry;

pub use error::{Error, Result};
pub use loader::{PluginLoader, load_plugins, read_section};
pub use plugin::{Plugin, PluginInstance, PluginSpec, decode_args};
pub use registry::{
    BUILTIN_COUNT, HandlerRegistry, PluginCatalog, PluginCategory, PluginFactory,
    PluginRegistration, builtin_registrations,
};
