//! Plugin registry
//!
//! A [`PluginCatalog`] maps `(category, name)` to plugin factories. A
//! [`HandlerRegistry`] binds one category of a catalog and builds plugin
//! instances by name.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_registrations};
pub use store::{HandlerRegistry, PluginCatalog};
pub use types::{PluginCategory, PluginFactory, PluginRegistration};
