//! Shared test utilities for the pipeline workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`tree::ConfigTree`] builder for temporary configuration files
//! - [`plugins`]: recording plugins and a catalog to load them from
//! - [`logs`]: capture of `tracing` output for assertions

pub mod logs;
pub mod plugins;
pub mod tree;
