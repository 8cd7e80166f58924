//! Command implementations

mod files;
mod get;
mod list;
mod plugins;
mod resolve;

pub use files::run_files;
pub use get::run_get;
pub use list::run_list;
pub use plugins::run_plugins;
pub use resolve::run_resolve;

use crate::cli::ConfigArgs;
use crate::error::Result;
use pipeline_config::{ConfigResolver, MergeOptions, ResolvedConfig};

/// Merge user config, files and overrides into one configuration.
pub fn resolve_config(args: &ConfigArgs) -> Result<ResolvedConfig> {
    let options = MergeOptions::new().add_keys(!args.no_new_keys);
    let mut resolver = ConfigResolver::with_options(options);
    if let Some(dir) = &args.user_config_dir {
        resolver = resolver.with_user_config_dir(dir);
    }

    if !args.no_user_config {
        resolver.push_user_config()?;
    }
    for file in &args.files {
        resolver.push_file(file)?;
    }
    for input in &args.overrides {
        resolver.push_override_str(input)?;
    }

    Ok(resolver.resolve()?)
}
