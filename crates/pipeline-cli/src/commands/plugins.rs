//! Plugins command

use colored::Colorize;
use pipeline_plugins::{PluginCatalog, load_plugins};

use crate::cli::ConfigArgs;
use crate::error::Result;

use super::resolve_config;

/// Load a plugin section and print the plugin names in load order.
pub fn run_plugins(section: &str, category: Option<&str>, args: &ConfigArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let category = category.unwrap_or(section);

    let plugins = load_plugins(config.as_map(), PluginCatalog::global(), category, section)?;

    for (index, plugin) in plugins.iter().enumerate() {
        println!("{:>3}. {}", index + 1, plugin.name());
    }
    eprintln!(
        "{} {} plugin(s) loaded from {}",
        "OK".green().bold(),
        plugins.len(),
        section.cyan()
    );
    Ok(())
}
