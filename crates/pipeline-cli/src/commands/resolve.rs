//! Resolve command

use crate::cli::ConfigArgs;
use crate::error::Result;

use super::resolve_config;

/// Print the merged configuration as YAML or JSON.
pub fn run_resolve(args: &ConfigArgs, json: bool) -> Result<()> {
    let config = resolve_config(args)?;
    let output = if json {
        config.to_json()?
    } else {
        config.to_yaml()?
    };
    println!("{}", output.trim_end());
    Ok(())
}
