//! Files command

use std::path::Path;

use pipeline_config::load_description_files;

use crate::error::{CliError, Result};

/// Print every YAML description file under `dir`, sorted by path.
pub fn run_files(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(CliError::user(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    for path in load_description_files(dir)? {
        println!("{}", path.display());
    }
    Ok(())
}
