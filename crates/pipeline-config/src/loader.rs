//! Reading configuration layers from disk
//!
//! Format is detected from the file extension:
//! - `.yaml`, `.yml` -> YAML
//! - `.json` -> JSON
//! - `.toml` -> TOML

use crate::value::Map;
use crate::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DESCRIPTION_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Load a configuration layer, requiring a mapping at the document root.
///
/// An empty document yields an empty mapping.
pub fn load_layer(path: &Path) -> Result<Map> {
    let content = read(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    let value = match extension.to_lowercase().as_str() {
        "yaml" | "yml" => parse_yaml(&content, path)?,
        "json" => serde_json::from_str(&content).map_err(|e| Error::parse(path, "JSON", e))?,
        "toml" => toml::from_str(&content).map_err(|e| Error::parse(path, "TOML", e))?,
        _ => {
            return Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            });
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(Error::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a YAML document of any shape.
pub fn load_yaml(path: &Path) -> Result<Value> {
    let content = read(path)?;
    parse_yaml(&content, path)
}

/// Recursively list YAML description files under `root`, sorted by path.
pub fn load_description_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::io(root, e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let is_description = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DESCRIPTION_EXTENSIONS.contains(&ext));

        if is_description {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = ?root, count = files.len(), "Discovered description files");
    Ok(files)
}

fn read(path: &Path) -> Result<String> {
    tracing::debug!(?path, "Loading config layer");
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn parse_yaml(content: &str, path: &Path) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(content).map_err(|e| Error::parse(path, "YAML", e))
}

/// Serialize a mapping as YAML.
pub fn to_yaml_string(map: &Map) -> Result<String> {
    serde_yaml::to_string(map).map_err(|e| Error::Serialize {
        format: "YAML".into(),
        message: e.to_string(),
    })
}

/// Serialize a mapping as pretty-printed JSON.
pub fn to_json_string(map: &Map) -> Result<String> {
    serde_json::to_string_pretty(map).map_err(|e| Error::Serialize {
        format: "JSON".into(),
        message: e.to_string(),
    })
}
