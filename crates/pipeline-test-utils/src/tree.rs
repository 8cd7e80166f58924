//! [`ConfigTree`] builder for configuration file scenarios.

use pipeline_config::Map;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of configuration files.
///
/// # Example
///
/// ```rust
/// use pipeline_test_utils::tree::ConfigTree;
///
/// let tree = ConfigTree::new();
/// let path = tree.write("conf/pipeline.yaml", "outputs:\n  format: json\n");
/// assert!(path.is_file());
/// tree.assert_file_exists("conf/pipeline.yaml");
/// ```
pub struct ConfigTree {
    temp_dir: TempDir,
}

impl Default for ConfigTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigTree {
    /// Create an empty temporary directory.
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new()
                .unwrap_or_else(|e| panic!("ConfigTree: failed to create temp dir: {e}")),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("ConfigTree: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("ConfigTree: failed to write {}: {e}", path.display()));
        path
    }

    /// Write `value` as pretty JSON to `relative`.
    pub fn write_json(&self, relative: &str, value: &Value) -> PathBuf {
        let content = serde_json::to_string_pretty(value)
            .unwrap_or_else(|e| panic!("ConfigTree: failed to serialise {relative}: {e}"));
        self.write(relative, &content)
    }

    /// Assert that `relative` exists in the tree.
    ///
    /// # Panics
    /// Panics if the file does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.path(relative).exists(),
            "Expected file to exist: {relative}"
        );
    }
}

/// Convert a `serde_json::json!` object literal into a [`Map`].
///
/// # Panics
/// Panics if `value` is not an object.
pub fn map(value: Value) -> Map {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a mapping, got {other}"),
    }
}
