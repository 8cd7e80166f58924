//! Remote URI detection

use regex::Regex;
use std::sync::LazyLock;

/// Matches `protocol://` and `protocol::` prefixes.
static REMOTE_URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(://|::)").expect("remote URI pattern is valid"));

/// Whether `path` looks like a remote URI rather than a local path.
pub fn is_remote_uri(path: &str) -> bool {
    REMOTE_URI_PATTERN.is_match(path)
}
