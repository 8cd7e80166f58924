//! Dotted key paths
//!
//! Converts `a.b.c` style keys into single-branch nested mappings and looks
//! values up through nested mappings without failing on missing keys.

use crate::value::Map;
use crate::{Error, Result};
use serde_json::Value;

/// Expand a dotted key into a nested mapping holding `value` at its leaf.
///
/// An empty key returns `value` unchanged.
///
/// ```
/// use pipeline_config::dot2dict;
/// use serde_json::json;
///
/// assert_eq!(dot2dict("a.b.c", json!(5)), json!({"a": {"b": {"c": 5}}}));
/// assert_eq!(dot2dict("", json!(5)), json!(5));
/// ```
pub fn dot2dict(key: &str, value: Value) -> Value {
    let mut remaining = key;
    let mut value = value;

    // Build bottom-up: the last segment wraps the value first.
    while !remaining.is_empty() {
        let (prefix, tail) = remaining.rsplit_once('.').unwrap_or(("", remaining));
        let mut wrapper = Map::new();
        wrapper.insert(tail.to_string(), value);
        value = Value::Object(wrapper);
        remaining = prefix;
    }

    value
}

/// Look up `key_path` in `source`.
///
/// Missing intermediate keys behave like empty mappings, so any unresolved
/// path returns `None` rather than an error. An intermediate value that is
/// not a mapping also resolves to `None`, as does an empty path.
pub fn nested_get<'a, K: AsRef<str>>(key_path: &[K], source: &'a Map) -> Option<&'a Value> {
    let (last, parents) = key_path.split_last()?;

    let mut current = source;
    for key in parents {
        match current.get(key.as_ref()) {
            Some(Value::Object(map)) => current = map,
            _ => return None,
        }
    }

    current.get(last.as_ref())
}

/// Look up a dotted key such as `properties.start_time`.
pub fn nested_get_dotted<'a>(key: &str, source: &'a Map) -> Option<&'a Value> {
    nested_get(&split_key_path(key), source)
}

/// Split a dotted key into its segments.
pub fn split_key_path(key: &str) -> Vec<&str> {
    if key.is_empty() {
        Vec::new()
    } else {
        key.split('.').collect()
    }
}

/// Parse a `dotted.key=value` override into its key and value.
///
/// The value is read as YAML so `3` becomes a number and `[a, b]` a
/// sequence; anything YAML rejects is kept as a plain string.
pub fn parse_override(input: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = input.split_once('=') else {
        return Err(Error::InvalidOverride {
            input: input.to_string(),
            reason: "expected KEY=VALUE".into(),
        });
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::InvalidOverride {
            input: input.to_string(),
            reason: "key must not be empty".into(),
        });
    }

    let raw = raw.trim();
    let value = if raw.is_empty() {
        Value::String(String::new())
    } else {
        serde_yaml::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
    };

    Ok((key.to_string(), value))
}

/// Materialise a `dotted.key=value` override as a mapping fragment.
pub fn override_fragment(input: &str) -> Result<Map> {
    let (key, value) = parse_override(input)?;
    match dot2dict(&key, value) {
        Value::Object(map) => Ok(map),
        _ => Err(Error::InvalidOverride {
            input: input.to_string(),
            reason: "key must not be empty".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn map(value: Value) -> Map {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a mapping, got {other}"),
        }
    }

    #[rstest]
    #[case("a", json!({"a": 1}))]
    #[case("a.b.c", json!({"a": {"b": {"c": 1}}}))]
    #[case("properties.start_time", json!({"properties": {"start_time": 1}}))]
    #[case(".a", json!({"a": 1}))]
    #[case("a.", json!({"a": {"": 1}}))]
    #[case("a..b", json!({"a": {"": {"b": 1}}}))]
    fn test_dot2dict(#[case] key: &str, #[case] expected: Value) {
        assert_eq!(dot2dict(key, json!(1)), expected);
    }

    #[test]
    fn test_dot2dict_empty_key_returns_value() {
        assert_eq!(dot2dict("", json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_round_trip() {
        let fragment = map(dot2dict("a.b.c", json!(5)));
        assert_eq!(nested_get(&["a", "b", "c"], &fragment), Some(&json!(5)));
    }

    #[test]
    fn test_nested_get_missing() {
        let source = map(json!({"a": {}}));
        assert_eq!(nested_get(&["a", "missing"], &source), None);
        assert_eq!(nested_get(&["x", "y", "z"], &source), None);
    }

    #[test]
    fn test_nested_get_distinguishes_stored_null() {
        let source = map(json!({"a": {"b": null}}));
        assert_eq!(nested_get(&["a", "b"], &source), Some(&Value::Null));
        assert_eq!(nested_get(&["a", "c"], &source), None);
    }

    #[test]
    fn test_nested_get_through_scalar() {
        let source = map(json!({"a": 1}));
        assert_eq!(nested_get(&["a", "b"], &source), None);
    }

    #[test]
    fn test_nested_get_empty_path() {
        let source = map(json!({"a": 1}));
        let empty: [&str; 0] = [];
        assert_eq!(nested_get(&empty, &source), None);
    }

    #[test]
    fn test_nested_get_repeated_key() {
        let source = map(json!({"a": {"a": 2}}));
        assert_eq!(nested_get(&["a", "a"], &source), Some(&json!(2)));
    }

    #[test]
    fn test_nested_get_dotted() {
        let source = map(json!({"properties": {"start_time": "2021"}}));
        assert_eq!(
            nested_get_dotted("properties.start_time", &source),
            Some(&json!("2021"))
        );
        assert_eq!(nested_get_dotted("", &source), None);
    }

    #[rstest]
    #[case("a.b=3", "a.b", json!(3))]
    #[case("name=hello", "name", json!("hello"))]
    #[case("flag=true", "flag", json!(true))]
    #[case("list=[a, b]", "list", json!(["a", "b"]))]
    #[case("url=http://x/y?a=b", "url", json!("http://x/y?a=b"))]
    #[case("empty=", "empty", json!(""))]
    #[case(" spaced = 1 ", "spaced", json!(1))]
    fn test_parse_override(#[case] input: &str, #[case] key: &str, #[case] value: Value) {
        assert_eq!(parse_override(input).unwrap(), (key.to_string(), value));
    }

    #[rstest]
    #[case("no-equals")]
    #[case("=value")]
    fn test_parse_override_invalid(#[case] input: &str) {
        assert!(matches!(
            parse_override(input),
            Err(Error::InvalidOverride { .. })
        ));
    }

    #[test]
    fn test_override_fragment() {
        let fragment = override_fragment("outputs.path=/tmp/out").unwrap();
        assert_eq!(
            Value::Object(fragment),
            json!({"outputs": {"path": "/tmp/out"}})
        );
    }
}
