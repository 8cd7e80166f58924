//! Deep merge of configuration layers
//!
//! Layers are folded left to right into an accumulator that starts as a copy
//! of the first layer. Per key:
//!
//! - a key that is missing or falsy in the accumulator takes the incoming value
//! - mappings merge recursively
//! - sequences are unioned, keeping the accumulator's order and appending
//!   unseen incoming elements in first-seen order (numbers compare by value,
//!   so `1` and `1.0` are the same element)
//! - scalars are overwritten by the later layer
//! - a scalar/sequence mismatch is reconciled when one side's sequence already
//!   contains the other side's value; any other mismatch is a type conflict
//!
//! Input layers are never modified.

use crate::value::{Category, Map, is_falsy};
use crate::{Error, Result};
use serde_json::Value;

/// Options controlling how incoming layers are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// When false, a layer may only refine keys the accumulator already has.
    pub add_keys: bool,
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether incoming layers may introduce new keys (builder pattern).
    pub fn add_keys(mut self, add_keys: bool) -> Self {
        self.add_keys = add_keys;
        self
    }
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self { add_keys: true }
    }
}

/// Merge two or more layers with default options.
///
/// # Example
///
/// ```
/// use pipeline_config::merge_layers;
/// use serde_json::{json, Value};
///
/// let Value::Object(defaults) = json!({"x": [1, 2], "y": {"a": 1}}) else { unreachable!() };
/// let Value::Object(file) = json!({"x": [2, 3], "y": {"b": 2}}) else { unreachable!() };
///
/// let merged = merge_layers([&defaults, &file]).unwrap();
/// assert_eq!(Value::Object(merged), json!({"x": [1, 2, 3], "y": {"a": 1, "b": 2}}));
/// ```
pub fn merge_layers<'a, I>(layers: I) -> Result<Map>
where
    I: IntoIterator<Item = &'a Map>,
{
    merge_layers_with(layers, MergeOptions::default())
}

/// Merge two or more layers, later layers taking precedence.
///
/// Fails with [`Error::NotEnoughLayers`] when given fewer than two layers and
/// with [`Error::TypeConflict`] when a key cannot be reconciled. No partial
/// result is returned on failure.
pub fn merge_layers_with<'a, I>(layers: I, options: MergeOptions) -> Result<Map>
where
    I: IntoIterator<Item = &'a Map>,
{
    let mut layers = layers.into_iter();
    let Some(first) = layers.next() else {
        return Err(Error::NotEnoughLayers { count: 0 });
    };

    let mut accumulator = first.clone();
    let mut count = 1;
    for layer in layers {
        count += 1;
        merge_mapping(&mut accumulator, layer, options, "")?;
    }

    if count < 2 {
        return Err(Error::NotEnoughLayers { count });
    }

    tracing::trace!(layers = count, keys = accumulator.len(), "Merged config layers");
    Ok(accumulator)
}

/// Merge `overlay` onto `base` where both are mappings.
///
/// Used to apply path fragments to a property mapping. Any other pair of
/// values is a type conflict at the root.
pub fn merge_values(base: &Value, overlay: &Value) -> Result<Value> {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            merge_layers([base, overlay]).map(Value::Object)
        }
        _ => Err(Error::TypeConflict {
            key: String::new(),
            existing: Category::of(base),
            incoming: Category::of(overlay),
        }),
    }
}

fn merge_mapping(target: &mut Map, layer: &Map, options: MergeOptions, path: &str) -> Result<()> {
    for (key, value) in layer {
        if !options.add_keys && !target.contains_key(key) {
            continue;
        }

        let key_path = join_key(path, key);
        match target.get_mut(key) {
            Some(existing) => {
                if is_falsy(existing) {
                    *existing = value.clone();
                } else {
                    merge_entry(existing, value, options, &key_path)?;
                }
            }
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(())
}

fn merge_entry(existing: &mut Value, incoming: &Value, options: MergeOptions, key: &str) -> Result<()> {
    match (existing, incoming) {
        (Value::Object(base), Value::Object(overlay)) => merge_mapping(base, overlay, options, key),
        (Value::Array(base), Value::Array(overlay)) => {
            union_sequence(base, overlay);
            Ok(())
        }
        (slot, value) => match (Category::of(slot), Category::of(value)) {
            (Category::Scalar, Category::Scalar) => {
                *slot = value.clone();
                Ok(())
            }
            (current, new) => reconcile(slot, value, key, current, new),
        },
    }
}

/// Append elements of `overlay` not yet present in `base`.
fn union_sequence(base: &mut Vec<Value>, overlay: &[Value]) {
    for item in overlay {
        if !contains(base, item) {
            base.push(item.clone());
        }
    }
}

/// Resolve a category mismatch by containment.
///
/// An incoming sequence that contains the current value replaces it; a
/// current sequence that contains the incoming value is kept as is.
fn reconcile(
    slot: &mut Value,
    incoming: &Value,
    key: &str,
    existing: Category,
    new: Category,
) -> Result<()> {
    if let Value::Array(items) = incoming {
        if contains(items, slot) {
            *slot = incoming.clone();
            return Ok(());
        }
    }

    if let Value::Array(items) = &*slot {
        if contains(items, incoming) {
            return Ok(());
        }
    }

    Err(Error::TypeConflict {
        key: key.to_string(),
        existing,
        incoming: new,
    })
}

fn contains(items: &[Value], value: &Value) -> bool {
    items.iter().any(|item| same_value(item, value))
}

/// Structural equality where numbers compare by value, so `1` equals `1.0`.
fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| same_value(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, value)| y.get(key).is_some_and(|other| same_value(value, other)))
        }
        _ => a == b,
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
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

    fn merge2(a: Value, b: Value) -> Result<Value> {
        merge_layers([&map(a), &map(b)]).map(Value::Object)
    }

    #[rstest]
    #[case::scalar_later_wins(json!({"x": 1}), json!({"x": 2}), json!({"x": 2}))]
    #[case::sequence_union(json!({"x": [1, 2]}), json!({"x": [2, 3]}), json!({"x": [1, 2, 3]}))]
    #[case::recursive(json!({"x": {"y": 1}}), json!({"x": {"z": 2}}), json!({"x": {"y": 1, "z": 2}}))]
    #[case::new_key(json!({"x": 1}), json!({"y": 2}), json!({"x": 1, "y": 2}))]
    #[case::falsy_placeholder(json!({"x": null}), json!({"x": [1]}), json!({"x": [1]}))]
    #[case::falsy_zero_replaced_by_mapping(json!({"x": 0}), json!({"x": {"a": 1}}), json!({"x": {"a": 1}}))]
    #[case::scalar_kinds_overwrite(json!({"x": "a"}), json!({"x": 5}), json!({"x": 5}))]
    #[case::scalar_adopts_containing_sequence(json!({"x": "a"}), json!({"x": ["a", "b"]}), json!({"x": ["a", "b"]}))]
    #[case::sequence_keeps_contained_scalar(json!({"x": ["a", "b"]}), json!({"x": "b"}), json!({"x": ["a", "b"]}))]
    #[case::incoming_duplicates_collapse(json!({"x": [1]}), json!({"x": [2, 2, 1]}), json!({"x": [1, 2]}))]
    #[case::falsy_incoming_scalar_overwrites(json!({"x": 5}), json!({"x": 0}), json!({"x": 0}))]
    #[case::integer_and_float_collapse(json!({"x": [1, 2]}), json!({"x": [1.0, 3]}), json!({"x": [1, 2, 3]}))]
    #[case::float_scalar_kept_by_sequence(json!({"x": [1, 2]}), json!({"x": 2.0}), json!({"x": [1, 2]}))]
    fn test_merge_rules(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
        assert_eq!(merge2(a, b).unwrap(), expected);
    }

    #[test]
    fn test_type_conflict() {
        let err = merge2(json!({"x": "a"}), json!({"x": [1, 2]})).unwrap_err();
        match err {
            Error::TypeConflict {
                key,
                existing,
                incoming,
            } => {
                assert_eq!(key, "x");
                assert_eq!(existing, Category::Scalar);
                assert_eq!(incoming, Category::Sequence);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_type_conflict_reports_nested_path() {
        let err = merge2(
            json!({"outer": {"inner": {"a": 1}}}),
            json!({"outer": {"inner": [1]}}),
        )
        .unwrap_err();
        assert!(matches!(err, Error::TypeConflict { ref key, .. } if key == "outer.inner"));
        assert!(err.to_string().contains("outer.inner"));
    }

    #[test]
    fn test_requires_two_layers() {
        let only = map(json!({"x": 1}));
        assert!(matches!(
            merge_layers([&only]),
            Err(Error::NotEnoughLayers { count: 1 })
        ));
        assert!(matches!(
            merge_layers(std::iter::empty::<&Map>()),
            Err(Error::NotEnoughLayers { count: 0 })
        ));
    }

    #[test]
    fn test_add_keys_false_only_refines() {
        let base = map(json!({"x": 1, "nested": {"a": 1}}));
        let layer = map(json!({"x": 2, "y": 3, "nested": {"a": 2, "b": 3}}));

        let merged = merge_layers_with([&base, &layer], MergeOptions::new().add_keys(false)).unwrap();
        assert_eq!(Value::Object(merged), json!({"x": 2, "nested": {"a": 2}}));
    }

    #[test]
    fn test_later_layers_win_across_many() {
        let a = map(json!({"x": 1, "list": ["a"]}));
        let b = map(json!({"x": 2, "list": ["b"]}));
        let c = map(json!({"x": 3, "list": ["a", "c"]}));

        let merged = merge_layers([&a, &b, &c]).unwrap();
        assert_eq!(Value::Object(merged), json!({"x": 3, "list": ["a", "b", "c"]}));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let a = map(json!({"list": [1], "nested": {"k": "v"}}));
        let b = map(json!({"list": [2], "nested": {"other": true}}));
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = merge_layers([&a, &b]).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_merge_values_mappings() {
        let merged = merge_values(
            &json!({"properties": {"id": 1}}),
            &json!({"properties": {"collection": "c"}}),
        )
        .unwrap();
        assert_eq!(merged, json!({"properties": {"id": 1, "collection": "c"}}));
    }

    #[test]
    fn test_merge_values_requires_mappings() {
        let err = merge_values(&json!({"a": 1}), &json!([1])).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeConflict {
                existing: Category::Mapping,
                incoming: Category::Sequence,
                ..
            }
        ));
        assert!(merge_values(&json!("a"), &json!({"a": 1})).is_err());
    }

    #[test]
    fn test_nested_numbers_compare_by_value() {
        let merged = merge2(
            json!({"x": [{"v": 1}, [2]]}),
            json!({"x": [{"v": 1.0}, [2.0], 3]}),
        )
        .unwrap();
        assert_eq!(merged, json!({"x": [{"v": 1}, [2], 3]}));
    }

    #[test]
    fn test_key_order_follows_first_insertion() {
        let a = map(json!({"b": 1, "a": 1}));
        let b = map(json!({"c": 1, "a": 2}));

        let merged = merge_layers([&a, &b]).unwrap();
        let keys: Vec<_> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
