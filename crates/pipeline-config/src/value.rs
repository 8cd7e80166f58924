//! General value categories driving the merge rules
//!
//! Configuration trees are plain [`serde_json::Value`]s. For merging purposes
//! every value falls into one of three categories: mappings, sequences and
//! scalars (null, booleans, numbers and strings).

use serde_json::Value;
use std::fmt;

/// String-keyed mapping used for every configuration layer.
pub type Map = serde_json::Map<String, Value>;

/// The general category of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mapping,
    Sequence,
    Scalar,
}

impl Category {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Mapping,
            Value::Array(_) => Self::Sequence,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Scalar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a value counts as an empty placeholder.
///
/// Null, `false`, zero, the empty string and empty collections are falsy.
/// A falsy value already present in the accumulator is replaced outright by
/// the incoming layer's value, whatever its category.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"a": 1}), Category::Mapping)]
    #[case(json!({}), Category::Mapping)]
    #[case(json!([1, 2]), Category::Sequence)]
    #[case(json!("text"), Category::Scalar)]
    #[case(json!(3.5), Category::Scalar)]
    #[case(json!(true), Category::Scalar)]
    #[case(json!(null), Category::Scalar)]
    fn test_category_of(#[case] value: Value, #[case] expected: Category) {
        assert_eq!(Category::of(&value), expected);
    }

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(false), true)]
    #[case(json!(0), true)]
    #[case(json!(0.0), true)]
    #[case(json!(""), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    #[case(json!(true), false)]
    #[case(json!(-1), false)]
    #[case(json!("0"), false)]
    #[case(json!([0]), false)]
    #[case(json!({"a": null}), false)]
    fn test_is_falsy(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_falsy(&value), expected);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Sequence.to_string(), "sequence");
    }
}
