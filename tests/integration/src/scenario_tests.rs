//! Merge and path scenarios across the public APIs
//!
//! Each test pins one documented behavior of layered resolution so that
//! regressions show up by name.

use pipeline_config::{
    Error, Map, MergeOptions, dot2dict, merge_layers, merge_layers_with, nested_get,
};
use pipeline_formats::{Coordinates, is_remote_uri, isoformat_date};
use pipeline_test_utils::tree::map;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn merged(layers: &[Value]) -> Result<Value, Error> {
    let maps: Vec<Map> = layers.iter().cloned().map(map).collect();
    merge_layers(&maps).map(Value::Object)
}

mod merge_scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_mappings_merge_recursively() {
        assert_eq!(
            merged(&[json!({"a": {"x": 1}}), json!({"a": {"y": 2}})]).unwrap(),
            json!({"a": {"x": 1, "y": 2}})
        );
    }

    #[test]
    fn test_scalar_overwrite_and_union() {
        assert_eq!(
            merged(&[
                json!({"a": 1, "l": [1, 2]}),
                json!({"a": 2, "l": [2, 3]}),
                json!({"l": [3, 4, 1]}),
            ])
            .unwrap(),
            json!({"a": 2, "l": [1, 2, 3, 4]})
        );
    }

    #[test]
    fn test_falsy_placeholder_takes_any_type() {
        assert_eq!(
            merged(&[json!({"a": 0, "b": "", "c": []}), json!({"a": [1], "b": {"k": 1}, "c": "s"})])
                .unwrap(),
            json!({"a": [1], "b": {"k": 1}, "c": "s"})
        );
    }

    #[test]
    fn test_scalar_promoted_to_containing_sequence() {
        assert_eq!(
            merged(&[json!({"a": "x"}), json!({"a": ["x", "y"]})]).unwrap(),
            json!({"a": ["x", "y"]})
        );
    }

    #[test]
    fn test_sequence_kept_when_it_contains_scalar() {
        assert_eq!(
            merged(&[json!({"a": ["x", "y"]}), json!({"a": "y"})]).unwrap(),
            json!({"a": ["x", "y"]})
        );
    }

    #[test]
    fn test_conflict_names_full_key_path() {
        let err = merged(&[json!({"a": {"b": {"c": 1}}}), json!({"a": {"b": {"c": {"d": 1}}}})])
            .unwrap_err();
        assert!(matches!(err, Error::TypeConflict { ref key, .. } if key == "a.b.c"));
    }

    #[test]
    fn test_single_layer_rejected() {
        let only = map(json!({"a": 1}));
        assert!(matches!(
            merge_layers([&only]),
            Err(Error::NotEnoughLayers { count: 1 })
        ));
    }

    #[test]
    fn test_refine_only_merge() {
        let base = map(json!({"outputs": {"format": "json"}, "tags": ["a"]}));
        let update = map(json!({"outputs": {"format": "yaml", "path": "/x"}, "other": 1}));
        let result = merge_layers_with([&base, &update], MergeOptions::new().add_keys(false));
        assert_eq!(
            Value::Object(result.unwrap()),
            json!({"outputs": {"format": "yaml"}, "tags": ["a"]})
        );
    }

    #[test]
    fn test_fragments_merge_like_layers() {
        let base = map(json!({"properties": {"id": 1}}));
        let fragment = map(dot2dict("properties.collection", json!("c")));
        assert_eq!(
            Value::Object(merge_layers([&base, &fragment]).unwrap()),
            json!({"properties": {"id": 1, "collection": "c"}})
        );
    }
}

mod path_scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dot2dict_then_nested_get() {
        let fragment = map(dot2dict("a.b.c", json!(5)));
        assert_eq!(Value::Object(fragment.clone()), json!({"a": {"b": {"c": 5}}}));
        assert_eq!(nested_get(&["a", "b", "c"], &fragment), Some(&json!(5)));
        assert_eq!(nested_get(&["a", "x", "c"], &fragment), None);
    }
}

mod format_scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coordinates_conversions_agree() {
        let from_geojson = Coordinates::from_geojson(&[[-10.0, 60.0], [5.0, 45.0]]).unwrap();
        let from_wgs84 = Coordinates::from_wgs84(&[-10.0, 45.0, 5.0, 60.0]).unwrap();
        assert_eq!(from_geojson, from_wgs84);
        assert_eq!(from_wgs84.to_wgs84(), [-10.0, 45.0, 5.0, 60.0]);
    }

    #[test]
    fn test_dates_and_uris() {
        assert_eq!(
            isoformat_date("2021-06-08", None),
            (Some("2021-06-08T00:00:00".to_string()), false)
        );
        assert!(is_remote_uri("https://example.org/a.nc"));
        assert!(!is_remote_uri("/data/a.nc"));
    }
}
