//! End-to-end integration test for the configuration pipeline
//!
//! Exercises the complete flow: layer files -> resolver -> plugin sections ->
//! plugins applied to an item.

use pipeline_config::{ConfigResolver, Map};
use pipeline_plugins::{HandlerRegistry, PluginCatalog, PluginCategory, PluginLoader};
use pipeline_test_utils::logs::capture_logs;
use pipeline_test_utils::tree::{ConfigTree, map};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

/// Set up a tree with a base pipeline file and a site override file
fn setup_tree() -> ConfigTree {
    let tree = ConfigTree::new();
    tree.write(
        "pipeline.yaml",
        r#"
pre_processors:
  - name: uri_prefix
    prefix: "file://"
  - name: set_property
    key: properties.collection
    value: cmip6
extractors:
  - name: regex
    regex: '^file:///data/(?P<model>\w+)/(?P<variable>\w+)_(?P<start>\d{8})\.nc$'
post_processors:
  - name: iso_date
    field: start
    format: "%Y%m%d"
"#,
    );
    tree.write(
        "site.toml",
        r#"
[[pre_processors]]
name = "default_properties"

[pre_processors.properties]
license = "CC-BY-4.0"
"#,
    );
    tree
}

fn run_item(loaders: &[(&PluginLoader, &str)], config: &Map, uri: &str) -> (String, Map) {
    let mut properties = Map::new();
    let mut uri = uri.to_string();
    for (loader, section) in loaders {
        for plugin in loader.load(config, section).unwrap() {
            uri = plugin.process(&uri, &mut properties).unwrap();
        }
    }
    (uri, properties)
}

#[test]
fn test_full_pipeline() {
    let tree = setup_tree();

    let mut resolver = ConfigResolver::new().with_user_config_dir(tree.path("no-user"));
    resolver.push_defaults(map(json!({"post_processors": []})));
    resolver.push_user_config().unwrap();
    resolver.push_file(&tree.path("pipeline.yaml")).unwrap();
    resolver.push_file(&tree.path("site.toml")).unwrap();
    let config = resolver.resolve().unwrap();

    // Section lists from both files are unioned in file order.
    let pre: Vec<_> = config
        .section("pre_processors")
        .and_then(Value::as_array)
        .unwrap()
        .iter()
        .map(|entry| entry["name"].clone())
        .collect();
    assert_eq!(
        pre,
        vec![json!("uri_prefix"), json!("set_property"), json!("default_properties")]
    );

    let catalog = PluginCatalog::global();
    let pre_loader =
        PluginLoader::new(HandlerRegistry::new(catalog.clone(), PluginCategory::PRE_PROCESSORS));
    let extract_loader =
        PluginLoader::new(HandlerRegistry::new(catalog.clone(), PluginCategory::EXTRACTORS));
    // iso_date is registered as a pre-processor and reused for the post step.
    let post_loader = PluginLoader::new(HandlerRegistry::new(catalog, PluginCategory::PRE_PROCESSORS));

    let (uri, properties) = run_item(
        &[
            (&pre_loader, "pre_processors"),
            (&extract_loader, "extractors"),
            (&post_loader, "post_processors"),
        ],
        config.as_map(),
        "/data/ukesm/tas_20210608.nc",
    );

    assert_eq!(uri, "file:///data/ukesm/tas_20210608.nc");
    assert_eq!(
        Value::Object(properties),
        json!({
            "properties": {"collection": "cmip6"},
            "license": "CC-BY-4.0",
            "model": "ukesm",
            "variable": "tas",
            "start": "2021-06-08T00:00:00",
        })
    );
}

#[test]
fn test_override_appends_plugin_entry() {
    let tree = setup_tree();

    let mut resolver = ConfigResolver::new();
    resolver.push_file(&tree.path("pipeline.yaml")).unwrap();
    resolver
        .push_override_str("extractors=[{name: regex, regex: '^(?P<whole>.*)$'}]")
        .unwrap();
    let config = resolver.resolve().unwrap();

    // Sequences union, so both regex entries are loaded in order.
    let loader = PluginLoader::new(HandlerRegistry::new(
        PluginCatalog::global(),
        PluginCategory::EXTRACTORS,
    ));
    let plugins = loader.load(config.as_map(), "extractors").unwrap();
    assert_eq!(plugins.len(), 2);

    let mut properties = Map::new();
    for plugin in &plugins {
        plugin.process("/x", &mut properties).unwrap();
    }
    assert_eq!(Value::Object(properties), json!({"whole": "/x"}));
}

#[test]
fn test_bad_entry_is_logged_and_skipped() {
    let tree = ConfigTree::new();
    let file = tree.write(
        "pipeline.yaml",
        r#"
extractors:
  - name: regex
    regex: "(unclosed"
  - name: regex
    regex: "^(?P<all>.+)$"
"#,
    );

    let mut resolver = ConfigResolver::new();
    resolver.push_file(&file).unwrap();
    let config = resolver.resolve().unwrap();

    let loader = PluginLoader::new(HandlerRegistry::new(
        PluginCatalog::global(),
        PluginCategory::EXTRACTORS,
    ));
    let (plugins, logs) = capture_logs(|| loader.load(config.as_map(), "extractors"));

    assert_eq!(plugins.unwrap().len(), 1);
    let failures = logs.lines_containing("Failed to load plugin");
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("regex"));
}
