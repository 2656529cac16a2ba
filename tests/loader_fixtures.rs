//! Loading fixture trees from disk and rendering them

use quoteviz::quoteviz::loader::{InputFormat, NodeLoader};
use quoteviz::{analyze, tree_to_string, StatsRecord, VizError};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_json_fixture_stats() {
    let node = NodeLoader::from_path(fixture("def_add.json"))
        .unwrap()
        .load()
        .unwrap();

    // line metadata is never walked, so it does not change the counts
    assert_eq!(
        analyze(&node),
        StatsRecord {
            total_nodes: 10,
            max_depth: 5,
            function_calls: 3,
            variables: 4,
            literals: 1,
        }
    );
}

#[test]
fn test_json_fixture_opens_metadata_once() {
    let node = NodeLoader::from_path(fixture("def_add.json"))
        .unwrap()
        .load()
        .unwrap();
    let rendered = tree_to_string(&node);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[1], "├── :def");
    // the keyword list holds a pair and is opened, the flat pair itself is not
    assert_eq!(lines[2], "├── [{:line, 1}]");
    assert_eq!(lines[3], "│   └── {:line, 1}");
    assert!(lines[4].starts_with("└── [{:add, [{:line, 1}], "));
}

#[test]
fn test_yaml_fixture() {
    let node = NodeLoader::from_path(fixture("greeting.yaml"))
        .unwrap()
        .load()
        .unwrap();

    insta::assert_snapshot!(tree_to_string(&node), @r###"
    {{:., [], [{:__aliases__, [], [:IO]}, :puts]}, [], ["hello"]}
    ├── {:., [], [{:__aliases__, [], [:IO]}, :puts]}
    │   ├── :.
    │   ├── []
    │   └── [{:__aliases__, [], [:IO]}, :puts]
    │       ├── {:__aliases__, [], [:IO]}
    │       │   ├── :__aliases__
    │       │   ├── []
    │       │   └── [:IO]
    │       └── :puts
    ├── []
    └── ["hello"]
    "###);

    assert_eq!(
        analyze(&node),
        StatsRecord {
            total_nodes: 8,
            max_depth: 4,
            function_calls: 2,
            variables: 0,
            literals: 3,
        }
    );
}

#[test]
fn test_same_tree_from_both_encodings() {
    let json = NodeLoader::from_string(
        r#"{"tuple": [{"atom": "x"}, [], null]}"#,
        InputFormat::Json,
    )
    .load()
    .unwrap();
    let yaml = NodeLoader::from_string("tuple: [{atom: x}, [], null]", InputFormat::Yaml)
        .load()
        .unwrap();
    assert_eq!(json, yaml);
    assert_eq!(analyze(&json).variables, 1);
}

#[test]
fn test_unsupported_extension() {
    let result = NodeLoader::from_path(fixture("missing.txt"));
    assert!(matches!(result, Err(VizError::UnsupportedInput(_))));
}
