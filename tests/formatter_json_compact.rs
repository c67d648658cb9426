use modgraph::core::{DependencyGraph, Node};
use modgraph::formatters::{GraphFormatter, JsonCompactFormatter};
use serde_json::Value;

#[test]
fn json_compact_formatter_outputs_valid_json() {
    let graph: DependencyGraph = vec![
        Node::new("Main").with_dependency("Html").with_dependency("Page"),
        Node::new("Page").with_dependency("Html"),
    ]
    .into_iter()
    .collect();

    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("graph.json");

    JsonCompactFormatter::new()
        .format_to_file(&graph, &path)
        .unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let v: Value = serde_json::from_str(&data).unwrap();

    assert_eq!(v["meta"]["modules"].as_u64().unwrap(), 2);
    assert_eq!(v["meta"]["edges"].as_u64().unwrap(), 3);
    assert!(v["modules"].is_array());

    let main = &v["modules"][0];
    assert_eq!(main["id"], "Main");
    assert_eq!(main["dependencies"], serde_json::json!(["Html", "Page"]));
}

#[test]
fn pretty_output_parses_to_the_same_value() {
    let graph: DependencyGraph = vec![Node::new("A").with_dependency("B")].into_iter().collect();

    let compact = JsonCompactFormatter::new().format_graph(&graph).unwrap();
    let pretty = JsonCompactFormatter::new()
        .with_pretty(true)
        .format_graph(&graph)
        .unwrap();

    assert_eq!(compact.lines().count(), 1);
    assert!(pretty.lines().count() > 1);
    let a: Value = serde_json::from_str(&compact).unwrap();
    let b: Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
}
