//! Tests for JSON graph loading.

use std::io::Write;

use serde::Deserialize;

use super::adjacency::Adjacency;
use super::loader::{from_json_file, from_json_reader, from_json_str};
use super::store::Graph;

#[derive(Debug, Deserialize, PartialEq)]
struct System {
    name: String,
    security: f64,
}

const KEYED: &str = r#"{
    "30002187": {"id": 30002187, "name": "Amarr", "security": 1.0, "connections": [30002188]},
    "30002188": {"id": 30002188, "name": "Sarum Prime", "security": 0.9, "connections": [30002187, 30003493]},
    "30003493": {"id": 30003493, "name": "Youl", "security": -0.2, "connections": [30002188]}
}"#;

#[test]
fn test_load_keyed_document() {
    let graph: Graph<System> = from_json_str(KEYED, 0).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.connections(30002188), &[30002187, 30003493]);
    let youl = graph.payload(30003493).unwrap();
    assert_eq!(youl.name, "Youl");
    assert!(youl.security < 0.0);
}

#[test]
fn test_load_list_document() {
    let json = r#"[
        {"id": 1, "connections": [2], "name": "a", "security": 0.5},
        {"id": 2, "name": "b", "security": 0.4}
    ]"#;
    let graph: Graph<System> = from_json_str(json, 16).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.connections(1), &[2]);
    // Missing connections default to an empty list.
    assert!(graph.connections(2).is_empty());
}

#[test]
fn test_load_untyped_payload() {
    let json = r#"[{"id": 7, "connections": [8], "label": "gate"}]"#;
    let graph: Graph<serde_json::Map<String, serde_json::Value>> = from_json_str(json, 0).unwrap();

    let payload = graph.payload(7).unwrap();
    assert_eq!(payload.get("label").and_then(|v| v.as_str()), Some("gate"));
    assert!(!payload.contains_key("id"));
    assert!(!payload.contains_key("connections"));
}

#[test]
fn test_load_duplicate_ids_last_wins() {
    let json = r#"[
        {"id": 1, "connections": [2], "name": "first", "security": 1.0},
        {"id": 1, "connections": [3], "name": "second", "security": 1.0}
    ]"#;
    let graph: Graph<System> = from_json_str(json, 0).unwrap();

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.connections(1), &[3]);
    assert_eq!(graph.payload(1).unwrap().name, "second");
}

#[test]
fn test_oversized_capacity_hint_bounded_by_document() {
    let graph: Graph<System> = from_json_str(KEYED, usize::MAX).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert!(graph.capacity() < 64, "reserved {}", graph.capacity());

    // A modest hint still pre-sizes past the records.
    let graph: Graph<System> = from_json_str(KEYED, 6).unwrap();
    assert!(graph.capacity() >= 6);
}

#[test]
fn test_load_malformed_json_fails() {
    let result: crate::Result<Graph<System>> = from_json_str("[{\"id\": \"one\"}]", 0);
    assert!(matches!(result, Err(crate::Error::Json(_))));
}

#[test]
fn test_load_from_reader() {
    let graph: Graph<System> = from_json_reader(KEYED.as_bytes(), 0).unwrap();
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(KEYED.as_bytes()).unwrap();

    let graph: Graph<System> = from_json_file(file.path(), 0).unwrap();
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result: crate::Result<Graph<System>> = from_json_file(dir.path().join("absent.json"), 0);
    assert!(matches!(result, Err(crate::Error::Io(_))));
}
