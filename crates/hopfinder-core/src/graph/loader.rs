//! JSON graph loading.
//!
//! Accepts two layouts:
//!
//! - an array of node records: `[{"id": 1, "connections": [2]}, ...]`
//! - an object of node records keyed by any string:
//!   `{"Amarr": {"id": 30002187, "connections": [...], "security": 1.0}}`
//!
//! In the keyed layout the key is ignored; each record's `id` is
//! authoritative. Fields other than `id` and `connections` are flattened
//! into the payload type.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Result;

use super::store::Graph;
use super::types::Node;

#[derive(Deserialize)]
#[serde(untagged)]
#[serde(bound(deserialize = "P: DeserializeOwned"))]
enum GraphDocument<P> {
    List(Vec<Node<P>>),
    Keyed(BTreeMap<String, Node<P>>),
}

impl<P> GraphDocument<P> {
    fn len(&self) -> usize {
        match self {
            Self::List(nodes) => nodes.len(),
            Self::Keyed(nodes) => nodes.len(),
        }
    }

    /// Builds the graph, reserving for the records present plus at most as
    /// many again for later inserts, whatever the hint asks for.
    fn into_graph(self, capacity_hint: usize) -> Graph<P> {
        let records = self.len();
        let reserve = capacity_hint.clamp(records, records.saturating_mul(2));
        let mut graph = Graph::with_capacity(reserve);
        match self {
            Self::List(nodes) => graph.extend(nodes),
            Self::Keyed(nodes) => graph.extend(nodes.into_values()),
        }
        graph
    }
}

/// Parses a graph from a JSON string.
pub fn from_json_str<P: DeserializeOwned>(json: &str, capacity_hint: usize) -> Result<Graph<P>> {
    let document: GraphDocument<P> = serde_json::from_str(json)?;
    Ok(finish(document, capacity_hint))
}

/// Parses a graph from any JSON reader.
pub fn from_json_reader<P: DeserializeOwned, R: Read>(
    reader: R,
    capacity_hint: usize,
) -> Result<Graph<P>> {
    let document: GraphDocument<P> = serde_json::from_reader(reader)?;
    Ok(finish(document, capacity_hint))
}

/// Loads a graph from a JSON file.
pub fn from_json_file<P: DeserializeOwned>(
    path: impl AsRef<Path>,
    capacity_hint: usize,
) -> Result<Graph<P>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), "Loading graph file");
    from_json_reader(BufReader::new(file), capacity_hint)
}

fn finish<P>(document: GraphDocument<P>, capacity_hint: usize) -> Graph<P> {
    let records = document.len();
    let graph = document.into_graph(capacity_hint);
    if graph.node_count() < records {
        tracing::warn!(
            records,
            nodes = graph.node_count(),
            "Duplicate node IDs in graph document, later records replaced earlier ones"
        );
    }
    let dangling = graph.dangling_references().len();
    if dangling > 0 {
        tracing::warn!(dangling, "Graph references unregistered node IDs");
    }
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Graph loaded"
    );
    graph
}
