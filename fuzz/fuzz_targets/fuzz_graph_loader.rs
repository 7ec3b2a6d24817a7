//! Fuzz target for the JSON graph loader.
//!
//! Feeds arbitrary bytes to the loader to find panics in document parsing
//! (untagged layouts, flattened payloads, duplicate IDs).
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_loader
//! ```

#![no_main]

use hopfinder_core::graph::loader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(graph) = loader::from_json_reader::<serde_json::Value, _>(data, 0) else {
        return;
    };

    // Loaded graphs must be internally consistent
    assert_eq!(graph.node_ids().len(), graph.node_count());
    for (from, to) in graph.dangling_references() {
        assert!(graph.contains(from));
        assert!(!graph.contains(to));
    }
});
