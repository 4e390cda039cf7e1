//! Fuzz target for graph deserialization.
//!
//! Feeds arbitrary bytes to the JSON decoder; any graph that decodes must
//! re-encode and decode to an equal graph.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_json
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use multigraph_core::Graph;

fuzz_target!(|data: &[u8]| {
    let Ok(graph) = serde_json::from_slice::<Graph<String, i64>>(data) else {
        return;
    };

    let encoded = serde_json::to_vec(&graph).expect("encode decoded graph");
    let decoded: Graph<String, i64> =
        serde_json::from_slice(&encoded).expect("decode re-encoded graph");
    assert_eq!(decoded, graph);
    let _ = graph.to_string();
});
