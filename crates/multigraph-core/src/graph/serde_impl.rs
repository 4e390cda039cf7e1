//! Serde support: a graph serializes as its node list plus its edge triples.
//!
//! ```json
//! { "nodes": ["A", "B"], "edges": [{ "from": "A", "to": "B", "weight": 3 }] }
//! ```
//!
//! Deserialization replays `insert_node` / `insert_edge`, so an edge naming a
//! node missing from `nodes` is rejected and duplicate triples collapse.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;

use super::container::Graph;
use super::types::{EdgeRef, EdgeValue};

#[derive(Serialize)]
struct SnapshotRef<'a, N, E> {
    nodes: Vec<&'a N>,
    edges: Vec<EdgeRef<'a, N, E>>,
}

#[derive(Deserialize)]
struct Snapshot<N, E> {
    #[serde(default = "Vec::new")]
    nodes: Vec<N>,
    #[serde(default = "Vec::new")]
    edges: Vec<EdgeValue<N, E>>,
}

impl<N: Serialize, E: Serialize> Serialize for Graph<N, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        SnapshotRef {
            nodes: self.nodes.iter().collect(),
            edges: self.iter().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de, N, E> Deserialize<'de> for Graph<N, E>
where
    N: Ord + fmt::Debug + Deserialize<'de>,
    E: Ord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let snapshot = Snapshot::<N, E>::deserialize(deserializer)?;
        Self::from_snapshot(snapshot).map_err(D::Error::custom)
    }
}

impl<N: Ord + fmt::Debug, E: Ord> Graph<N, E> {
    fn from_snapshot(snapshot: Snapshot<N, E>) -> Result<Self> {
        let mut graph: Self = snapshot.nodes.into_iter().collect();
        for edge in snapshot.edges {
            graph.insert_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}
