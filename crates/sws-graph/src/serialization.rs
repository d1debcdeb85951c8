use serde::{Deserialize, Serialize};
use sws_core::errors::{ErrorInfo, SwsError};
use sws_core::Throw;

use crate::config::GraphConfig;
use crate::graph::StateGraph;
use crate::state::State;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &StateGraph) -> Result<Vec<u8>, SwsError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| SwsError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<StateGraph, SwsError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| SwsError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &StateGraph) -> Result<String, SwsError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| SwsError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<StateGraph, SwsError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| SwsError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    config: GraphConfig,
    root: u64,
    nodes: Vec<SerializableNode>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableNode {
    state: u64,
    children: Vec<(Throw, u64)>,
}

impl SerializableGraph {
    fn from_graph(graph: &StateGraph) -> Self {
        let nodes = graph
            .edge_table()
            .iter()
            .map(|(node, children)| SerializableNode {
                state: node.as_raw(),
                children: children
                    .iter()
                    .map(|edge| (edge.throw, edge.target.as_raw()))
                    .collect(),
            })
            .collect();
        Self {
            config: *graph.config(),
            root: graph.root().as_raw(),
            nodes,
        }
    }

    /// Rebuilds the graph from its configuration and rejects payloads whose
    /// stored edges disagree with the rebuilt closure.
    fn into_graph(self) -> Result<StateGraph, SwsError> {
        let graph = StateGraph::build(self.config)?;
        if graph.root().as_raw() != self.root || graph.len() != self.nodes.len() {
            return Err(SwsError::Serde(mismatch(
                "node set differs from the rebuilt graph",
            )));
        }
        if self.nodes.windows(2).any(|pair| pair[0].state >= pair[1].state) {
            return Err(SwsError::Serde(mismatch(
                "node states are not strictly ascending",
            )));
        }
        for node in &self.nodes {
            let children = graph
                .children(State::from_raw(node.state))
                .map_err(|_| SwsError::Serde(mismatch("payload contains an unreachable state")))?;
            let same = children.len() == node.children.len()
                && children
                    .iter()
                    .zip(&node.children)
                    .all(|(edge, &(throw, target))| {
                        edge.throw == throw && edge.target.as_raw() == target
                    });
            if !same {
                return Err(SwsError::Serde(
                    mismatch("transition list differs from the rebuilt graph")
                        .with_context("state", graph.render_state(State::from_raw(node.state))),
                ));
            }
        }
        Ok(graph)
    }
}

fn mismatch(message: &str) -> ErrorInfo {
    ErrorInfo::new("graph-mismatch", message)
}
