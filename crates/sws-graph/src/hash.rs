use sha2::{Digest, Sha256};

use crate::config::GraphConfig;
use crate::graph::StateGraph;

/// Computes the canonical structural hash for the provided graph.
pub fn canonical_hash(graph: &StateGraph) -> String {
    let mut hasher = Sha256::new();
    encode_config(graph.config(), &mut hasher);
    hasher.update(graph.root().as_raw().to_le_bytes());

    let table = graph.edge_table();
    hasher.update((table.len() as u64).to_le_bytes());
    for (node, children) in table {
        hasher.update(node.as_raw().to_le_bytes());
        hasher.update((children.len() as u64).to_le_bytes());
        for edge in children {
            hasher.update(edge.throw.to_le_bytes());
            hasher.update(edge.target.as_raw().to_le_bytes());
        }
    }

    format!("{:x}", hasher.finalize())
}

fn encode_config(config: &GraphConfig, hasher: &mut Sha256) {
    hasher.update(b"balls");
    hasher.update(config.balls.to_le_bytes());
    hasher.update(b"max-height");
    hasher.update(config.max_height.to_le_bytes());
    hasher.update(config.schema_version.major.to_le_bytes());
    hasher.update(config.schema_version.minor.to_le_bytes());
    hasher.update(config.schema_version.patch.to_le_bytes());
}
