use sws_graph::{
    canonical_hash, graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, StateGraph,
};

#[test]
fn json_roundtrip_preserves_structure() {
    let graph = StateGraph::with_balls(3, 6).unwrap();
    let json = graph_to_json(&graph).unwrap();
    let restored = graph_from_json(&json).unwrap();
    assert_eq!(restored, graph);
    assert_eq!(canonical_hash(&restored), canonical_hash(&graph));
}

#[test]
fn bytes_roundtrip_preserves_structure() {
    let graph = StateGraph::with_balls(4, 7).unwrap();
    let bytes = graph_to_bytes(&graph).unwrap();
    let restored = graph_from_bytes(&bytes).unwrap();
    assert_eq!(restored, graph);
}

#[test]
fn tampered_payload_is_rejected() {
    let graph = StateGraph::with_balls(2, 3).unwrap();
    let json = graph_to_json(&graph).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["nodes"][0]["children"][0][0] = serde_json::json!(9);
    let err = graph_from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.info().code, "graph-mismatch");
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = graph_from_json("{not json").unwrap_err();
    assert_eq!(err.info().code, "deserialize-json");
}

#[test]
fn hash_distinguishes_parameters() {
    let a = StateGraph::with_balls(3, 5).unwrap();
    let b = StateGraph::with_balls(3, 6).unwrap();
    let c = StateGraph::with_balls(3, 5).unwrap();
    assert_ne!(canonical_hash(&a), canonical_hash(&b));
    assert_eq!(canonical_hash(&a), canonical_hash(&c));
    assert_eq!(canonical_hash(&a).len(), 64);
}

#[test]
fn duplicated_node_is_rejected() {
    // 2 balls, height 3: nodes xx0, x0x, 0xx. Repeat x0x in place of 0xx.
    let graph = StateGraph::with_balls(2, 3).unwrap();
    let json = graph_to_json(&graph).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let nodes = value["nodes"].as_array_mut().unwrap();
    assert_eq!(nodes.len(), 3);
    nodes[2] = nodes[1].clone();
    let err = graph_from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.info().code, "graph-mismatch");
}
