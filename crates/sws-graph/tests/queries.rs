use sws_core::SwsError;
use sws_graph::{State, StateGraph};

fn state(pattern: &str) -> State {
    pattern
        .chars()
        .enumerate()
        .filter(|(_, c)| *c == 'x')
        .fold(State::EMPTY, |s, (idx, _)| s.set(idx as u32 + 1))
}

#[test]
fn labels_name_the_connecting_throw() {
    let graph = StateGraph::with_balls(3, 5).unwrap();
    let root = graph.root();
    assert_eq!(graph.label(root, root).unwrap(), Some(3));
    assert_eq!(graph.label(root, state("xx0x0")).unwrap(), Some(4));
    assert_eq!(graph.label(root, state("xx00x")).unwrap(), Some(5));
    assert_eq!(graph.label(state("0xxx0"), state("xxx00")).unwrap(), Some(0));
    assert_eq!(graph.label(root, state("0xxx0")).unwrap(), None);
}

#[test]
fn next_child_walks_children_in_throw_order() {
    let graph = StateGraph::with_balls(3, 5).unwrap();
    let root = graph.root();
    let first = graph.next_child(root, None).unwrap();
    assert_eq!(first, Some(root));
    let second = graph.next_child(root, first).unwrap();
    assert_eq!(second, Some(state("xx0x0")));
    let third = graph.next_child(root, second).unwrap();
    assert_eq!(third, Some(state("xx00x")));
    assert_eq!(graph.next_child(root, third).unwrap(), None);
    assert_eq!(graph.next_child(root, Some(state("0xxx0"))).unwrap(), None);
}

#[test]
fn unknown_states_are_errors() {
    let graph = StateGraph::with_balls(2, 4).unwrap();
    let stranger = state("xxx0");
    assert!(!graph.contains(stranger));
    let err = graph.children(stranger).unwrap_err();
    assert!(matches!(&err, SwsError::Graph(info) if info.code == "unknown-state"));
    assert_eq!(err.info().context.get("state").map(String::as_str), Some("xxx0"));
    assert!(graph.label(stranger, graph.root()).is_err());
    assert!(graph.next_child(stranger, None).is_err());
}

#[test]
fn edge_count_matches_children() {
    let graph = StateGraph::with_balls(2, 3).unwrap();
    // xx0 -> {2: xx0, 3: x0x}; x0x -> {1: xx0, 3: 0xx}; 0xx -> {0: xx0}
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 5);
}
