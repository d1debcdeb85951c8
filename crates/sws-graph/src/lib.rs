#![deny(missing_docs)]

//! Juggling state graph for vanilla siteswaps.
//!
//! A juggling state records which future beats already have a ball scheduled
//! to land. [`StateGraph::build`] computes every state reachable from the
//! ground state for a ball count and maximum throw height, together with the
//! throw-labelled transitions between them. Transitions out of each state are
//! kept in ascending throw order, which the cycle search relies on.

mod config;
mod graph;
mod hash;
mod serialization;
mod state;

pub use config::GraphConfig;
pub use graph::{StateGraph, Transition};
pub use hash::canonical_hash;
pub use state::{State, MAX_HEIGHT};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
