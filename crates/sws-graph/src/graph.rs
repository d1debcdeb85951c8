use std::collections::{BTreeMap, VecDeque};
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use sws_core::errors::{ErrorInfo, SwsError};
use sws_core::Throw;
use tracing::{debug, trace};

use crate::config::GraphConfig;
use crate::state::State;

/// Throw-labelled edge leaving a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Height of the throw made on the current beat (0 when no ball lands).
    pub throw: Throw,
    /// State reached one beat later.
    pub target: State,
}

/// Immutable graph of juggling states reachable from the ground state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateGraph {
    config: GraphConfig,
    root: State,
    edges: BTreeMap<State, Vec<Transition>>,
}

impl StateGraph {
    /// Builds the closure of states reachable from the ground state.
    pub fn build(config: GraphConfig) -> Result<Self, SwsError> {
        config.validate()?;
        let root = State::ground(config.balls);
        let mut edges = BTreeMap::new();
        let mut pending = VecDeque::from([root]);

        while let Some(node) = pending.pop_front() {
            if edges.contains_key(&node) {
                continue;
            }
            let children = transitions(node, config.max_height);
            for child in &children {
                if !edges.contains_key(&child.target) {
                    pending.push_back(child.target);
                }
            }
            edges.insert(node, children);
        }

        let graph = Self {
            config,
            root,
            edges,
        };
        debug!(
            balls = config.balls,
            max_height = config.max_height,
            nodes = graph.len(),
            edges = graph.edge_count(),
            "constructed state graph"
        );
        trace!(graph = %graph.render(), "state graph");
        Ok(graph)
    }

    /// Shorthand for [`StateGraph::build`] with a fresh [`GraphConfig`].
    pub fn with_balls(balls: Throw, max_height: Throw) -> Result<Self, SwsError> {
        Self::build(GraphConfig::new(balls, max_height))
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns the ground state the graph was grown from.
    pub fn root(&self) -> State {
        self.root
    }

    /// Number of states in the graph.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the graph holds no states.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of transitions.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Iterates over every state in ascending raw order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = State> + '_ {
        self.edges.keys().copied()
    }

    /// Returns whether `state` belongs to the graph.
    pub fn contains(&self, state: State) -> bool {
        self.edges.contains_key(&state)
    }

    /// Returns the transitions leaving `state`, ordered by ascending throw.
    pub fn children(&self, state: State) -> Result<&[Transition], SwsError> {
        self.edges
            .get(&state)
            .map(Vec::as_slice)
            .ok_or_else(|| self.unknown_state(state))
    }

    /// Returns the child following `after` in throw order, or the first child
    /// when `after` is `None`. Yields `None` past the last child or when
    /// `after` is not a child of `state`.
    pub fn next_child(&self, state: State, after: Option<State>) -> Result<Option<State>, SwsError> {
        let children = self.children(state)?;
        let next = match after {
            None => children.first(),
            Some(current) => children
                .iter()
                .position(|edge| edge.target == current)
                .and_then(|idx| children.get(idx + 1)),
        };
        Ok(next.map(|edge| edge.target))
    }

    /// Returns the throw labelling the edge `from -> to`, or `None` when the
    /// states are not connected.
    pub fn label(&self, from: State, to: State) -> Result<Option<Throw>, SwsError> {
        Ok(self
            .children(from)?
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.throw))
    }

    /// Renders a state as its `x`/`0` string over the configured height.
    pub fn render_state(&self, state: State) -> String {
        state.render(self.config.max_height)
    }

    /// Renders every state followed by its labelled children, one per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (node, children) in &self.edges {
            out.push_str(&self.render_state(*node));
            for edge in children {
                let _ = write!(out, " {}: {}", edge.throw, self.render_state(edge.target));
            }
            out.push('\n');
        }
        out
    }

    pub(crate) fn edge_table(&self) -> &BTreeMap<State, Vec<Transition>> {
        &self.edges
    }

    fn unknown_state(&self, state: State) -> SwsError {
        SwsError::Graph(
            ErrorInfo::new("unknown-state", "state is not part of the graph")
                .with_context("state", self.render_state(state))
                .with_context("balls", self.config.balls.to_string())
                .with_context("max_height", self.config.max_height.to_string()),
        )
    }
}

/// Computes the ordered transitions leaving `state`.
fn transitions(state: State, max_height: Throw) -> Vec<Transition> {
    let shifted = state.shift_left();
    if !state.must_throw() {
        return vec![Transition {
            throw: 0,
            target: shifted,
        }];
    }
    (1..=max_height)
        .filter(|&height| !shifted.is_set(height))
        .map(|height| Transition {
            throw: height,
            target: shifted.set(height),
        })
        .collect()
}
