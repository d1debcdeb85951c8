use serde::{Deserialize, Serialize};
use sws_core::errors::{ErrorInfo, SwsError};
use sws_core::Throw;
use sws_graph::{State, StateGraph, Transition};
use sws_pattern::Siteswap;
use tracing::{error, trace};

/// Counters collected while enumerating one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Requested period.
    pub period: usize,
    /// Closed walks found, including those spelling a shorter pattern.
    pub witnesses: u64,
    /// Patterns yielded.
    pub emitted: u64,
    /// Closed walks whose throws failed validation. Always zero for a
    /// correctly built graph.
    pub invalid: u64,
}

/// Lazy search for the siteswaps of one exact period.
///
/// Walks of `period` throws are visited from every state in turn. From each
/// start the walks come in lexicographic throw order, like an odometer: the
/// deepest choice advances first and a choice with no remaining sibling
/// rolls back to its parent. A walk that returns to its start is a cycle.
/// Cycles whose canonical block is shorter than `period` (such as `333`,
/// which is `3` repeated) are counted but not yielded.
#[derive(Debug)]
pub struct CycleEnumerator<'g> {
    graph: &'g StateGraph,
    period: usize,
    roots: Vec<State>,
    next_root: usize,
    path: Vec<State>,
    choices: Vec<usize>,
    throws: Vec<Throw>,
    stats: EnumerationStats,
}

impl<'g> CycleEnumerator<'g> {
    /// Prepares a search for cycles of exactly `period` throws.
    pub fn new(graph: &'g StateGraph, period: usize) -> Result<Self, SwsError> {
        if period == 0 {
            return Err(SwsError::Config(
                ErrorInfo::new("period-range", "period must be at least 1")
                    .with_context("period", "0"),
            ));
        }
        Ok(Self {
            graph,
            period,
            roots: graph.nodes().collect(),
            next_root: 0,
            path: Vec::with_capacity(period + 1),
            choices: Vec::with_capacity(period),
            throws: Vec::with_capacity(period),
            stats: EnumerationStats {
                period,
                ..EnumerationStats::default()
            },
        })
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> EnumerationStats {
        self.stats
    }

    /// Starts a fresh walk at `root` following first children.
    fn descend_from(&mut self, root: State) -> bool {
        trace!(root = %self.graph.render_state(root), "starting from root");
        self.path.clear();
        self.choices.clear();
        self.throws.clear();
        self.path.push(root);
        self.extend()
    }

    /// Follows first children until the walk holds `period + 1` states.
    fn extend(&mut self) -> bool {
        while self.path.len() <= self.period {
            let Some(&last) = self.path.last() else {
                return false;
            };
            let Some(edge) = self.children(last).first().copied() else {
                return false;
            };
            self.push(0, edge.throw, edge.target);
        }
        true
    }

    /// Moves to the next walk in throw order. Returns `false` once every walk
    /// from the current root has been visited.
    fn advance(&mut self) -> bool {
        while self.path.len() >= 2 {
            self.path.pop();
            self.throws.pop();
            let Some(choice) = self.choices.pop() else {
                return false;
            };
            let Some(&parent) = self.path.last() else {
                return false;
            };
            if let Some(edge) = self.children(parent).get(choice + 1).copied() {
                self.push(choice + 1, edge.throw, edge.target);
                return self.extend();
            }
        }
        false
    }

    fn push(&mut self, choice: usize, throw: Throw, target: State) {
        self.choices.push(choice);
        self.throws.push(throw);
        self.path.push(target);
    }

    fn children(&self, state: State) -> &'g [Transition] {
        // Walks only reach states the graph produced.
        self.graph.children(state).unwrap_or(&[])
    }

    /// Turns the current walk into a pattern when it closes and has the
    /// requested minimal period.
    fn candidate(&mut self) -> Option<Siteswap> {
        if self.path.first() != self.path.last() {
            return None;
        }
        self.stats.witnesses += 1;
        let siteswap = Siteswap::new(self.throws.clone());
        if siteswap.period() != self.period {
            return None;
        }
        if !siteswap.is_valid() {
            self.stats.invalid += 1;
            error!(throws = ?self.throws, "enumerated cycle is not a valid siteswap");
            return None;
        }
        self.stats.emitted += 1;
        Some(siteswap)
    }
}

impl Iterator for CycleEnumerator<'_> {
    type Item = Siteswap;

    fn next(&mut self) -> Option<Siteswap> {
        loop {
            let ready = if self.path.is_empty() {
                let root = *self.roots.get(self.next_root)?;
                self.next_root += 1;
                self.descend_from(root)
            } else {
                self.advance()
            };
            if !ready {
                self.path.clear();
                continue;
            }
            if let Some(siteswap) = self.candidate() {
                return Some(siteswap);
            }
        }
    }
}
