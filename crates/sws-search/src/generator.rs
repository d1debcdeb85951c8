use indexmap::IndexSet;
use sws_core::SwsError;
use sws_graph::{GraphConfig, StateGraph};
use sws_pattern::Siteswap;
use tracing::info;

use crate::config::PeriodRange;
use crate::enumerate::{CycleEnumerator, EnumerationStats};

/// Patterns de-duplicated by canonical form, kept in discovery order.
pub type PatternSet = IndexSet<Siteswap>;

/// Outcome of a multi-period run.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// Unique patterns across every period.
    pub patterns: PatternSet,
    /// Per-period counters, in period order.
    pub stats: Vec<EnumerationStats>,
}

/// Owns the state graph for one (balls, max height) pair and runs searches
/// over it.
#[derive(Debug, Clone)]
pub struct Generator {
    graph: StateGraph,
}

impl Generator {
    /// Builds the state graph for `config`.
    pub fn new(config: GraphConfig) -> Result<Self, SwsError> {
        Ok(Self {
            graph: StateGraph::build(config)?,
        })
    }

    /// Wraps an existing graph.
    pub fn from_graph(graph: StateGraph) -> Self {
        Self { graph }
    }

    /// The graph searched by this generator.
    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    /// Lazily yields the patterns of exactly `period` throws.
    pub fn enumerate(&self, period: usize) -> Result<CycleEnumerator<'_>, SwsError> {
        CycleEnumerator::new(&self.graph, period)
    }

    /// Adds every pattern of `period` throws to `patterns`.
    pub fn generate_period(
        &self,
        period: usize,
        patterns: &mut PatternSet,
    ) -> Result<EnumerationStats, SwsError> {
        let mut cycles = self.enumerate(period)?;
        let before = patterns.len();
        patterns.extend(cycles.by_ref());
        let stats = cycles.stats();
        info!(
            period,
            witnesses = stats.witnesses,
            emitted = stats.emitted,
            new = patterns.len() - before,
            "enumerated period"
        );
        Ok(stats)
    }

    /// Enumerates every period in `periods`. The set is only returned once
    /// the whole range has been searched.
    pub fn generate(&self, periods: PeriodRange) -> Result<Generation, SwsError> {
        periods.validate()?;
        let mut generation = Generation::default();
        for period in periods.iter() {
            let stats = self.generate_period(period, &mut generation.patterns)?;
            generation.stats.push(stats);
        }
        info!(
            from = periods.from,
            to = periods.to,
            unique = generation.patterns.len(),
            "generation finished"
        );
        Ok(generation)
    }
}
