use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sws_core::errors::{ErrorInfo, SwsError};
use sws_core::provenance::{RunProvenance, SchemaVersion};
use sws_graph::{canonical_hash, GraphConfig};
use sws_pattern::{pattern_set_hash, Siteswap};

use crate::config::PeriodRange;
use crate::enumerate::EnumerationStats;
use crate::generator::{Generation, Generator};

/// JSON summary of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Graph parameters.
    pub graph: GraphConfig,
    /// Number of states in the graph.
    pub graph_nodes: usize,
    /// Number of transitions in the graph.
    pub graph_edges: usize,
    /// Periods searched.
    pub periods: PeriodRange,
    /// Counters per period.
    pub per_period: Vec<EnumerationStats>,
    /// Number of distinct patterns found.
    pub unique_patterns: usize,
    /// Distinct patterns in discovery order.
    pub patterns: Vec<Siteswap>,
    /// Hashes and tool versions.
    pub provenance: RunProvenance,
}

impl GenerationReport {
    /// Summarises `generation`, produced by `generator` over `periods`.
    pub fn build(generator: &Generator, periods: PeriodRange, generation: &Generation) -> Self {
        let graph = generator.graph();
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        Self {
            schema_version: SchemaVersion::new(1, 0, 0),
            graph: *graph.config(),
            graph_nodes: graph.len(),
            graph_edges: graph.edge_count(),
            periods,
            per_period: generation.stats.clone(),
            unique_patterns: generation.patterns.len(),
            patterns: generation.patterns.iter().cloned().collect(),
            provenance: RunProvenance {
                graph_hash: canonical_hash(graph),
                pattern_hash: pattern_set_hash(&generation.patterns),
                tool_versions,
            },
        }
    }

    /// Serializes the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, SwsError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| SwsError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
    }

    /// Writes the report to `path`.
    pub fn write(&self, path: &Path) -> Result<(), SwsError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|err| {
            SwsError::Io(
                ErrorInfo::new("write-output", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
