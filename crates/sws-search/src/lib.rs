#![deny(missing_docs)]

//! Cycle search over juggling state graphs.
//!
//! Every closed walk of length `p` in a [`StateGraph`](sws_graph::StateGraph)
//! spells a siteswap of period `p`. [`CycleEnumerator`] walks the graph in
//! throw order from every state and yields the patterns whose own minimal
//! period is `p`; [`Generator`] collects them across a range of periods into a
//! de-duplicated [`PatternSet`].

/// Generation parameters and YAML loading.
pub mod config;
/// Ordered fixed-length walk search.
pub mod enumerate;
/// Multi-period collection.
pub mod generator;
/// Run report assembly.
pub mod report;

pub use config::{load_config, GenerateConfig, PeriodRange};
pub use enumerate::{CycleEnumerator, EnumerationStats};
pub use generator::{Generation, Generator, PatternSet};
pub use report::GenerationReport;
