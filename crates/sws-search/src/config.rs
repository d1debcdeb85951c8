use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sws_core::errors::{ErrorInfo, SwsError};
use sws_core::{Throw, MAX_ENCODABLE};
use sws_graph::GraphConfig;

/// Inclusive range of periods to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    /// Shortest period searched.
    pub from: usize,
    /// Longest period searched.
    pub to: usize,
}

impl PeriodRange {
    /// Creates a range covering `from..=to`.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Range holding a single period.
    pub fn single(period: usize) -> Self {
        Self::new(period, period)
    }

    /// Requires `1 <= from <= to`.
    pub fn validate(&self) -> Result<(), SwsError> {
        if self.from == 0 || self.from > self.to {
            return Err(SwsError::Config(
                ErrorInfo::new("period-range", "periods must satisfy 1 <= from <= to")
                    .with_context("from", self.from.to_string())
                    .with_context("to", self.to.to_string()),
            ));
        }
        Ok(())
    }

    /// Iterates over the periods in ascending order.
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.from..=self.to
    }
}

/// Parameters of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Number of balls juggled.
    pub balls: Throw,
    /// Largest permitted throw height.
    pub max_height: Throw,
    /// Periods to enumerate.
    pub periods: PeriodRange,
    /// Optional JSON report destination.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

impl GenerateConfig {
    /// Creates a configuration without a report destination.
    pub fn new(balls: Throw, max_height: Throw, periods: PeriodRange) -> Self {
        Self {
            balls,
            max_height,
            periods,
            report: None,
        }
    }

    /// Graph parameters for this run.
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig::new(self.balls, self.max_height)
    }

    /// Checks graph bounds, the period range, and that every throw the run
    /// can produce has a notation character.
    pub fn validate(&self) -> Result<(), SwsError> {
        self.graph_config().validate()?;
        self.periods.validate()?;
        if self.max_height > MAX_ENCODABLE {
            return Err(SwsError::Config(
                ErrorInfo::new("height-out-of-range", "results could not be written as notation")
                    .with_context("max_height", self.max_height.to_string())
                    .with_hint(format!("use a maximum height of at most {MAX_ENCODABLE}")),
            ));
        }
        Ok(())
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, SwsError> {
        let config: Self = serde_yaml::from_str(text)
            .map_err(|err| SwsError::Serde(ErrorInfo::new("config-parse", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }
}

/// Loads and validates a generation configuration from a YAML file.
pub fn load_config(path: &Path) -> Result<GenerateConfig, SwsError> {
    let text = fs::read_to_string(path).map_err(|err| {
        SwsError::Io(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    GenerateConfig::from_yaml_str(&text)
}
