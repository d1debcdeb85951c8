use serde::{Deserialize, Serialize};
use sws_core::errors::{ErrorInfo, SwsError};
use sws_core::provenance::SchemaVersion;
use sws_core::Throw;

use crate::state::MAX_HEIGHT;

/// Parameters identifying a state graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of balls juggled.
    pub balls: Throw,
    /// Largest permitted throw height.
    pub max_height: Throw,
    /// Schema version stored alongside serialized payloads.
    #[serde(default = "GraphConfig::default_schema")]
    pub schema_version: SchemaVersion,
}

impl GraphConfig {
    /// Creates a configuration for `balls` balls and throws up to `max_height`.
    pub fn new(balls: Throw, max_height: Throw) -> Self {
        Self {
            balls,
            max_height,
            schema_version: Self::default_schema(),
        }
    }

    fn default_schema() -> SchemaVersion {
        SchemaVersion::new(1, 0, 0)
    }

    /// Checks that the ground state fits below the maximum height and that
    /// every position fits in a [`State`](crate::State).
    pub fn validate(&self) -> Result<(), SwsError> {
        if self.max_height == 0 || self.max_height > MAX_HEIGHT {
            return Err(SwsError::Config(
                ErrorInfo::new("height-out-of-range", "maximum throw height is out of range")
                    .with_context("max_height", self.max_height.to_string())
                    .with_hint(format!("use a height between 1 and {MAX_HEIGHT}")),
            ));
        }
        if self.balls == 0 || self.balls > self.max_height {
            return Err(SwsError::Config(
                ErrorInfo::new("balls-out-of-range", "ball count must be between 1 and max_height")
                    .with_context("balls", self.balls.to_string())
                    .with_context("max_height", self.max_height.to_string()),
            ));
        }
        Ok(())
    }
}
