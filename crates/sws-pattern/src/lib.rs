#![deny(missing_docs)]
#![doc = "Vanilla siteswap values: canonical form, validity, classification and line filtering."]

/// Minimal-period reduction and canonical rotation.
pub mod canonical;
/// Named classification predicates.
pub mod classify;
/// Line filter applying a classifier to text input.
pub mod filter;
/// Canonical hashing of pattern sets.
pub mod hash;
/// The siteswap value type.
pub mod siteswap;
/// Landing-collision validity test.
pub mod validity;

pub use canonical::{minimal_period, normalize};
pub use classify::Classifier;
pub use filter::{filter_file, filter_lines, FilterSummary};
pub use hash::pattern_set_hash;
pub use siteswap::Siteswap;
pub use validity::{ball_count, is_valid};
