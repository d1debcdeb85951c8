use sha2::{Digest, Sha256};
use sws_core::Throw;

use crate::siteswap::Siteswap;

/// Order-independent hash of the valid patterns in `patterns`.
///
/// Canonical sequences are sorted before hashing so two runs that discover the
/// same set in a different order agree. Invalid entries are ignored.
pub fn pattern_set_hash<'a>(patterns: impl IntoIterator<Item = &'a Siteswap>) -> String {
    let mut sequences: Vec<&[Throw]> = patterns
        .into_iter()
        .filter(|siteswap| siteswap.is_valid())
        .map(Siteswap::throws)
        .collect();
    sequences.sort_unstable();
    sequences.dedup();

    let mut hasher = Sha256::new();
    hasher.update((sequences.len() as u64).to_le_bytes());
    for sequence in sequences {
        hasher.update((sequence.len() as u64).to_le_bytes());
        for height in sequence {
            hasher.update(height.to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}
