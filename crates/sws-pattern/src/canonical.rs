//! A cyclic throw sequence is written many ways: `441`, `414`, `144` and
//! `441441` all describe the same pattern. The canonical form is the shortest
//! repeating block, rotated so that it is lexicographically largest (`441`).

use std::cmp::Ordering;

use sws_core::Throw;

/// Length of the shortest block whose repetition yields `throws`.
///
/// Returns 0 for an empty sequence.
pub fn minimal_period(throws: &[Throw]) -> usize {
    let len = throws.len();
    (1..len)
        .filter(|block| len % block == 0)
        .find(|&block| (block..len).all(|idx| throws[idx] == throws[idx - block]))
        .unwrap_or(len)
}

/// Index of the lexicographically largest rotation of `block`; ties resolve
/// to the lowest index.
pub fn best_rotation(block: &[Throw]) -> usize {
    (1..block.len()).fold(0, |best, shift| {
        if compare_rotations(block, shift, best) == Ordering::Greater {
            shift
        } else {
            best
        }
    })
}

/// Compares `block` rotated left by `lhs` against `block` rotated by `rhs`.
fn compare_rotations(block: &[Throw], lhs: usize, rhs: usize) -> Ordering {
    let len = block.len();
    (0..len)
        .map(|idx| block[(idx + lhs) % len].cmp(&block[(idx + rhs) % len]))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Reduces `throws` to its minimal block and returns that block's maximal
/// rotation.
pub fn normalize(throws: &[Throw]) -> Vec<Throw> {
    let block = &throws[..minimal_period(throws)];
    let shift = best_rotation(block);
    block[shift..].iter().chain(&block[..shift]).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_repetitions() {
        assert_eq!(normalize(&[3, 3, 3]), vec![3]);
        assert_eq!(normalize(&[1, 4, 4, 1, 4, 4]), vec![4, 4, 1]);
    }

    #[test]
    fn period_of_non_repeating_sequence_is_its_length() {
        assert_eq!(minimal_period(&[5, 3, 1]), 3);
        assert_eq!(minimal_period(&[4, 4, 1, 4, 4]), 5);
        assert_eq!(minimal_period(&[]), 0);
    }

    #[test]
    fn rotation_ties_keep_the_first_index() {
        assert_eq!(best_rotation(&[2, 2]), 0);
        assert_eq!(best_rotation(&[1, 5, 1, 5]), 1);
    }

    #[test]
    fn empty_sequence_normalizes_to_empty() {
        assert!(normalize(&[]).is_empty());
    }
}
