use std::fmt;

use serde::{Deserialize, Serialize};
use sws_core::Throw;

/// Largest maximum throw height a [`State`] can describe.
pub const MAX_HEIGHT: Throw = u64::BITS;

/// Bit-vector juggling state.
///
/// Position `p` (1-indexed) is stored in bit `p - 1` and is set when a ball is
/// scheduled to land `p` beats from now. Position 0 is the current beat and is
/// never stored.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct State(u64);

impl State {
    /// State with no ball in the air.
    pub const EMPTY: State = State(0);

    /// Creates a state from its raw bit representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw bit representation.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Ground state with positions `1..=balls` occupied.
    pub fn ground(balls: Throw) -> Self {
        (1..=balls.min(MAX_HEIGHT)).fold(Self::EMPTY, |state, position| state.set(position))
    }

    /// Returns whether a ball lands `position` beats from now.
    pub fn is_set(self, position: Throw) -> bool {
        mask(position).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Returns the state with `position` occupied.
    pub fn set(self, position: Throw) -> Self {
        match mask(position) {
            Some(bit) => Self(self.0 | bit),
            None => self,
        }
    }

    /// Advances time by one beat: position 1 drops out and every other
    /// position moves one closer.
    pub fn shift_left(self) -> Self {
        Self(self.0 >> 1)
    }

    /// Returns whether a ball must be thrown on the current beat.
    pub fn must_throw(self) -> bool {
        self.is_set(1)
    }

    /// Number of balls in the air.
    pub fn balls(self) -> u32 {
        self.0.count_ones()
    }

    /// Renders positions `1..=max_height` as `x` (occupied) or `0` (free).
    pub fn render(self, max_height: Throw) -> String {
        (1..=max_height)
            .map(|position| if self.is_set(position) { 'x' } else { '0' })
            .collect()
    }
}

fn mask(position: Throw) -> Option<u64> {
    if position == 0 {
        return None;
    }
    1u64.checked_shl(position - 1)
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State({:#b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_state_fills_lowest_positions() {
        let ground = State::ground(3);
        assert_eq!(ground.as_raw(), 0b111);
        assert_eq!(ground.render(5), "xxx00");
        assert!(ground.must_throw());
    }

    #[test]
    fn shift_drops_the_current_beat() {
        let state = State::EMPTY.set(1).set(3).set(4);
        assert_eq!(state.render(5), "x0xx0");
        assert_eq!(state.shift_left().render(5), "0xx00");
        assert!(!state.shift_left().must_throw());
    }

    #[test]
    fn out_of_range_positions_are_ignored() {
        let state = State::EMPTY.set(0).set(MAX_HEIGHT + 1);
        assert_eq!(state, State::EMPTY);
        assert!(!state.is_set(0));
        assert!(State::EMPTY.set(MAX_HEIGHT).is_set(MAX_HEIGHT));
        assert_eq!(State::ground(MAX_HEIGHT).balls(), MAX_HEIGHT);
    }
}
