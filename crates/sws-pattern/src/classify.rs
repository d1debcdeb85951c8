use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sws_core::errors::{ErrorInfo, SwsError};
use sws_core::Throw;

use crate::siteswap::Siteswap;
use crate::validity;

/// Throws at or above this height count as "high".
const HIGH_THROW: Throw = 4;

impl Siteswap {
    /// Some 1 is immediately followed by a high throw.
    pub fn is_interesting_1(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        let throws = self.throws();
        let len = throws.len();
        (0..len).any(|idx| throws[idx] == 1 && throws[(idx + 1) % len] >= HIGH_THROW)
    }

    /// Every high throw is immediately preceded by a 1.
    pub fn is_interesting_2(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        let throws = self.throws();
        let len = throws.len();
        (0..len).all(|idx| throws[idx] < HIGH_THROW || throws[(idx + len - 1) % len] == 1)
    }

    /// The pattern juggled backwards is also valid.
    pub fn is_reverse_valid(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        let reversed: Vec<Throw> = self.throws().iter().rev().copied().collect();
        validity::is_valid(&reversed)
    }

    /// Nikolaj Beluhov's class: odd period not divisible by three, no 1s,
    /// every throw above 2 coprime with the period, and few 0s and 2s.
    pub fn is_interesting_nikolaj(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        let len = self.period();
        if len % 2 == 0 || len % 3 == 0 || self.contains(1) {
            return false;
        }
        let period = len as u64;
        if self
            .throws()
            .iter()
            .any(|&height| height > 2 && gcd(u64::from(height), period) != 1)
        {
            return false;
        }
        let low = self
            .throws()
            .iter()
            .filter(|&&height| height == 0 || height == 2)
            .count();
        if len < 6 {
            low < 2
        } else {
            low < 3
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Named predicate selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classifier {
    /// [`Siteswap::is_interesting_1`].
    #[serde(rename = "i1")]
    Interesting1,
    /// [`Siteswap::is_interesting_2`].
    #[serde(rename = "i2")]
    Interesting2,
    /// [`Siteswap::is_interesting_nikolaj`].
    #[serde(rename = "nikolaj")]
    Nikolaj,
    /// [`Siteswap::is_reverse_valid`].
    #[serde(rename = "reverse")]
    ReverseValid,
}

impl Classifier {
    /// Every classifier, in the order they are listed to users.
    pub const ALL: [Classifier; 4] = [
        Classifier::Interesting1,
        Classifier::Interesting2,
        Classifier::Nikolaj,
        Classifier::ReverseValid,
    ];

    /// Short name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Classifier::Interesting1 => "i1",
            Classifier::Interesting2 => "i2",
            Classifier::Nikolaj => "nikolaj",
            Classifier::ReverseValid => "reverse",
        }
    }

    /// Applies the predicate.
    pub fn matches(&self, siteswap: &Siteswap) -> bool {
        match self {
            Classifier::Interesting1 => siteswap.is_interesting_1(),
            Classifier::Interesting2 => siteswap.is_interesting_2(),
            Classifier::Nikolaj => siteswap.is_interesting_nikolaj(),
            Classifier::ReverseValid => siteswap.is_reverse_valid(),
        }
    }
}

impl FromStr for Classifier {
    type Err = SwsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Classifier::ALL
            .into_iter()
            .find(|classifier| classifier.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                let known: Vec<&str> = Classifier::ALL.iter().map(Classifier::name).collect();
                SwsError::Config(
                    ErrorInfo::new("unknown-classifier", "no classifier with this name")
                        .with_context("name", name)
                        .with_hint(format!("expected one of: {}", known.join(", "))),
                )
            })
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::gcd;

    #[test]
    fn gcd_handles_coprime_and_shared_factors() {
        assert_eq!(gcd(7, 5), 1);
        assert_eq!(gcd(9, 6), 3);
        assert_eq!(gcd(5, 5), 5);
    }
}
