use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sws_core::{notation, SwsError, Throw};

use crate::canonical::normalize;
use crate::validity;

/// A throw sequence together with its canonical form.
///
/// Equality and hashing follow the canonical form: rotations and repetitions
/// of one pattern are equal. Every invalid sequence (including text that
/// failed to decode) belongs to a single equivalence class, so a set keeps at
/// most one invalid entry.
#[derive(Debug, Clone)]
pub struct Siteswap {
    raw: Option<Vec<Throw>>,
    canonical: Vec<Throw>,
}

impl Siteswap {
    /// Wraps a raw throw sequence.
    pub fn new(throws: Vec<Throw>) -> Self {
        let canonical = normalize(&throws);
        Self {
            raw: Some(throws),
            canonical,
        }
    }

    /// Decodes siteswap notation. Undecodable text yields an invalid value
    /// instead of an error; use [`str::parse`] to observe the failure.
    pub fn parse(text: &str) -> Self {
        text.parse().unwrap_or_else(|_| Self::undecodable())
    }

    fn undecodable() -> Self {
        Self {
            raw: None,
            canonical: Vec::new(),
        }
    }

    /// The sequence as supplied, or `None` when the notation did not decode.
    pub fn raw(&self) -> Option<&[Throw]> {
        self.raw.as_deref()
    }

    /// Canonical sequence: minimal block, maximal rotation.
    pub fn throws(&self) -> &[Throw] {
        &self.canonical
    }

    /// Length of the canonical block.
    pub fn period(&self) -> usize {
        self.canonical.len()
    }

    /// Returns whether the pattern can be juggled.
    pub fn is_valid(&self) -> bool {
        validity::is_valid(&self.canonical)
    }

    /// Number of balls, when valid.
    pub fn balls(&self) -> Option<Throw> {
        validity::ball_count(&self.canonical)
    }

    /// Returns whether any throw has the given height.
    pub fn contains(&self, height: Throw) -> bool {
        self.canonical.contains(&height)
    }

    /// Canonical notation string. `None` for invalid patterns and for
    /// patterns with a throw above the single-character alphabet.
    pub fn notation(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        notation::encode(&self.canonical).ok()
    }
}

impl From<Vec<Throw>> for Siteswap {
    fn from(throws: Vec<Throw>) -> Self {
        Self::new(throws)
    }
}

impl From<&[Throw]> for Siteswap {
    fn from(throws: &[Throw]) -> Self {
        Self::new(throws.to_vec())
    }
}

impl FromStr for Siteswap {
    type Err = SwsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        notation::decode(text).map(Self::new)
    }
}

impl PartialEq for Siteswap {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            (false, false) => true,
            (true, true) => self.canonical == other.canonical,
            _ => false,
        }
    }
}

impl Eq for Siteswap {}

impl Hash for Siteswap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let valid = self.is_valid();
        valid.hash(state);
        if valid {
            self.canonical.hash(state);
        }
    }
}

/// Writes the canonical notation; invalid or unencodable patterns render as
/// the empty string.
impl fmt::Display for Siteswap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation().unwrap_or_default())
    }
}

impl Serialize for Siteswap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_valid() {
            let text = notation::encode(&self.canonical).map_err(serde::ser::Error::custom)?;
            serializer.serialize_str(&text)
        } else {
            serializer.serialize_str("")
        }
    }
}

impl<'de> Deserialize<'de> for Siteswap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NotationVisitor;

        impl de::Visitor<'_> for NotationVisitor {
            type Value = Siteswap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("siteswap notation")
            }

            fn visit_str<E: de::Error>(self, text: &str) -> Result<Siteswap, E> {
                Ok(Siteswap::parse(text))
            }
        }

        deserializer.deserialize_str(NotationVisitor)
    }
}
