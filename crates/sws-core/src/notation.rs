//! Single-character alphabet used to write throw heights as text.
//!
//! Heights `0..=9` are written as digits and `10..=35` as the letters `a..=z`.
//! Decoding accepts either letter case; encoding always emits lowercase.
//! Sequences are concatenated without separators, so `[11, 9, 7, 5, 3, 1]`
//! is written `b97531`.

use crate::errors::{ErrorInfo, SwsError};
use crate::Throw;

/// Largest throw height representable by a single character.
pub const MAX_ENCODABLE: Throw = 35;

/// Translates one character into its throw height.
pub fn decode_char(symbol: char) -> Result<Throw, SwsError> {
    symbol
        .to_digit(MAX_ENCODABLE + 1)
        .ok_or_else(|| {
            SwsError::Notation(
                ErrorInfo::new("invalid-char", "character is not a throw height")
                    .with_context("char", symbol.escape_debug().to_string()),
            )
        })
}

/// Translates a throw height into its character.
pub fn encode_throw(height: Throw) -> Result<char, SwsError> {
    char::from_digit(height, MAX_ENCODABLE + 1).ok_or_else(|| {
        SwsError::Notation(
            ErrorInfo::new("throw-out-of-range", "throw height has no single-character form")
                .with_context("height", height.to_string())
                .with_hint(format!("heights above {MAX_ENCODABLE} cannot be written")),
        )
    })
}

/// Decodes a whole siteswap string. Any foreign character rejects the input.
pub fn decode(text: &str) -> Result<Vec<Throw>, SwsError> {
    if text.is_empty() {
        return Err(SwsError::Notation(ErrorInfo::new(
            "empty-notation",
            "siteswap string is empty",
        )));
    }
    text.chars().map(decode_char).collect()
}

/// Encodes a throw sequence; fails if any height exceeds [`MAX_ENCODABLE`].
pub fn encode(throws: &[Throw]) -> Result<String, SwsError> {
    throws.iter().map(|&height| encode_throw(height)).collect()
}
