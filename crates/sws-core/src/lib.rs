#![deny(missing_docs)]
#![doc = "Core types shared by the siteswap crates: structured errors, schema descriptors and the throw-height alphabet."]

pub mod errors;
pub mod notation;
pub mod provenance;

pub use errors::{ErrorInfo, SwsError};
pub use notation::{decode, decode_char, encode, encode_throw, MAX_ENCODABLE};
pub use provenance::{RunProvenance, SchemaVersion};

/// Height of a single throw, measured in beats until the ball lands.
pub type Throw = u32;
