//! # Cryptographic Primitives
//!
//! Linkchain needs exactly one primitive: a collision-resistant digest.
//! This is a thin wrapper around the audited `sha2` implementation that
//! renders results the way block identities are stored.

pub mod hash;

pub use hash::{is_digest_hex, sha256, sha256_hex, sha256_hex_multi, sha256_multi};
