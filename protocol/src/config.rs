//! # Protocol Configuration & Constants
//!
//! Every fixed parameter of the chain lives here. The digest formula and the
//! genesis conventions are part of every block hash ever produced, so
//! changing any of these invalidates all existing chains.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// Library protocol version, reported by the CLI `version` subcommand.
pub const PROTOCOL_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Digest Parameters
// ---------------------------------------------------------------------------

/// The one-way hash function behind every block identity.
pub const DIGEST_ALGORITHM: &str = "SHA-256";

/// Raw digest length in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Length of a digest rendered as lowercase hex. Two characters per byte.
pub const DIGEST_HEX_LENGTH: usize = DIGEST_LENGTH * 2;

// ---------------------------------------------------------------------------
// Genesis Conventions
// ---------------------------------------------------------------------------

/// `prev_hash` of the first block. There is no predecessor, so it is empty
/// rather than a zeroed digest.
pub const GENESIS_PREV_HASH: &str = "";

/// Height of the first block. Heights are 1-indexed.
pub const GENESIS_HEIGHT: u64 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_hex_length_matches_raw_length() {
        assert_eq!(DIGEST_LENGTH, 32);
        assert_eq!(DIGEST_HEX_LENGTH, 64);
    }

    #[test]
    fn test_genesis_conventions() {
        assert!(GENESIS_PREV_HASH.is_empty());
        assert_eq!(GENESIS_HEIGHT, 1);
    }

    #[test]
    fn test_protocol_version_matches_crate() {
        assert_eq!(PROTOCOL_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
