//! # Hashing Utilities
//!
//! SHA-256 is the only digest in Linkchain. Block identities are rendered as
//! lowercase hex strings, so most callers want [`sha256_hex`] or
//! [`sha256_hex_multi`] rather than the raw bytes.
//!
//! ## On concatenation
//!
//! [`sha256_hex_multi`] feeds each part into the hasher in order without a
//! separator or length prefix. The result is identical to hashing the
//! concatenated parts, which is what the block digest formula requires.

use sha2::{Digest, Sha256};

use crate::config::DIGEST_LENGTH;

/// Compute the SHA-256 hash of the input data as a fixed-size array.
///
/// # Example
///
/// ```
/// use linkchain_protocol::crypto::sha256;
///
/// let hash = sha256(b"linkchain");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    sha256_multi(&[data])
}

/// Hash several byte slices as if they were one concatenated buffer.
///
/// Avoids allocating the concatenation. Parts are not delimited.
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; DIGEST_LENGTH];
    output.copy_from_slice(&result);
    output
}

/// SHA-256 of `data`, rendered as 64 lowercase hex characters.
///
/// # Example
///
/// ```
/// use linkchain_protocol::crypto::sha256_hex;
///
/// assert_eq!(
///     sha256_hex(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Multi-part variant of [`sha256_hex`].
pub fn sha256_hex_multi(parts: &[&[u8]]) -> String {
    hex::encode(sha256_multi(parts))
}

/// Returns `true` if `s` has the shape of a rendered digest: exactly 64
/// lowercase hex characters.
///
/// Shape only. Says nothing about whether the digest is correct for any
/// particular block.
pub fn is_digest_hex(s: &str) -> bool {
    s.len() == DIGEST_LENGTH * 2
        && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
