//! # Block Structure
//!
//! A block is one immutable record in the chain. It carries an opaque
//! payload, a link to its predecessor, and a digest that identifies it.
//!
//! ## Block Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Block                                      │
//! │  ├── hash: String       (SHA-256, hex)      │
//! │  ├── prev_hash: String  ("" for genesis)    │
//! │  ├── height: u64        (genesis = 1)       │
//! │  └── data: String       (opaque payload)    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Hash Computation
//!
//! `hash = hex(SHA-256(prev_hash || decimal(height) || data))`, where `||`
//! is plain string concatenation with no separators. The hash is computed
//! once in [`Block::new`] and there is no way to change any field
//! afterwards, so a block built here is self-consistent for its whole life.
//!
//! Blocks that arrive by deserialization carry whatever hash the input had.
//! Use [`Block::verify`] or [`crate::storage::audit::verify_chain`] before
//! trusting them.

use serde::{Deserialize, Serialize};

use super::audit::{AuditResult, IntegrityError};
use crate::config::{GENESIS_HEIGHT, GENESIS_PREV_HASH};
use crate::crypto::hash::sha256_hex_multi;

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// An immutable, self-identifying chain record.
///
/// Fields are private and there are no setters. Serializes as
/// `{"hash", "prevHash", "height", "data"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    hash: String,
    prev_hash: String,
    height: u64,
    data: String,
}

impl Block {
    /// Construct a block and compute its digest.
    ///
    /// Inputs are not validated. An empty `prev_hash`, a `height` of zero, or
    /// an empty `data` are all accepted; the chain is what guarantees sane
    /// linkage, not the block.
    pub fn new(prev_hash: impl Into<String>, height: u64, data: impl Into<String>) -> Self {
        let prev_hash = prev_hash.into();
        let data = data.into();
        let hash = Self::compute_hash(&prev_hash, height, &data);

        Block {
            hash,
            prev_hash,
            height,
            data,
        }
    }

    /// Compute the digest for the given field values.
    ///
    /// This is the same formula [`Block::new`] uses. Verifiers call it with a
    /// stored block's fields and compare the result against the stored hash.
    pub fn compute_hash(prev_hash: &str, height: u64, data: &str) -> String {
        let height = height.to_string();
        sha256_hex_multi(&[prev_hash.as_bytes(), height.as_bytes(), data.as_bytes()])
    }

    /// Recompute this block's digest from its own fields.
    pub fn recompute(&self) -> String {
        Self::compute_hash(&self.prev_hash, self.height, &self.data)
    }

    /// Returns `true` if the stored hash matches the recomputed one.
    pub fn is_intact(&self) -> bool {
        self.hash == self.recompute()
    }

    /// Check that the stored hash matches the block's content.
    ///
    /// Does not check linkage to any other block; that needs the
    /// predecessor and lives in [`crate::storage::audit`].
    ///
    /// # Errors
    ///
    /// Returns [`IntegrityError::HashMismatch`] (with index 0, since the
    /// block is checked on its own) if the digests differ.
    pub fn verify(&self) -> AuditResult<()> {
        let computed = self.recompute();
        if self.hash != computed {
            return Err(IntegrityError::HashMismatch {
                index: 0,
                height: self.height,
                stored: self.hash.clone(),
                computed,
            });
        }
        Ok(())
    }

    /// The block's digest as lowercase hex.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Digest of the preceding block, or `""` for genesis.
    pub fn prev_hash(&self) -> &str {
        &self.prev_hash
    }

    /// 1-indexed position in the chain.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// The caller-supplied payload.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns `true` for a block shaped like the first block of a chain.
    pub fn is_genesis(&self) -> bool {
        self.height == GENESIS_HEIGHT && self.prev_hash == GENESIS_PREV_HASH
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
