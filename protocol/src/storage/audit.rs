//! # Chain Audit
//!
//! Integrity checks over a sequence of blocks. The [`Chain`](super::Chain)
//! never runs these on its own: blocks it builds are consistent by
//! construction, and checking on every read would be wasted work. The audit
//! is for anyone holding blocks that came from somewhere else, such as a
//! JSON dump, a snapshot handed across a trust boundary, or a test.
//!
//! ## Checks
//!
//! For every block, in order, stopping at the first failure:
//!
//! 1. The stored hash equals the recomputed digest.
//! 2. The first block has an empty `prev_hash` and height 1.
//! 3. Every later block links to its predecessor's hash and has the
//!    predecessor's height plus one.
//!
//! A failure at index `i` means block `i` and everything after it carries no
//! integrity proof.

use std::borrow::Borrow;

use super::block::Block;
use crate::config::{GENESIS_HEIGHT, GENESIS_PREV_HASH};

// ---------------------------------------------------------------------------
// Error Type
// ---------------------------------------------------------------------------

/// The first integrity violation found in a block sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("block {index} (height {height}) hash mismatch: stored={stored}, computed={computed}")]
    HashMismatch {
        index: usize,
        height: u64,
        stored: String,
        computed: String,
    },

    #[error("genesis block must have an empty prev_hash, found {found:?}")]
    GenesisPrevHash { found: String },

    #[error("block {index} does not link to its predecessor: expected prev_hash {expected}, found {found:?}")]
    BrokenLink {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("block {index} has height {found}, expected {expected}")]
    HeightMismatch {
        index: usize,
        expected: u64,
        found: u64,
    },
}

impl IntegrityError {
    /// Index of the first untrusted block.
    pub fn index(&self) -> usize {
        match self {
            Self::HashMismatch { index, .. }
            | Self::BrokenLink { index, .. }
            | Self::HeightMismatch { index, .. } => *index,
            Self::GenesisPrevHash { .. } => 0,
        }
    }
}

pub type AuditResult<T> = Result<T, IntegrityError>;

// ---------------------------------------------------------------------------
// AuditReport
// ---------------------------------------------------------------------------

/// Summary of a sequence that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Number of blocks verified.
    pub blocks: usize,
    /// Hash of the last block, `None` for an empty sequence.
    pub tip: Option<String>,
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Verify digests and linkage over `blocks`.
///
/// Accepts anything that borrows as a [`Block`], so both a plain
/// `Vec<Block>` and a chain snapshot (`Vec<Arc<Block>>`) work. An empty
/// sequence is valid.
///
/// # Errors
///
/// Returns the first [`IntegrityError`] in index order.
pub fn verify_chain<B: Borrow<Block>>(blocks: &[B]) -> AuditResult<AuditReport> {
    let mut prev: Option<&Block> = None;

    for (index, block) in blocks.iter().enumerate() {
        let block = block.borrow();
        if let Err(err) = check_block(index, block, prev) {
            tracing::warn!(index, height = block.height(), error = %err, "chain audit failed");
            return Err(err);
        }
        prev = Some(block);
    }

    let report = AuditReport {
        blocks: blocks.len(),
        tip: prev.map(|b| b.hash().to_string()),
    };
    tracing::debug!(blocks = report.blocks, tip = ?report.tip, "chain audit passed");
    Ok(report)
}

fn check_block(index: usize, block: &Block, prev: Option<&Block>) -> AuditResult<()> {
    let computed = block.recompute();
    if block.hash() != computed {
        return Err(IntegrityError::HashMismatch {
            index,
            height: block.height(),
            stored: block.hash().to_string(),
            computed,
        });
    }

    let (expected_prev, expected_height) = match prev {
        Some(p) => (p.hash(), p.height() + 1),
        None => (GENESIS_PREV_HASH, GENESIS_HEIGHT),
    };

    if block.prev_hash() != expected_prev {
        return Err(match prev {
            None => IntegrityError::GenesisPrevHash {
                found: block.prev_hash().to_string(),
            },
            Some(_) => IntegrityError::BrokenLink {
                index,
                expected: expected_prev.to_string(),
                found: block.prev_hash().to_string(),
            },
        });
    }

    if block.height() != expected_height {
        return Err(IntegrityError::HeightMismatch {
            index,
            expected: expected_height,
            found: block.height(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Correctly linked blocks, built without a `Chain`.
    fn linked(payloads: &[&str]) -> Vec<Block> {
        let mut blocks: Vec<Block> = Vec::new();
        for (i, data) in payloads.iter().enumerate() {
            let prev_hash = blocks.last().map(|b| b.hash().to_string()).unwrap_or_default();
            blocks.push(Block::new(prev_hash, i as u64 + 1, *data));
        }
        blocks
    }

    #[test]
    fn empty_sequence_is_valid() {
        let report = verify_chain::<Block>(&[]).unwrap();
        assert_eq!(report.blocks, 0);
        assert_eq!(report.tip, None);
    }

    #[test]
    fn linked_sequence_passes() {
        let blocks = linked(&["a", "b", "c"]);
        let report = verify_chain(&blocks).unwrap();
        assert_eq!(report.blocks, 3);
        assert_eq!(report.tip.as_deref(), Some(blocks[2].hash()));
    }

    #[test]
    fn genesis_with_prev_hash_is_rejected() {
        let blocks = vec![Block::new("xxxx", 1, "a")];
        let err = verify_chain(&blocks).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::GenesisPrevHash {
                found: "xxxx".to_string()
            }
        );
        assert_eq!(err.index(), 0);
    }

    #[test]
    fn genesis_with_wrong_height_is_rejected() {
        let blocks = vec![Block::new("", 2, "a")];
        let err = verify_chain(&blocks).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::HeightMismatch {
                index: 0,
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn forged_tail_block_is_rejected() {
        let mut blocks = linked(&["a", "b"]);
        blocks.push(Block::new("xxxx", 123123, "hacked"));
        let err = verify_chain(&blocks).unwrap_err();
        assert!(matches!(err, IntegrityError::BrokenLink { index: 2, .. }));
    }

    #[test]
    fn height_gap_is_rejected() {
        let mut blocks = linked(&["a"]);
        let skipped = Block::new(blocks[0].hash(), 3, "skipped");
        blocks.push(skipped);
        let err = verify_chain(&blocks).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::HeightMismatch {
                index: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn reordered_blocks_are_rejected() {
        let mut blocks = linked(&["a", "b", "c"]);
        blocks.swap(1, 2);
        let err = verify_chain(&blocks).unwrap_err();
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn tampered_payload_is_reported_at_its_index() {
        let blocks = linked(&["a", "b", "c"]);
        let mut dump = serde_json::to_value(&blocks).unwrap();
        dump[1]["data"] = serde_json::Value::from("B");
        let tampered: Vec<Block> = serde_json::from_value(dump).unwrap();

        let err = verify_chain(&tampered).unwrap_err();
        assert!(matches!(
            err,
            IntegrityError::HashMismatch {
                index: 1,
                height: 2,
                ..
            }
        ));
    }

    #[test]
    fn rehashed_tamper_breaks_the_next_link() {
        // Rewriting block 1 with a consistent hash still orphans block 2.
        let mut blocks = linked(&["a", "b", "c"]);
        let rewritten = Block::new(blocks[0].hash(), 2, "B");
        blocks[1] = rewritten;
        let err = verify_chain(&blocks).unwrap_err();
        assert!(matches!(err, IntegrityError::BrokenLink { index: 2, .. }));
    }

    #[test]
    fn error_messages_name_the_block() {
        let err = IntegrityError::HeightMismatch {
            index: 4,
            expected: 5,
            found: 9,
        };
        assert_eq!(err.to_string(), "block 4 has height 9, expected 5");
    }
}
