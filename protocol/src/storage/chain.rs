//! In-memory, append-only chain of blocks.
//!
//! The chain is the only thing allowed to create linked blocks: callers hand
//! it a payload, and it derives `prev_hash` and `height` from the current
//! tip. Reads return copies of the block list, never a view into it, so
//! nothing outside this module can reorder, drop, or splice blocks.
//!
//! ## Locking
//!
//! Blocks live behind a `parking_lot::RwLock`. [`Chain::append`] holds the
//! write lock from reading the tip until the new block is pushed, so two
//! appends can never derive their linkage from the same tip. Readers take
//! the read lock and see the chain either before or after an append.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::block::Block;
use crate::config::{GENESIS_HEIGHT, GENESIS_PREV_HASH};

/// Ordered, append-only sequence of blocks.
///
/// Share between threads with `Arc<Chain>`; every method takes `&self`.
#[derive(Default)]
pub struct Chain {
    blocks: RwLock<Vec<Arc<Block>>>,
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks = self.blocks.read();
        f.debug_struct("Chain")
            .field("len", &blocks.len())
            .field("tip", &blocks.last().map(|b| b.hash()))
            .finish()
    }
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new block carrying `data` to the chain tip.
    ///
    /// The block links to the current tip's hash (or `""` on an empty chain)
    /// and sits at height `len + 1`. Any string is accepted.
    pub fn append(&self, data: impl Into<String>) {
        let mut blocks = self.blocks.write();

        let (prev_hash, height) = match blocks.last() {
            Some(tip) => (tip.hash().to_string(), tip.height() + 1),
            None => (GENESIS_PREV_HASH.to_string(), GENESIS_HEIGHT),
        };
        let block = Block::new(prev_hash, height, data);

        tracing::trace!(height, hash = %block.hash(), "block appended");
        blocks.push(Arc::new(block));
    }

    /// Returns a copy of the block list.
    ///
    /// The `Vec` is new; the blocks are shared with the chain. Pushing,
    /// removing, or reordering entries in the returned `Vec` does not touch
    /// the chain, and [`Block`] has no mutators.
    pub fn snapshot(&self) -> Vec<Arc<Block>> {
        self.blocks.read().clone()
    }

    /// Number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    /// Returns `true` if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }

    /// Returns the latest block, if any.
    pub fn tip(&self) -> Option<Arc<Block>> {
        self.blocks.read().last().cloned()
    }

    /// Returns the block at `height` (1-indexed), if present.
    pub fn get(&self, height: u64) -> Option<Arc<Block>> {
        let index = usize::try_from(height.checked_sub(GENESIS_HEIGHT)?).ok()?;
        self.blocks.read().get(index).cloned()
    }
}
