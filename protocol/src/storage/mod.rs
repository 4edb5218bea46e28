//! # Storage Module
//!
//! The in-memory data structures that make up a Linkchain.
//!
//! ## Architecture
//!
//! ```text
//! block.rs  — Block structure, digest formula, single-block verify
//! chain.rs  — Append-only chain with defensive snapshots
//! audit.rs  — Digest and linkage checks over any block sequence
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! payload → Chain::append → Block::new → Chain (Vec<Arc<Block>>)
//!                                            ↓
//!                                     Chain::snapshot
//!                                            ↓
//!                                     audit::verify_chain
//! ```
//!
//! Nothing here touches disk. Persistence, if any, belongs to whoever
//! serializes a snapshot.

pub mod audit;
pub mod block;
pub mod chain;

pub use audit::{verify_chain, AuditReport, AuditResult, IntegrityError};
pub use block::Block;
pub use chain::Chain;
