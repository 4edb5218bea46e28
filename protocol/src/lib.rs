// Copyright (c) 2026 Linkchain Contributors. MIT License.
// See LICENSE for details.

//! # Linkchain Protocol — Core Library
//!
//! An append-only, tamper-evident sequence of records. Each block's identity
//! is the SHA-256 digest of its predecessor's digest, its height, and its
//! payload, so changing any historical block changes its digest and breaks
//! every link after it.
//!
//! ## Architecture
//!
//! - **config** — Digest parameters and genesis conventions.
//! - **crypto** — SHA-256 helpers that render digests as lowercase hex.
//! - **storage** — `Block`, `Chain`, and the integrity audit.
//!
//! ## Example
//!
//! ```
//! use linkchain_protocol::{verify_chain, Chain};
//!
//! let chain = Chain::new();
//! chain.append("first one");
//! chain.append("second one");
//!
//! let blocks = chain.snapshot();
//! assert_eq!(blocks[1].prev_hash(), blocks[0].hash());
//! assert!(verify_chain(&blocks).is_ok());
//! ```
//!
//! There is no global state: every chain is an explicit `Chain` value.

pub mod config;
pub mod crypto;
pub mod storage;

pub use storage::{verify_chain, AuditReport, AuditResult, Block, Chain, IntegrityError};
