//! # Linkledger
//!
//! A minimal hash-linked append-only ledger: every block is
//! cryptographically bound to its predecessor, and a validator proves that
//! a candidate sequence was produced by legitimate, in-order extension.
//!
//! ## Key Concepts
//!
//! - **Block**: immutable. Never edited. The chain grows by appending.
//! - **Genesis**: the trust anchor. Carries a random identifier instead of
//!   a content digest and is verified by identity, not recomputation.
//! - **Producer**: derives a detached candidate successor; appending is a
//!   separate decision.
//! - **Validation**: index continuity, predecessor linkage, and hash
//!   integrity per block; a genesis identity check anchors the whole chain.
//!
//! ## Usage
//!
//! ```rust
//! use linkledger::{Chain, ChainConfig};
//!
//! let mut chain = Chain::new(ChainConfig::default());
//!
//! // Produce a detached candidate and commit it.
//! let candidate = chain.produce_next();
//! chain.append(candidate).unwrap();
//!
//! assert_eq!(chain.len(), 2);
//! assert!(chain.validate().is_ok());
//! ```
//!
//! ## Re-exports
//!
//! The component crate is re-exported for convenience as
//! `linkledger::core`.

pub mod chain;
pub mod error;

// Re-export the component crate
pub use linkledger_core as core;

// Re-export main types for convenience
pub use chain::{Chain, ChainConfig};
pub use error::{LedgerError, Result};

// Re-export commonly used core types
pub use linkledger_core::{
    Block, BlockHash, BlockProducer, ChainError, HashRule, ValidationError,
};
