//! # Linkledger Core
//!
//! Pure primitives for the linkledger: blocks, hashing, production, and
//! validation.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over cryptographic data, apart from reading the clock and the
//! random source during block construction.
//!
//! ## Key Types
//!
//! - [`Block`] - the immutable record of the chain
//! - [`BlockHash`] - 32-byte content digest, also used as block identity
//! - [`BlockProducer`] - derives a successor block from the current head
//!
//! ## Validation
//!
//! [`validate_successor`] binds a block to its immediate predecessor
//! (index continuity, linkage, hash integrity); [`validate_chain`] folds it
//! over every adjacent pair behind a genesis identity check. Every failure
//! is a normal, reportable outcome, never a panic.
//!
//! ## Hashing
//!
//! A block's digest is computed over a canonical preimage in the fixed
//! field order index, prev_hash, timestamp, data. See [`canonical`].

pub mod block;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod producer;
pub mod validation;

pub use block::{Block, GENESIS_DATA};
pub use canonical::{block_digest, decode_block, encode_block, hash_preimage};
pub use crypto::{random_id, BlockHash};
pub use error::{ChainError, CoreError, ValidationError};
pub use producer::{BlockProducer, HashRule};
pub use validation::{validate_chain, validate_successor};
