//! Testing utilities for the linkledger.
//!
//! [`fixtures`] provides deterministic chain builders; [`generators`]
//! provides proptest strategies over blocks and whole valid chains.

pub mod fixtures;
pub mod generators;

pub use fixtures::{ChainFixture, BASE_TIMESTAMP};
