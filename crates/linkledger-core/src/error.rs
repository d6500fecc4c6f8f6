//! Error types for the linkledger core.

use thiserror::Error;

use crate::crypto::BlockHash;

/// Errors crossing the byte boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed block: {0}")]
    MalformedBlock(String),

    #[error("encoding error: {0}")]
    EncodingError(String),
}

/// Validation failures binding a block to its immediate predecessor.
///
/// Every variant is a normal, reportable outcome surfaced to the caller,
/// never a fault. The messages carry the diagnostic reason for the failing
/// check.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid block structure: {0}")]
    InvalidStructure(String),

    #[error("invalid index: expected {expected}, got {got}")]
    InvalidIndex { expected: u64, got: u64 },

    #[error("invalid previous hash: expected {expected}, got {got:?}")]
    InvalidLink {
        expected: BlockHash,
        got: Option<BlockHash>,
    },

    #[error("invalid hash: computed {computed}, declared {declared}")]
    InvalidIntegrity {
        computed: BlockHash,
        declared: BlockHash,
    },
}

/// Whole-chain validation failures.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The first block is missing or is not the recognized genesis.
    #[error("first block is not the recognized genesis")]
    InvalidGenesis,

    /// An adjacent pair failed successor validation at the given height.
    #[error("invalid successor at height {position}: {source}")]
    InvalidSuccessor {
        position: usize,
        #[source]
        source: ValidationError,
    },
}

impl From<CoreError> for ValidationError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::MalformedBlock(msg) | CoreError::EncodingError(msg) => {
                ValidationError::InvalidStructure(msg)
            }
        }
    }
}
