//! Error types for the ledger API.

use linkledger_core::{ChainError, ValidationError};
use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A candidate block failed successor validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A candidate chain failed whole-chain validation.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// The supplied block cannot anchor a chain.
    #[error("genesis rejected: {0}")]
    GenesisRejected(String),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
