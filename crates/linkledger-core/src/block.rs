//! Block: the immutable record of the ledger.
//!
//! A block is created once, by the genesis factory or the producer, and
//! never mutated. The chain is extended by appending newly produced blocks;
//! there is no removal and no reordering.

use serde::{Deserialize, Serialize};

use crate::canonical::block_digest;
use crate::crypto::{random_id, BlockHash};

/// Payload carried by the genesis block.
pub const GENESIS_DATA: &str = "Genesis Hash";

/// One record in the chain, self-describing via index, linkage, timestamp,
/// and payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain. Genesis is 0; each successor is
    /// predecessor + 1, with no gaps.
    pub index: u64,

    /// Digest certifying this block's declared fields. The genesis block
    /// instead carries a random placeholder identifier and is verified by
    /// identity, not recomputation.
    pub hash: BlockHash,

    /// Hash of the immediate predecessor; `None` for genesis.
    pub prev_hash: Option<BlockHash>,

    /// Creation time, Unix milliseconds. The unit is uniform across the
    /// whole chain, genesis included.
    pub timestamp: i64,

    /// Opaque payload.
    pub data: String,
}

impl Block {
    /// Create the distinguished first block.
    ///
    /// The hash is a fresh random identifier, not a digest of the block's
    /// fields: genesis is the trust anchor of the chain and is checked by
    /// equality against the recognized genesis.
    pub fn genesis() -> Self {
        Self::genesis_with(random_id(), now_millis())
    }

    /// Genesis with a pinned identifier and clock, for deterministic setups.
    pub fn genesis_with(id: BlockHash, timestamp: i64) -> Self {
        Self {
            index: 0,
            hash: id,
            prev_hash: None,
            timestamp,
            data: GENESIS_DATA.to_string(),
        }
    }

    /// Recompute the digest over this block's own declared fields.
    pub fn compute_hash(&self) -> BlockHash {
        block_digest(self.index, self.prev_hash.as_ref(), self.timestamp, &self.data)
    }

    /// Check whether this block has the shape of a genesis block.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.prev_hash.is_none()
    }
}

/// Get current time in milliseconds.
pub(crate) fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
