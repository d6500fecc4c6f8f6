//! Deriving the next block from the current head.
//!
//! A produced block is a detached candidate: the producer never appends.
//! Whether and when to commit the candidate is the caller's decision.

use crate::block::{now_millis, Block};
use crate::canonical::block_digest;
use crate::crypto::BlockHash;

/// How the producer computes a new block's hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashRule {
    /// Hash over the new block's own finalized fields. Blocks produced
    /// under this rule certify their own content and pass the validator's
    /// integrity check.
    #[default]
    SelfCertifying,

    /// Hash over the predecessor's fields instead of the new block's own.
    /// Exists only to interoperate with ledgers written by older producers;
    /// blocks produced under this rule fail self-integrity validation.
    LegacyPredecessor,
}

/// Derives successor blocks from a head block.
#[derive(Debug, Clone, Default)]
pub struct BlockProducer {
    hash_rule: HashRule,
}

impl BlockProducer {
    /// Producer with the default, self-certifying hash rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Producer with an explicit hash rule.
    pub fn with_rule(hash_rule: HashRule) -> Self {
        Self { hash_rule }
    }

    /// The rule this producer hashes under.
    pub fn hash_rule(&self) -> HashRule {
        self.hash_rule
    }

    /// Derive the successor of `prev`, stamped with the current time.
    pub fn next(&self, prev: &Block) -> Block {
        self.next_at(prev, now_millis())
    }

    /// Derive the successor of `prev` with a pinned clock.
    ///
    /// The new payload is the hex digest of the predecessor's payload, a
    /// one-way chained transform of content distinct from the
    /// block-integrity hash. All fields are finalized before the hash is
    /// computed.
    pub fn next_at(&self, prev: &Block, timestamp: i64) -> Block {
        let index = prev.index + 1;
        let prev_hash = Some(prev.hash);
        let data = BlockHash::hash(prev.data.as_bytes()).to_hex();

        let hash = match self.hash_rule {
            HashRule::SelfCertifying => {
                block_digest(index, prev_hash.as_ref(), timestamp, &data)
            }
            HashRule::LegacyPredecessor => block_digest(
                prev.index,
                prev.prev_hash.as_ref(),
                prev.timestamp,
                &prev.data,
            ),
        };

        Block {
            index,
            hash,
            prev_hash,
            timestamp,
            data,
        }
    }
}
