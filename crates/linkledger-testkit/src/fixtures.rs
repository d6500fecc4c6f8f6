//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a pinned genesis block, a
//! producer, and deterministic chain construction.

use linkledger_core::{Block, BlockHash, BlockProducer, HashRule};

/// Base timestamp used by deterministic fixtures (2024-01-15 00:00:00 UTC,
/// Unix milliseconds).
pub const BASE_TIMESTAMP: i64 = 1_705_276_800_000;

/// A fixture with a pinned genesis block and a producer.
pub struct ChainFixture {
    pub genesis: Block,
    pub producer: BlockProducer,
}

impl ChainFixture {
    /// Deterministic fixture with the self-certifying hash rule.
    pub fn new() -> Self {
        Self::with_rule(HashRule::SelfCertifying)
    }

    /// Deterministic fixture with an explicit hash rule.
    pub fn with_rule(rule: HashRule) -> Self {
        Self {
            genesis: Block::genesis_with(BlockHash::from_bytes([0x42; 32]), BASE_TIMESTAMP),
            producer: BlockProducer::with_rule(rule),
        }
    }

    /// Build a valid chain of `len` blocks, genesis included, with each
    /// successor stamped one second after its predecessor.
    pub fn make_chain(&self, len: usize) -> Vec<Block> {
        let mut blocks = vec![self.genesis.clone()];
        for i in 1..len {
            let next = self.make_block(&blocks[i - 1]);
            blocks.push(next);
        }
        blocks
    }

    /// Produce the successor of `prev` with a pinned clock.
    pub fn make_block(&self, prev: &Block) -> Block {
        self.producer.next_at(prev, prev.timestamp + 1_000)
    }
}

impl Default for ChainFixture {
    fn default() -> Self {
        Self::new()
    }
}
