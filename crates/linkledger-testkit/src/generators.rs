//! Proptest generators for property-based testing.

use proptest::prelude::*;

use linkledger_core::{block_digest, Block, BlockHash, BlockProducer};

/// Generate a random BlockHash.
pub fn block_hash() -> impl Strategy<Value = BlockHash> {
    any::<[u8; 32]>().prop_map(BlockHash::from_bytes)
}

/// Generate a reasonable timestamp (Unix milliseconds).
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX / 2
}

/// Generate an opaque payload string.
pub fn payload() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,31}".prop_map(String::from)
}

/// Generate a chain length, genesis included.
pub fn chain_len() -> impl Strategy<Value = usize> {
    1usize..=8
}

/// Generate a valid chain: a pinned-identifier genesis plus produced
/// successors, one second apart.
pub fn valid_chain() -> impl Strategy<Value = Vec<Block>> {
    (any::<[u8; 32]>(), timestamp(), chain_len()).prop_map(|(id, ts, len)| {
        let producer = BlockProducer::new();
        let mut blocks = vec![Block::genesis_with(BlockHash::from_bytes(id), ts)];
        for i in 1..len {
            let next = producer.next_at(&blocks[i - 1], blocks[i - 1].timestamp + 1_000);
            blocks.push(next);
        }
        blocks
    })
}
