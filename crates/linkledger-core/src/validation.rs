//! Successor and whole-chain validation.
//!
//! Shape checking happens at the byte boundary ([`crate::canonical::decode_block`]);
//! a [`Block`] held in memory is well-formed by construction, so the
//! successor check starts at index continuity.

use crate::block::Block;
use crate::error::{ChainError, ValidationError};

/// Validate that `block` is the legitimate successor of `prev`.
///
/// Checks short-circuit in order, so the returned reason names the first
/// failing check:
/// 1. index continuity (`prev.index + 1`)
/// 2. predecessor linkage (`prev_hash` equals the predecessor's `hash`)
/// 3. hash integrity (the digest recomputed over the block's own declared
///    fields equals its declared `hash`)
pub fn validate_successor(block: &Block, prev: &Block) -> Result<(), ValidationError> {
    let expected_index = prev.index + 1;
    if block.index != expected_index {
        return Err(ValidationError::InvalidIndex {
            expected: expected_index,
            got: block.index,
        });
    }

    if block.prev_hash != Some(prev.hash) {
        return Err(ValidationError::InvalidLink {
            expected: prev.hash,
            got: block.prev_hash,
        });
    }

    let computed = block.compute_hash();
    if computed != block.hash {
        return Err(ValidationError::InvalidIntegrity {
            computed,
            declared: block.hash,
        });
    }

    Ok(())
}

/// Validate an entire chain against the recognized genesis block.
///
/// The first block must equal `genesis` by identity; genesis is the trust
/// anchor and its hash is never recomputed. Every adjacent pair must then
/// pass [`validate_successor`]. Validation stops at the first failing pair
/// and reports its height. A chain of one block is valid iff the genesis
/// identity check passes; an empty candidate fails it.
pub fn validate_chain(blocks: &[Block], genesis: &Block) -> Result<(), ChainError> {
    match blocks.first() {
        Some(first) if first == genesis => {}
        _ => return Err(ChainError::InvalidGenesis),
    }

    for (i, pair) in blocks.windows(2).enumerate() {
        validate_successor(&pair[1], &pair[0]).map_err(|source| {
            ChainError::InvalidSuccessor {
                position: i + 1,
                source,
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::BlockHash;
    use crate::producer::BlockProducer;

    fn make_genesis() -> Block {
        Block::genesis_with(BlockHash::from_bytes([0x42; 32]), 1_736_870_400_000)
    }

    fn make_chain(len: usize) -> Vec<Block> {
        let producer = BlockProducer::new();
        let mut blocks = vec![make_genesis()];
        for i in 1..len {
            let next = producer.next_at(&blocks[i - 1], blocks[i - 1].timestamp + 1000);
            blocks.push(next);
        }
        blocks
    }

    #[test]
    fn test_valid_successor() {
        let chain = make_chain(2);
        assert!(validate_successor(&chain[1], &chain[0]).is_ok());
    }

    #[test]
    fn test_invalid_index() {
        let mut chain = make_chain(2);
        chain[1].index = 5;

        assert!(matches!(
            validate_successor(&chain[1], &chain[0]),
            Err(ValidationError::InvalidIndex {
                expected: 1,
                got: 5
            })
        ));
    }

    #[test]
    fn test_index_checked_before_link() {
        // Break both index and linkage; the index failure must win.
        let mut chain = make_chain(2);
        chain[1].index = 7;
        chain[1].prev_hash = Some(BlockHash::from_bytes([0xff; 32]));

        assert!(matches!(
            validate_successor(&chain[1], &chain[0]),
            Err(ValidationError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_invalid_link() {
        let mut chain = make_chain(2);
        chain[1].prev_hash = Some(BlockHash::from_bytes([0xff; 32]));

        assert!(matches!(
            validate_successor(&chain[1], &chain[0]),
            Err(ValidationError::InvalidLink { .. })
        ));
    }

    #[test]
    fn test_invalid_integrity_on_tampered_data() {
        let mut chain = make_chain(2);
        chain[1].data = "tampered".to_string();

        assert!(matches!(
            validate_successor(&chain[1], &chain[0]),
            Err(ValidationError::InvalidIntegrity { .. })
        ));
    }

    #[test]
    fn test_genesis_only_chain_is_valid() {
        let genesis = make_genesis();
        assert!(validate_chain(std::slice::from_ref(&genesis), &genesis).is_ok());
    }

    #[test]
    fn test_empty_chain_is_invalid() {
        let genesis = make_genesis();
        assert!(matches!(
            validate_chain(&[], &genesis),
            Err(ChainError::InvalidGenesis)
        ));
    }

    #[test]
    fn test_unrecognized_genesis_is_invalid() {
        let chain = make_chain(3);
        let other = Block::genesis_with(BlockHash::from_bytes([0x99; 32]), 1_736_870_400_000);

        assert!(matches!(
            validate_chain(&chain, &other),
            Err(ChainError::InvalidGenesis)
        ));
    }

    #[test]
    fn test_valid_chain() {
        let chain = make_chain(4);
        assert!(validate_chain(&chain, &chain[0]).is_ok());
    }

    #[test]
    fn test_failing_pair_position_reported() {
        let mut chain = make_chain(4);
        chain[2].data = "tampered".to_string();
        let genesis = chain[0].clone();

        match validate_chain(&chain, &genesis) {
            Err(ChainError::InvalidSuccessor { position, source }) => {
                assert_eq!(position, 2);
                assert!(matches!(source, ValidationError::InvalidIntegrity { .. }));
            }
            other => panic!("expected InvalidSuccessor, got {:?}", other),
        }
    }

    #[test]
    fn test_prefix_of_valid_chain_is_valid() {
        let chain = make_chain(3);
        assert!(validate_chain(&chain[..2], &chain[0]).is_ok());
    }
}
