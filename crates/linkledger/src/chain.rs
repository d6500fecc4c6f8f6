//! The Chain: an owned, single-writer store of hash-linked blocks.
//!
//! The chain exclusively owns its blocks; blocks hold no back-references.
//! All mutation goes through `&mut self`, which gives the store its
//! single-writer discipline: a candidate is validated against the current
//! head and either committed whole or rejected, never partially applied.

use linkledger_core::{
    validate_chain, validate_successor, Block, BlockProducer, ChainError, HashRule,
};
use tracing::{debug, warn};

use crate::error::{LedgerError, Result};

/// Configuration for a [`Chain`].
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Whether to validate candidate blocks on append.
    pub validate_on_append: bool,
    /// Hash rule used by the chain's producer.
    pub hash_rule: HashRule,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            validate_on_append: true,
            hash_rule: HashRule::SelfCertifying,
        }
    }
}

/// An append-only sequence of blocks anchored at a recognized genesis.
pub struct Chain {
    /// The recognized genesis block, kept as the identity anchor for
    /// whole-chain validation.
    genesis: Block,
    blocks: Vec<Block>,
    producer: BlockProducer,
    config: ChainConfig,
}

impl Chain {
    /// Create a chain of one: a freshly constructed genesis block.
    pub fn new(config: ChainConfig) -> Self {
        let genesis = Block::genesis();
        Self {
            blocks: vec![genesis.clone()],
            producer: BlockProducer::with_rule(config.hash_rule),
            genesis,
            config,
        }
    }

    /// Create a chain anchored at an externally supplied genesis block.
    pub fn with_genesis(genesis: Block, config: ChainConfig) -> Result<Self> {
        if !genesis.is_genesis() {
            return Err(LedgerError::GenesisRejected(format!(
                "index {} with predecessor link {:?}",
                genesis.index, genesis.prev_hash
            )));
        }
        Ok(Self {
            blocks: vec![genesis.clone()],
            producer: BlockProducer::with_rule(config.hash_rule),
            genesis,
            config,
        })
    }

    /// The recognized genesis block.
    pub fn genesis(&self) -> &Block {
        &self.genesis
    }

    /// The current head block.
    pub fn head(&self) -> &Block {
        self.blocks.last().unwrap_or(&self.genesis)
    }

    /// The owned block sequence, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Get the block at the given height.
    pub fn get(&self, index: u64) -> Option<&Block> {
        self.blocks.get(index as usize)
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// A chain always holds at least the genesis block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Produce a detached candidate successor to the current head.
    ///
    /// The candidate is not appended; committing it is a separate decision
    /// made through [`Chain::append`].
    pub fn produce_next(&self) -> Block {
        self.producer.next(self.head())
    }

    /// Validate a candidate block against the current head and commit it.
    ///
    /// Returns the committed height. Rejection is a normal outcome carried
    /// in the error, not a fault.
    pub fn append(&mut self, block: Block) -> Result<u64> {
        if self.config.validate_on_append {
            if let Err(err) = validate_successor(&block, self.head()) {
                warn!(height = block.index, %err, "rejected candidate block");
                return Err(err.into());
            }
        }

        debug!(height = block.index, "appended block");
        let height = block.index;
        self.blocks.push(block);
        Ok(height)
    }

    /// Validate the whole owned sequence against the recognized genesis.
    pub fn validate(&self) -> std::result::Result<(), ChainError> {
        validate_chain(&self.blocks, &self.genesis)
    }

    /// Replace the owned sequence with a candidate chain.
    ///
    /// The candidate is adopted only if it validates against the recognized
    /// genesis. Choosing between competing valid chains is the caller's
    /// concern.
    pub fn replace(&mut self, candidate: Vec<Block>) -> Result<()> {
        if let Err(err) = validate_chain(&candidate, &self.genesis) {
            warn!(%err, "rejected candidate chain");
            return Err(err.into());
        }

        debug!(blocks = candidate.len(), "replaced chain");
        self.blocks = candidate;
        Ok(())
    }
}
