//! Canonical hash-preimage construction and the block byte codec.
//!
//! The preimage layout is fixed: index, prev_hash, timestamp, data, in that
//! order, with big-endian fixed-width integers and the zero hash standing in
//! for an absent predecessor. The same fields produce identical bytes (and
//! thus identical digests) on every platform.
//!
//! The codec moves a [`Block`] across the untrusted-bytes boundary using
//! CBOR. Shape checking lives here: malformed input is rejected at decode
//! time, so a `Block` held in memory is well-formed by construction.

use crate::block::Block;
use crate::crypto::BlockHash;
use crate::error::CoreError;

/// Build the canonical hash preimage for a block's fields.
///
/// Layout: `index (8 bytes BE) || prev_hash (32 bytes, zero sentinel if
/// absent) || timestamp (8 bytes BE) || data (raw bytes)`.
pub fn hash_preimage(
    index: u64,
    prev_hash: Option<&BlockHash>,
    timestamp: i64,
    data: &str,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8 + 32 + 8 + data.len());
    buf.extend_from_slice(&index.to_be_bytes());
    buf.extend_from_slice(prev_hash.unwrap_or(&BlockHash::ZERO).as_bytes());
    buf.extend_from_slice(&timestamp.to_be_bytes());
    buf.extend_from_slice(data.as_bytes());
    buf
}

/// Compute the block digest over the given fields.
///
/// Deterministic: identical inputs always yield an identical digest. This
/// is the integrity hash the validator recomputes and compares against a
/// block's declared hash.
pub fn block_digest(
    index: u64,
    prev_hash: Option<&BlockHash>,
    timestamp: i64,
    data: &str,
) -> BlockHash {
    BlockHash::hash(&hash_preimage(index, prev_hash, timestamp, data))
}

/// Encode a block to CBOR bytes.
pub fn encode_block(block: &Block) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    ciborium::into_writer(block, &mut buf)
        .map_err(|e| CoreError::EncodingError(e.to_string()))?;
    Ok(buf)
}

/// Decode a block from untrusted bytes.
///
/// Field shapes are enforced here: wrong types, missing fields, or trailing
/// garbage are rejected as [`CoreError::MalformedBlock`].
pub fn decode_block(bytes: &[u8]) -> Result<Block, CoreError> {
    ciborium::from_reader(bytes).map_err(|e| CoreError::MalformedBlock(e.to_string()))
}
