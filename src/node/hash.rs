//! Domain separated hashing of leaves and internal nodes.
//!
//! Leaf preimage: `LEAF_PREFIX || data || encode_sum(value)`
//!
//! Node preimage: `NODE_PREFIX || left_hash || right_hash || encode_sum(left_sum + right_sum)`
//!
//! The distinct prefixes make it impossible to present an internal node as a leaf.

use super::{Bytes32, Hasher, Sum};
use crate::TreeError;

/// Prefix of every leaf hash preimage.
pub const LEAF_PREFIX: u8 = 0x00;
/// Prefix of every internal node hash preimage.
pub const NODE_PREFIX: u8 = 0x01;
/// Width in bytes of an encoded sum.
pub const SUM_ENCODING_SIZE: usize = 32;

/// Encodes a sum as a 32 bytes big endian integer.
pub fn encode_sum(sum: Sum) -> [u8; SUM_ENCODING_SIZE] {
    let mut encoded = [0; SUM_ENCODING_SIZE];
    let bytes = sum.to_be_bytes();
    encoded[SUM_ENCODING_SIZE - bytes.len()..].copy_from_slice(&bytes);
    encoded
}

/// Hash of a leaf holding `data` and `value`.
pub fn leaf_hash<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    data: &Bytes32,
    value: Sum,
) -> [u8; HASH_SIZE] {
    H::hash(
        [
            [LEAF_PREFIX].as_slice(),
            data.as_slice(),
            encode_sum(value).as_slice(),
        ]
        .concat()
        .as_slice(),
    )
}

/// Hash of the parent of `(left_hash, left_sum)` and `(right_hash, right_sum)`.
/// The operands are not commutative.
pub fn node_hash<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    left_hash: &[u8; HASH_SIZE],
    left_sum: Sum,
    right_hash: &[u8; HASH_SIZE],
    right_sum: Sum,
) -> Result<[u8; HASH_SIZE], TreeError> {
    let sum = left_sum
        .checked_add(right_sum)
        .ok_or(TreeError::SumOverflow)?;
    Ok(H::hash(
        [
            [NODE_PREFIX].as_slice(),
            left_hash.as_slice(),
            right_hash.as_slice(),
            encode_sum(sum).as_slice(),
        ]
        .concat()
        .as_slice(),
    ))
}
