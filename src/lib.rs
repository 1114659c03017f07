//! Merkle Sum Tree implementation
//!
//! This crate provides a binary Merkle Sum Tree: every node commits to the hash of
//! its subtree and to the sum of the values of the leaves below it, so a single
//! root commits both to a set of leaves and to their total.
//!
//! The tree supports:
//! - Deterministic construction from an ordered leaf set
//! - Sum aggregation at each level
//! - Audit proofs for any leaf, carrying sibling hashes, sums and directions
//! - Proof verification against an expected root hash and sum
//! - Flexible hashing through the `Hasher` trait
//! - Parallel construction with the `multi-thread` feature

mod error;
mod node;
mod proof;
mod tree;

pub use error::TreeError;
pub use node::{
    encode_sum, leaf_hash, node_hash, Bytes32, Hasher, Node, Sum, LEAF_PREFIX, NODE_PREFIX,
    SUM_ENCODING_SIZE,
};
pub use proof::{verify_proof, Proof, Side};
pub use tree::{calc_root, SumMerkleTree, PARALLEL_THRESHOLD};

/// Merkle sum tree hashed with SHA-256.
pub type Sha256SumMerkleTree = SumMerkleTree<32, sha2::Sha256>;

#[cfg(test)]
mod tests;
