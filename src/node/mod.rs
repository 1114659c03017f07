pub(crate) mod hash;

use sha2::{Digest, Sha256};
use std::fmt::Display;

pub use hash::{encode_sum, leaf_hash, node_hash, LEAF_PREFIX, NODE_PREFIX, SUM_ENCODING_SIZE};

impl Hasher<32> for Sha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

pub type Sum = u64;

/// Fixed-width identifier attached to each leaf.
pub type Bytes32 = [u8; 32];

/// Simple hash trait required to hash the nodes in the tree
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
pub trait Hasher<const HASH_SIZE: usize> {
    fn hash(data: &[u8]) -> [u8; HASH_SIZE];
}

/// A node of the tree as stored in the node list.
///
/// Leaves and internal nodes share this representation, the kind of a node
/// only depends on its `index`: the first `n` entries of a tree built from `n`
/// leaves are the leaves, every entry after them is an internal node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node<const HASH_SIZE: usize> {
    index: usize,
    node_hash: [u8; HASH_SIZE],
    sum: Sum,
}

impl<const HASH_SIZE: usize> Node<HASH_SIZE> {
    pub fn new(index: usize, node_hash: [u8; HASH_SIZE], sum: Sum) -> Self {
        Self {
            index,
            node_hash,
            sum,
        }
    }

    /// Creates the leaf stored at `index`. This function performs a hash.
    pub fn new_leaf<H: Hasher<HASH_SIZE>>(index: usize, data: &Bytes32, sum: Sum) -> Self {
        Self::new(index, leaf_hash::<HASH_SIZE, H>(data, sum), sum)
    }

    /// Creates the parent of `left` and `right` stored at `index`.
    /// This function performs a hash and an addition.
    pub fn new_parent<H: Hasher<HASH_SIZE>>(
        index: usize,
        left: &Self,
        right: &Self,
    ) -> Result<Self, crate::TreeError> {
        let node_hash =
            node_hash::<HASH_SIZE, H>(&left.node_hash, left.sum, &right.node_hash, right.sum)?;
        // node_hash already rejected an overflowing sum
        Ok(Self::new(index, node_hash, left.sum + right.sum))
    }

    /// Position of the node in the node list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }

    /// Returns the sum of the subtree rooted at this node.
    pub fn sum(&self) -> Sum {
        self.sum
    }
}

impl<const HASH_SIZE: usize> Display for Node<HASH_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node {{ index: {}, sum: {}, hash: {} }}",
            self.index,
            self.sum,
            hex::encode(self.node_hash.as_slice())
        )
    }
}
