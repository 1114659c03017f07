//! Merkle Sum Tree built from an ordered leaf set

mod builder;

use std::fmt::Debug;
use std::marker::PhantomData;

pub use builder::PARALLEL_THRESHOLD;

use crate::{
    node::{Bytes32, Hasher, Node, Sum},
    proof::{Proof, Side},
    TreeError,
};

/// Merkle sum tree.
/// * `HASH_SIZE` - size of the hash digest in bytes.
/// * `H` - Hasher that will be used to hash nodes.
///
/// Nodes live in a flat list: the `n` leaves first, in input order, then the
/// `n - 1` internal nodes in creation order. The root is the last node.
/// Parent and children links are indices into that list.
#[derive(Clone)]
pub struct SumMerkleTree<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    nodes: Vec<Node<HASH_SIZE>>,
    /// `(left, right)` children of internal node `leaf_count + i`.
    children: Vec<(usize, usize)>,
    /// Parent of every node, `None` for the root.
    parents: Vec<Option<usize>>,
    leaf_count: usize,
    depth: usize,
    _phantom: PhantomData<H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> SumMerkleTree<HASH_SIZE, H> {
    /// Builds the tree of the leaves `(values[i], data[i])`. This will hash every node of the tree.
    pub fn new(values: &[Sum], data: &[Bytes32]) -> Result<Self, TreeError> {
        let leaves = builder::hash_leaves::<HASH_SIZE, H>(values, data)?;
        let leaf_count = leaves.len();
        let node_count = 2 * leaf_count - 1;

        let mut nodes = Vec::with_capacity(node_count);
        nodes.extend_from_slice(&leaves);
        let mut children = Vec::with_capacity(leaf_count - 1);
        let mut parents = vec![None; node_count];
        let mut depth = 0;

        builder::reduce::<HASH_SIZE, H>(leaves, |level, created| {
            for (pair, parent) in level.chunks_exact(2).zip(created) {
                children.push((pair[0].index(), pair[1].index()));
                parents[pair[0].index()] = Some(parent.index());
                parents[pair[1].index()] = Some(parent.index());
            }
            nodes.extend_from_slice(created);
            depth += 1;
        })?;

        tracing::debug!(
            leaves = leaf_count,
            nodes = nodes.len(),
            depth,
            "built sum merkle tree"
        );

        Ok(Self {
            nodes,
            children,
            parents,
            leaf_count,
            depth,
            _phantom: PhantomData,
        })
    }

    /// Root node of the tree.
    pub fn root(&self) -> &Node<HASH_SIZE> {
        // a tree always holds at least one node
        &self.nodes[self.nodes.len() - 1]
    }

    /// All the nodes of the tree, leaves first.
    pub fn nodes(&self) -> &[Node<HASH_SIZE>] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node<HASH_SIZE>> {
        self.nodes.get(index)
    }

    /// Number of nodes in the tree, always `2 * leaf_count - 1`.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of levels above the leaves.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_leaf(&self, index: usize) -> bool {
        index < self.leaf_count
    }

    /// Returns the `(left, right)` children of an internal node.
    pub fn children(&self, index: usize) -> Option<(usize, usize)> {
        index
            .checked_sub(self.leaf_count)
            .and_then(|internal| self.children.get(internal).copied())
    }

    /// Returns the parent of a node. The root has no parent.
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parents.get(index).copied().flatten()
    }

    /// Builds the audit proof of the node at `index`, from its level up to the root.
    pub fn merkle_proof(&self, index: usize) -> Result<Proof<HASH_SIZE>, TreeError> {
        if index >= self.nodes.len() {
            return Err(TreeError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            });
        }
        let mut proof = Proof::default();
        let mut current = index;
        while let Some(parent) = self.parent(current) {
            let (left, right) = self
                .children(parent)
                .ok_or(TreeError::IndexOutOfRange {
                    index: parent,
                    len: self.nodes.len(),
                })?;
            let (sibling, side) = if current == left {
                (right, Side::Left)
            } else {
                (left, Side::Right)
            };
            proof.push(&self.nodes[sibling], side);
            current = parent;
        }
        Ok(proof)
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Debug for SumMerkleTree<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SumMerkleTree")
            .field("leaf_count", &self.leaf_count)
            .field("depth", &self.depth)
            .field("root", self.root())
            .finish()
    }
}

/// Computes the root of the tree built from `(values[i], data[i])` without keeping the
/// rest of the tree around.
pub fn calc_root<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    values: &[Sum],
    data: &[Bytes32],
) -> Result<Node<HASH_SIZE>, TreeError> {
    let leaves = builder::hash_leaves::<HASH_SIZE, H>(values, data)?;
    builder::reduce::<HASH_SIZE, H>(leaves, |_, _| {})
}
