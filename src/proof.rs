//! Audit proofs are used to verify that a leaf belongs to a tree and that the
//! tree commits to a given total.
//!
//! A proof holds, for every level between the proven node and the root, the
//! hash and the sum of the sibling node along with the side the proven node
//! was on when its parent got hashed.
use std::fmt::Display;

use bitvec::order::Lsb0;
use bitvec::vec::BitVec;

use crate::{
    node::{leaf_hash, node_hash, Bytes32, Hasher, Node, Sum},
    TreeError,
};

/// Side of the proven node relative to its sibling at one level of a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The proven node is the left operand of the parent hash.
    Left,
    /// The proven node is the right operand of the parent hash.
    Right,
}

impl Side {
    fn from_bit(bit: bool) -> Self {
        if bit {
            Self::Right
        } else {
            Self::Left
        }
    }

    fn bit(self) -> bool {
        self == Self::Right
    }
}

/// A merkle proof for a given node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proof<const HASH_SIZE: usize> {
    side_nodes: Vec<[u8; HASH_SIZE]>,
    node_sums: Vec<Sum>,
    /// One bit per level, set when the proven node is the right operand.
    directions: BitVec<u8, Lsb0>,
}

impl<const HASH_SIZE: usize> Proof<HASH_SIZE> {
    /// Creates a new proof from its components, ordered from the leaf level up to the root.
    /// The components are not checked here, see [`Proof::is_well_formed`].
    pub fn new(
        side_nodes: Vec<[u8; HASH_SIZE]>,
        node_sums: Vec<Sum>,
        directions: impl IntoIterator<Item = Side>,
    ) -> Self {
        Self {
            side_nodes,
            node_sums,
            directions: directions.into_iter().map(Side::bit).collect(),
        }
    }

    pub(crate) fn push(&mut self, sibling: &Node<HASH_SIZE>, side: Side) {
        self.side_nodes.push(sibling.hash());
        self.node_sums.push(sibling.sum());
        self.directions.push(side.bit());
    }

    /// Returns the sibling hashes in the proof.
    pub fn side_nodes(&self) -> &[[u8; HASH_SIZE]] {
        &self.side_nodes
    }

    /// Returns the sibling sums in the proof.
    pub fn node_sums(&self) -> &[Sum] {
        &self.node_sums
    }

    /// Returns the side of the proven node at each level.
    pub fn directions(&self) -> impl Iterator<Item = Side> + '_ {
        self.directions.iter().map(|bit| Side::from_bit(*bit))
    }

    /// Number of levels in the proof.
    pub fn len(&self) -> usize {
        self.side_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.side_nodes.is_empty() && self.node_sums.is_empty() && self.directions.is_empty()
    }

    /// All the components of the proof have the same length.
    pub fn is_well_formed(&self) -> bool {
        self.side_nodes.len() == self.node_sums.len()
            && self.side_nodes.len() == self.directions.len()
    }

    /// Computes the root hash and sum from a leaf and this proof.
    pub fn root<H: Hasher<HASH_SIZE>>(
        &self,
        leaf_data: &Bytes32,
        leaf_value: Sum,
    ) -> Result<([u8; HASH_SIZE], Sum), TreeError> {
        if !self.is_well_formed() {
            return Err(TreeError::MalformedProof {
                side_nodes: self.side_nodes.len(),
                node_sums: self.node_sums.len(),
                directions: self.directions.len(),
            });
        }
        let mut current_hash = leaf_hash::<HASH_SIZE, H>(leaf_data, leaf_value);
        let mut current_sum = leaf_value;
        for ((sibling_hash, sibling_sum), side) in self
            .side_nodes
            .iter()
            .zip(self.node_sums.iter().copied())
            .zip(self.directions())
        {
            // order the operands based on the path
            current_hash = match side {
                Side::Left => {
                    node_hash::<HASH_SIZE, H>(&current_hash, current_sum, sibling_hash, sibling_sum)?
                }
                Side::Right => {
                    node_hash::<HASH_SIZE, H>(sibling_hash, sibling_sum, &current_hash, current_sum)?
                }
            };
            current_sum += sibling_sum;
        }
        Ok((current_hash, current_sum))
    }

    /// Verify the proof for a given leaf.
    ///
    /// # Arguments
    ///
    /// * `leaf_data` - The data of the proven leaf
    /// * `leaf_value` - The value of the proven leaf
    /// * `root_hash` - The expected root hash of the tree
    /// * `root_sum` - The expected root sum of the tree
    ///
    /// # Returns
    ///
    /// Returns `Ok(true)` if the proof leads to the expected root, `Ok(false)` otherwise.
    /// A proof whose components don't have the same length is rejected with
    /// [`TreeError::MalformedProof`].
    pub fn verify<H: Hasher<HASH_SIZE>>(
        &self,
        leaf_data: &Bytes32,
        leaf_value: Sum,
        root_hash: [u8; HASH_SIZE],
        root_sum: Sum,
    ) -> Result<bool, TreeError> {
        let (got_hash, got_sum) = match self.root::<H>(leaf_data, leaf_value) {
            Ok(root) => root,
            Err(TreeError::SumOverflow) => {
                tracing::debug!("proof sums overflow");
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        if got_hash != root_hash {
            tracing::debug!(
                expected = %hex::encode(root_hash.as_slice()),
                got = %hex::encode(got_hash.as_slice()),
                "proof root hash mismatch"
            );
            return Ok(false);
        }
        if got_sum != root_sum {
            tracing::debug!(expected = root_sum, got = got_sum, "proof root sum mismatch");
            return Ok(false);
        }
        Ok(true)
    }
}

impl<const HASH_SIZE: usize> Display for Proof<HASH_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Proof [")?;
        for (i, ((hash, sum), side)) in self
            .side_nodes
            .iter()
            .zip(self.node_sums.iter())
            .zip(self.directions())
            .enumerate()
        {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{{ side: {:?}, sum: {}, hash: {} }}",
                side,
                sum,
                hex::encode(hash.as_slice())
            )?;
        }
        write!(f, "]")
    }
}

/// Verify a merkle proof for a given leaf against an expected root.
/// See [`Proof::verify`].
pub fn verify_proof<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    leaf_data: &Bytes32,
    leaf_value: Sum,
    proof: &Proof<HASH_SIZE>,
    root_hash: [u8; HASH_SIZE],
    root_sum: Sum,
) -> Result<bool, TreeError> {
    proof.verify::<H>(leaf_data, leaf_value, root_hash, root_sum)
}
