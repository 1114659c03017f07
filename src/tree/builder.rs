//! Bottom-up construction of the tree.
//!
//! Every pass pairs the nodes of the current level in order. A leftover node of
//! an odd sized level is carried unchanged to the tail of the next level.

use crate::{
    node::{Bytes32, Hasher, Node, Sum},
    TreeError,
};

/// Minimum number of items before a step is spread over the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Checks the leaf input and hashes the leaves in order.
pub(crate) fn hash_leaves<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    values: &[Sum],
    data: &[Bytes32],
) -> Result<Vec<Node<HASH_SIZE>>, TreeError> {
    if values.len() != data.len() {
        return Err(TreeError::MismatchedLength {
            values: values.len(),
            data: data.len(),
        });
    }
    if values.is_empty() {
        return Err(TreeError::EmptyInput);
    }

    #[cfg(feature = "multi-thread")]
    {
        if values.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            return Ok(values
                .par_iter()
                .zip(data.par_iter())
                .enumerate()
                .map(|(index, (value, data))| Node::new_leaf::<H>(index, data, *value))
                .collect());
        }
    }

    Ok(values
        .iter()
        .zip(data.iter())
        .enumerate()
        .map(|(index, (value, data))| Node::new_leaf::<H>(index, data, *value))
        .collect())
}

/// Combines the pairs of a level. The parent of pair `k` gets index `first_index + k`.
fn combine_level<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    level: &[Node<HASH_SIZE>],
    first_index: usize,
) -> Result<Vec<Node<HASH_SIZE>>, TreeError> {
    #[cfg(feature = "multi-thread")]
    {
        if level.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            return level
                .par_chunks_exact(2)
                .enumerate()
                .map(|(k, pair)| Node::new_parent::<H>(first_index + k, &pair[0], &pair[1]))
                .collect();
        }
    }

    level
        .chunks_exact(2)
        .enumerate()
        .map(|(k, pair)| Node::new_parent::<H>(first_index + k, &pair[0], &pair[1]))
        .collect()
}

/// Reduces `leaves` to the root.
///
/// `on_pass` is called after every pass with the level that was reduced and the
/// parents created from it: `parents[k]` is the parent of `level[2k]` and `level[2k + 1]`.
pub(crate) fn reduce<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    leaves: Vec<Node<HASH_SIZE>>,
    mut on_pass: impl FnMut(&[Node<HASH_SIZE>], &[Node<HASH_SIZE>]),
) -> Result<Node<HASH_SIZE>, TreeError> {
    let mut next_index = leaves.len();
    let mut level = leaves;
    while level.len() > 1 {
        let mut parents = combine_level::<HASH_SIZE, H>(&level, next_index)?;
        next_index += parents.len();
        on_pass(&level, &parents);

        let carried = if level.len() % 2 == 1 {
            level.last().copied()
        } else {
            None
        };
        tracing::trace!(
            width = level.len(),
            parents = parents.len(),
            carried = ?carried.map(|node| node.index()),
            "reduced level"
        );
        parents.extend(carried);
        level = parents;
    }
    level.pop().ok_or(TreeError::EmptyInput)
}
