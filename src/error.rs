//! Error types for the Merkle Sum Tree implementation

/// Error type for tree construction, proof generation and proof verification
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum TreeError {
    /// The tree was built from an empty leaf set
    #[error("Cannot build a tree without leaves")]
    EmptyInput,
    /// Values and data were not provided for the same number of leaves
    #[error("Mismatched leaf input: {values} values for {data} data entries")]
    MismatchedLength { values: usize, data: usize },
    /// Requested node does not exist in the tree
    #[error("Node index {index} out of range for a tree of {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },
    /// Proof components do not have the same length
    #[error(
        "Malformed proof: {side_nodes} side nodes, {node_sums} node sums, {directions} directions"
    )]
    MalformedProof {
        side_nodes: usize,
        node_sums: usize,
        directions: usize,
    },
    /// Sum overflow
    #[error("Sum overflow")]
    SumOverflow,
}
