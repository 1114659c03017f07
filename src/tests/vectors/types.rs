use crate::{Bytes32, Proof, Side, Sum, TreeError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parse a hex string into a 32 bytes array
pub fn parse_bytes32(value: &str) -> Result<Bytes32, Box<dyn std::error::Error>> {
    let bytes = hex::decode(value)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| format!("expected 32 bytes, got {}", len).into())
}

/// Represents a leaf of the tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestLeaf {
    pub value: String,
    pub data: String,
}

impl TestLeaf {
    /// Get the value as u64
    pub fn value_as_u64(&self) -> Result<Sum, std::num::ParseIntError> {
        Sum::from_str(&self.value)
    }

    /// Get the data as bytes
    pub fn data_as_bytes(&self) -> Result<Bytes32, Box<dyn std::error::Error>> {
        parse_bytes32(&self.data)
    }
}

/// Represents an inclusion proof of a leaf
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestProofCase {
    pub leaf_index: usize,
    pub side_nodes: Vec<String>,
    pub node_sums: Vec<String>,
    /// One character per level, `L` or `R`
    pub directions: String,
}

impl TestProofCase {
    /// Convert to a regular proof
    pub fn to_proof(&self) -> Result<Proof<32>, Box<dyn std::error::Error>> {
        let side_nodes = self
            .side_nodes
            .iter()
            .map(|hash| parse_bytes32(hash))
            .collect::<Result<Vec<_>, _>>()?;
        let node_sums = self
            .node_sums
            .iter()
            .map(|sum| Sum::from_str(sum))
            .collect::<Result<Vec<_>, _>>()?;
        let directions = self
            .directions
            .chars()
            .map(|c| match c {
                'L' => Ok(Side::Left),
                'R' => Ok(Side::Right),
                other => Err(format!("invalid direction {}", other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Proof::new(side_nodes, node_sums, directions))
    }
}

/// Represents a valid test case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidTestCase {
    pub comment: Option<String>,
    pub leaves: Vec<TestLeaf>,
    pub root_hash: String,
    pub root_sum: String,
    pub node_count: usize,
    pub depth: usize,
    pub inclusion_proofs: Vec<TestProofCase>,
}

impl ValidTestCase {
    /// Split the leaves into the values and data expected by the tree
    #[allow(clippy::type_complexity)]
    pub fn leaf_input(&self) -> Result<(Vec<Sum>, Vec<Bytes32>), Box<dyn std::error::Error>> {
        let mut values = Vec::with_capacity(self.leaves.len());
        let mut data = Vec::with_capacity(self.leaves.len());
        for leaf in &self.leaves {
            values.push(leaf.value_as_u64()?);
            data.push(leaf.data_as_bytes()?);
        }
        Ok((values, data))
    }
}

/// Expected error of an error test case
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    MismatchedLength,
    EmptyInput,
    SumOverflow,
}

impl ExpectedError {
    pub fn matches(&self, error: &TreeError) -> bool {
        matches!(
            (self, error),
            (Self::MismatchedLength, TreeError::MismatchedLength { .. })
                | (Self::EmptyInput, TreeError::EmptyInput)
                | (Self::SumOverflow, TreeError::SumOverflow)
        )
    }
}

/// Represents an error test case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorTestCase {
    pub comment: Option<String>,
    pub values: Vec<String>,
    pub data: Vec<String>,
    pub error: ExpectedError,
}

/// Represents the complete test vector file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestVectors {
    pub valid_test_cases: Vec<ValidTestCase>,
    pub error_test_cases: Vec<ErrorTestCase>,
}
