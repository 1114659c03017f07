//! Example of implementing a custom hasher for the Merkle Sum Tree
//!
//! This example demonstrates:
//! - Creating a custom hasher implementation
//! - Using it with the tree
//! - Basic tree operations with the custom hasher

use merklesum::{Hasher, Sha256SumMerkleTree, SumMerkleTree};
use sha2::{Digest, Sha256};

// Custom hasher that uses SHA256 but adds a prefix to the input
#[derive(Clone)]
struct PrefixedSha256;

impl Hasher<32> for PrefixedSha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        // Add a custom prefix to the input
        hasher.update(b"custom_prefix:");
        hasher.update(data);
        hasher.finalize().into()
    }
}

fn main() {
    let values = [100, 200, 300];
    let data = [[1; 32], [2; 32], [3; 32]];

    // Create a new tree with our custom hasher
    let tree = SumMerkleTree::<32, PrefixedSha256>::new(&values, &data).unwrap();
    let root = tree.root();
    println!("Root hash with custom hasher: {}", hex::encode(root.hash()));

    // Compare with standard SHA256
    let standard_tree = Sha256SumMerkleTree::new(&values, &data).unwrap();
    let standard_root = standard_tree.root();
    println!(
        "Root hash with standard SHA256: {}",
        hex::encode(standard_root.hash())
    );

    // Proofs must be verified with the hasher the tree was built with
    let proof = tree.merkle_proof(2).unwrap();
    println!(
        "Verification with custom hasher: {}",
        proof
            .verify::<PrefixedSha256>(&data[2], values[2], root.hash(), root.sum())
            .unwrap()
    );
    println!(
        "Verification with standard SHA256: {}",
        proof
            .verify::<Sha256>(&data[2], values[2], root.hash(), root.sum())
            .unwrap()
    );

    // Note that the hashes are different due to our custom prefix, while the sums match
    println!("\nThe hashes are different because our custom hasher adds a prefix to the input.");
    println!("Both trees hold the same total: {}", standard_root.sum());
}
