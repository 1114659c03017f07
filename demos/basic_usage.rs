//! Basic example of using the Merkle Sum Tree
//!
//! This example demonstrates:
//! - Building a tree from values and identifiers
//! - Getting the root hash and total
//! - Generating and verifying merkle proofs

use merklesum::{verify_proof, Sha256SumMerkleTree};
use sha2::Sha256;

fn main() {
    // Amounts and the identifiers they belong to
    let values = [100, 200, 300];
    let data = [[1; 32], [2; 32], [3; 32]];

    // Build the tree with 32-byte hashes using SHA256
    let tree = Sha256SumMerkleTree::new(&values, &data).unwrap();

    // Get the root hash and the total
    let root = tree.root();
    println!("Root hash: {}", hex::encode(root.hash()));
    println!("Total sum: {}", root.sum());
    println!("Nodes: {}", tree.node_count());

    // Get and verify a merkle proof for the first leaf
    let proof = tree.merkle_proof(0).unwrap();
    println!("Merkle proof length: {}", proof.len());
    println!("{}", proof);

    // The proof is self contained, only the root is needed to verify it
    let valid =
        verify_proof::<32, Sha256>(&data[0], values[0], &proof, root.hash(), root.sum()).unwrap();
    println!("Proof verification: {}", valid);

    // Claiming another amount for the same leaf fails
    let forged =
        verify_proof::<32, Sha256>(&data[0], 1_000, &proof, root.hash(), root.sum()).unwrap();
    println!("Forged amount verification: {}", forged);
}
