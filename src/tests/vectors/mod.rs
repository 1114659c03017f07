use std::path::PathBuf;
mod types;
use crate::{calc_root, tests::vectors::types::TestVectors, SumMerkleTree};
use sha2::Sha256;
use std::fs;

use types::parse_bytes32;

fn load_test_vectors() -> TestVectors {
    let path = PathBuf::from("src/tests/vectors/sum_tree.json");
    let json = fs::read_to_string(&path).unwrap();
    serde_json::from_str::<TestVectors>(&json).unwrap()
}

#[test]
fn test_valid_cases() {
    let test_vectors = load_test_vectors();
    for valid_case in &test_vectors.valid_test_cases {
        let comment = valid_case.comment.as_deref().unwrap_or("unnamed test");
        println!("Running test case: {}", comment);

        let (values, data) = valid_case.leaf_input().unwrap();
        let tree = SumMerkleTree::<32, Sha256>::new(&values, &data).unwrap();
        let expected_hash = parse_bytes32(&valid_case.root_hash).unwrap();
        let expected_sum = valid_case.root_sum.parse::<u64>().unwrap();

        // Verify the expected root hash, sum and shape
        assert_eq!(tree.root().hash(), expected_hash, "{}", comment);
        assert_eq!(tree.root().sum(), expected_sum, "{}", comment);
        assert_eq!(tree.node_count(), valid_case.node_count, "{}", comment);
        assert_eq!(tree.depth(), valid_case.depth, "{}", comment);

        let root = calc_root::<32, Sha256>(&values, &data).unwrap();
        assert_eq!(&root, tree.root(), "{}", comment);

        // Verify all inclusion proofs
        for proof_case in &valid_case.inclusion_proofs {
            let expected_proof = proof_case.to_proof().unwrap();
            let index = proof_case.leaf_index;
            assert_eq!(
                tree.merkle_proof(index).unwrap(),
                expected_proof,
                "{}: proof of leaf {}",
                comment,
                index
            );
            assert!(expected_proof
                .verify::<Sha256>(&data[index], values[index], expected_hash, expected_sum)
                .unwrap());
        }
    }
}

#[test]
fn test_error_cases() {
    let test_vectors = load_test_vectors();
    for error_case in &test_vectors.error_test_cases {
        let comment = error_case
            .comment
            .as_deref()
            .unwrap_or("unnamed error test");
        println!("Running error test case: {}", comment);

        let values = error_case
            .values
            .iter()
            .map(|value| value.parse::<u64>().unwrap())
            .collect::<Vec<_>>();
        let data = error_case
            .data
            .iter()
            .map(|data| parse_bytes32(data).unwrap())
            .collect::<Vec<_>>();

        let error = SumMerkleTree::<32, Sha256>::new(&values, &data).unwrap_err();
        assert!(error_case.error.matches(&error), "{}: {:?}", comment, error);
        let error = calc_root::<32, Sha256>(&values, &data).unwrap_err();
        assert!(error_case.error.matches(&error), "{}: {:?}", comment, error);
    }
}
