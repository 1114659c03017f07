use criterion::{black_box, criterion_group, criterion_main, Criterion};
use merklesum::{verify_proof, Bytes32, Proof, Sha256SumMerkleTree, Sum};
use sha2::Sha256;

pub fn generate_random_leaves(num_leaves: usize) -> (Vec<Sum>, Vec<Bytes32>) {
    let values = (0..num_leaves)
        .map(|_| rand::random::<u32>() as Sum)
        .collect();
    let data = (0..num_leaves).map(|_| rand::random()).collect();
    (values, data)
}

fn bench_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sum Merkle Tree Proof Generation");

    // Setup a tree with 1000 leaves
    let (values, data) = generate_random_leaves(1_000);
    let tree = Sha256SumMerkleTree::new(&values, &data).unwrap();

    group.bench_function("All Leaves", |b| {
        b.iter(|| {
            for index in 0..tree.leaf_count() {
                black_box(tree.merkle_proof(index)).unwrap();
            }
        })
    });

    group.finish();
}

fn bench_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sum Merkle Tree Proof Verification");

    let (values, data) = generate_random_leaves(1_000);
    let tree = Sha256SumMerkleTree::new(&values, &data).unwrap();
    let root = *tree.root();
    let proofs = (0..tree.leaf_count())
        .map(|index| tree.merkle_proof(index).unwrap())
        .collect::<Vec<Proof<32>>>();

    group.bench_function("All Leaves", |b| {
        b.iter(|| {
            for (index, proof) in proofs.iter().enumerate() {
                let valid = verify_proof::<32, Sha256>(
                    &data[index],
                    values[index],
                    proof,
                    root.hash(),
                    root.sum(),
                )
                .unwrap();
                assert!(black_box(valid));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_proof_generation, bench_proof_verification);
criterion_main!(benches);
