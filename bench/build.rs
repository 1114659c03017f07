use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use merklesum::{calc_root, Bytes32, Sha256SumMerkleTree, Sum};
use sha2::Sha256;

pub fn generate_random_leaves(num_leaves: usize) -> (Vec<Sum>, Vec<Bytes32>) {
    let values = (0..num_leaves)
        .map(|_| rand::random::<u32>() as Sum)
        .collect();
    let data = (0..num_leaves).map(|_| rand::random()).collect();
    (values, data)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sum Merkle Tree Construction");

    for num_leaves in [100, 1_000, 10_000] {
        let (values, data) = generate_random_leaves(num_leaves);

        // Benchmark the full tree construction
        group.bench_with_input(
            BenchmarkId::new("Full Tree", num_leaves),
            &num_leaves,
            |b, _| b.iter(|| black_box(Sha256SumMerkleTree::new(&values, &data)).unwrap()),
        );

        // Benchmark the root only computation
        group.bench_with_input(
            BenchmarkId::new("Root Only", num_leaves),
            &num_leaves,
            |b, _| b.iter(|| black_box(calc_root::<32, Sha256>(&values, &data)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
