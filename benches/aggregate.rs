use acct_fingerprint::records::generate;
use acct_fingerprint::{HashAlgorithm, LinearAggregator, MerkleAggregator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_aggregators(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for count in [1_000usize, 20_000] {
        let records = generate(count, 32, 0);

        for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
            let merkle = MerkleAggregator::new(algorithm);
            let linear = LinearAggregator::new(algorithm);

            group.bench_with_input(
                BenchmarkId::new(format!("adh/{}", algorithm), count),
                &records,
                |b, records| b.iter(|| merkle.root(black_box(records))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("alh/{}", algorithm), count),
                &records,
                |b, records| b.iter(|| linear.checksum(black_box(records))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_aggregators);
criterion_main!(benches);
