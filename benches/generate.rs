use std::io;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};
use u256_vectors::{write_vectors, OverflowPolicy};

const BATCH: u64 = 10_000;

fn generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    let mut g = c.benchmark_group("vectors");
    g.throughput(Throughput::Elements(BATCH));
    g.bench_function("write-sink", |b| {
        b.iter(|| {
            write_vectors(&mut rng, &mut io::sink(), BATCH, OverflowPolicy::Wrap)
                .unwrap()
        })
    });
    g.finish();
}

criterion_group!(benches, generate);
criterion_main!(benches);
