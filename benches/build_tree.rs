mod utils;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use edge_tree::EdgeTable;
use utils::get_random_ring;

pub fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");
    for &size in [64, 1024, 16384].iter() {
        let coords = get_random_ring(size, 17);
        group.bench_with_input(BenchmarkId::new("ring_order", size), &coords, |b, coords| {
            b.iter(|| EdgeTable::from_ring(coords.clone()).unwrap().build())
        });
        group.bench_with_input(BenchmarkId::new("shuffled", size), &coords, |b, coords| {
            b.iter(|| {
                EdgeTable::from_ring_shuffled(coords.clone(), 5)
                    .unwrap()
                    .build()
            })
        });
        group.bench_with_input(BenchmarkId::new("build_rstar", size), &coords, |b, coords| {
            b.iter(|| utils::other_impls::build_rstar(coords))
        });
    }

    group.finish();
}

criterion_group!(benches, construction_benchmark);
criterion_main!(benches);
