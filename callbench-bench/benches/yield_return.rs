use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use callbench_chain::yielder::RETURN_DEPTHS;
use callbench_chain::Yielder;
use callbench_core::HarnessConfig;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

const PARAM_COUNT: usize = 3;

fn configured() -> Criterion {
    let config = HarnessConfig::default();
    Criterion::default()
        .warm_up_time(config.total_warmup())
        .measurement_time(config.total_measurement())
        .sample_size(config.samples())
}

fn bench_yield_return(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_return");
    for &depth in RETURN_DEPTHS {
        let yielder = Yielder::new(PARAM_COUNT, depth).unwrap();
        group.bench_with_input(BenchmarkId::new("noYielding", depth), &yielder, |b, y| {
            b.iter_batched(
                || y.yield_and_return(false),
                |mut cont| assert!(cont.run()),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(
            BenchmarkId::new("yieldAtTheBottomAndReturn", depth),
            &yielder,
            |b, y| {
                b.iter_batched(
                    || y.yield_and_return(true),
                    |mut cont| {
                        // descend to the yield, then resume and unwind
                        assert!(!cont.run());
                        assert!(cont.run());
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = configured();
    targets = bench_yield_return
}
criterion_main!(benches);
