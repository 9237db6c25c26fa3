use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use hash_comparison::catalog::{self, HarnessVisitor};
use hash_comparison::{Algorithm, BenchConfig, Harness};

struct Register<'a, 'c, M: Measurement> {
    group: &'a mut BenchmarkGroup<'c, M>,
}

impl<'a, 'c, M: Measurement> HarnessVisitor for Register<'a, 'c, M> {
    fn visit_harness<A: Algorithm>(&mut self, harness: Harness<A>) {
        self.group
            .throughput(Throughput::Bytes(harness.bytes_per_iteration()));
        self.group.bench_with_input(
            BenchmarkId::new(harness.name(), harness.input().len()),
            &harness,
            |b, harness| b.iter(|| harness.iteration()),
        );
    }
}

fn register_catalog<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    let skipped = catalog::visit_prepared(len, &mut Register { group });
    if !skipped.is_empty() {
        log::warn!("{} entries skipped over {} bytes", skipped.len(), len);
    }
}

/// The fixed comparison: every entry over the same 8 zero bytes.
fn bench_catalog_comparison(crit: &mut Criterion, config: &BenchConfig) {
    let mut group = crit.benchmark_group("Hash Comparison");
    register_catalog(&mut group, config.buffer_size());
    group.finish();
}

fn bench_catalog_sweep(crit: &mut Criterion, config: &BenchConfig) {
    let mut group = crit.benchmark_group("Hash Comparison Sweep");
    for &len in config.sweep_sizes() {
        register_catalog(&mut group, len);
    }
    group.finish();
}

pub fn group(crit: &mut Criterion) {
    let config = BenchConfig::from_env_or_default();
    log::info!(
        "comparing {} hashes over {} bytes, sweep {:?}",
        catalog::ENTRY_NAMES.len(),
        config.buffer_size(),
        config.sweep_sizes()
    );

    bench_catalog_comparison(crit, &config);
    bench_catalog_sweep(crit, &config);
}
