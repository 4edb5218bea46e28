// Chain benchmarks for the Linkchain protocol.
//
// Covers digest computation at several payload sizes, append throughput,
// snapshot cost, and a full audit over chains of increasing length.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use linkchain_protocol::storage::audit::verify_chain;
use linkchain_protocol::storage::block::Block;
use linkchain_protocol::storage::chain::Chain;

fn build_chain(len: usize) -> Chain {
    let chain = Chain::new();
    for i in 0..len {
        chain.append(format!("record-{:06}", i));
    }
    chain
}

fn bench_compute_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("block/compute_hash");
    let prev = Block::new("", 1, "genesis");

    for size in [16usize, 256, 4096, 65536] {
        let data = "x".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Block::compute_hash(prev.hash(), 2, data));
        });
    }

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("chain/append_1000", |b| {
        b.iter(|| build_chain(1_000));
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/snapshot");

    for len in [10usize, 1_000, 10_000] {
        let chain = build_chain(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &chain, |b, chain| {
            b.iter(|| chain.snapshot());
        });
    }

    group.finish();
}

fn bench_verify_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("audit/verify_chain");

    for len in [10usize, 100, 1_000] {
        let blocks = build_chain(len).snapshot();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &blocks, |b, blocks| {
            b.iter(|| verify_chain(blocks).expect("chain is valid"));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_hash,
    bench_append,
    bench_snapshot,
    bench_verify_chain
);
criterion_main!(benches);
