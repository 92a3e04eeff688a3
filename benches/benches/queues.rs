//! Benchmarks for [`OrderedQueue`] and [`FifoQueue`] operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use retryq_benchmarks::data::{elements, BenchElement, KeyPattern};
use retryq_queues::{ElementQueue, FifoQueue, OrderedQueue};
#[allow(
    unused_imports,
    clippy::allow_attributes,
    reason = "used by the scheduler benchmark"
)]
use {async_trait as _, retryq_retry as _, tokio as _};

/// Queue sizes to test across benchmarks.
const SIZES: &[usize] = &[10, 100, 1_000, 10_000];

fn filled_ordered(items: &[BenchElement]) -> OrderedQueue<BenchElement> {
    let queue = OrderedQueue::ascending();
    for item in items {
        queue.add(item.clone());
    }
    queue
}

fn bench_ordered_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_add");

    for pattern in [KeyPattern::NearlySorted, KeyPattern::Random] {
        for &size in SIZES {
            let items = elements(size, pattern);
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(pattern.name(), size), &items, |b, items| {
                b.iter(|| black_box(filled_ordered(items)));
            });
        }
    }

    group.finish();
}

fn bench_ordered_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_remove");

    for &size in SIZES {
        let items = elements(size, KeyPattern::Random);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter_batched(
                || filled_ordered(items),
                |queue| {
                    for item in items {
                        black_box(queue.remove(item));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_fifo_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("fifo_remove");

    for &size in &SIZES[..3] {
        let items = elements(size, KeyPattern::Random);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter_batched(
                || {
                    let queue = FifoQueue::<BenchElement>::new();
                    for item in items {
                        queue.add(item.clone());
                    }
                    queue
                },
                |queue| {
                    for item in items.iter().rev() {
                        black_box(queue.remove(item));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_pop_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_pop_many");

    for &size in SIZES {
        let items = elements(size, KeyPattern::NearlySorted);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter_batched(
                || filled_ordered(items),
                |queue| {
                    while !queue.pop_many(64).is_empty() {}
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ordered_add,
    bench_ordered_remove,
    bench_fifo_remove,
    bench_pop_many
);
criterion_main!(benches);
