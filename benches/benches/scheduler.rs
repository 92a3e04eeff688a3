//! Benchmarks for queueing and draining retries through [`RetryScheduler`].

use std::hint::black_box;

use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
#[allow(
    unused_imports,
    clippy::allow_attributes,
    reason = "used by the queue benchmark"
)]
use retryq_benchmarks as _;
#[allow(
    unused_imports,
    clippy::allow_attributes,
    reason = "used by the queue benchmark"
)]
use retryq_queues as _;
use retryq_retry::{
    DispatchFailure, FailureLogger, FailureRecord, ManualClock, RequestOptions,
    RetryAction, RetryRequest, RetryScheduler, SchedulerConfig,
};
use tokio::runtime::Runtime;

/// Pending entry counts to test.
const COUNTS: &[usize] = &[10, 100, 1_000];

#[derive(Debug)]
struct NoopAction;

#[async_trait]
impl RetryAction for NoopAction {
    async fn dispatch(&self, _request: &RetryRequest, _attempt: u32) -> Result<(), DispatchFailure> {
        Ok(())
    }
}

/// Keeps failure logging out of the measurement.
#[derive(Debug)]
struct SilentLogger;

impl FailureLogger for SilentLogger {
    fn log_failure(&self, _record: &FailureRecord<'_>) {}
}

fn scheduler(runtime: &Runtime, clock: &ManualClock) -> RetryScheduler {
    RetryScheduler::builder(NoopAction)
        .with_config(SchedulerConfig {
            tick_interval_ms: 3_600_000,
            ..Default::default()
        })
        .with_clock(clock.clone())
        .with_failure_logger(SilentLogger)
        .with_runtime(runtime.handle().clone())
        .build()
        .expect("valid scheduler config")
}

fn requests(count: usize) -> Vec<RetryRequest> {
    (0..count)
        .map(|i| {
            RetryRequest::new(
                "POST",
                format!("http://bench/{i}"),
                "{}",
                RequestOptions::json().with_retry_budget(8),
            )
        })
        .collect()
}

fn bench_schedule_and_drain(c: &mut Criterion) {
    let runtime = Runtime::new().expect("tokio runtime");
    let failure = DispatchFailure::new("unavailable").with_status(503);
    let mut group = c.benchmark_group("schedule_and_drain");

    for &count in COUNTS {
        let batch = requests(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &batch, |b, batch| {
            b.iter(|| {
                let clock = ManualClock::new(0);
                let sched = scheduler(&runtime, &clock);
                for (i, request) in batch.iter().enumerate() {
                    black_box(sched.schedule_failure(request.clone(), (i % 6) as u32, &failure));
                }
                clock.advance(60);
                let report = runtime.block_on(sched.process_due());
                sched.shutdown();
                black_box(report)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schedule_and_drain);
criterion_main!(benches);
