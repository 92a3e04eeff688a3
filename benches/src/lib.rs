//! Benchmarks for the retryq queues and retry scheduler.
//!
//! This crate holds the shared data generators; the benchmarks live under `benches/`.

#[allow(
    unused_imports,
    clippy::allow_attributes,
    reason = "used by the benchmark targets"
)]
use {async_trait as _, criterion as _, retryq_retry as _, tokio as _};

pub mod data;
