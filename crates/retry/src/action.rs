//! Seams the scheduler calls out through: sending a request and reporting failures.

use async_trait::async_trait;
use tracing::{error, warn};

use crate::{entry::RetryEntry, error::DispatchFailure, request::RetryRequest};

/// Sends a request once.
///
/// `attempt` is the number of retries this call represents, 0 for the first attempt.
#[async_trait]
pub trait RetryAction: Send + Sync + 'static {
    async fn dispatch(&self, request: &RetryRequest, attempt: u32) -> Result<(), DispatchFailure>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A single attempt failed.
    Dispatch,
    /// The last allowed attempt failed and the request was dropped.
    BudgetExhausted,
}

/// Everything known about a failure at the point it is reported.
#[derive(Debug, Clone, Copy)]
pub struct FailureRecord<'a> {
    pub kind: FailureKind,
    pub method: &'a str,
    pub url: &'a str,
    pub status: Option<u16>,
    pub error: &'a str,
    pub body: &'a [u8],
    pub attempt: u32,
    pub retry_budget: u32,
}

impl<'a> FailureRecord<'a> {
    pub(crate) fn new(kind: FailureKind, entry: &'a RetryEntry, failure: &'a DispatchFailure) -> Self {
        let request = entry.request();
        Self {
            kind,
            method: request.method(),
            url: request.url(),
            status: failure.status,
            error: &failure.error,
            body: &failure.body,
            attempt: entry.attempt_count(),
            retry_budget: request.retry_budget(),
        }
    }
}

/// Receives failure reports from the scheduler.
pub trait FailureLogger: Send + Sync + 'static {
    fn log_failure(&self, record: &FailureRecord<'_>);
}

/// Writes failure reports as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureLogger;

impl FailureLogger for TracingFailureLogger {
    fn log_failure(&self, record: &FailureRecord<'_>) {
        let body = String::from_utf8_lossy(record.body);
        match record.kind {
            FailureKind::Dispatch => warn!(
                method = record.method,
                url = record.url,
                status = ?record.status,
                attempt = record.attempt,
                error = record.error,
                %body,
                "request failed"
            ),
            FailureKind::BudgetExhausted => error!(
                method = record.method,
                url = record.url,
                status = ?record.status,
                attempt = record.attempt,
                retry_budget = record.retry_budget,
                error = record.error,
                %body,
                "retry budget exhausted, dropping request"
            ),
        }
    }
}
