//! Time-ordered retry scheduling.

mod builder;
mod task;

use std::{
    fmt,
    panic::AssertUnwindSafe,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

pub use builder::RetrySchedulerBuilder;
use futures::FutureExt;
use retryq_queues::{ElementQueue, OrderedQueue};
use tokio::{runtime::Handle, sync::watch};
use tracing::{debug, error, info, warn};

use crate::{
    action::{FailureKind, FailureLogger, FailureRecord, RetryAction},
    clock::Clock,
    config::SchedulerConfig,
    entry::RetryEntry,
    error::{DispatchFailure, RetryError, RetryResult},
    request::RetryRequest,
};

/// What happened to a request after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Queued for another attempt at `trigger_timestamp` (Unix seconds).
    Requeued { trigger_timestamp: i64 },
    /// The retry budget is used up; the request was dropped.
    Exhausted,
    /// The request has no retry budget.
    NotRetryable,
}

/// Counters for one pass over the due entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub dispatched: usize,
    pub succeeded: usize,
    pub requeued: usize,
    pub dropped: usize,
}

struct SchedulerInner {
    config: SchedulerConfig,
    queue: OrderedQueue<RetryEntry>,
    action: Arc<dyn RetryAction>,
    failure_logger: Arc<dyn FailureLogger>,
    clock: Arc<dyn Clock>,
    runtime: Handle,
    running: AtomicBool,
    shutdown_tx: watch::Sender<bool>,
}

/// Re-sends failed requests with backoff until they succeed or run out of budget.
///
/// Pending entries live in an ascending [`OrderedQueue`] keyed by their trigger time. A
/// single consumer task is spawned the first time anything is queued; each tick it pops
/// every due entry and dispatches them one after another.
///
/// Cloning yields another handle to the same scheduler.
#[derive(Clone)]
pub struct RetryScheduler {
    inner: Arc<SchedulerInner>,
}

impl fmt::Debug for RetryScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryScheduler")
            .field("config", &self.inner.config)
            .field("pending", &self.inner.queue.len())
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl RetryScheduler {
    pub fn builder(action: impl RetryAction) -> RetrySchedulerBuilder {
        RetrySchedulerBuilder::new(Arc::new(action))
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.inner.config
    }

    /// Makes the first attempt of `request`, queueing it for retry if that fails.
    ///
    /// The error carries the first failure even when a retry was queued.
    pub async fn execute(&self, request: RetryRequest) -> RetryResult<()> {
        match self.dispatch(&request, 0).await {
            Ok(()) => Ok(()),
            Err(failure) => {
                self.handle_failure(RetryEntry::new(request, 0), &failure);
                Err(RetryError::Dispatch(failure))
            }
        }
    }

    /// Applies the retry rule to a request whose attempt was made by the caller.
    ///
    /// `attempts_done` is how many retries of this request already ran.
    pub fn schedule_failure(
        &self,
        request: RetryRequest,
        attempts_done: u32,
        failure: &DispatchFailure,
    ) -> RetryDecision {
        self.handle_failure(RetryEntry::new(request, attempts_done), failure)
    }

    /// Dispatches every entry due at the clock's current time.
    ///
    /// Stops at the first entry that is not due yet and puts it back.
    pub async fn process_due(&self) -> TickReport {
        let now = self.inner.clock.now_secs();
        let mut report = TickReport::default();

        while let Some(mut entry) = self.inner.queue.pop_front() {
            if !entry.is_due(now) {
                self.inner.queue.add(entry);
                break;
            }

            entry.bump_attempt();
            report.dispatched += 1;
            let attempt = entry.attempt_count();

            match self.dispatch(entry.request(), attempt).await {
                Ok(()) => {
                    report.succeeded += 1;
                    info!(
                        method = entry.request().method(),
                        url = entry.request().url(),
                        retries = attempt,
                        "request succeeded after retrying"
                    );
                }
                Err(failure) => match self.handle_failure(entry, &failure) {
                    RetryDecision::Requeued { .. } => report.requeued += 1,
                    RetryDecision::Exhausted | RetryDecision::NotRetryable => report.dropped += 1,
                },
            }
        }

        report
    }

    /// Copy of the pending entries, soonest first.
    pub fn pending(&self) -> Vec<RetryEntry> {
        self.inner.queue.snapshot()
    }

    pub fn pending_count(&self) -> usize {
        self.inner.queue.len()
    }

    /// Drops a pending entry. Returns `false` if it is not queued, including while it is
    /// being dispatched.
    pub fn cancel(&self, id: &str) -> bool {
        // Entries failing within the same second share a key, so a windowed lookup can miss.
        let Some(entry) = self.inner.queue.remove_by_id(id) else {
            return false;
        };
        debug!(%id, url = entry.request().url(), "cancelled pending retry");
        true
    }

    /// Starts the consumer if it is not running. Calling this more than once is harmless.
    pub fn start(&self) {
        if *self.inner.shutdown_tx.borrow() {
            debug!("retry scheduler is shut down; consumer not started");
            return;
        }
        if self.inner.running.swap(true, Ordering::AcqRel) {
            return;
        }

        let shutdown_rx = self.inner.shutdown_tx.subscribe();
        self.inner
            .runtime
            .spawn(task::retry_consumer_task(self.clone(), shutdown_rx));
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::Acquire)
    }

    /// Stops the consumer after its current tick. Pending entries stay queued and the
    /// consumer is not started again.
    pub fn shutdown(&self) {
        if !self.inner.shutdown_tx.send_replace(true) {
            info!(pending = self.pending_count(), "retry scheduler shutting down");
        }
    }

    pub(crate) fn mark_stopped(&self) {
        self.inner.running.store(false, Ordering::Release);
    }

    /// Runs the action, turning a panic into a failure.
    async fn dispatch(&self, request: &RetryRequest, attempt: u32) -> Result<(), DispatchFailure> {
        let fut = self.inner.action.dispatch(request, attempt);
        match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => {
                let failure = DispatchFailure::from_panic(payload);
                error!(
                    method = request.method(),
                    url = request.url(),
                    attempt,
                    error = %failure.error,
                    "retry action panicked"
                );
                Err(failure)
            }
        }
    }

    fn handle_failure(&self, mut entry: RetryEntry, failure: &DispatchFailure) -> RetryDecision {
        let logger = &self.inner.failure_logger;
        logger.log_failure(&FailureRecord::new(FailureKind::Dispatch, &entry, failure));

        let options = entry.request().options();
        if !options.is_retryable() {
            return RetryDecision::NotRetryable;
        }
        if entry.attempt_count() >= options.retry_budget {
            logger.log_failure(&FailureRecord::new(
                FailureKind::BudgetExhausted,
                &entry,
                failure,
            ));
            return RetryDecision::Exhausted;
        }

        let delay = self.inner.config.retry_delay_secs(entry.attempt_count());
        let trigger_timestamp = self
            .inner
            .clock
            .now_secs()
            .saturating_add(i64::try_from(delay).unwrap_or(i64::MAX));
        entry.set_trigger_timestamp(trigger_timestamp);

        if *self.inner.shutdown_tx.borrow() {
            warn!(
                url = entry.request().url(),
                "retry scheduler is shut down; request queued but will not be retried"
            );
        } else {
            debug!(
                url = entry.request().url(),
                attempt = entry.attempt_count(),
                delay_secs = delay,
                trigger_timestamp,
                "queued request for retry"
            );
        }

        self.inner.queue.add(entry);
        self.start();

        RetryDecision::Requeued { trigger_timestamp }
    }
}
