//! Deferred retries for failed outbound requests.
//!
//! A [`RetryScheduler`] owns a time-ordered queue of [`RetryEntry`]s. Failed requests are
//! queued with a backoff delay and re-sent through a caller-supplied [`RetryAction`] by a
//! background consumer until they succeed or exhaust their budget.

mod action;
mod clock;
mod config;
mod entry;
mod error;
mod options;
mod request;
mod scheduler;

pub use action::{FailureKind, FailureLogger, FailureRecord, RetryAction, TracingFailureLogger};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{retry_delay_secs, SchedulerConfig};
pub use entry::RetryEntry;
pub use error::{DispatchFailure, RetryError, RetryResult};
pub use options::{ProxyOptions, RequestOptions, TlsOptions};
pub use request::RetryRequest;
pub use scheduler::{RetryDecision, RetryScheduler, RetrySchedulerBuilder, TickReport};
