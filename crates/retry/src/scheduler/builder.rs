use std::{
    fmt,
    sync::{atomic::AtomicBool, Arc},
};

use retryq_queues::OrderedQueue;
use tokio::{runtime::Handle, sync::watch};

use super::{RetryScheduler, SchedulerInner};
use crate::{
    action::{FailureLogger, RetryAction, TracingFailureLogger},
    clock::{Clock, SystemClock},
    config::SchedulerConfig,
    error::{RetryError, RetryResult},
};

/// Builder for [`RetryScheduler`].
pub struct RetrySchedulerBuilder {
    action: Arc<dyn RetryAction>,
    config: SchedulerConfig,
    failure_logger: Option<Arc<dyn FailureLogger>>,
    clock: Option<Arc<dyn Clock>>,
    runtime: Option<Handle>,
}

impl fmt::Debug for RetrySchedulerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetrySchedulerBuilder")
            .field("config", &self.config)
            .field("has_failure_logger", &self.failure_logger.is_some())
            .field("has_clock", &self.clock.is_some())
            .field("has_runtime", &self.runtime.is_some())
            .finish_non_exhaustive()
    }
}

impl RetrySchedulerBuilder {
    pub(super) fn new(action: Arc<dyn RetryAction>) -> Self {
        Self {
            action,
            config: SchedulerConfig::default(),
            failure_logger: None,
            clock: None,
            runtime: None,
        }
    }

    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default [`TracingFailureLogger`].
    pub fn with_failure_logger(mut self, logger: impl FailureLogger) -> Self {
        self.failure_logger = Some(Arc::new(logger));
        self
    }

    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Runtime the consumer is spawned on. Defaults to the runtime `build` is called from.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn build(self) -> RetryResult<RetryScheduler> {
        self.config.validate()?;

        let runtime = match self.runtime {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| RetryError::NoRuntime)?,
        };

        let failure_logger: Arc<dyn FailureLogger> = match self.failure_logger {
            Some(logger) => logger,
            None => Arc::new(TracingFailureLogger),
        };
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };
        let (shutdown_tx, _) = watch::channel(false);

        let inner = SchedulerInner {
            config: self.config,
            queue: OrderedQueue::ascending(),
            action: self.action,
            failure_logger,
            clock,
            runtime,
            running: AtomicBool::new(false),
            shutdown_tx,
        };

        Ok(RetryScheduler {
            inner: Arc::new(inner),
        })
    }
}
