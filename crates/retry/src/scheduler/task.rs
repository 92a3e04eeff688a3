//! Background consumer that drains due entries at a fixed cadence.

use tokio::{
    sync::watch,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use super::RetryScheduler;

/// Consumer loop. Runs until the shutdown signal flips to `true`.
///
/// The first tick fires one interval after start, and a slow tick pushes the following ones
/// back rather than bunching them up.
pub(crate) async fn retry_consumer_task(
    scheduler: RetryScheduler,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let period = scheduler.config().tick_interval();
    let mut tick_interval = time::interval_at(Instant::now() + period, period);
    tick_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(tick_interval_ms = scheduler.config().tick_interval_ms, "retry consumer started");

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            _ = tick_interval.tick() => {}

            // The sender lives as long as the scheduler this task holds.
            Ok(()) = shutdown_rx.changed() => continue,
        }

        let report = scheduler.process_due().await;
        if report.dispatched > 0 {
            debug!(
                dispatched = report.dispatched,
                succeeded = report.succeeded,
                requeued = report.requeued,
                dropped = report.dropped,
                pending = scheduler.pending_count(),
                "retry tick"
            );
        }
    }

    scheduler.mark_stopped();
    info!(pending = scheduler.pending_count(), "retry consumer stopped");
}
