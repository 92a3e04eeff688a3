use retryq_queues::QueueElement;
use uuid::Uuid;

use crate::request::RetryRequest;

/// A failed request waiting in the scheduler for its next attempt.
#[derive(Debug, Clone)]
pub struct RetryEntry {
    id: String,
    request: RetryRequest,
    attempt_count: u32,
    trigger_timestamp: i64,
}

impl RetryEntry {
    pub(crate) fn new(request: RetryRequest, attempt_count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            request,
            attempt_count,
            trigger_timestamp: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn request(&self) -> &RetryRequest {
        &self.request
    }

    /// Number of retries already dispatched for this request.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Unix second at or after which the next attempt may run.
    pub fn trigger_timestamp(&self) -> i64 {
        self.trigger_timestamp
    }

    pub fn is_due(&self, now_secs: i64) -> bool {
        self.trigger_timestamp <= now_secs
    }

    pub(crate) fn set_trigger_timestamp(&mut self, trigger_timestamp: i64) {
        self.trigger_timestamp = trigger_timestamp;
    }

    /// Records one more dispatched retry.
    pub(crate) fn bump_attempt(&mut self) {
        self.attempt_count = self.attempt_count.saturating_add(1);
    }
}

impl QueueElement for RetryEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn ordering_value(&self) -> i64 {
        self.trigger_timestamp
    }

    fn debug_string(&self) -> String {
        format!(
            "{} {} {} attempt={} trigger={}",
            self.id,
            self.request.method(),
            self.request.url(),
            self.attempt_count,
            self.trigger_timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use retryq_queues::{ElementQueue, OrderedQueue};

    use super::*;
    use crate::options::RequestOptions;

    fn entry(url: &str, trigger: i64) -> RetryEntry {
        let request = RetryRequest::new("GET", url, "", RequestOptions::new());
        let mut entry = RetryEntry::new(request, 0);
        entry.set_trigger_timestamp(trigger);
        entry
    }

    #[test]
    fn test_same_url_gets_distinct_ids() {
        let a = entry("http://x", 1);
        let b = entry("http://x", 1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_orders_by_trigger() {
        let queue: OrderedQueue<RetryEntry> = OrderedQueue::ascending();
        queue.add(entry("http://late", 30));
        queue.add(entry("http://early", 10));
        let first = queue.pop_front().unwrap();
        assert_eq!(first.request().url(), "http://early");
        assert!(first.is_due(10));
        assert!(!first.is_due(9));
    }

    #[test]
    fn test_bump_attempt_and_debug_string() {
        let mut e = entry("http://x", 42);
        e.bump_attempt();
        assert_eq!(e.attempt_count(), 1);
        let text = e.debug_string();
        assert!(text.contains("GET http://x attempt=1 trigger=42"));
    }
}
