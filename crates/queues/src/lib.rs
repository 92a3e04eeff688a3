//! Concurrency-safe element queues.
//!
//! Two queue kinds share the [`ElementQueue`] surface:
//!
//! - [`OrderedQueue`] keeps elements sorted by [`QueueElement::ordering_value`], ascending or
//!   descending, with stable placement of equal keys.
//! - [`FifoQueue`] keeps arrival order.
//!
//! Both guard their contents with a reader/writer lock, so any number of threads may share
//! one queue behind an `Arc`.

mod element;
mod fifo;
mod ordered;
mod ordering;
mod queue;
mod sequence;
#[cfg(test)]
mod test_utils;

pub use element::{ElementPredicate, QueueElement};
pub use fifo::FifoQueue;
pub use ordered::OrderedQueue;
pub use ordering::OrderingMode;
pub use queue::ElementQueue;
