//! Element and predicate contracts for queue contents.

use std::sync::Arc;

/// Capabilities an item must expose to be stored in a queue.
pub trait QueueElement {
    /// Identity used for removal and lookup.
    ///
    /// Should be unique among the live elements of one queue. Queues do not enforce this.
    fn id(&self) -> &str;

    /// Sort key used by [`OrderedQueue`](crate::OrderedQueue).
    fn ordering_value(&self) -> i64;

    /// Human readable form for diagnostics.
    fn debug_string(&self) -> String;
}

impl<E: QueueElement + ?Sized> QueueElement for Arc<E> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn ordering_value(&self) -> i64 {
        (**self).ordering_value()
    }

    fn debug_string(&self) -> String {
        (**self).debug_string()
    }
}

impl<E: QueueElement + ?Sized> QueueElement for Box<E> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn ordering_value(&self) -> i64 {
        (**self).ordering_value()
    }

    fn debug_string(&self) -> String {
        (**self).debug_string()
    }
}

/// Caller supplied condition evaluated by `find`.
pub trait ElementPredicate<T> {
    fn evaluate(&self, element: &T) -> bool;
}

impl<T, F> ElementPredicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn evaluate(&self, element: &T) -> bool {
        self(element)
    }
}
