//! Operation surface shared by [`OrderedQueue`](crate::OrderedQueue) and
//! [`FifoQueue`](crate::FifoQueue).

use crate::{ElementPredicate, QueueElement};

/// A lock-guarded sequence of elements.
///
/// Mutating operations take the exclusive lock, read-only ones take the shared lock. None of
/// them block on I/O.
pub trait ElementQueue<T: QueueElement + Clone> {
    /// Inserts `item` and returns the position it landed at.
    fn add(&self, item: T) -> usize;

    /// Removes and returns the head element.
    fn pop_front(&self) -> Option<T>;

    /// Removes and returns up to `max_results` head elements, in order.
    fn pop_many(&self, max_results: usize) -> Vec<T>;

    /// Returns a copy of the head element without removing it.
    fn peek_front(&self) -> Option<T>;

    /// Removes the element sharing `item`'s identity. Returns whether one was removed.
    fn remove(&self, item: &T) -> bool;

    /// Returns the stored element sharing `item`'s identity, located the same way
    /// [`remove`](Self::remove) locates it.
    fn get_one(&self, item: &T) -> Option<T>;

    /// Linear lookup by identity.
    fn get_by_id(&self, id: &str) -> Option<T>;

    /// Returns every element the predicate accepts, in queue order. A missing predicate
    /// matches nothing.
    fn find<P: ElementPredicate<T>>(&self, predicate: Option<P>) -> Vec<T>;

    /// Copy of the full sequence.
    fn snapshot(&self) -> Vec<T>;

    /// Removes and returns the elements at positions `< index`.
    fn cut_before(&self, index: isize) -> Vec<T>;

    /// Removes and returns the elements at positions `> index`.
    fn cut_after(&self, index: isize) -> Vec<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Debug strings of all elements, joined.
    fn dump(&self) -> String;
}
