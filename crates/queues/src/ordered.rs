//! Queue kept sorted by each element's ordering value.

use std::collections::VecDeque;

use parking_lot::RwLock;
use tracing::trace;

use crate::{
    ordering::{insertion_index, window_position},
    sequence, ElementPredicate, ElementQueue, OrderingMode, QueueElement,
};

/// Queue sorted ascending or descending by [`QueueElement::ordering_value`].
///
/// Elements with equal keys keep their insertion order. Insertion runs a binary search for
/// the position and then shifts the tail, which is cheap for the near-sorted timestamps this
/// is used with.
///
/// Removal by identity reuses the insertion search as an estimate and only looks two
/// positions to either side of it. An element whose key was mutated after insertion, or
/// which sits behind more than two equal keys, is reported missing. Use
/// [`get_by_id`](ElementQueue::get_by_id) when a full scan is needed.
#[derive(Debug)]
pub struct OrderedQueue<T> {
    items: RwLock<VecDeque<T>>,
    mode: OrderingMode,
}

impl<T> OrderedQueue<T> {
    pub fn new(mode: OrderingMode) -> Self {
        Self {
            items: RwLock::new(VecDeque::new()),
            mode,
        }
    }

    /// Queue popping the smallest ordering value first.
    pub fn ascending() -> Self {
        Self::new(OrderingMode::Ascending)
    }

    /// Queue popping the largest ordering value first.
    pub fn descending() -> Self {
        Self::new(OrderingMode::Descending)
    }

    pub fn mode(&self) -> OrderingMode {
        self.mode
    }
}

impl<T: QueueElement> OrderedQueue<T> {
    /// Removes the first element with identity `id`, scanning the whole queue.
    ///
    /// Unlike [`remove`](ElementQueue::remove) this finds elements regardless of how many
    /// share their key.
    pub fn remove_by_id(&self, id: &str) -> Option<T> {
        let mut items = self.items.write();
        let pos = items.iter().position(|e| e.id() == id)?;
        items.remove(pos)
    }
}

impl<T> Default for OrderedQueue<T> {
    fn default() -> Self {
        Self::ascending()
    }
}

impl<T: QueueElement + Clone> ElementQueue<T> for OrderedQueue<T> {
    fn add(&self, item: T) -> usize {
        let mut items = self.items.write();
        let idx = insertion_index(&items, item.ordering_value(), self.mode);
        items.insert(idx, item);
        idx
    }

    fn pop_front(&self) -> Option<T> {
        self.items.write().pop_front()
    }

    fn pop_many(&self, max_results: usize) -> Vec<T> {
        sequence::pop_many(&mut self.items.write(), max_results)
    }

    fn peek_front(&self) -> Option<T> {
        self.items.read().front().cloned()
    }

    fn remove(&self, item: &T) -> bool {
        let mut items = self.items.write();
        match window_position(&items, item, self.mode) {
            Some(pos) => {
                items.remove(pos);
                true
            }
            None => {
                trace!(id = item.id(), "element not found near its ordering position");
                false
            }
        }
    }

    fn get_one(&self, item: &T) -> Option<T> {
        let items = self.items.read();
        window_position(&items, item, self.mode).map(|pos| items[pos].clone())
    }

    fn get_by_id(&self, id: &str) -> Option<T> {
        self.items.read().iter().find(|e| e.id() == id).cloned()
    }

    fn find<P: ElementPredicate<T>>(&self, predicate: Option<P>) -> Vec<T> {
        let Some(predicate) = predicate else {
            return Vec::new();
        };
        self.items
            .read()
            .iter()
            .filter(|e| predicate.evaluate(e))
            .cloned()
            .collect()
    }

    fn snapshot(&self) -> Vec<T> {
        self.items.read().iter().cloned().collect()
    }

    fn cut_before(&self, index: isize) -> Vec<T> {
        sequence::cut_before(&mut self.items.write(), index)
    }

    fn cut_after(&self, index: isize) -> Vec<T> {
        sequence::cut_after(&mut self.items.write(), index)
    }

    fn len(&self) -> usize {
        self.items.read().len()
    }

    fn dump(&self) -> String {
        sequence::dump(&self.items.read(), ", \n")
    }
}
