//! Arrival-order queue.

use std::collections::VecDeque;

use parking_lot::RwLock;

use crate::{sequence, ElementPredicate, ElementQueue, QueueElement};

/// Queue that keeps elements in the order they were added.
#[derive(Debug)]
pub struct FifoQueue<T> {
    items: RwLock<VecDeque<T>>,
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(VecDeque::new()),
        }
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: QueueElement> FifoQueue<T> {
    fn position(items: &VecDeque<T>, id: &str) -> Option<usize> {
        items.iter().position(|e| e.id() == id)
    }
}

impl<T: QueueElement + Clone> ElementQueue<T> for FifoQueue<T> {
    fn add(&self, item: T) -> usize {
        let mut items = self.items.write();
        items.push_back(item);
        items.len() - 1
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
        match Self::position(&items, item.id()) {
            Some(pos) => {
                items.remove(pos);
                true
            }
            None => false,
        }
    }

    fn get_one(&self, item: &T) -> Option<T> {
        self.get_by_id(item.id())
    }

    fn get_by_id(&self, id: &str) -> Option<T> {
        let items = self.items.read();
        Self::position(&items, id).map(|pos| items[pos].clone())
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
        sequence::dump(&self.items.read(), " ")
    }
}
