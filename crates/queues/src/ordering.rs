//! Ordering mode and the positional search shared by insertion and removal.

use std::collections::VecDeque;

use crate::QueueElement;

/// Number of positions examined on each side of the insertion estimate when looking an
/// element up by identity.
pub(crate) const LOOKUP_WINDOW: usize = 2;

/// Sort direction of an [`OrderedQueue`](crate::OrderedQueue), fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderingMode {
    /// Smallest ordering value first.
    #[default]
    Ascending,
    /// Largest ordering value first.
    Descending,
}

impl OrderingMode {
    /// Returns true if an element keyed `value` belongs strictly before one keyed `other`.
    pub fn precedes(self, value: i64, other: i64) -> bool {
        match self {
            Self::Ascending => value < other,
            Self::Descending => value > other,
        }
    }
}

/// Finds where an element keyed `value` should be inserted.
///
/// The result is the position just after every element that does not strictly follow
/// `value`, so equal keys keep their insertion order.
pub(crate) fn insertion_index<T: QueueElement>(
    items: &VecDeque<T>,
    value: i64,
    mode: OrderingMode,
) -> usize {
    let len = items.len();
    if len == 0 {
        return 0;
    }

    let mut idx = len / 2;
    let mut prev = idx;
    let mut lo = 0;
    let mut hi = len - 1;
    while idx < len {
        if mode.precedes(value, items[idx].ordering_value()) {
            if idx == 0 {
                break;
            }
            hi = idx - 1;
        } else {
            lo = idx + 1;
        }

        idx = (lo + hi + 1) / 2;
        if idx == prev {
            break;
        }
        prev = idx;
    }

    idx
}

/// Looks `item` up by identity near its insertion estimate.
///
/// Only [`LOOKUP_WINDOW`] positions on each side of the estimate are examined. An element
/// whose key changed after insertion, or that sits behind a longer run of equal keys, is
/// not found even though it is present.
pub(crate) fn window_position<T: QueueElement>(
    items: &VecDeque<T>,
    item: &T,
    mode: OrderingMode,
) -> Option<usize> {
    let len = items.len();
    if len == 0 {
        return None;
    }

    let estimate = insertion_index(items, item.ordering_value(), mode);
    let id = item.id();

    let upper = (estimate + LOOKUP_WINDOW).min(len);
    if let Some(pos) = (estimate..upper).find(|&pos| items[pos].id() == id) {
        return Some(pos);
    }

    let lower = estimate.saturating_sub(LOOKUP_WINDOW);
    (lower..estimate).rev().find(|&pos| items[pos].id() == id)
}
