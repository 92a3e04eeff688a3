//! Positional operations shared by both queue kinds.
//!
//! These run with the caller already holding the write lock.

use std::collections::VecDeque;

use crate::QueueElement;

pub(crate) fn pop_many<T>(items: &mut VecDeque<T>, max_results: usize) -> Vec<T> {
    let count = max_results.min(items.len());
    items.drain(..count).collect()
}

pub(crate) fn cut_before<T>(items: &mut VecDeque<T>, index: isize) -> Vec<T> {
    let Ok(index) = usize::try_from(index) else {
        return Vec::new();
    };
    if index >= items.len() {
        return items.drain(..).collect();
    }
    items.drain(..index).collect()
}

pub(crate) fn cut_after<T>(items: &mut VecDeque<T>, index: isize) -> Vec<T> {
    let Ok(index) = usize::try_from(index) else {
        return items.drain(..).collect();
    };
    if index + 1 >= items.len() {
        return Vec::new();
    }
    items.drain(index + 1..).collect()
}

pub(crate) fn dump<T: QueueElement>(items: &VecDeque<T>, separator: &str) -> String {
    items
        .iter()
        .map(QueueElement::debug_string)
        .collect::<Vec<_>>()
        .join(separator)
}
