use retryq_queues::QueueElement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Item {
    pub(crate) id: String,
    pub(crate) value: i64,
}

impl Item {
    pub(crate) fn new(id: impl Into<String>, value: i64) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

impl QueueElement for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn ordering_value(&self) -> i64 {
        self.value
    }

    fn debug_string(&self) -> String {
        format!("{}:{}", self.id, self.value)
    }
}

/// Builds items with ids `i0, i1, ...` in the given order.
pub(crate) fn items(values: &[i64]) -> Vec<Item> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Item::new(format!("i{i}"), *v))
        .collect()
}
