use crate::QueueElement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TestElement {
    pub(crate) id: String,
    pub(crate) value: i64,
}

impl TestElement {
    pub(crate) fn new(id: &str, value: i64) -> Self {
        Self {
            id: id.to_owned(),
            value,
        }
    }
}

impl QueueElement for TestElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn ordering_value(&self) -> i64 {
        self.value
    }

    fn debug_string(&self) -> String {
        format!("{}={}", self.id, self.value)
    }
}

pub(crate) fn ids<T: QueueElement>(items: &[T]) -> Vec<String> {
    items.iter().map(|e| e.id().to_owned()).collect()
}

pub(crate) fn values<T: QueueElement>(items: &[T]) -> Vec<i64> {
    items.iter().map(QueueElement::ordering_value).collect()
}
