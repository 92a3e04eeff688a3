use std::sync::Arc;

use bytes::Bytes;

use crate::options::RequestOptions;

/// A request the retry action knows how to send.
///
/// Cloning is cheap: the payload and options are shared.
#[derive(Debug, Clone)]
pub struct RetryRequest {
    method: String,
    url: String,
    payload: Bytes,
    options: Arc<RequestOptions>,
}

impl RetryRequest {
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        payload: impl Into<Bytes>,
        options: RequestOptions,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            payload: payload.into(),
            options: Arc::new(options),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn retry_budget(&self) -> u32 {
        self.options.retry_budget
    }
}
