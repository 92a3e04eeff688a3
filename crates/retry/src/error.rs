use std::any::Any;

use bytes::Bytes;
use thiserror::Error;

/// Why a single dispatch of a request did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed ({}): {error}", describe_status(.status))]
pub struct DispatchFailure {
    /// Response status, if the request got that far.
    pub status: Option<u16>,
    pub error: String,
    /// Response body, kept for failure logs.
    pub body: Bytes,
}

impl DispatchFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: None,
            error: error.into(),
            body: Bytes::new(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Converts a panic payload caught while dispatching.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_owned()
        };
        Self::new(format!("dispatch panicked: {message}"))
    }
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "no status".to_owned(),
    }
}

#[derive(Debug, Error)]
pub enum RetryError {
    #[error("dispatch: {0}")]
    Dispatch(#[from] DispatchFailure),

    #[error("no tokio runtime available for the retry consumer")]
    NoRuntime,

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type RetryResult<T> = Result<T, RetryError>;
