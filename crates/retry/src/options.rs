//! Per-request settings captured with a retry entry.

use std::{
    collections::{BTreeMap, BTreeSet},
    time::Duration,
};

use serde::{Deserialize, Serialize};

/// Timeout applied by [`RequestOptions::json`].
const DEFAULT_JSON_TIMEOUT_SECS: u64 = 30;

/// Status that always counts as success, whatever else is configured.
const STATUS_OK: u16 = 200;

/// Client certificate and trust settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsOptions {
    pub ca_file: Option<String>,
    pub cert_file: Option<String>,
    pub key_file: Option<String>,
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

/// Proxy endpoints by scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyOptions {
    pub http: Option<String>,
    pub https: Option<String>,
}

/// Transport settings and retry budget for one request.
///
/// Once a request is handed to the scheduler its options are frozen behind an `Arc`, so
/// later changes by the caller never affect pending retries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub proxy: Option<ProxyOptions>,

    #[serde(default)]
    pub tls: Option<TlsOptions>,

    /// Statuses accepted in addition to 200.
    #[serde(default)]
    pub success_statuses: BTreeSet<u16>,

    /// How many retries the caller allows after the first failure. Zero disables retrying.
    #[serde(default)]
    pub retry_budget: u32,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for JSON bodies: sets the content type and a 30 second timeout.
    pub fn json() -> Self {
        Self::new()
            .with_header("Content-Type", "application/json")
            .with_timeout(Duration::from_secs(DEFAULT_JSON_TIMEOUT_SECS))
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    pub fn with_proxy(mut self, proxy: ProxyOptions) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_tls(mut self, tls: TlsOptions) -> Self {
        self.tls = Some(tls);
        self
    }

    pub fn with_success_statuses(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.success_statuses.extend(statuses);
        self
    }

    pub fn with_retry_budget(mut self, budget: u32) -> Self {
        self.retry_budget = budget;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// For [`RetryAction`](crate::RetryAction) implementers deciding whether a response failed.
    pub fn is_success_status(&self, status: u16) -> bool {
        status == STATUS_OK || self.success_statuses.contains(&status)
    }

    pub fn is_retryable(&self) -> bool {
        self.retry_budget > 0
    }
}
