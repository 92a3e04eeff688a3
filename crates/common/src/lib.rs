//! Shared process-level plumbing for the retryq crates.

pub mod logging;
