//! # Data Fetch
//!
//! An async fetch that either resolves to a list of numbers or rejects with a
//! [`FetchError`] whose `reason` says what failed.
//!
//! ```text
//! fetch_data_from(feed)
//!      │
//!      ├── feed.numbers() → Ok([1, 2, 3]) ──► Ok([1, 2, 3])
//!      │
//!      └── feed.numbers() → Err("timeout") ──► Err(FetchError { reason: "Operation failed: timeout" })
//! ```

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::ports::NumberFeed;

/// Latency of the built-in feed.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(100);

/// A feed that answers after a fixed delay with a preset outcome.
#[derive(Debug, Clone)]
pub struct SimulatedFeed {
    latency: Duration,
    outcome: Result<Vec<i64>, String>,
}

impl SimulatedFeed {
    /// Resolves to `numbers` after `latency`.
    pub fn resolving(numbers: Vec<i64>, latency: Duration) -> Self {
        SimulatedFeed {
            latency,
            outcome: Ok(numbers),
        }
    }

    /// Fails with `cause` after `latency`.
    pub fn failing(cause: impl Into<String>, latency: Duration) -> Self {
        SimulatedFeed {
            latency,
            outcome: Err(cause.into()),
        }
    }
}

impl Default for SimulatedFeed {
    fn default() -> Self {
        SimulatedFeed::resolving(vec![1, 2, 3], SIMULATED_LATENCY)
    }
}

#[async_trait]
impl NumberFeed for SimulatedFeed {
    async fn numbers(&self) -> Result<Vec<i64>, String> {
        tokio::time::sleep(self.latency).await;
        self.outcome.clone()
    }
}

/// Fetches the series from the built-in feed.
pub async fn fetch_data() -> Result<Vec<i64>, FetchError> {
    fetch_data_from(&SimulatedFeed::default()).await
}

/// Fetches the series from `feed`.
///
/// ## Errors
/// Any feed failure becomes a [`FetchError`] with reason `"Operation failed: <cause>"`.
pub async fn fetch_data_from(feed: &dyn NumberFeed) -> Result<Vec<i64>, FetchError> {
    match feed.numbers().await {
        Ok(numbers) => {
            debug!(count = numbers.len(), "fetch_data resolved");
            Ok(numbers)
        }
        Err(cause) => {
            warn!(cause = %cause, "fetch_data rejected");
            Err(FetchError::new(format!("Operation failed: {}", cause)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockNumberFeed;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_data_resolves_to_numbers() {
        assert_eq!(fetch_data().await, Ok(vec![1, 2, 3]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_data_waits_for_latency() {
        let started = tokio::time::Instant::now();
        let feed = SimulatedFeed::resolving(vec![7], Duration::from_secs(3));

        assert_eq!(fetch_data_from(&feed).await, Ok(vec![7]));
        assert!(started.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_feed_rejects_with_reason() {
        let feed = SimulatedFeed::failing("upstream timeout", SIMULATED_LATENCY);

        let err = fetch_data_from(&feed).await.unwrap_err();
        assert!(err.reason.to_lowercase().contains("fail"));
        assert!(err.reason.contains("upstream timeout"));
    }

    #[tokio::test]
    async fn test_mocked_feed_is_called_once() {
        let mut feed = MockNumberFeed::new();
        feed.expect_numbers()
            .times(1)
            .returning(|| Err("connection refused".to_string()));

        let err = fetch_data_from(&feed).await.unwrap_err();
        assert_eq!(err.reason, "Operation failed: connection refused");
    }
}
