//! Bounded retry with exponential backoff and per-call deadlines.
//!
//! Only errors classified [`ErrorKind::Retryable`](crate::ErrorKind) are
//! retried. Everything else is returned on first occurrence.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FactCheckError, Result};

/// Retry configuration for external calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts including the first. Zero is treated as one.
    pub max_attempts: u32,

    /// Delay before the second attempt, in milliseconds.
    pub initial_backoff_ms: u64,

    /// Upper bound on any single delay, in milliseconds.
    pub max_backoff_ms: u64,

    /// Growth factor between consecutive delays.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 8_000,
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Delay after the given failed attempt (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let millis = self.initial_backoff_ms as f64 * self.multiplier.max(1.0).powi(exponent);
        let capped = millis.min(self.max_backoff_ms as f64);
        Duration::from_millis(capped as u64)
    }

    /// Run `op`, retrying transient failures.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    let delay = self.backoff_for(attempt);
                    warn!(
                        operation,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Transient failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Like [`run`](Self::run), with each attempt bounded by `timeout`.
    pub async fn run_with_timeout<T, F, Fut>(
        &self,
        operation: &str,
        timeout: Duration,
        mut op: F,
    ) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.run(operation, || with_deadline(timeout, op())).await
    }
}

/// Bound a future by `timeout`, mapping expiry to [`FactCheckError::Timeout`].
pub async fn with_deadline<T, Fut>(timeout: Duration, fut: Fut) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(FactCheckError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_backoff_growth_and_cap() {
        let policy = RetryPolicy {
            max_attempts: 10,
            initial_backoff_ms: 100,
            max_backoff_ms: 1_000,
            multiplier: 3.0,
        };

        assert_eq!(policy.backoff_for(1), Duration::from_millis(100));
        assert_eq!(policy.backoff_for(2), Duration::from_millis(300));
        assert_eq!(policy.backoff_for(3), Duration::from_millis(900));
        assert_eq!(policy.backoff_for(4), Duration::from_millis(1_000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_transient_until_success() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let policy = RetryPolicy::default();

        let result = policy
            .run("search", || async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err(FactCheckError::search("503", ErrorKind::Retryable))
                } else {
                    Ok(n)
                }
            })
            .await
            .unwrap();

        assert_eq!(result, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let policy = RetryPolicy::default().with_max_attempts(2);

        let err = policy
            .run("llm", || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(FactCheckError::llm("429", ErrorKind::Retryable))
            })
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fatal_error_not_retried() {
        let calls = AtomicU32::new(0);
        let counter = &calls;

        let err = RetryPolicy::default()
            .run("llm", || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(FactCheckError::llm("401", ErrorKind::NonRetryable))
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NonRetryable);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_attempts_runs_once() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let policy = RetryPolicy::default().with_max_attempts(0);

        let _ = policy
            .run("search", || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(FactCheckError::search("reset", ErrorKind::Retryable))
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_maps_to_timeout() {
        let err = with_deadline(Duration::from_millis(50), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, FactCheckError>(())
        })
        .await
        .unwrap_err();

        assert!(matches!(err, FactCheckError::Timeout(d) if d == Duration::from_millis(50)));
        assert!(err.is_retryable());
    }
}
