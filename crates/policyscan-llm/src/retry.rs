//! Bounded retry schedule for upstream calls.
//!
//! A run moves through `Attempting(1) → … → Attempting(n)` and ends either in
//! [`RetryOutcome::Succeeded`] or [`RetryOutcome::FallbackRequired`]. Only
//! errors for which [`LlmError::is_retryable`] holds advance to the next
//! attempt; anything else ends the run immediately.

use std::future::Future;
use std::time::Duration;

use crate::backend::LlmError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay slept before each attempt. Zero means "go immediately".
    pub delays: Vec<Duration>,
}

#[derive(Debug)]
pub enum RetryOutcome<T> {
    Succeeded { value: T, attempts: usize },
    FallbackRequired { attempts: usize, error: LlmError },
}

impl<T> RetryOutcome<T> {
    pub fn attempts(&self) -> usize {
        match self {
            RetryOutcome::Succeeded { attempts, .. } | RetryOutcome::FallbackRequired { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn into_result(self) -> Result<T, LlmError> {
        match self {
            RetryOutcome::Succeeded { value, .. } => Ok(value),
            RetryOutcome::FallbackRequired { error, .. } => Err(error),
        }
    }
}

impl RetryPolicy {
    pub fn from_millis(delays: &[u64]) -> Self {
        Self { delays: delays.iter().copied().map(Duration::from_millis).collect() }
    }

    /// A single immediate attempt.
    pub fn once() -> Self {
        Self { delays: vec![Duration::ZERO] }
    }

    pub fn max_attempts(&self) -> usize {
        self.delays.len()
    }

    pub async fn run<T, F, Fut>(&self, mut op: F) -> RetryOutcome<T>
    where
        F: FnMut(usize) -> Fut,
        Fut: Future<Output = Result<T, LlmError>>,
    {
        let total = self.max_attempts();
        for (i, delay) in self.delays.iter().enumerate() {
            let attempt = i + 1;
            if !delay.is_zero() {
                tokio::time::sleep(*delay).await;
            }
            match op(attempt).await {
                Ok(value) => return RetryOutcome::Succeeded { value, attempts: attempt },
                Err(e) if e.is_retryable() => {
                    tracing::warn!(attempt, total, error = %e, "Upstream throttled, will retry");
                }
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Upstream call failed, not retrying");
                    return RetryOutcome::FallbackRequired { attempts: attempt, error: e };
                }
            }
        }
        RetryOutcome::FallbackRequired {
            attempts: total,
            error: LlmError::Unavailable("retries exhausted".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast(n: usize) -> RetryPolicy {
        RetryPolicy::from_millis(&vec![0; n])
    }

    #[tokio::test]
    async fn test_succeeds_after_throttling() {
        let calls = AtomicUsize::new(0);
        let outcome = fast(3)
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 3 {
                        Err(LlmError::RateLimitExceeded { status: 429 })
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;
        assert_eq!(outcome.attempts(), 3);
        assert_eq!(outcome.into_result().unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_stops_immediately() {
        let calls = AtomicUsize::new(0);
        let outcome: RetryOutcome<()> = fast(3)
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(LlmError::ApiError { status: 400, message: "bad".into() }) }
            })
            .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(
            outcome,
            RetryOutcome::FallbackRequired { attempts: 1, error: LlmError::ApiError { status: 400, .. } }
        ));
    }

    #[tokio::test]
    async fn test_exhaustion_reports_unavailable() {
        let outcome: RetryOutcome<()> = fast(3)
            .run(|_| async { Err(LlmError::RateLimitExceeded { status: 503 }) })
            .await;
        assert_eq!(outcome.attempts(), 3);
        match outcome.into_result() {
            Err(LlmError::Unavailable(msg)) => assert_eq!(msg, "retries exhausted"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delays_are_slept() {
        let start = std::time::Instant::now();
        let _: RetryOutcome<()> = RetryPolicy::from_millis(&[0, 20])
            .run(|_| async { Err(LlmError::RateLimitExceeded { status: 429 }) })
            .await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
