//! Retry and Timing Helpers
//!
//! Shared helpers for the demos: retry with multiplicative backoff,
//! execution timing, and small validation guards.

use std::fmt::Display;
use std::future::Future;
use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::{debug, error, warn};

use crate::error::AgentLabError;

/// Run `op` until it succeeds, retrying up to `max_retries` times.
///
/// The delay starts at `initial_delay` and is multiplied by `backoff`
/// after every failed attempt. Each failure is logged at warn; when
/// all attempts are exhausted the last error is logged and returned.
pub async fn retry_with_backoff<T, E, F, Fut>(
    max_retries: u32,
    initial_delay: Duration,
    backoff: f64,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut delay = initial_delay;
    let mut attempt: u32 = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_retries => {
                attempt += 1;
                warn!(
                    "Attempt {}/{} failed: {}. Retrying in {:?}...",
                    attempt,
                    max_retries + 1,
                    e,
                    delay
                );
                sleep(delay).await;
                delay = delay.mul_f64(backoff);
            }
            Err(e) => {
                error!("All {} attempts failed: {}", max_retries + 1, e);
                return Err(e);
            }
        }
    }
}

/// Run a future and log its wall-clock duration.
///
/// Successful completion logs at debug; failure logs at error with
/// the elapsed time. The result is passed through unchanged.
pub async fn timed<T, E, Fut>(label: &str, fut: Fut) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let start = Instant::now();
    match fut.await {
        Ok(value) => {
            debug!("{} completed in {:.2?}", label, start.elapsed());
            Ok(value)
        }
        Err(e) => {
            error!("{} failed after {:.2?}: {}", label, start.elapsed(), e);
            Err(e)
        }
    }
}

/// Guard that a string value is non-empty after trimming.
pub fn ensure_not_empty<'a>(value: &'a str, name: &str) -> Result<&'a str, AgentLabError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AgentLabError::Validation(format!("{} cannot be empty", name)));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_retry_succeeds_after_transient_failures() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let result: Result<u32, &str> =
            retry_with_backoff(3, Duration::from_millis(1), 2.0, || {
                let counter = counter.clone();
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst);
                    if n < 2 {
                        Err("transient")
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result, Ok(2));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_returns_last_error_when_exhausted() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let result: Result<(), String> =
            retry_with_backoff(2, Duration::from_millis(1), 2.0, || {
                let counter = counter.clone();
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst);
                    Err(format!("failure {}", n))
                }
            })
            .await;

        assert_eq!(result, Err("failure 2".to_string()));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_does_not_retry_on_success() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let result: Result<&str, &str> =
            retry_with_backoff(5, Duration::from_millis(1), 2.0, || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok("done")
                }
            })
            .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timed_passes_through_result() {
        let ok: Result<u32, AgentLabError> = timed("ok op", async { Ok(7) }).await;
        assert_eq!(ok.unwrap(), 7);

        let err: Result<u32, AgentLabError> = timed("failing op", async {
            Err(AgentLabError::Validation("boom".to_string()))
        })
        .await;
        assert!(err.is_err());
    }

    #[test]
    fn test_ensure_not_empty() {
        assert_eq!(ensure_not_empty("  value  ", "field").unwrap(), "value");
        assert!(matches!(
            ensure_not_empty("   ", "field"),
            Err(AgentLabError::Validation(_))
        ));
    }
}
