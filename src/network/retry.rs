// SPDX-License-Identifier: MPL-2.0
//! Fixed-delay retry loop for backend requests.

use crate::config::{DEFAULT_FETCH_ATTEMPTS, DEFAULT_RETRY_DELAY_MS};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// How many times a request is attempted and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, the first one included. Never below 1.
    max_attempts: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    /// Three attempts, half a second apart.
    fn default() -> Self {
        Self::fixed(
            DEFAULT_FETCH_ATTEMPTS,
            Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        )
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Single attempt, no retry.
    #[must_use]
    pub fn none() -> Self {
        Self::fixed(1, Duration::ZERO)
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `operation` until it succeeds or the attempts are exhausted.
    ///
    /// `operation` receives the 1-based attempt number. Every failure is
    /// logged with that number and `endpoint`; the error of the final attempt
    /// is returned.
    pub async fn execute<F, Fut, T, E>(&self, endpoint: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt >= self.max_attempts => {
                    log::error!(
                        "Request to {endpoint} failed after {attempt} attempt(s): {err}"
                    );
                    return Err(err);
                }
                Err(err) => {
                    log::warn!(
                        "Attempt {attempt}/{} for {endpoint} failed: {err}",
                        self.max_attempts
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn default_is_three_attempts_half_a_second_apart() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay(), Duration::from_millis(500));
    }

    #[test]
    fn zero_attempts_still_runs_once() {
        assert_eq!(RetryPolicy::fixed(0, Duration::ZERO).max_attempts(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_on_last_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<&str, String> = RetryPolicy::default()
            .execute("titles", |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 3 {
                        Err(format!("boom {attempt}"))
                    } else {
                        Ok("ok")
                    }
                }
            })
            .await;

        assert_eq!(result, Ok("ok"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn returns_last_error_after_final_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = RetryPolicy::default()
            .execute("titles", |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(format!("boom {attempt}")) }
            })
            .await;

        assert_eq!(result, Err("boom 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_fixed_delay_between_attempts() {
        let start = tokio::time::Instant::now();
        let _: Result<(), String> = RetryPolicy::default()
            .execute("titles", |_| async { Err("down".to_string()) })
            .await;
        // Two waits: after attempt 1 and after attempt 2
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn first_success_makes_one_call() {
        let calls = AtomicU32::new(0);
        let result: Result<u8, String> = RetryPolicy::none()
            .execute("titles", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(7) }
            })
            .await;
        assert_eq!(result, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
