//! Request throttling for the scoring API
//!
//! Enforces a minimum spacing between outgoing requests, derived from a
//! requests-per-minute budget.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Minimum-interval request throttle
///
/// Given a budget of `R` requests per minute, computes a minimum spacing of
/// `ceil(60000 / R)` milliseconds and suspends callers that arrive before
/// the spacing has elapsed since the last completed request.
///
/// The timestamp is owned instance state, so independent clients never
/// interfere with each other. Updates are atomic relative to reads, but
/// `wait` and `mark_complete` are not one transaction: two tasks racing
/// through the same throttle may both proceed. Callers are expected to be
/// effectively serialized (one request in flight per client).
///
/// # Examples
///
/// ```
/// use claimlens_spotter::Throttler;
/// use std::time::Duration;
///
/// let throttle = Throttler::new(60);
/// assert_eq!(throttle.min_interval(), Duration::from_millis(1000));
/// ```
#[derive(Debug)]
pub struct Throttler {
    min_interval: Duration,
    last_completed: Mutex<Option<Instant>>,
}

impl Throttler {
    /// Create a throttle for the given requests-per-minute budget
    ///
    /// A budget of zero is treated as one request per minute.
    pub fn new(max_requests_per_minute: u32) -> Self {
        let rpm = u64::from(max_requests_per_minute.max(1));
        Self {
            min_interval: Duration::from_millis(60_000u64.div_ceil(rpm)),
            last_completed: Mutex::new(None),
        }
    }

    /// Minimum spacing between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Suspend until the minimum interval since the last completed request
    /// has elapsed
    ///
    /// Returns immediately if no request has completed yet.
    pub async fn wait(&self) {
        // Copy the remaining delay out so the guard is not held across the await
        let remaining = {
            let last = self.last_completed.lock().unwrap();
            last.map(|completed_at| self.min_interval.saturating_sub(completed_at.elapsed()))
        };

        if let Some(delay) = remaining {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }

    /// Record that a request just completed
    pub fn mark_complete(&self) {
        *self.last_completed.lock().unwrap() = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_ceiling_division() {
        assert_eq!(Throttler::new(60).min_interval(), Duration::from_millis(1000));
        assert_eq!(Throttler::new(120).min_interval(), Duration::from_millis(500));
        // 60000 / 7 = 8571.42..., rounded up
        assert_eq!(Throttler::new(7).min_interval(), Duration::from_millis(8572));
    }

    #[test]
    fn test_zero_budget_clamps_to_one() {
        assert_eq!(Throttler::new(0).min_interval(), Duration::from_millis(60_000));
    }

    #[tokio::test]
    async fn test_first_wait_does_not_sleep() {
        let throttle = Throttler::new(1); // 60 s interval
        let start = Instant::now();
        throttle.wait().await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_wait_enforces_spacing() {
        // 1200 requests/minute = 50 ms spacing
        let throttle = Throttler::new(1200);
        throttle.mark_complete();

        let start = Instant::now();
        throttle.wait().await;

        // Allow a little scheduler slop below the nominal interval
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_wait_after_interval_elapsed() {
        let throttle = Throttler::new(1200);
        throttle.mark_complete();
        tokio::time::sleep(Duration::from_millis(60)).await;

        let start = Instant::now();
        throttle.wait().await;
        assert!(start.elapsed() < Duration::from_millis(40));
    }
}
