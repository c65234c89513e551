//! Retry policies for idempotent HTTP requests.
//!
//! Only `GET` requests consult the client's policy; uploads and other
//! mutating calls are sent exactly once.

use std::time::Duration;

/// Retry policy for `GET` requests.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Send once. The default.
    #[default]
    None,
    /// Retry on transport failures, timeouts, 429 and 502/503/504.
    Idempotent,
    /// User-provided retry settings.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolve the policy into concrete settings, `None` meaning "send once".
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::idempotent()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Spread delays by ±25%.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// Settings used by [`RetryPolicy::Idempotent`].
    pub fn idempotent() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }

    /// Delay before the next attempt. A server-provided hint (`Retry-After`)
    /// wins over the backoff schedule but never exceeds `max_delay`.
    pub fn next_delay(&self, attempt: u32, server_hint: Option<Duration>) -> Duration {
        match server_hint {
            Some(hint) => hint.min(self.max_delay),
            None => self.delay_for_attempt(attempt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_default_is_none() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
        assert!(RetryPolicy::None.config().is_none());
    }

    #[test]
    fn test_idempotent_policy_retries_gateway_errors() {
        let config = RetryPolicy::Idempotent.config().unwrap();
        assert_eq!(config.max_retries, 3);
        for status in [429, 502, 503, 504] {
            assert!(config.is_retryable_status(status), "{status} should retry");
        }
        assert!(!config.is_retryable_status(500));
        assert!(!config.is_retryable_status(404));
    }

    #[test]
    fn test_custom_policy_passes_config_through() {
        let policy = RetryPolicy::Custom(RetryConfig::idempotent().with_max_retries(7));
        assert_eq!(policy.config().unwrap().max_retries, 7);
    }

    #[test]
    fn test_delay_grows_exponentially_without_jitter() {
        let config = RetryConfig::idempotent()
            .with_initial_delay(Duration::from_millis(100))
            .without_jitter();
        assert_eq!(config.delay_for_attempt(0).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 400);
    }

    #[test]
    fn test_delay_caps_at_max() {
        let config = RetryConfig {
            max_retries: 5,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(2000),
            backoff_factor: 10.0,
            jitter: false,
            retryable_statuses: vec![],
        };
        assert_eq!(config.delay_for_attempt(3).as_millis(), 2000);
    }

    #[test]
    fn test_jitter_stays_within_quarter() {
        let config = RetryConfig::idempotent().with_initial_delay(Duration::from_millis(400));
        for _ in 0..50 {
            let ms = config.delay_for_attempt(0).as_millis();
            assert!((300..=500).contains(&ms), "delay {ms} out of range");
        }
    }

    #[test]
    fn test_server_hint_capped_by_max_delay() {
        let config = RetryConfig::idempotent().without_jitter();
        assert_eq!(
            config.next_delay(0, Some(Duration::from_secs(3600))),
            Duration::from_secs(10)
        );
        assert_eq!(
            config.next_delay(0, Some(Duration::from_secs(2))),
            Duration::from_secs(2)
        );
        assert_eq!(config.next_delay(1, None), Duration::from_millis(400));
    }
}
