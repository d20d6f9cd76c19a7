// Bounded retry schedule, independent of the I/O code that drives it.

use std::time::Duration;

/// Exponential backoff: `base_delay * 2^n` after the n-th transient failure.
/// Defaults (3 attempts, 1 s base) give 2 s then 4 s between attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_secs(1),
        }
    }

    /// Delay before the next attempt, after `failures` transient failures.
    pub fn delay(&self, failures: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(failures)
    }
}
