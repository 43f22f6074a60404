use std::time::Duration;

use crate::error::PolicyError;

/// Concurrency ceiling used when the caller does not pick one.
pub const DEFAULT_CONCURRENCY: usize = 20;

/// How many attempts each address gets and when a campaign may stop early.
///
/// Shared read-only by every campaign of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbePolicy {
    /// Upper bound on attempts per address. Zero means no attempt is made and the
    /// address is reported unreachable.
    pub max_attempts: u32,
    /// Successes needed for a reachable verdict. Values below 1 count as 1.
    pub success_threshold: u32,
    /// Consecutive failures that end a campaign early. `None` or `Some(0)` disables the rule.
    pub consecutive_failure_threshold: Option<u32>,
    /// Timeout applied to each attempt on its own.
    pub attempt_timeout: Duration,
    /// Pause between two attempts on the same address.
    pub attempt_interval: Duration,
}

impl Default for ProbePolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            success_threshold: 2,
            consecutive_failure_threshold: Some(3),
            attempt_timeout: Duration::from_secs(2),
            attempt_interval: Duration::from_secs(1),
        }
    }
}

impl ProbePolicy {
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_success_threshold(mut self, success_threshold: u32) -> Self {
        self.success_threshold = success_threshold;
        self
    }

    pub fn with_consecutive_failure_threshold(mut self, threshold: Option<u32>) -> Self {
        self.consecutive_failure_threshold = threshold;
        self
    }

    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    pub fn with_attempt_interval(mut self, attempt_interval: Duration) -> Self {
        self.attempt_interval = attempt_interval;
        self
    }

    pub fn effective_success_threshold(&self) -> u32 {
        self.success_threshold.max(1)
    }

    pub fn effective_failure_threshold(&self) -> Option<u32> {
        self.consecutive_failure_threshold.filter(|limit| *limit > 0)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.attempt_timeout.is_zero() {
            return Err(PolicyError::ZeroTimeout);
        }
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
