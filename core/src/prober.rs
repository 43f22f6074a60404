//! The **port** between the decision logic and whatever actually reaches out to a host.
//!
//! The orchestrator only ever talks to [`Prober`]. Concrete transports live in
//! [`crate::network`] and can be swapped without touching the classifier or the
//! campaign state machine.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;

/// Raw result of a single attempt, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProbeReport {
    /// The transport's own success signal (e.g. a zero exit status).
    pub completed: bool,
    /// Whatever text the transport produced, used as a fallback by the classifier.
    pub diagnostic: String,
}

impl ProbeReport {
    pub fn new(completed: bool, diagnostic: impl Into<String>) -> Self {
        Self {
            completed,
            diagnostic: diagnostic.into(),
        }
    }
}

/// Runs exactly one reachability attempt against one address.
///
/// Implementations should honour `timeout` on their own where the transport allows it.
/// The orchestrator enforces it regardless and drops the future once it elapses.
/// An `Err` is treated as a failed attempt, never as a fatal error.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn attempt(&self, addr: Ipv4Addr, timeout: Duration) -> anyhow::Result<ProbeReport>;
}
