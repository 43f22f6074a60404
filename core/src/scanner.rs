//! The **orchestrator** for probe sessions.
//!
//! A session takes a list of addresses, a concurrency ceiling and a
//! [`ProbePolicy`], runs one [`Campaign`] per address and partitions the
//! verdicts into reachable and unreachable addresses.
//!
//! **Admission:** a campaign must hold a slot of the session's semaphore for its
//! whole lifetime, so no more than `concurrency` campaigns (and therefore no
//! more than `concurrency` attempts) are ever in flight. Attempts inside a
//! campaign run strictly one after another, each under its own timeout.
//!
//! Probing problems never fail a session; they become failed attempts.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{AcquireError, Semaphore};
use tokio::task::{JoinError, JoinSet};
use tracing::{Instrument, debug, debug_span, info, trace, warn};

use sweepr_common::config::ProbePolicy;

use crate::campaign::{Campaign, CampaignVerdict};
use crate::classifier;
use crate::prober::Prober;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("concurrency must be greater than zero")]
    InvalidConcurrency,

    #[error("admission gate closed unexpectedly: {0}")]
    Gate(#[from] AcquireError),

    #[error("campaign task failed: {0}")]
    Task(#[from] JoinError),
}

/// Partition of a session's input. Order inside each list follows completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepResult {
    pub reachable: Vec<Ipv4Addr>,
    pub unreachable: Vec<Ipv4Addr>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.reachable.len() + self.unreachable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&mut self, verdict: CampaignVerdict) {
        if verdict.reachable() {
            self.reachable.push(verdict.address);
        } else {
            self.unreachable.push(verdict.address);
        }
    }
}

/// Runs a session with [`ProbePolicy::default`].
pub async fn sweep(
    addresses: &[Ipv4Addr],
    concurrency: usize,
    prober: Arc<dyn Prober>,
) -> Result<SweepResult, SweepError> {
    perform_sweep(addresses, concurrency, ProbePolicy::default(), prober).await
}

/// Probes every distinct address in `addresses` and returns the partition.
///
/// Duplicate addresses are probed once. Fails only when `concurrency` is zero.
pub async fn perform_sweep(
    addresses: &[Ipv4Addr],
    concurrency: usize,
    policy: ProbePolicy,
    prober: Arc<dyn Prober>,
) -> Result<SweepResult, SweepError> {
    if concurrency == 0 {
        return Err(SweepError::InvalidConcurrency);
    }

    let mut result = SweepResult::default();
    if addresses.is_empty() {
        return Ok(result);
    }

    let targets: Vec<Ipv4Addr> = unique(addresses);
    if targets.len() < addresses.len() {
        debug!("dropped {} duplicate addresses", addresses.len() - targets.len());
    }
    info!(
        "Probing {} addresses, at most {concurrency} at a time",
        targets.len()
    );

    let gate = Arc::new(Semaphore::new(concurrency.min(Semaphore::MAX_PERMITS)));
    let mut campaigns: JoinSet<CampaignVerdict> = JoinSet::new();

    for addr in targets {
        let permit = Arc::clone(&gate).acquire_owned().await?;
        let prober = Arc::clone(&prober);
        let span = debug_span!("campaign", %addr);

        campaigns.spawn(
            async move {
                let verdict = run_campaign(addr, &policy, prober.as_ref()).await;
                drop(permit);
                verdict
            }
            .instrument(span),
        );

        while let Some(done) = campaigns.try_join_next() {
            result.record(done?);
        }
    }

    while let Some(done) = campaigns.join_next().await {
        result.record(done?);
    }

    info!(
        "Session finished: {} reachable, {} unreachable",
        result.reachable.len(),
        result.unreachable.len()
    );
    Ok(result)
}

/// Drives one address's campaign to its verdict.
///
/// The pause between attempts is only taken when another attempt follows.
pub async fn run_campaign(
    addr: Ipv4Addr,
    policy: &ProbePolicy,
    prober: &dyn Prober,
) -> CampaignVerdict {
    let mut campaign = Campaign::new(policy);

    let verdict = loop {
        if let Some(verdict) = campaign.verdict() {
            break verdict;
        }

        if campaign.state().attempts_taken > 0 && !policy.attempt_interval.is_zero() {
            tokio::time::sleep(policy.attempt_interval).await;
        }

        let succeeded = attempt_once(prober, addr, policy.attempt_timeout).await;
        campaign.record(succeeded);
    };

    let state = campaign.state();
    debug!(
        successes = state.successes,
        attempts = state.attempts_taken,
        "{addr} is {verdict:?}"
    );

    CampaignVerdict {
        address: addr,
        verdict,
        attempts_taken: state.attempts_taken,
    }
}

/// One attempt under its own timeout. Errors and timeouts count as failures.
async fn attempt_once(prober: &dyn Prober, addr: Ipv4Addr, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, prober.attempt(addr, timeout)).await {
        Ok(Ok(report)) => {
            let succeeded = classifier::classify(report.completed, &report.diagnostic);
            trace!(completed = report.completed, succeeded, "attempt on {addr} finished");
            succeeded
        }
        Ok(Err(e)) => {
            warn!("Probe of {addr} failed: {e:#}");
            false
        }
        Err(_elapsed) => {
            trace!("attempt on {addr} timed out after {timeout:?}");
            false
        }
    }
}

/// Keeps the first occurrence of every address.
fn unique(addresses: &[Ipv4Addr]) -> Vec<Ipv4Addr> {
    let mut seen: HashSet<Ipv4Addr> = HashSet::with_capacity(addresses.len());
    addresses
        .iter()
        .copied()
        .filter(|addr| seen.insert(*addr))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
