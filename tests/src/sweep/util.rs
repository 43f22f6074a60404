#![cfg(test)]
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::config::ProbePolicy;
use sweepr_core::{ProbeReport, Prober};

/// Answers like a `ping` run against a fixed set of live hosts, with the
/// exit status always reported as failed so only the output text counts.
pub struct FakeNetwork {
    live: HashSet<Ipv4Addr>,
    in_flight: AtomicUsize,
    pub peak: AtomicUsize,
    pub attempts: AtomicUsize,
}

impl FakeNetwork {
    pub fn new(live: impl IntoIterator<Item = Ipv4Addr>) -> Self {
        Self {
            live: live.into_iter().collect(),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Prober for FakeNetwork {
    async fn attempt(&self, addr: Ipv4Addr, _timeout: Duration) -> anyhow::Result<ProbeReport> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(rand::random_range(0..3))).await;

        let diagnostic = if self.live.contains(&addr) {
            format!(
                "64 bytes from {addr}: icmp_seq=1 ttl=64 time=0.3 ms\n\
                 1 packets transmitted, 1 received, 0% packet loss"
            )
        } else {
            "1 packets transmitted, 0 received, 100% packet loss".to_string()
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(ProbeReport::new(false, diagnostic))
    }
}

pub fn fast_policy() -> ProbePolicy {
    ProbePolicy::default()
        .with_attempt_interval(Duration::ZERO)
        .with_attempt_timeout(Duration::from_secs(1))
}
