//! Probing through the platform `ping` utility, one echo request per attempt.

use std::net::Ipv4Addr;
use std::process::Stdio;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::trace;

use crate::prober::{ProbeReport, Prober};

#[derive(Debug, Clone, Default)]
pub struct PingProber;

impl PingProber {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn attempt(&self, addr: Ipv4Addr, timeout: Duration) -> anyhow::Result<ProbeReport> {
        let args = ping_args(addr, timeout);
        trace!("running ping {}", args.join(" "));

        // The orchestrator drops this future on timeout; the child must die with it.
        let output = Command::new("ping")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .context("failed to run ping")?;

        let mut diagnostic = String::from_utf8_lossy(&output.stdout).into_owned();
        diagnostic.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ProbeReport::new(output.status.success(), diagnostic))
    }
}

/// Arguments for a single echo request with a reply deadline.
fn ping_args(addr: Ipv4Addr, timeout: Duration) -> Vec<String> {
    let target = addr.to_string();
    if cfg!(target_os = "windows") {
        // -w takes milliseconds
        vec!["-n".into(), "1".into(), "-w".into(), timeout.as_millis().to_string(), target]
    } else if cfg!(target_os = "macos") {
        // -W takes milliseconds on macOS
        vec!["-c".into(), "1".into(), "-W".into(), timeout.as_millis().to_string(), target]
    } else {
        vec!["-c".into(), "1".into(), "-W".into(), whole_seconds(timeout).to_string(), target]
    }
}

/// iputils only accepts whole seconds; round up, never below one.
fn whole_seconds(timeout: Duration) -> u64 {
    let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
    secs.max(1)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
