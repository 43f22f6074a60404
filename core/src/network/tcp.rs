use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::prober::{ProbeReport, Prober};

pub const DEFAULT_TCP_PORT: u16 = 443;

/// Handshake probe: a host that accepts or actively refuses the connection is up.
///
/// Works without privileges and against hosts that drop ICMP.
#[derive(Debug, Clone, Copy)]
pub struct TcpProber {
    port: u16,
}

impl TcpProber {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new(DEFAULT_TCP_PORT)
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn attempt(&self, addr: Ipv4Addr, probe_timeout: Duration) -> anyhow::Result<ProbeReport> {
        let socket_addr = SocketAddr::from((addr, self.port));

        let report = match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
            Ok(Ok(_)) => ProbeReport::new(true, format!("connected to {socket_addr}")),
            Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => {
                ProbeReport::new(true, format!("connection refused by {socket_addr}"))
            }
            Ok(Err(e)) => ProbeReport::new(false, e.to_string()),
            Err(_elapsed) => ProbeReport::new(false, format!("no answer from {socket_addr}")),
        };
        Ok(report)
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
