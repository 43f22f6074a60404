pub mod expand;
pub mod sweep;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use sweepr_common::config::{DEFAULT_CONCURRENCY, ProbePolicy};
use sweepr_core::network::tcp::DEFAULT_TCP_PORT;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "Finds out which hosts of an IPv4 address list are reachable.")]
pub struct CommandLine {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe every address of a list and report which ones answer
    #[command(alias = "s")]
    Sweep(SweepArgs),
    /// Print the addresses a list expands to
    #[command(alias = "e")]
    Expand {
        /// Address list: one address, CIDR block or START-END range per line
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct SweepArgs {
    /// Address list: one address, CIDR block or START-END range per line
    pub file: PathBuf,

    /// Maximum number of addresses probed at the same time
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Maximum attempts per address
    #[arg(long, default_value_t = ProbePolicy::default().max_attempts)]
    pub attempts: u32,

    /// Successful attempts needed to call an address reachable
    #[arg(long, default_value_t = ProbePolicy::default().success_threshold)]
    pub successes: u32,

    /// Consecutive failed attempts that give up on an address (0 disables)
    #[arg(long, default_value_t = ProbePolicy::default().consecutive_failure_threshold.unwrap_or(0))]
    pub fail_streak: u32,

    /// Timeout of a single attempt, in milliseconds
    #[arg(long, default_value_t = ProbePolicy::default().attempt_timeout.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Pause between two attempts on the same address, in milliseconds
    #[arg(long, default_value_t = ProbePolicy::default().attempt_interval.as_millis() as u64)]
    pub interval_ms: u64,

    /// How a single attempt reaches the host
    #[arg(long, value_enum, default_value_t = Method::Ping)]
    pub method: Method,

    /// Port used by the tcp method
    #[arg(long, default_value_t = DEFAULT_TCP_PORT)]
    pub port: u16,

    /// Only print reachable addresses, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// The system ping utility (ICMP echo)
    Ping,
    /// A TCP handshake; refused connections count as answers
    Tcp,
}

impl SweepArgs {
    pub fn policy(&self) -> ProbePolicy {
        ProbePolicy::default()
            .with_max_attempts(self.attempts)
            .with_success_threshold(self.successes)
            .with_consecutive_failure_threshold((self.fail_streak > 0).then_some(self.fail_streak))
            .with_attempt_timeout(Duration::from_millis(self.timeout_ms))
            .with_attempt_interval(Duration::from_millis(self.interval_ms))
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
