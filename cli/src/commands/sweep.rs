use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::info;

use sweepr_common::network::list;
use sweepr_core::network::{PingProber, TcpProber};
use sweepr_core::{Prober, SweepResult, scanner};

use crate::commands::{Method, SweepArgs};
use crate::terminal::print;

pub async fn sweep(args: &SweepArgs) -> anyhow::Result<()> {
    let policy = args.policy();
    policy.validate()?;

    let addrs: Vec<Ipv4Addr> = list::read_address_file(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    info!("{} addresses loaded from {}", addrs.len(), args.file.display());

    let prober: Arc<dyn Prober> = match args.method {
        Method::Ping => Arc::new(PingProber::new()),
        Method::Tcp => Arc::new(TcpProber::new(args.port)),
    };

    let start_time = Instant::now();
    let mut result: SweepResult =
        scanner::perform_sweep(&addrs, args.concurrency, policy, prober).await?;
    result.reachable.sort();
    result.unreachable.sort();

    if args.quiet {
        print::addresses(&result.reachable);
        return Ok(());
    }

    sweep_ends(&result, start_time.elapsed());
    Ok(())
}

fn sweep_ends(result: &SweepResult, total_time: Duration) {
    print::header("Reachable");
    print_section(&result.reachable);
    print::header("Unreachable");
    print_section(&result.unreachable);
    print_summary(result, total_time);
}

fn print_section(addrs: &[Ipv4Addr]) {
    if addrs.is_empty() {
        print::no_results();
    } else {
        print::addresses(addrs);
    }
}

fn print_summary(result: &SweepResult, total_time: Duration) {
    let reachable: ColoredString = format!("{} reachable", result.reachable.len()).bold().green();
    let unreachable: ColoredString = format!("{} unreachable", result.unreachable.len()).bold().red();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print::fat_separator();
    print::centerln(&format!("Sweep Complete: {reachable}, {unreachable} in {total_time}"));
}
