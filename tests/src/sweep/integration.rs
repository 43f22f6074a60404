#![cfg(test)]
use std::collections::HashSet;
use std::io::Cursor;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use sweepr_common::error::{ExpandError, ListError};
use sweepr_common::network::list;
use sweepr_core::{Prober, SweepError, scanner};

use super::util::{FakeNetwork, fast_policy};

const ADDRESS_LIST: &str = "\
# lab network
192.168.18.1
// printers
192.168.18.102-192.168.18.104

192.168.18.128/30
192.168.18.1
";

/// Reads a list, sweeps it against a fake network and checks the partition.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn list_to_partition() {
    let addrs = list::parse_address_list(Cursor::new(ADDRESS_LIST)).unwrap();
    assert_eq!(addrs.len(), 9);

    let live = [
        Ipv4Addr::new(192, 168, 18, 1),
        Ipv4Addr::new(192, 168, 18, 103),
        Ipv4Addr::new(192, 168, 18, 129),
    ];
    let network = Arc::new(FakeNetwork::new(live));
    let prober: Arc<dyn Prober> = network.clone();

    let mut result = scanner::perform_sweep(&addrs, 3, fast_policy(), prober)
        .await
        .unwrap();
    result.reachable.sort();
    result.unreachable.sort();

    assert_eq!(result.reachable, live.to_vec());
    assert_eq!(
        result.unreachable,
        vec![
            Ipv4Addr::new(192, 168, 18, 102),
            Ipv4Addr::new(192, 168, 18, 104),
            Ipv4Addr::new(192, 168, 18, 128),
            Ipv4Addr::new(192, 168, 18, 130),
            Ipv4Addr::new(192, 168, 18, 131),
        ]
    );

    // 3 live hosts × 2 attempts + 5 dead hosts × 3 attempts
    assert_eq!(network.attempts.load(Ordering::SeqCst), 21);
    assert!(network.peak.load(Ordering::SeqCst) <= 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn large_block_partition_is_exact() {
    let addrs = list::parse_address_list(Cursor::new("10.1.0.0/22\n")).unwrap();
    assert_eq!(addrs.len(), 1024);

    let live: Vec<Ipv4Addr> = addrs.iter().copied().filter(|_| rand::random_bool(0.3)).collect();
    let network = Arc::new(FakeNetwork::new(live.iter().copied()));
    let prober: Arc<dyn Prober> = network.clone();

    let result = scanner::perform_sweep(&addrs, 64, fast_policy(), prober)
        .await
        .unwrap();

    let reachable: HashSet<Ipv4Addr> = result.reachable.iter().copied().collect();
    let unreachable: HashSet<Ipv4Addr> = result.unreachable.iter().copied().collect();
    assert_eq!(result.len(), addrs.len());
    assert_eq!(reachable.len() + unreachable.len(), addrs.len());
    assert_eq!(reachable, live.into_iter().collect::<HashSet<_>>());
    assert!(network.peak.load(Ordering::SeqCst) <= 64);
}

#[test]
fn bad_line_aborts_before_probing() {
    let text = "10.0.0.1\n10.0.0.0/8\n10.0.0.2\n";
    match list::parse_address_list(Cursor::new(text)) {
        Err(ListError::Line { line, source }) => {
            assert_eq!(line, 2);
            assert_eq!(
                source,
                ExpandError::RangeTooLarge {
                    count: 1 << 24,
                    limit: 1_000_000,
                }
            );
        }
        other => panic!("expected RangeTooLarge on line 2, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_concurrency_launches_nothing() {
    let network = Arc::new(FakeNetwork::new([Ipv4Addr::LOCALHOST]));
    let prober: Arc<dyn Prober> = network.clone();

    let result = scanner::perform_sweep(&[Ipv4Addr::LOCALHOST], 0, fast_policy(), prober).await;

    assert!(matches!(result, Err(SweepError::InvalidConcurrency)));
    assert_eq!(network.attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn default_policy_session() {
    let network = Arc::new(FakeNetwork::new([Ipv4Addr::new(10, 0, 0, 1)]));
    let prober: Arc<dyn Prober> = network.clone();

    // Default policy paces attempts one second apart; one live host needs one pause.
    let result = scanner::sweep(&[Ipv4Addr::new(10, 0, 0, 1)], 1, prober)
        .await
        .unwrap();
    assert_eq!(result.reachable, vec![Ipv4Addr::new(10, 0, 0, 1)]);
    assert_eq!(network.attempts.load(Ordering::SeqCst), 2);
}
