//! # Probe Classifier
//!
//! Turns the raw result of one probe attempt into a plain success/failure.
//!
//! A zero exit status is trusted as-is. Otherwise the diagnostic text is
//! re-read, since some platforms exit non-zero even though a reply arrived.
//! Counted summaries ("N received", "N% packet loss") win over loose reply
//! markers so that "0 received" is never read as success because a `time=`
//! appears elsewhere in the output.

use std::sync::LazyLock;

use regex::Regex;

/// `4 received`, `1 packets received`, and the Windows style `Received = 1`.
static RECEIVED_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\b(\d+)\s+(?:packets\s+)?received\b").unwrap(),
        Regex::new(r"(?i)(?:\breceived|已接收)\s*=\s*(\d+)").unwrap(),
    ]
});

/// `0% packet loss`, `100.0% packet loss`.
static LOSS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)%\s*packet\s*loss\b").unwrap());

/// Markers that only show up when a reply actually came back.
const REPLY_INDICATORS: &[&str] = &[
    "bytes from",
    "reply from",
    "ttl=",
    "time=",
    "time<",
    "已接收",
    "来自",
];

/// Classifies one attempt. `completed` is the transport's own success signal.
pub fn classify(completed: bool, diagnostic: &str) -> bool {
    completed || parse_reply(diagnostic)
}

/// Reads probe output and decides whether a reply was received.
pub fn parse_reply(output: &str) -> bool {
    if let Some(any_received) = received_nonzero(output) {
        return any_received;
    }

    if let Some(loss) = packet_loss(output) {
        return loss == 0.0;
    }

    let lower = output.to_lowercase();
    REPLY_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator))
}

/// `Some(true)` when a received count is reported and non-zero. Compared on
/// the digits so counts wider than any integer type still decide.
fn received_nonzero(output: &str) -> Option<bool> {
    RECEIVED_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(output)
            .and_then(|caps| caps.get(1))
            .map(|count| count.as_str().bytes().any(|digit| digit != b'0'))
    })
}

fn packet_loss(output: &str) -> Option<f64> {
    LOSS_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|loss| loss.as_str().parse::<f64>().ok())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
