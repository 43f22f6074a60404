//! # Parsing Errors
//!
//! Everything that can go wrong before a single probe is sent.
//! Probing problems never show up here; they resolve to a verdict instead.

use std::io;
use std::net::Ipv4Addr;

use thiserror::Error;

/// Failure to expand one address specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The text does not parse as an IPv4 address.
    #[error("invalid IPv4 address: '{0}'")]
    InvalidAddress(String),

    /// A range that does not split into two parts, or a CIDR prefix that is not a valid mask.
    #[error("invalid range syntax: {0}")]
    InvalidRangeSyntax(String),

    /// Range start is numerically greater than its end.
    #[error("range start {start} is greater than range end {end}")]
    InconsistentRange { start: Ipv4Addr, end: Ipv4Addr },

    /// Expansion would exceed the guard limit.
    #[error("range holds {count} addresses, limit is {limit}")]
    RangeTooLarge { count: u64, limit: u64 },
}

/// Failure to read an address list.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("failed to read address list: {0}")]
    Io(#[from] io::Error),

    /// A line failed to expand. `line` is 1-based and counts every physical line.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: ExpandError,
    },
}

/// Invalid probe policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("per-attempt timeout must be greater than zero")]
    ZeroTimeout,
}
