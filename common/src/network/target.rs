//! # Address Specification Model
//!
//! One line of an address list, parsed into the address set it denotes:
//! * A single IPv4 address (`192.168.1.5`).
//! * A CIDR block (`192.168.1.0/24`).
//! * An inclusive range of full addresses (`192.168.1.10-192.168.1.20`).
//!
//! Expansion is always ascending and never exceeds
//! [`EXPANSION_LIMIT`](crate::network::range::EXPANSION_LIMIT) addresses.

use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::ExpandError;
use crate::network::range::{self, Ipv4Range};

/// A parsed address specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressSpec {
    /// A single host.
    Host { target_addr: Ipv4Addr },
    /// A CIDR block. `base` is kept as written; masking happens on expansion.
    Cidr { base: Ipv4Addr, prefix: u8 },
    /// An inclusive range of addresses.
    Range { ipv4_range: Ipv4Range },
}

impl FromStr for AddressSpec {
    type Err = ExpandError;

    /// Dispatches on syntax: anything with a `/` is a CIDR block, anything else
    /// with a `-` is a range, the rest must be a plain address.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(target) = parse_cidr(s)? {
            return Ok(target);
        }

        if let Some(target) = parse_ip_range(s)? {
            return Ok(target);
        }

        parse_host(s)
    }
}

impl AddressSpec {
    /// Expands the specification into concrete addresses, ascending.
    pub fn expand(&self) -> Result<Vec<Ipv4Addr>, ExpandError> {
        match *self {
            AddressSpec::Host { target_addr } => Ok(vec![target_addr]),
            AddressSpec::Cidr { base, prefix } => range::cidr_range(base, prefix)?.expand(),
            AddressSpec::Range { ipv4_range } => ipv4_range.expand(),
        }
    }
}

/// Parses and expands a single non-blank, non-comment line.
pub fn expand(line: &str) -> Result<Vec<Ipv4Addr>, ExpandError> {
    line.parse::<AddressSpec>()?.expand()
}

fn parse_ipv4(s: &str) -> Result<Ipv4Addr, ExpandError> {
    let s = s.trim();
    s.parse::<Ipv4Addr>()
        .map_err(|_| ExpandError::InvalidAddress(s.to_string()))
}

fn parse_host(s: &str) -> Result<AddressSpec, ExpandError> {
    parse_ipv4(s).map(|target_addr| AddressSpec::Host { target_addr })
}

/// Parses a range string like "10.0.0.1-10.0.0.50". Both ends must be full addresses.
fn parse_ip_range(s: &str) -> Result<Option<AddressSpec>, ExpandError> {
    if !s.contains('-') {
        return Ok(None);
    }

    let parts: Vec<&str> = s.split('-').collect();
    let [start_str, end_str] = parts.as_slice() else {
        return Err(ExpandError::InvalidRangeSyntax(format!(
            "expected START-END, got '{s}'"
        )));
    };

    let start_addr = parse_ipv4(start_str)?;
    let end_addr = parse_ipv4(end_str)?;

    let ipv4_range = Ipv4Range::new(start_addr, end_addr)?;
    Ok(Some(AddressSpec::Range { ipv4_range }))
}

/// Parses CIDR notation like "192.168.1.0/24".
fn parse_cidr(s: &str) -> Result<Option<AddressSpec>, ExpandError> {
    let Some((ip_str, prefix_str)) = s.split_once('/') else {
        return Ok(None);
    };

    let base = parse_ipv4(ip_str)?;

    let prefix_str = prefix_str.trim();
    let prefix = prefix_str
        .parse::<u8>()
        .ok()
        .filter(|prefix| *prefix <= 32)
        .ok_or_else(|| ExpandError::InvalidRangeSyntax(format!("invalid prefix '/{prefix_str}'")))?;

    Ok(Some(AddressSpec::Cidr { base, prefix }))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
