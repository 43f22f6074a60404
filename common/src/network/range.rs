//! # IPv4 Range Model
//!
//! Inclusive, ascending ranges of IPv4 addresses and the guard that keeps
//! their expansion bounded.
//!
//! Used by [`crate::network::target::AddressSpec`] for both range lines
//! (`10.0.0.1-10.0.0.9`) and CIDR lines (`10.0.0.0/24`).

use std::net::Ipv4Addr;

use crate::error::ExpandError;

/// Hard cap on the number of addresses a single range or CIDR block may expand to.
pub const EXPANSION_LIMIT: u64 = 1_000_000;

/// A continuous range of IPv4 addresses, inclusive on both ends.
///
/// `start_addr <= end_addr` always holds for values built through [`Ipv4Range::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Result<Self, ExpandError> {
        if u32::from(start_addr) > u32::from(end_addr) {
            return Err(ExpandError::InconsistentRange {
                start: start_addr,
                end: end_addr,
            });
        }
        Ok(Self {
            start_addr,
            end_addr,
        })
    }

    /// Number of addresses in the range. Computed in `u64` so `0.0.0.0/0` does not overflow.
    pub fn size(&self) -> u64 {
        u64::from(u32::from(self.end_addr)) - u64::from(u32::from(self.start_addr)) + 1
    }

    pub fn iter(self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    /// Materializes the range in ascending order.
    ///
    /// The size is checked against [`EXPANSION_LIMIT`] before anything is allocated.
    pub fn expand(self) -> Result<Vec<Ipv4Addr>, ExpandError> {
        let count: u64 = self.size();
        if count > EXPANSION_LIMIT {
            return Err(ExpandError::RangeTooLarge {
                count,
                limit: EXPANSION_LIMIT,
            });
        }

        let mut addrs: Vec<Ipv4Addr> = Vec::with_capacity(count as usize);
        addrs.extend(self.iter());
        Ok(addrs)
    }
}

/// Creates the range covering a whole CIDR block (e.g. `192.168.1.77/24`).
///
/// The base address is masked down to the network address. Network and broadcast
/// addresses are both part of the range.
pub fn cidr_range(ip: Ipv4Addr, prefix: u8) -> Result<Ipv4Range, ExpandError> {
    if prefix > 32 {
        return Err(ExpandError::InvalidRangeSyntax(format!(
            "prefix /{prefix} is larger than /32"
        )));
    }
    let ip_u32 = u32::from(ip);
    let mask = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix)
    };
    let network = ip_u32 & mask;
    let broadcast = network | !mask;
    Ipv4Range::new(Ipv4Addr::from(network), Ipv4Addr::from(broadcast))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
