//! # Address List Reader
//!
//! Reads address lists: one specification per line, blank lines and lines
//! starting with `#` or `//` skipped. The first bad line aborts the whole list.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::Ipv4Addr;
use std::path::Path;

use tracing::debug;

use crate::error::ListError;
use crate::network::target;

/// Parses an address list, expanding every specification in file order.
pub fn parse_address_list<R: BufRead>(reader: R) -> Result<Vec<Ipv4Addr>, ListError> {
    let mut addrs: Vec<Ipv4Addr> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let spec = line.trim();
        if is_skippable(spec) {
            continue;
        }

        let expanded = target::expand(spec).map_err(|source| ListError::Line {
            line: idx + 1,
            source,
        })?;
        debug!("line {}: '{spec}' expanded to {} addresses", idx + 1, expanded.len());
        addrs.extend(expanded);
    }

    Ok(addrs)
}

/// Opens `path` and parses it with [`parse_address_list`].
pub fn read_address_file(path: impl AsRef<Path>) -> Result<Vec<Ipv4Addr>, ListError> {
    let file = File::open(path)?;
    parse_address_list(BufReader::new(file))
}

fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with("//")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
