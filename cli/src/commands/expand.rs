use std::path::Path;

use anyhow::Context;
use tracing::info;

use sweepr_common::network::list;

use crate::terminal::print;

pub fn expand(file: &Path) -> anyhow::Result<()> {
    let addrs = list::read_address_file(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    info!("{} addresses in {}", addrs.len(), file.display());
    print::addresses(&addrs);
    Ok(())
}
