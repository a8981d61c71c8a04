//! `udev-rules` CLI sub-command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::udev;

/// Write udev NIC naming rules into a target root
#[derive(Debug, Parser)]
pub struct CliUdevRules {
    /// The root of the filesystem being provisioned
    #[arg(long, value_name = "path")]
    root: PathBuf,
    /// Comma-separated MAC-to-name pairs, eg. `<mac>_eth0,<mac>_eth1`
    #[arg(long, value_name = "pairs")]
    mapping: String,
}

impl CliUdevRules {
    /// Run the `udev-rules` sub-command.
    pub(crate) fn run(self) -> Result<()> {
        udev::write_udev_nic_rules(&self.root, &self.mapping)
            .context("writing udev NIC naming rules")
    }
}
