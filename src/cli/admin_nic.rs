//! `admin-nic` CLI sub-command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::network;

/// Write a static admin NIC configuration into a target root
#[derive(Debug, Parser)]
pub struct CliAdminNic {
    /// The root of the filesystem being provisioned
    #[arg(long, value_name = "path")]
    root: PathBuf,
    /// Name of the admin interface
    #[arg(long, value_name = "name")]
    iface: String,
    /// Static IPv4 address for the interface
    #[arg(long, value_name = "address")]
    ip: String,
    /// Netmask for the address
    #[arg(long, value_name = "mask")]
    netmask: String,
    /// Default gateway
    #[arg(long, value_name = "address")]
    gateway: String,
}

impl CliAdminNic {
    /// Run the `admin-nic` sub-command.
    pub(crate) fn run(self) -> Result<()> {
        network::configure_admin_nic(
            &self.root,
            &self.iface,
            &self.ip,
            &self.netmask,
            &self.gateway,
        )
        .context("configuring admin NIC")
    }
}
