//! Command-line arguments parsing.

use anyhow::Result;
use clap::Parser;
use slog_scope::trace;

mod admin_nic;
mod udev_rules;

/// Write provisioning-time network configuration into a target root
#[derive(Debug, Parser)]
#[clap(display_name = "netseed")]
#[clap(version, propagate_version = true)]
pub enum CliConfig {
    UdevRules(udev_rules::CliUdevRules),
    AdminNic(admin_nic::CliAdminNic),
}

impl CliConfig {
    /// Run the relevant CLI sub-command.
    pub fn run(self) -> Result<()> {
        match self {
            CliConfig::UdevRules(cmd) => cmd.run(),
            CliConfig::AdminNic(cmd) => cmd.run(),
        }
    }
}

/// Parse command-line arguments into CLI configuration.
pub fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<CliConfig> {
    let cfg = match CliConfig::try_parse_from(argv) {
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp => e.exit(),
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayVersion => e.exit(),
        v => v,
    }?;
    trace!("cli configuration - {:?}", cfg);
    Ok(cfg)
}
