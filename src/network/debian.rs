//! Debian-style admin NIC configuration.
//!
//! The main interfaces(5) file is rewritten to source `interfaces.d`, and
//! the static stanza for the admin interface lands there as its own
//! fragment. Stanzas previously defined directly in the main file are
//! discarded.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use slog_scope::debug;

use crate::util;

/// Per-interface fragment directory, relative to the target root.
const INTERFACES_DIR: &str = "etc/network/interfaces.d";

/// Write the preamble pointing interfaces(5) at the fragment directory.
fn write_interfaces_preamble<T>(writer: &mut T) -> Result<()>
where
    T: Write,
{
    writeln!(writer, "# Generated by netseed during provisioning:")?;
    writeln!(writer, "source-directory /etc/network/interfaces.d")?;
    Ok(())
}

/// Write a static-IP stanza for one interface.
fn write_static_stanza<T>(
    writer: &mut T,
    iface: &str,
    ip: &str,
    netmask: &str,
    gateway: &str,
) -> Result<()>
where
    T: Write,
{
    writeln!(writer, "# Generated by netseed during provisioning:")?;
    writeln!(writer, "auto {iface}")?;
    writeln!(writer, "iface {iface} inet static")?;
    writeln!(writer, "\taddress {ip}")?;
    writeln!(writer, "\tnetmask {netmask}")?;
    writeln!(writer, "\tgateway {gateway}")?;
    Ok(())
}

/// Configure the admin NIC on a Debian-style root.
pub(super) fn write_config(
    root: &Path,
    iface: &str,
    ip: &str,
    netmask: &str,
    gateway: &str,
) -> Result<()> {
    let ifaces_dir = util::ensure_dir_exists(root.join(INTERFACES_DIR))?;

    let interfaces_path = root.join(super::DEBIAN_CONF);
    debug!("writing {}", interfaces_path.display());
    let mut interfaces_file = File::create(&interfaces_path)
        .with_context(|| format!("failed to create file {interfaces_path:?}"))?;
    write_interfaces_preamble(&mut interfaces_file)
        .with_context(|| format!("failed to write {interfaces_path:?}"))?;

    let ifcfg_path = ifaces_dir.join(format!("ifcfg-{iface}"));
    debug!("writing {}", ifcfg_path.display());
    let mut ifcfg_file = File::create(&ifcfg_path)
        .with_context(|| format!("failed to create file {ifcfg_path:?}"))?;
    write_static_stanza(&mut ifcfg_file, iface, ip, netmask, gateway)
        .with_context(|| format!("failed to write {ifcfg_path:?}"))?;

    Ok(())
}
