//! RedHat-style admin NIC configuration.
//!
//! The per-interface file carries the address; the gateway goes into the
//! system-wide `/etc/sysconfig/network`, appended so settings placed there
//! by the image build survive. Repeated runs accumulate duplicate GATEWAY
//! lines; the last one wins at boot.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use slog_scope::debug;

/// System-wide network file, relative to the target root.
const NETWORK_CONF: &str = "etc/sysconfig/network";

/// Write the key=value body of an ifcfg file.
fn write_ifcfg<T>(writer: &mut T, iface: &str, ip: &str, netmask: &str) -> Result<()>
where
    T: Write,
{
    writeln!(writer, "# Generated by netseed during provisioning:")?;
    writeln!(writer, "DEVICE={iface}")?;
    writeln!(writer, "IPADDR={ip}")?;
    writeln!(writer, "NETMASK={netmask}")?;
    writeln!(writer, "BOOTPROTO=none")?;
    writeln!(writer, "ONBOOT=yes")?;
    writeln!(writer, "USERCTL=no")?;
    Ok(())
}

/// Configure the admin NIC on a RedHat-style root.
pub(super) fn write_config(
    root: &Path,
    iface: &str,
    ip: &str,
    netmask: &str,
    gateway: &str,
) -> Result<()> {
    let ifcfg_path = root.join(super::REDHAT_CONF).join(format!("ifcfg-{iface}"));
    debug!("writing {}", ifcfg_path.display());
    let mut ifcfg_file = File::create(&ifcfg_path)
        .with_context(|| format!("failed to create file {ifcfg_path:?}"))?;
    write_ifcfg(&mut ifcfg_file, iface, ip, netmask)
        .with_context(|| format!("failed to write {ifcfg_path:?}"))?;

    let network_path = root.join(NETWORK_CONF);
    debug!("appending gateway to {}", network_path.display());
    let mut network_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&network_path)
        .with_context(|| format!("failed to open file {network_path:?}"))?;
    writeln!(network_file, "GATEWAY=\"{gateway}\"")
        .with_context(|| format!("failed to append to {network_path:?}"))?;

    Ok(())
}
