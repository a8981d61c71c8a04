// Copyright 2024 The netseed Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! network abstracts away the writing of distribution network configuration
//! into a target root. Detecting the configuration family is decoupled from
//! the leaf writers, so the dispatch can be exercised on its own.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use slog_scope::info;

mod debian;
mod redhat;

/// Debian-style marker: interfaces(5) file, relative to the target root.
const DEBIAN_CONF: &str = "etc/network/interfaces";
/// RedHat-style marker: scripts directory, relative to the target root.
const REDHAT_CONF: &str = "etc/sysconfig/network-scripts";

/// Network configuration family of a target root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkStack {
    /// `/etc/network/interfaces` layout (Debian, Ubuntu).
    Debian,
    /// `/etc/sysconfig/network-scripts` layout (RHEL, CentOS).
    Redhat,
}

impl NetworkStack {
    /// Detect the configuration family of a target root.
    ///
    /// First match wins; a root carrying both layouts is treated as
    /// Debian-style. Returns `None` when neither layout is present.
    pub fn detect(root: &Path) -> Option<Self> {
        if root.join(DEBIAN_CONF).exists() {
            Some(NetworkStack::Debian)
        } else if root.join(REDHAT_CONF).exists() {
            Some(NetworkStack::Redhat)
        } else {
            None
        }
    }
}

/// No known network configuration layout under the target root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedNetworkConfiguration {
    root: PathBuf,
}

impl fmt::Display for UnsupportedNetworkConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "can't find suitable configuration files for admin NIC under {:?}",
            self.root
        )
    }
}

impl std::error::Error for UnsupportedNetworkConfiguration {}

/// Configure the admin NIC of a target root with a static address.
///
/// Address, netmask and gateway are written verbatim; the caller owns their
/// validity. Fails with [`UnsupportedNetworkConfiguration`] before touching
/// any file when the root matches no known layout.
pub fn configure_admin_nic(
    root: &Path,
    iface: &str,
    ip: &str,
    netmask: &str,
    gateway: &str,
) -> Result<()> {
    let stack = NetworkStack::detect(root).ok_or_else(|| UnsupportedNetworkConfiguration {
        root: root.to_path_buf(),
    })?;
    info!("configuring admin NIC {} ({:?} layout)", iface, stack);

    match stack {
        NetworkStack::Debian => debian::write_config(root, iface, ip, netmask, gateway),
        NetworkStack::Redhat => redhat::write_config(root, iface, ip, netmask, gateway),
    }
}
