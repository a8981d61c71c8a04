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

//! udev NIC naming rules.
//!
//! There is no convenient way to remap NIC names at runtime on every target
//! distribution, so the rules are injected into the image ahead of its first
//! boot: one matching rule per MAC address, plus a companion file that keeps
//! the distribution's persistent-net generator from appending competing
//! entries of its own.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use slog_scope::{debug, info};

/// udev rules directory, relative to the target root.
const RULES_DIR: &str = "etc/udev/rules.d";

/// A MAC address to interface name association.
///
/// Both fields are carried verbatim; no address or name validation happens
/// at this layer.
#[derive(Clone, Debug, PartialEq, Eq)]
struct NicMapping {
    mac_address: String,
    name: String,
}

/// Parse a comma-separated list of `<mac>_<name>` pairs.
///
/// Eg.: `08:00:27:79:da:80_eth0,08:00:27:46:43:60_eth1`.
fn parse_mappings(mapping: &str) -> Result<Vec<NicMapping>> {
    let mut out = Vec::new();
    for pair in mapping.split(',') {
        let fields: Vec<&str> = pair.split('_').collect();
        match fields[..] {
            [mac_address, name] => out.push(NicMapping {
                mac_address: mac_address.to_string(),
                name: name.to_string(),
            }),
            _ => bail!("malformed MAC/NIC pair '{pair}' in mapping '{mapping}'"),
        }
    }
    Ok(out)
}

/// Write naming rules, one per mapping, in input order.
fn write_naming_rules<T>(writer: &mut T, mappings: &[NicMapping]) -> Result<()>
where
    T: Write,
{
    writeln!(writer, "# Generated by netseed during provisioning: BEGIN")?;
    for mapping in mappings {
        writeln!(
            writer,
            "SUBSYSTEM==\"net\", ACTION==\"add\", DRIVERS==\"?*\", \
             ATTR{{address}}==\"{}\", ATTR{{type}}==\"1\", KERNEL==\"eth*\", NAME=\"{}\"",
            mapping.mac_address, mapping.name
        )?;
    }
    writeln!(writer, "# Generated by netseed during provisioning: END")?;
    Ok(())
}

/// Write the comment-only file suppressing the persistent-net generator.
fn write_generator_suppression<T>(writer: &mut T) -> Result<()>
where
    T: Write,
{
    writeln!(writer, "# Generated by netseed during provisioning:")?;
    writeln!(
        writer,
        "# DO NOT DELETE. It is needed to disable net-generator"
    )?;
    Ok(())
}

/// Write udev NIC naming rules under the target root.
///
/// `mapping` holds comma-separated `<mac>_<name>` pairs (joined by
/// underscore). The whole mapping is parsed before any file is opened, so a
/// malformed pair leaves the target untouched. The rules directory must
/// already exist under the root.
pub fn write_udev_nic_rules(root: &Path, mapping: &str) -> Result<()> {
    let mappings = parse_mappings(mapping)?;
    info!("writing udev naming rules for {} interfaces", mappings.len());

    let rules_path = root.join(RULES_DIR).join("70-persistent-net.rules");
    debug!("writing {}", rules_path.display());
    let mut rules_file = File::create(&rules_path)
        .with_context(|| format!("failed to create file {rules_path:?}"))?;
    write_naming_rules(&mut rules_file, &mappings)
        .with_context(|| format!("failed to write naming rules to {rules_path:?}"))?;

    let generator_path = root.join(RULES_DIR).join("75-persistent-net-generator.rules");
    debug!("writing {}", generator_path.display());
    let mut generator_file = File::create(&generator_path)
        .with_context(|| format!("failed to create file {generator_path:?}"))?;
    write_generator_suppression(&mut generator_file)
        .with_context(|| format!("failed to write generator suppression to {generator_path:?}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn target_root() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join(RULES_DIR)).unwrap();
        root
    }

    #[test]
    fn test_parse_mappings() {
        let parsed = parse_mappings("08:00:27:79:da:80_eth0,08:00:27:46:43:60_eth1").unwrap();
        assert_eq!(
            parsed,
            vec![
                NicMapping {
                    mac_address: "08:00:27:79:da:80".to_string(),
                    name: "eth0".to_string(),
                },
                NicMapping {
                    mac_address: "08:00:27:46:43:60".to_string(),
                    name: "eth1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_mappings_malformed() {
        let tests = vec![
            "",
            "08:00:27:79:da:80",
            "08:00:27:79:da:80_eth0_spare",
            "08:00:27:79:da:80_eth0,",
            "08:00:27:79:da:80_eth0,08:00:27:46:43:60",
        ];
        for input in tests {
            parse_mappings(input).unwrap_err();
        }
    }

    #[test]
    fn test_write_naming_rules() {
        let mappings = vec![
            NicMapping {
                mac_address: "08:00:27:79:da:80".to_string(),
                name: "eth0".to_string(),
            },
            NicMapping {
                mac_address: "08:00:27:46:43:60".to_string(),
                name: "eth1".to_string(),
            },
        ];
        let expected = "# Generated by netseed during provisioning: BEGIN\n\
                        SUBSYSTEM==\"net\", ACTION==\"add\", DRIVERS==\"?*\", ATTR{address}==\"08:00:27:79:da:80\", ATTR{type}==\"1\", KERNEL==\"eth*\", NAME=\"eth0\"\n\
                        SUBSYSTEM==\"net\", ACTION==\"add\", DRIVERS==\"?*\", ATTR{address}==\"08:00:27:46:43:60\", ATTR{type}==\"1\", KERNEL==\"eth*\", NAME=\"eth1\"\n\
                        # Generated by netseed during provisioning: END\n";
        let mut buf = vec![];

        write_naming_rules(&mut buf, &mappings).unwrap();
        assert_eq!(buf, expected.as_bytes());
    }

    #[test]
    fn test_write_udev_nic_rules() {
        let root = target_root();
        write_udev_nic_rules(root.path(), "08:00:27:79:da:80_eth0").unwrap();

        let rules =
            fs::read_to_string(root.path().join(RULES_DIR).join("70-persistent-net.rules"))
                .unwrap();
        let lines: Vec<&str> = rules.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "SUBSYSTEM==\"net\", ACTION==\"add\", DRIVERS==\"?*\", \
             ATTR{address}==\"08:00:27:79:da:80\", ATTR{type}==\"1\", \
             KERNEL==\"eth*\", NAME=\"eth0\""
        );

        let generator = fs::read_to_string(
            root.path()
                .join(RULES_DIR)
                .join("75-persistent-net-generator.rules"),
        )
        .unwrap();
        assert_eq!(
            generator,
            "# Generated by netseed during provisioning:\n\
             # DO NOT DELETE. It is needed to disable net-generator\n"
        );
    }

    #[test]
    fn test_write_overwrites_prior_rules() {
        let root = target_root();
        write_udev_nic_rules(root.path(), "08:00:27:79:da:80_eth0,08:00:27:46:43:60_eth1")
            .unwrap();
        write_udev_nic_rules(root.path(), "08:00:27:79:da:80_eth0").unwrap();

        let rules =
            fs::read_to_string(root.path().join(RULES_DIR).join("70-persistent-net.rules"))
                .unwrap();
        assert_eq!(rules.lines().count(), 3);
    }

    #[test]
    fn test_malformed_mapping_writes_nothing() {
        let root = target_root();
        write_udev_nic_rules(root.path(), "08:00:27:79:da:80").unwrap_err();

        assert!(!root
            .path()
            .join(RULES_DIR)
            .join("70-persistent-net.rules")
            .exists());
        assert!(!root
            .path()
            .join(RULES_DIR)
            .join("75-persistent-net-generator.rules")
            .exists());
    }

    #[test]
    fn test_missing_rules_dir() {
        let root = tempfile::tempdir().unwrap();
        write_udev_nic_rules(root.path(), "08:00:27:79:da:80_eth0").unwrap_err();
    }
}
