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

//! netseed injects network identity into a freshly imaged operating system
//! ahead of its first boot: deterministic NIC names via udev rules, and a
//! static address for the admin interface in whichever format the target
//! distribution expects. All writes land inside a target root (the mount
//! point of the image being provisioned), never in the running system.

pub mod cli;
mod network;
mod udev;
mod util;

pub use crate::network::{configure_admin_nic, NetworkStack, UnsupportedNetworkConfiguration};
pub use crate::udev::write_udev_nic_rules;
