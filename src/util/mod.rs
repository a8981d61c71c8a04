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

//! utility functions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Create a directory, with missing parents, if it is not already present.
pub fn ensure_dir_exists<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }
    fs::create_dir_all(path).with_context(|| format!("failed to create directory {path:?}"))?;
    Ok(path.to_path_buf())
}
