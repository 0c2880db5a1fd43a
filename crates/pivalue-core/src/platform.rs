// PiValue - Pi approximation algorithms and benchmark harness
//
// Copyright (c) 2025 PiValue contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Host platform descriptor echoed into every result.
//!
//! The string is opaque: nothing in the workspace parses it.

use once_cell::sync::Lazy;

static DESCRIPTOR: Lazy<String> = Lazy::new(detect);

/// Returns a descriptor of the host, e.g. `linux-6.8.0-x86_64`.
///
/// Computed once per process.
pub fn describe() -> &'static str {
    DESCRIPTOR.as_str()
}

fn detect() -> String {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    match kernel_release() {
        Some(release) => format!("{}-{}-{}", os, release, arch),
        None => format!("{}-{}", os, arch),
    }
}

#[cfg(target_os = "linux")]
fn kernel_release() -> Option<String> {
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .ok()
        .map(|release| release.trim().to_string())
        .filter(|release| !release.is_empty())
}

#[cfg(not(target_os = "linux"))]
fn kernel_release() -> Option<String> {
    None
}
