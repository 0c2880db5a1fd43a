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

//! Log subscriber setup.
//!
//! Events go to stderr so they never interleave with table or JSON output on
//! stdout. `RUST_LOG` wins when set; otherwise the level comes from the
//! number of `-v` flags.

use crate::error::{CliError, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset and no `-v` is given.
pub const DEFAULT_FILTER: &str = "pivalue=warn";

/// Directive string for a verbosity count.
pub fn filter_for(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return DEFAULT_FILTER.to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("pivalue={}", level)
}

/// Installs the global `fmt` subscriber.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(_) if verbosity == 0 => EnvFilter::try_from_default_env()
            .map_err(|e| CliError::Logging(e.to_string()))?,
        _ => EnvFilter::try_new(filter_for(verbosity))
            .map_err(|e| CliError::Logging(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
