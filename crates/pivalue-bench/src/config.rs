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

//! Benchmark run configuration.
//!
//! Defaults can be overridden from the environment with [`BenchConfig::from_env`];
//! explicit builder calls made afterwards take precedence.

use crate::error::{BenchError, Result};
use std::path::PathBuf;

/// Default export path.
pub const DEFAULT_OUTPUT: &str = "results.json";

/// Environment variable overriding the export path.
pub const ENV_OUTPUT: &str = "PIVALUE_OUTPUT";

/// Environment variable enabling parallel runs (`1`, `true`, `0`, `false`).
pub const ENV_PARALLEL: &str = "PIVALUE_PARALLEL";

/// Configuration for a "run all" batch.
///
/// # Example
///
/// ```
/// use pivalue_bench::BenchConfig;
///
/// let config = BenchConfig::default()
///     .with_parallel(true)
///     .with_max_threads(2)
///     .with_progress(false);
/// assert!(config.parallel);
/// assert_eq!(config.max_threads, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Run algorithms on the rayon pool instead of one after another.
    ///
    /// Results are collected in registry order either way.
    pub parallel: bool,
    /// Thread cap for parallel runs; `None` uses rayon's default.
    pub max_threads: Option<usize>,
    /// Print `[i/N] Running ...` lines and a summary to stderr.
    pub show_progress: bool,
    /// Export destination.
    pub output: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            max_threads: None,
            show_progress: true,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl BenchConfig {
    /// Defaults with `PIVALUE_OUTPUT` and `PIVALUE_PARALLEL` applied.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(output) = lookup(ENV_OUTPUT).filter(|v| !v.trim().is_empty()) {
            config.output = PathBuf::from(output);
        }

        if let Some(raw) = lookup(ENV_PARALLEL) {
            config.parallel = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(BenchError::invalid_config(
                        ENV_PARALLEL,
                        format!("expected 1/true or 0/false, got '{}'", other),
                    ))
                }
            };
        }

        Ok(config)
    }

    /// Enables or disables parallel runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Caps the parallel thread count.
    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = Some(threads);
        self
    }

    /// Enables or disables progress output.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Sets the export destination.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }
}
