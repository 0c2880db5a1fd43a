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

//! CLI command implementations

mod benchmark;
mod list;
mod run;
mod run_all;

pub use benchmark::{benchmark, OutputFormat};
pub use list::list;
pub use run::{run, RunArgs};
pub use run_all::run_all;

use pivalue_bench::BenchConfig;
use std::path::PathBuf;

/// Rule width of the single-run report.
pub const REPORT_WIDTH: usize = 60;

/// Builds the batch configuration: environment first, then flags.
///
/// `--parallel` can only turn parallelism on; `PIVALUE_PARALLEL=1` stays in
/// effect when the flag is absent.
pub fn bench_config(parallel: bool, output: Option<PathBuf>) -> crate::error::Result<BenchConfig> {
    let mut config = BenchConfig::from_env()?;
    if parallel {
        config = config.with_parallel(true);
    }
    if let Some(path) = output {
        config = config.with_output(path);
    }
    Ok(config)
}
