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

//! Run-all command - every algorithm with its defaults

use super::bench_config;
use crate::error::Result;
use pivalue_bench::BatchResults;

/// Runs every registered algorithm and prints one line per method.
///
/// Failed algorithms are listed with their error; they do not make the
/// command fail.
pub fn run_all(parallel: bool) -> Result<()> {
    let config = bench_config(parallel, None)?;
    let batch = pivalue_bench::run_all(&config);
    print!("{}", format_summary(&batch));
    Ok(())
}

/// `method: value` lines between dashed rules.
pub fn format_summary(batch: &BatchResults) -> String {
    let rule = "-".repeat(super::REPORT_WIDTH);
    let mut out = format!("\nResults:\n{}\n", rule);
    for slot in &batch.slots {
        match &slot.outcome {
            Ok(result) => out.push_str(&format!("{}: {}\n", result.method, result.value)),
            Err(e) => out.push_str(&format!("{}: FAILED ({})\n", slot.method(), e)),
        }
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
