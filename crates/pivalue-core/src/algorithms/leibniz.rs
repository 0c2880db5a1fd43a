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

//! Madhava–Leibniz series: `π/4 = 1 − 1/3 + 1/5 − 1/7 + …`
//!
//! Converges very slowly (error ≈ 1/n), so plain `f64` is enough.

use crate::error::Result;
use crate::measure::timed;
use crate::result::{AlgorithmResult, Iterations};

/// Method name reported in results.
pub const METHOD: &str = "Madhava-Leibniz Formula";

/// Default number of terms after the first.
pub const DEFAULT_ITERATIONS: u64 = 400_000;

/// Sums `(-1)^k / (2k+1)` for `k = 0..=iterations` and multiplies by 4.
pub fn series(iterations: u64) -> f64 {
    let mut quarter = 0.0_f64;
    for k in 0..=iterations {
        let term = 1.0 / (2.0 * k as f64 + 1.0);
        if k % 2 == 0 {
            quarter += term;
        } else {
            quarter -= term;
        }
    }
    quarter * 4.0
}

/// Computes Pi with the Leibniz series.
pub fn calculate(iterations: u64) -> Result<AlgorithmResult> {
    let (pi, elapsed) = timed(|| series(iterations));
    Ok(AlgorithmResult::new(
        pi,
        Iterations::Count(iterations),
        elapsed,
        METHOD,
    ))
}
