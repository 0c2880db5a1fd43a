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

//! Bailey–Borwein–Plouffe series.
//!
//! ```text
//! π = Σ_{k=0}^{∞} 1/16^k · (4/(8k+1) − 2/(8k+4) − 1/(8k+5) − 1/(8k+6))
//! ```
//!
//! Terms shrink by a factor of 16, so every term adds a little more than one
//! correct decimal digit. The sum is accumulated in a 28-digit decimal; once
//! `1/16^k` drops below the decimal's resolution the remaining terms add
//! nothing.

use crate::error::Result;
use crate::measure::timed;
use crate::result::{AlgorithmResult, Iterations};
use rust_decimal::Decimal;
use tracing::debug;

/// Method name reported in results.
pub const METHOD: &str = "Bailey-Borwein-Plouffe (BBP)";

/// Default number of terms after the first.
pub const DEFAULT_ITERATIONS: u64 = 100;

/// Sums terms `k = 0..=iterations` of the BBP series.
pub fn series(iterations: u64) -> Decimal {
    let sixteenth = Decimal::new(625, 4);
    let four = Decimal::from(4);
    let two = Decimal::from(2);

    let mut weight = Decimal::ONE;
    let mut pi = Decimal::ZERO;

    for k in 0..=iterations {
        let k8 = Decimal::from(k) * Decimal::from(8);
        let bracket = four / (k8 + Decimal::ONE)
            - two / (k8 + Decimal::from(4))
            - Decimal::ONE / (k8 + Decimal::from(5))
            - Decimal::ONE / (k8 + Decimal::from(6));
        pi += weight * bracket;
        weight = weight.checked_mul(sixteenth).unwrap_or(Decimal::ZERO);
    }

    pi
}

/// Computes Pi with the BBP series.
pub fn calculate(iterations: u64) -> Result<AlgorithmResult> {
    let (pi, elapsed) = timed(|| series(iterations));
    debug!(iterations, %pi, "bailey series complete");

    Ok(AlgorithmResult::new(
        pi,
        Iterations::Count(iterations),
        elapsed,
        METHOD,
    ))
}
