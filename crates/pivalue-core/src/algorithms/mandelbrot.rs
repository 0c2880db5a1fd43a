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

//! Pi from the escape time at the cusp of the Mandelbrot set.
//!
//! The real map `z ← z² + c` stays bounded for `c = 0.25` (the cusp). For
//! `c = 0.25 + ε` it escapes past 2 after roughly `π / √ε` steps. With
//! `ε = 1 / (100^d − 1)` the step count is Pi scaled by `10^d`.
//!
//! `ε` shrinks past what an `f64` resolves beyond four or five digits, so the
//! iteration runs in a 28-digit decimal. At [`MAX_DIGITS`] the epsilon is
//! `1e-16`, still well inside the decimal's resolution; every step then
//! advances `z` by at least `ε`, which guarantees termination.
//!
//! The step count grows tenfold per digit, and so does the runtime: 7 digits
//! already take seconds in a release build.

use crate::error::{PiError, Result};
use crate::measure::timed;
use crate::result::{AlgorithmResult, Iterations};
use rust_decimal::Decimal;
use tracing::debug;

/// Method name reported in results.
pub const METHOD: &str = "Mandelbrot Set";

/// Default digits of precision.
pub const DEFAULT_DIGITS: u32 = 5;

/// Largest accepted digit count.
///
/// Runtime grows about 10x per digit; at this cap a run takes minutes.
pub const MAX_DIGITS: u32 = 8;

/// Checks the requested digit count.
pub fn validate_digits(digits: u32) -> Result<()> {
    if digits == 0 {
        return Err(PiError::validation(
            "digits",
            "must be at least 1 (epsilon = 1/(100^0 - 1) divides by zero)",
        ));
    }
    if digits > MAX_DIGITS {
        return Err(PiError::validation(
            "digits",
            format!(
                "must be at most {} (epsilon would fall below decimal resolution)",
                MAX_DIGITS
            ),
        ));
    }
    Ok(())
}

fn epsilon(digits: u32) -> Decimal {
    let hundred = Decimal::from(100);
    let mut power = Decimal::ONE;
    for _ in 0..digits {
        power *= hundred;
    }
    Decimal::ONE / (power - Decimal::ONE)
}

/// Counts iterations of `z ← z² + c` from zero until `z ≥ 2`.
pub fn escape_count(c: Decimal) -> u64 {
    let two = Decimal::from(2);
    let mut z = Decimal::ZERO;
    let mut count = 0u64;
    while z < two {
        z = z * z + c;
        count += 1;
    }
    count
}

/// Computes Pi to `digits` decimal places from the escape count.
pub fn calculate(digits: u32) -> Result<AlgorithmResult> {
    validate_digits(digits)?;
    let c = Decimal::new(25, 2) + epsilon(digits);

    let (count, elapsed) = timed(|| escape_count(c));
    debug!(digits, count, "mandelbrot escape count");

    let scaled = i64::try_from(count)
        .map_err(|_| PiError::arithmetic("escape count exceeds decimal range"))?;
    let pi = Decimal::new(scaled, digits);

    Ok(AlgorithmResult::new(pi, Iterations::Count(count), elapsed, METHOD).with_digits(digits))
}
