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

//! Ramanujan's 1914 series for 1/π.
//!
//! ```text
//! 1/π = (2√2 / 9801) · Σ_{k=0}^{∞} (4k)! (1103 + 26390k) / ((k!)^4 · 396^(4k))
//! ```
//!
//! Each term adds about eight correct digits. The whole computation runs in
//! scaled big-integer arithmetic at the requested precision plus
//! [`GUARD_DIGITS`], and the result is truncated back to `precision` digits.

use crate::error::{PiError, Result};
use crate::factorial::FactorialCache;
use crate::measure::timed;
use crate::result::{AlgorithmResult, Iterations};
use crate::value::FixedDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use tracing::debug;

/// Method name reported in results.
pub const METHOD: &str = "Ramanujan's Formula";

/// Default number of series terms.
pub const DEFAULT_ITERATIONS: u64 = 10;

/// Default decimal precision.
pub const DEFAULT_PRECISION: u32 = 100;

/// Largest accepted term count.
pub const MAX_ITERATIONS: u64 = 10_000;

/// Largest accepted precision.
pub const MAX_PRECISION: u32 = 100_000;

/// Extra digits carried through the computation to absorb truncation.
pub const GUARD_DIGITS: u32 = 10;

fn validate(iterations: u64, precision: u32) -> Result<()> {
    if precision == 0 {
        return Err(PiError::validation("precision", "must be at least 1"));
    }
    if precision > MAX_PRECISION {
        return Err(PiError::validation(
            "precision",
            format!("must be at most {}", MAX_PRECISION),
        ));
    }
    if iterations > MAX_ITERATIONS {
        return Err(PiError::validation(
            "iterations",
            format!("must be at most {}", MAX_ITERATIONS),
        ));
    }
    Ok(())
}

/// Sums the first `iterations` terms (`k = 0..iterations`) and inverts.
///
/// An empty sum leaves nothing to invert and is reported as an arithmetic
/// boundary.
pub fn series(iterations: u64, precision: u32, cache: &mut FactorialCache) -> Result<FixedDecimal> {
    let scale = precision + GUARD_DIGITS;
    let unit = BigUint::from(10u32).pow(scale);

    let mut total = BigUint::zero();
    for k in 0..iterations as usize {
        let (k_fact, four_k_fact) = cache.pair(k, 4 * k);
        let numerator = four_k_fact * BigUint::from(1103 + 26390 * k as u64) * &unit;
        let denominator = k_fact.pow(4) * BigUint::from(396u32).pow(4 * k as u32);
        total += numerator / denominator;
    }

    let sqrt2 = (BigUint::from(2u32) * &unit * &unit).sqrt();
    let inverse = (BigUint::from(2u32) * sqrt2 * total) / (BigUint::from(9801u32) * &unit);
    if inverse.is_zero() {
        return Err(PiError::arithmetic(
            "series sum is zero; at least one term is required",
        ));
    }

    let pi = (&unit * &unit) / inverse;
    Ok(FixedDecimal::new(BigInt::from(pi), scale).truncate_to(precision))
}

/// Computes Pi with a call-scoped factorial cache.
pub fn calculate(iterations: u64, precision: u32) -> Result<AlgorithmResult> {
    let mut cache = FactorialCache::new();
    calculate_with_cache(iterations, precision, &mut cache)
}

/// Computes Pi reusing the caller's factorial cache.
pub fn calculate_with_cache(
    iterations: u64,
    precision: u32,
    cache: &mut FactorialCache,
) -> Result<AlgorithmResult> {
    validate(iterations, precision)?;

    let (outcome, elapsed) = timed(|| series(iterations, precision, cache));
    let pi = outcome?;
    debug!(iterations, precision, "ramanujan series complete");

    Ok(AlgorithmResult::new(
        pi,
        Iterations::Count(iterations),
        elapsed,
        METHOD,
    )
    .with_precision(precision))
}
