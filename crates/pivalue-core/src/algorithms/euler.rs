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

//! Euler's convergence-improved arctangent series.
//!
//! ```text
//! π = 2 · Σ_{k=0}^{∞} 2^k (k!)² / (2k+1)!
//! ```
//!
//! Consecutive terms shrink roughly by half. The factorials grow past any
//! fixed-width integer within a few dozen terms (`(2k+1)!` at the default
//! 2000 terms has over 12,000 digits), so they are exact big integers drawn
//! from a [`FactorialCache`]. Each term is divided into a scaled fixed-point
//! decimal.

use crate::error::{PiError, Result};
use crate::factorial::FactorialCache;
use crate::measure::timed;
use crate::result::{AlgorithmResult, Iterations};
use crate::value::FixedDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use tracing::debug;

/// Method name reported in results.
pub const METHOD: &str = "Euler Convergence";

/// Default number of terms after the first.
pub const DEFAULT_ITERATIONS: u64 = 2000;

/// Fractional digits kept for every term.
pub const SCALE: u32 = 30;

/// Largest accepted iteration count.
pub const MAX_ITERATIONS: u64 = 100_000;

/// Sums terms `k = 0..=iterations` and doubles the total.
pub fn series(iterations: usize, cache: &mut FactorialCache) -> FixedDecimal {
    let unit = BigUint::from(10u32).pow(SCALE);
    let mut total = BigUint::zero();

    for k in 0..=iterations {
        let (k_fact, odd_fact) = cache.pair(k, 2 * k + 1);
        let numerator = (BigUint::one() << k) * k_fact * k_fact * &unit;
        total += numerator / odd_fact;
    }

    FixedDecimal::new(BigInt::from(total * 2u32), SCALE)
}

/// Computes Pi with a call-scoped factorial cache.
pub fn calculate(iterations: u64) -> Result<AlgorithmResult> {
    let mut cache = FactorialCache::new();
    calculate_with_cache(iterations, &mut cache)
}

/// Computes Pi reusing the caller's factorial cache.
pub fn calculate_with_cache(iterations: u64, cache: &mut FactorialCache) -> Result<AlgorithmResult> {
    if iterations > MAX_ITERATIONS {
        return Err(PiError::validation(
            "iterations",
            format!("must be at most {}", MAX_ITERATIONS),
        ));
    }
    let terms = iterations as usize;

    let (pi, elapsed) = timed(|| series(terms, cache));
    debug!(iterations, cached = cache.len(), "euler series complete");

    Ok(AlgorithmResult::new(
        pi,
        Iterations::Count(iterations),
        elapsed,
        METHOD,
    ))
}
