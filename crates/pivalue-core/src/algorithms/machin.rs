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

//! Machin's formula and its generalization to any Machin-like identity.
//!
//! ```text
//! π/4 = 4·arctan(1/5) − arctan(1/239)
//! π   = 4 · Σ c[i] · arctan(a[i] / b[i])
//! ```
//!
//! Both are closed-form: there is no iteration parameter and results report
//! [`Iterations::NotApplicable`].

use crate::error::{PiError, Result};
use crate::measure::timed;
use crate::result::{AlgorithmResult, Iterations};

/// Method name reported for Machin's original formula.
pub const METHOD: &str = "Machin's Formula";

/// Method name reported for the generalized identity.
pub const GENERALIZED_METHOD: &str = "Machin-like Formula";

/// Numerators of Machin's original identity.
pub const MACHIN_NUMERATORS: [i64; 2] = [1, 1];
/// Denominators of Machin's original identity.
pub const MACHIN_DENOMINATORS: [i64; 2] = [5, 239];
/// Coefficients of Machin's original identity.
pub const MACHIN_COEFFICIENTS: [i64; 2] = [4, -1];

/// Evaluates `4 · (4·atan(1/5) − atan(1/239))`.
pub fn formula() -> f64 {
    4.0 * (4.0 * (1.0_f64 / 5.0).atan() - (1.0_f64 / 239.0).atan())
}

/// Computes Pi with Machin's formula.
pub fn calculate() -> Result<AlgorithmResult> {
    let (pi, elapsed) = timed(formula);
    Ok(AlgorithmResult::new(
        pi,
        Iterations::NotApplicable,
        elapsed,
        METHOD,
    ))
}

/// Checks that the three term lists describe a well-formed identity.
///
/// Runs before any arithmetic so a malformed identity never produces a
/// partial sum.
pub fn validate_terms(numerators: &[i64], denominators: &[i64], coefficients: &[i64]) -> Result<()> {
    if numerators.len() != denominators.len() || denominators.len() != coefficients.len() {
        return Err(PiError::validation(
            "terms",
            format!(
                "numerators, denominators and coefficients must have the same length (got {}, {} and {})",
                numerators.len(),
                denominators.len(),
                coefficients.len()
            ),
        ));
    }
    if numerators.is_empty() {
        return Err(PiError::validation("terms", "at least one term is required"));
    }
    if let Some(index) = denominators.iter().position(|&b| b == 0) {
        return Err(PiError::arithmetic(format!(
            "denominator of term {} is zero",
            index
        )));
    }
    Ok(())
}

/// Evaluates `4 · Σ c[i] · atan(a[i]/b[i])` after validating the terms.
///
/// # Examples
///
/// ```
/// use pivalue_core::algorithms::machin::machin_like_formula;
///
/// let pi = machin_like_formula(&[1, 1], &[5, 239], &[4, -1]).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 1e-10);
///
/// assert!(machin_like_formula(&[1, 1], &[5], &[4, -1]).is_err());
/// ```
pub fn machin_like_formula(
    numerators: &[i64],
    denominators: &[i64],
    coefficients: &[i64],
) -> Result<f64> {
    validate_terms(numerators, denominators, coefficients)?;
    Ok(sum_terms(numerators, denominators, coefficients))
}

fn sum_terms(numerators: &[i64], denominators: &[i64], coefficients: &[i64]) -> f64 {
    let total: f64 = numerators
        .iter()
        .zip(denominators)
        .zip(coefficients)
        .map(|((&a, &b), &c)| c as f64 * (a as f64 / b as f64).atan())
        .sum();
    4.0 * total
}

/// Computes Pi with a generalized Machin-like identity.
pub fn calculate_generalized(
    numerators: &[i64],
    denominators: &[i64],
    coefficients: &[i64],
) -> Result<AlgorithmResult> {
    validate_terms(numerators, denominators, coefficients)?;

    let (pi, elapsed) = timed(|| sum_terms(numerators, denominators, coefficients));
    if !pi.is_finite() {
        return Err(PiError::arithmetic("identity evaluated to a non-finite value"));
    }

    Ok(AlgorithmResult::new(
        pi,
        Iterations::NotApplicable,
        elapsed,
        GENERALIZED_METHOD,
    ))
}
