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

//! Keyword-style parameters for registry dispatch.

use crate::error::{PiError, Result};
use serde::Serialize;

/// Parameter names, in the order they are reported.
pub const PARAMETER_NAMES: [&str; 10] = [
    "iterations",
    "digits",
    "precision",
    "samples",
    "min_value",
    "max_value",
    "seed",
    "numerators",
    "denominators",
    "coefficients",
];

/// Optional parameters for one algorithm invocation.
///
/// Unset fields fall back to the algorithm's defaults. A field set for an
/// algorithm that does not accept it is rejected by
/// [`Algorithm::run`](crate::Algorithm::run).
///
/// # Example
///
/// ```
/// use pivalue_core::Params;
///
/// let params = Params::new().iterations(500).seed(42);
/// assert_eq!(params.iterations, Some(500));
/// assert_eq!(params.provided(), vec!["iterations", "seed"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params {
    /// Terms, doublings or series iterations.
    pub iterations: Option<u64>,
    /// Mandelbrot digits of precision.
    pub digits: Option<u32>,
    /// Ramanujan decimal precision.
    pub precision: Option<u32>,
    /// Sampled pairs.
    pub samples: Option<u64>,
    /// Lower sampling bound.
    pub min_value: Option<u64>,
    /// Upper sampling bound.
    pub max_value: Option<u64>,
    /// Sampling seed.
    pub seed: Option<u64>,
    /// Arctangent numerators.
    pub numerators: Option<Vec<i64>>,
    /// Arctangent denominators.
    pub denominators: Option<Vec<i64>>,
    /// Arctangent coefficients.
    pub coefficients: Option<Vec<i64>>,
}

impl Params {
    /// Empty parameter set: every algorithm runs with its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the iteration count.
    pub fn iterations(mut self, n: u64) -> Self {
        self.iterations = Some(n);
        self
    }

    /// Sets Mandelbrot digits.
    pub fn digits(mut self, d: u32) -> Self {
        self.digits = Some(d);
        self
    }

    /// Sets Ramanujan precision.
    pub fn precision(mut self, p: u32) -> Self {
        self.precision = Some(p);
        self
    }

    /// Sets the sample count.
    pub fn samples(mut self, n: u64) -> Self {
        self.samples = Some(n);
        self
    }

    /// Sets the inclusive sampling range.
    pub fn range(mut self, min: u64, max: u64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Sets the sampling seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets all three arctangent term lists.
    pub fn terms(mut self, numerators: Vec<i64>, denominators: Vec<i64>, coefficients: Vec<i64>) -> Self {
        self.numerators = Some(numerators);
        self.denominators = Some(denominators);
        self.coefficients = Some(coefficients);
        self
    }

    /// Names of the fields that are set.
    pub fn provided(&self) -> Vec<&'static str> {
        let set = [
            self.iterations.is_some(),
            self.digits.is_some(),
            self.precision.is_some(),
            self.samples.is_some(),
            self.min_value.is_some(),
            self.max_value.is_some(),
            self.seed.is_some(),
            self.numerators.is_some(),
            self.denominators.is_some(),
            self.coefficients.is_some(),
        ];
        PARAMETER_NAMES
            .iter()
            .zip(set)
            .filter_map(|(name, present)| present.then_some(*name))
            .collect()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.provided().is_empty()
    }

    /// Rejects any set field not in `accepted`.
    pub fn ensure_only(&self, algorithm: &str, accepted: &[&str]) -> Result<()> {
        match self.provided().into_iter().find(|name| !accepted.contains(name)) {
            Some(name) => Err(PiError::validation(
                name,
                if accepted.is_empty() {
                    format!("not accepted by '{}', which takes no parameters", algorithm)
                } else {
                    format!(
                        "not accepted by '{}' (accepts: {})",
                        algorithm,
                        accepted.join(", ")
                    )
                },
            )),
            None => Ok(()),
        }
    }
}

/// Parses a generalized arctangent term list such as `1/5*4,1/239*-1`.
///
/// Each comma-separated entry is `numerator/denominator*coefficient`; the
/// coefficient defaults to 1 when `*c` is omitted.
///
/// # Example
///
/// ```
/// use pivalue_core::params::parse_terms;
///
/// let (a, b, c) = parse_terms("1/5*4, 1/239*-1").unwrap();
/// assert_eq!(a, vec![1, 1]);
/// assert_eq!(b, vec![5, 239]);
/// assert_eq!(c, vec![4, -1]);
/// ```
pub fn parse_terms(input: &str) -> Result<(Vec<i64>, Vec<i64>, Vec<i64>)> {
    let mut numerators = Vec::new();
    let mut denominators = Vec::new();
    let mut coefficients = Vec::new();

    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (fraction, coefficient) = match entry.split_once('*') {
            Some((fraction, c)) => (fraction, parse_int(c, entry)?),
            None => (entry, 1),
        };
        let (a, b) = fraction.split_once('/').ok_or_else(|| {
            PiError::validation("terms", format!("'{}' is not of the form a/b*c", entry))
        })?;
        numerators.push(parse_int(a, entry)?);
        denominators.push(parse_int(b, entry)?);
        coefficients.push(coefficient);
    }

    if numerators.is_empty() {
        return Err(PiError::validation("terms", "at least one term is required"));
    }
    Ok((numerators, denominators, coefficients))
}

fn parse_int(text: &str, entry: &str) -> Result<i64> {
    text.trim().parse().map_err(|_| {
        PiError::validation(
            "terms",
            format!("'{}' in '{}' is not an integer", text.trim(), entry),
        )
    })
}
