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

//! Closed registry of Pi approximation algorithms.
//!
//! String identifiers exist only at the boundary: [`lookup`] and the
//! [`FromStr`] impl turn a name into an [`Algorithm`], and everything after
//! that is an exhaustive `match`.

use crate::algorithms::{
    bailey, euler, leibniz, liu_hui, machin, mandelbrot, ramanujan, relative_prime,
};
use crate::error::{PiError, Result};
use crate::params::Params;
use crate::result::AlgorithmResult;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A registered algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Escape count at the cusp of the Mandelbrot set.
    Mandelbrot,
    /// Madhava-Leibniz alternating series.
    Leibniz,
    /// Liu Hui's nested radical.
    LiuHui,
    /// Euler's factorial-ratio series.
    Euler,
    /// Bailey-Borwein-Plouffe series.
    Bailey,
    /// Coprime-pair sampling.
    RelativePrime,
    /// Machin's two-term arctangent identity.
    Machin,
    /// Generalized Machin-like identity.
    MachinLike,
    /// Ramanujan's 1/π series.
    Ramanujan,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Mandelbrot,
        Algorithm::Leibniz,
        Algorithm::LiuHui,
        Algorithm::Euler,
        Algorithm::Bailey,
        Algorithm::RelativePrime,
        Algorithm::Machin,
        Algorithm::MachinLike,
        Algorithm::Ramanujan,
    ];

    /// Registry identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Mandelbrot => "mandelbrot",
            Algorithm::Leibniz => "leibniz",
            Algorithm::LiuHui => "liu_hui",
            Algorithm::Euler => "euler",
            Algorithm::Bailey => "bailey",
            Algorithm::RelativePrime => "relative_prime",
            Algorithm::Machin => "machin",
            Algorithm::MachinLike => "machin_like",
            Algorithm::Ramanujan => "ramanujan",
        }
    }

    /// Method name carried by this algorithm's results.
    pub fn method_name(&self) -> &'static str {
        match self {
            Algorithm::Mandelbrot => mandelbrot::METHOD,
            Algorithm::Leibniz => leibniz::METHOD,
            Algorithm::LiuHui => liu_hui::METHOD,
            Algorithm::Euler => euler::METHOD,
            Algorithm::Bailey => bailey::METHOD,
            Algorithm::RelativePrime => relative_prime::METHOD,
            Algorithm::Machin => machin::METHOD,
            Algorithm::MachinLike => machin::GENERALIZED_METHOD,
            Algorithm::Ramanujan => ramanujan::METHOD,
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Mandelbrot => "iteration count near the Mandelbrot cusp c = 0.25",
            Algorithm::Leibniz => "alternating series over odd reciprocals",
            Algorithm::LiuHui => "polygon doubling as nested square roots",
            Algorithm::Euler => "factorial-ratio convergence series",
            Algorithm::Bailey => "hexadecimal-digit series in base 16",
            Algorithm::RelativePrime => "probability that random pairs are coprime",
            Algorithm::Machin => "4·arctan(1/5) − arctan(1/239)",
            Algorithm::MachinLike => "weighted sum of arctangents of rationals",
            Algorithm::Ramanujan => "Ramanujan's 1914 series for 1/π",
        }
    }

    /// Parameter names this algorithm accepts.
    pub fn accepted_params(&self) -> &'static [&'static str] {
        match self {
            Algorithm::Mandelbrot => &["digits"],
            Algorithm::Leibniz | Algorithm::LiuHui | Algorithm::Euler | Algorithm::Bailey => {
                &["iterations"]
            }
            Algorithm::RelativePrime => &["samples", "min_value", "max_value", "seed"],
            Algorithm::Machin => &[],
            Algorithm::MachinLike => &["numerators", "denominators", "coefficients"],
            Algorithm::Ramanujan => &["iterations", "precision"],
        }
    }

    /// Runs with `params`, falling back to defaults for unset fields.
    ///
    /// A field the algorithm does not accept is a validation error.
    ///
    /// # Example
    ///
    /// ```
    /// use pivalue_core::{Algorithm, Params};
    ///
    /// let result = Algorithm::Leibniz.run(&Params::new().iterations(10_000)).unwrap();
    /// assert!((result.value.to_f64() - std::f64::consts::PI).abs() < 1e-2);
    ///
    /// assert!(Algorithm::Machin.run(&Params::new().iterations(5)).is_err());
    /// ```
    pub fn run(&self, params: &Params) -> Result<AlgorithmResult> {
        params.ensure_only(self.id(), self.accepted_params())?;
        debug!(algorithm = self.id(), ?params, "dispatching");

        match self {
            Algorithm::Mandelbrot => {
                mandelbrot::calculate(params.digits.unwrap_or(mandelbrot::DEFAULT_DIGITS))
            }
            Algorithm::Leibniz => {
                leibniz::calculate(params.iterations.unwrap_or(leibniz::DEFAULT_ITERATIONS))
            }
            Algorithm::LiuHui => {
                liu_hui::calculate(params.iterations.unwrap_or(liu_hui::DEFAULT_ITERATIONS))
            }
            Algorithm::Euler => {
                euler::calculate(params.iterations.unwrap_or(euler::DEFAULT_ITERATIONS))
            }
            Algorithm::Bailey => {
                bailey::calculate(params.iterations.unwrap_or(bailey::DEFAULT_ITERATIONS))
            }
            Algorithm::RelativePrime => {
                let defaults = relative_prime::Sampling::default();
                relative_prime::calculate(&relative_prime::Sampling {
                    samples: params.samples.unwrap_or(defaults.samples),
                    min_value: params.min_value.unwrap_or(defaults.min_value),
                    max_value: params.max_value.unwrap_or(defaults.max_value),
                    seed: params.seed,
                })
            }
            Algorithm::Machin => machin::calculate(),
            Algorithm::MachinLike => match (
                params.numerators.as_deref(),
                params.denominators.as_deref(),
                params.coefficients.as_deref(),
            ) {
                (None, None, None) => machin::calculate_generalized(
                    &machin::MACHIN_NUMERATORS,
                    &machin::MACHIN_DENOMINATORS,
                    &machin::MACHIN_COEFFICIENTS,
                ),
                (Some(a), Some(b), Some(c)) => machin::calculate_generalized(a, b, c),
                _ => Err(PiError::validation(
                    "terms",
                    "numerators, denominators and coefficients must be given together",
                )),
            },
            Algorithm::Ramanujan => ramanujan::calculate(
                params.iterations.unwrap_or(ramanujan::DEFAULT_ITERATIONS),
                params.precision.unwrap_or(ramanujan::DEFAULT_PRECISION),
            ),
        }
    }

    /// Runs with every parameter at its default.
    pub fn run_default(&self) -> Result<AlgorithmResult> {
        self.run(&Params::default())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.id() == s)
            .ok_or_else(|| PiError::not_found(s, identifiers()))
    }
}

/// Registered identifiers, in registry order.
pub fn identifiers() -> Vec<&'static str> {
    Algorithm::ALL.iter().map(Algorithm::id).collect()
}

/// Resolves an identifier to its algorithm.
pub fn lookup(name: &str) -> Result<Algorithm> {
    name.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_order() {
        assert_eq!(
            identifiers(),
            vec![
                "mandelbrot",
                "leibniz",
                "liu_hui",
                "euler",
                "bailey",
                "relative_prime",
                "machin",
                "machin_like",
                "ramanujan",
            ]
        );
    }

    #[test]
    fn test_method_names_are_unique() {
        let names: HashSet<_> = Algorithm::ALL.iter().map(Algorithm::method_name).collect();
        assert_eq!(names.len(), Algorithm::ALL.len());
    }

    #[test]
    fn test_lookup_round_trips_ids() {
        for algorithm in Algorithm::ALL {
            assert_eq!(lookup(algorithm.id()).unwrap(), algorithm);
            assert_eq!(algorithm.to_string(), algorithm.id());
        }
    }

    #[test]
    fn test_unknown_lists_available() {
        let err = lookup("archimedes").unwrap_err();
        match &err {
            PiError::NotFound { name, available } => {
                assert_eq!(name, "archimedes");
                assert_eq!(available.len(), Algorithm::ALL.len());
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(err.to_string().contains("mandelbrot, leibniz"));
    }

    #[test]
    fn test_unsupported_parameter_rejected() {
        let err = Algorithm::Bailey.run(&Params::new().digits(3)).unwrap_err();
        assert!(err.is_validation());

        let err = Algorithm::Mandelbrot
            .run(&Params::new().iterations(3))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_run_reports_method() {
        let result = Algorithm::Bailey.run(&Params::new().iterations(20)).unwrap();
        assert_eq!(result.method, Algorithm::Bailey.method_name());
    }

    #[test]
    fn test_machin_like_partial_terms_rejected() {
        let partial = Params {
            numerators: Some(vec![1, 1]),
            denominators: Some(vec![2, 3]),
            ..Params::default()
        };
        let err = Algorithm::MachinLike.run(&partial).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("must be given together"));

        let only_coefficients = Params {
            coefficients: Some(vec![1]),
            ..Params::default()
        };
        assert!(Algorithm::MachinLike
            .run(&only_coefficients)
            .unwrap_err()
            .is_validation());

        let euler = Params::new().terms(vec![1, 1], vec![2, 3], vec![1, 1]);
        let result = Algorithm::MachinLike.run(&euler).unwrap();
        assert!((result.value.to_f64() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_machin_like_defaults_to_machin() {
        let result = Algorithm::MachinLike.run_default().unwrap();
        let machin = Algorithm::Machin.run_default().unwrap();
        assert!((result.value.to_f64() - machin.value.to_f64()).abs() < 1e-12);
    }
}
