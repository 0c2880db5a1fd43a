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

//! Pi from the probability that two random integers are coprime.
//!
//! Two integers drawn at random share no factor with probability `6/π²`,
//! so `π = √(6 / P)`. The sampled estimate converges slowly and carries
//! sampling noise; it is a demonstration, not a precise method.

use crate::error::{PiError, Result};
use crate::measure::timed;
use crate::result::{AlgorithmResult, Iterations};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use tracing::debug;

/// Method name reported in results.
pub const METHOD: &str = "Relative Prime Probability";

/// Default number of sampled pairs.
pub const DEFAULT_SAMPLES: u64 = 100_000;
/// Default lower bound of sampled integers.
pub const DEFAULT_MIN_VALUE: u64 = 10;
/// Default upper bound of sampled integers.
pub const DEFAULT_MAX_VALUE: u64 = 1000;

/// Sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampling {
    /// Number of pairs to draw.
    pub samples: u64,
    /// Inclusive lower bound.
    pub min_value: u64,
    /// Inclusive upper bound.
    pub max_value: u64,
    /// Seed for a reproducible run; drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
        }
    }
}

impl Sampling {
    /// Checks counts and bounds.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(PiError::validation("samples", "must be at least 1"));
        }
        if self.min_value == 0 {
            return Err(PiError::validation("min_value", "must be at least 1"));
        }
        if self.min_value > self.max_value {
            return Err(PiError::validation(
                "min_value",
                format!(
                    "must not exceed max_value ({} > {})",
                    self.min_value, self.max_value
                ),
            ));
        }
        Ok(())
    }
}

/// Factors of `n` other than 1, found by trial division up to `√n`.
pub fn factors(n: u64) -> BTreeSet<u64> {
    let mut found = BTreeSet::new();
    let mut i = 1u64;
    while within_root(i, n) {
        if n % i == 0 {
            found.insert(i);
            found.insert(n / i);
        }
        i += 1;
    }
    found.remove(&1);
    found
}

/// `i² <= n` without overflow, bounded for every `n` including `u64::MAX`.
fn within_root(i: u64, n: u64) -> bool {
    i <= n / i
}

/// Returns true if `a` and `b` share a factor other than 1.
pub fn has_common_factors(a: u64, b: u64) -> bool {
    let fa = factors(a);
    factors(b).iter().any(|f| fa.contains(f))
}

/// Draws pairs from `rng` and returns `(probability, pi)`.
///
/// Fails with an arithmetic boundary error when every pair shares a factor:
/// the probability is then zero and `6 / P` is undefined.
pub fn estimate<R: Rng>(rng: &mut R, sampling: &Sampling) -> Result<(f64, f64)> {
    let mut shared = 0u64;
    for _ in 0..sampling.samples {
        let a = rng.gen_range(sampling.min_value..=sampling.max_value);
        let b = rng.gen_range(sampling.min_value..=sampling.max_value);
        if has_common_factors(a, b) {
            shared += 1;
        }
    }

    if shared == sampling.samples {
        return Err(PiError::arithmetic(format!(
            "all {} sampled pairs share a factor in [{}, {}]; coprime probability is zero",
            sampling.samples, sampling.min_value, sampling.max_value
        )));
    }

    let probability = 1.0 - shared as f64 / sampling.samples as f64;
    Ok((probability, (6.0 / probability).sqrt()))
}

/// Computes Pi by sampling random pairs.
pub fn calculate(sampling: &Sampling) -> Result<AlgorithmResult> {
    sampling.validate()?;

    let mut rng = match sampling.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    calculate_with_rng(&mut rng, sampling)
}

/// Computes Pi drawing from the caller's random source.
pub fn calculate_with_rng<R: Rng>(rng: &mut R, sampling: &Sampling) -> Result<AlgorithmResult> {
    sampling.validate()?;

    let (outcome, elapsed) = timed(|| estimate(rng, sampling));
    let (probability, pi) = outcome?;
    debug!(samples = sampling.samples, probability, "relative prime sampling complete");

    Ok(AlgorithmResult::new(
        pi,
        Iterations::Count(sampling.samples),
        elapsed,
        METHOD,
    )
    .with_probability(probability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn seeded(samples: u64) -> Sampling {
        Sampling {
            samples,
            seed: Some(7),
            ..Sampling::default()
        }
    }

    #[test]
    fn test_relative_prime_basic() {
        let result = calculate(&seeded(10_000)).unwrap();
        assert!((result.value.to_f64() - PI).abs() < 0.5);
        let probability = result.extras.probability.unwrap();
        assert!(probability > 0.0 && probability < 1.0);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let first = calculate(&seeded(2_000)).unwrap();
        let second = calculate(&seeded(2_000)).unwrap();
        assert_eq!(first.value, second.value);
    }

    #[test]
    fn test_factors() {
        let expected: BTreeSet<u64> = [2, 3, 4, 6, 12].into_iter().collect();
        assert_eq!(factors(12), expected);
        let prime: BTreeSet<u64> = [13].into_iter().collect();
        assert_eq!(factors(13), prime);
        assert!(factors(1).is_empty());
    }

    #[test]
    fn test_trial_division_bound_at_u64_max() {
        let root = u64::from(u32::MAX);
        assert!(within_root(root, u64::MAX));
        assert!(!within_root(root + 1, u64::MAX));
        assert!(!within_root(1, 0));
    }

    #[test]
    fn test_factors_of_large_square() {
        let n = 1u64 << 40;
        let found = factors(n);
        assert!(found.contains(&(1 << 20)));
        assert!(found.contains(&(1 << 39)));
        assert!(found.contains(&n));
        assert_eq!(found.len(), 40);
        assert!(factors(49).contains(&7));
    }

    #[test]
    fn test_common_factors() {
        assert!(has_common_factors(12, 18));
        assert!(!has_common_factors(8, 15));
        assert!(has_common_factors(7, 7));
    }

    #[test]
    fn test_all_shared_is_boundary() {
        // Every integer in [4, 4] shares the factor 4 with itself.
        let sampling = Sampling {
            samples: 10,
            min_value: 4,
            max_value: 4,
            seed: Some(1),
        };
        let err = calculate(&sampling).unwrap_err();
        assert!(err.is_arithmetic());
    }

    #[test]
    fn test_validation() {
        let zero_samples = Sampling {
            samples: 0,
            ..Sampling::default()
        };
        assert!(calculate(&zero_samples).unwrap_err().is_validation());

        let inverted = Sampling {
            min_value: 50,
            max_value: 10,
            ..Sampling::default()
        };
        assert!(calculate(&inverted).unwrap_err().is_validation());

        let zero_min = Sampling {
            min_value: 0,
            ..Sampling::default()
        };
        assert!(calculate(&zero_min).unwrap_err().is_validation());
    }
}
