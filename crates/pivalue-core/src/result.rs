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

//! The uniform result record every algorithm returns.

use crate::platform;
use crate::value::PiValue;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Number of iterations an algorithm performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iterations {
    /// The algorithm ran this many iterations, terms or samples.
    Count(u64),
    /// Closed-form method with no iteration parameter.
    NotApplicable,
}

impl Iterations {
    /// The count, if the algorithm is iterative.
    pub fn count(&self) -> Option<u64> {
        match self {
            Iterations::Count(n) => Some(*n),
            Iterations::NotApplicable => None,
        }
    }
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iterations::Count(n) => write!(f, "{}", n),
            Iterations::NotApplicable => write!(f, "N/A"),
        }
    }
}

impl Serialize for Iterations {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Iterations::Count(n) => serializer.serialize_u64(*n),
            Iterations::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

/// Method-specific fields, present only for the algorithms that use them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Extras {
    /// Digits of precision requested from the Mandelbrot method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<u32>,
    /// Decimal precision of the Ramanujan series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Sampled probability that a random pair is coprime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

/// Result of one algorithm invocation.
///
/// Created fresh on every call and never mutated by the harness. Field names
/// in the serialized form are stable: `pi`, `iterations`, `time_seconds`,
/// `method`, `platform`, plus any present extras.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmResult {
    /// The computed approximation.
    #[serde(rename = "pi")]
    pub value: PiValue,
    /// Iterations performed, or not applicable.
    pub iterations: Iterations,
    /// Wall-clock duration of the numeric computation.
    #[serde(rename = "time_seconds", serialize_with = "serialize_seconds")]
    pub elapsed: Duration,
    /// Human-readable method name, unique per algorithm.
    pub method: &'static str,
    /// Opaque host descriptor.
    pub platform: String,
    /// Method-specific fields.
    #[serde(flatten)]
    pub extras: Extras,
}

fn serialize_seconds<S>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl AlgorithmResult {
    /// Creates a result stamped with the current platform descriptor.
    pub fn new(
        value: impl Into<PiValue>,
        iterations: Iterations,
        elapsed: Duration,
        method: &'static str,
    ) -> Self {
        Self {
            value: value.into(),
            iterations,
            elapsed,
            method,
            platform: platform::describe().to_string(),
            extras: Extras::default(),
        }
    }

    /// Records the Mandelbrot digit count.
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.extras.digits = Some(digits);
        self
    }

    /// Records the decimal precision used.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.extras.precision = Some(precision);
        self
    }

    /// Records the sampled coprimality probability.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.extras.probability = Some(probability);
        self
    }

    /// Elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
