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

//! Absolute error against the `f64` value of Pi.

use pivalue_core::{AlgorithmResult, Approximation};

/// Reference value every approximation is compared with.
pub const REFERENCE_PI: f64 = std::f64::consts::PI;

/// `|π − value|` for any representation that coerces to `f64`.
///
/// # Example
///
/// ```
/// use pivalue_bench::accuracy::error_of;
///
/// assert_eq!(error_of(&std::f64::consts::PI), 0.0);
/// assert!((error_of(&3.14) - 0.0015926535897931).abs() < 1e-12);
/// ```
pub fn error_of<A: Approximation + ?Sized>(value: &A) -> f64 {
    (REFERENCE_PI - value.real_value()).abs()
}

/// Absolute error of a result's value. Does not modify the result.
pub fn accuracy(result: &AlgorithmResult) -> f64 {
    error_of(&result.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivalue_core::{FixedDecimal, PiValue};

    #[test]
    fn test_mixed_representations() {
        let fixed = FixedDecimal::new(314_159_265i64, 8);
        assert!((error_of(&fixed) - 0.00000000358979).abs() < 1e-12);

        let value = PiValue::from(3.0);
        assert!((error_of(&value) - 0.14159265358979312).abs() < 1e-15);
    }

    #[test]
    fn test_error_is_non_negative() {
        assert!(error_of(&4.0) > 0.0);
        assert!(error_of(&2.0) > 0.0);
    }
}
