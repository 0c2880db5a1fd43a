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

//! Numeric representations of a computed Pi approximation.
//!
//! Routines that accumulate many terms keep a fixed-precision decimal so
//! round-off does not swamp the result; routines where extra precision is
//! meaningless return a plain `f64`. The harness never inspects which one it
//! got: every representation implements [`Approximation`], which coerces the
//! value to an `f64` for comparison.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// A value that can be compared against a reference real number.
pub trait Approximation {
    /// Coerce the value to an `f64`.
    ///
    /// Representations that cannot be coerced yield `NaN`, which the caller
    /// detects through [`f64::is_finite`].
    fn real_value(&self) -> f64;
}

impl Approximation for f64 {
    fn real_value(&self) -> f64 {
        *self
    }
}

impl Approximation for Decimal {
    fn real_value(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }
}

/// Arbitrary-precision decimal stored as a scaled big integer.
///
/// The represented number is `mantissa / 10^scale`. Used where the 28
/// significant digits of [`Decimal`] are not enough, e.g. when the caller asks
/// for 100 digits of precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDecimal {
    mantissa: BigInt,
    scale: u32,
}

impl FixedDecimal {
    /// Creates a decimal equal to `mantissa / 10^scale`.
    pub fn new(mantissa: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            mantissa: mantissa.into(),
            scale,
        }
    }

    /// The scaled integer.
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Number of digits after the decimal point.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Drops fractional digits beyond `scale`, truncating toward zero.
    ///
    /// A `scale` at or above the current one returns an unchanged copy.
    pub fn truncate_to(&self, scale: u32) -> Self {
        if scale >= self.scale {
            return self.clone();
        }
        let divisor = BigInt::from(10u32).pow(self.scale - scale);
        Self {
            mantissa: &self.mantissa / divisor,
            scale,
        }
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa.is_negative() { "-" } else { "" };
        let digits = self.mantissa.magnitude().to_string();
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{}{}.{}", sign, integer, fraction)
    }
}

impl Approximation for FixedDecimal {
    fn real_value(&self) -> f64 {
        if self.mantissa.is_zero() {
            return 0.0;
        }
        self.to_string().parse::<f64>().unwrap_or(f64::NAN)
    }
}

/// The computed value of a Pi approximation, in whichever representation the
/// algorithm produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum PiValue {
    /// Native double-precision float.
    Float(f64),
    /// 28-digit fixed-precision decimal.
    Decimal(Decimal),
    /// Arbitrary-precision scaled decimal.
    Fixed(FixedDecimal),
}

impl PiValue {
    /// Coerce to an `f64` regardless of representation.
    pub fn to_f64(&self) -> f64 {
        self.real_value()
    }

    /// Returns true when the coerced value is neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.to_f64().is_finite()
    }

    /// Name of the storage representation.
    pub fn representation(&self) -> &'static str {
        match self {
            PiValue::Float(_) => "float",
            PiValue::Decimal(_) => "decimal",
            PiValue::Fixed(_) => "fixed",
        }
    }

    /// The textual value cut to at most `width` characters, for table display.
    pub fn truncated(&self, width: usize) -> String {
        self.to_string().chars().take(width).collect()
    }
}

impl Approximation for PiValue {
    fn real_value(&self) -> f64 {
        match self {
            PiValue::Float(v) => v.real_value(),
            PiValue::Decimal(d) => d.real_value(),
            PiValue::Fixed(d) => d.real_value(),
        }
    }
}

impl fmt::Display for PiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PiValue::Float(v) => write!(f, "{}", v),
            PiValue::Decimal(d) => write!(f, "{}", d),
            PiValue::Fixed(d) => write!(f, "{}", d),
        }
    }
}

impl From<f64> for PiValue {
    fn from(value: f64) -> Self {
        PiValue::Float(value)
    }
}

impl From<Decimal> for PiValue {
    fn from(value: Decimal) -> Self {
        PiValue::Decimal(value)
    }
}

impl From<FixedDecimal> for PiValue {
    fn from(value: FixedDecimal) -> Self {
        PiValue::Fixed(value)
    }
}

// Decimal representations serialize as strings so no digits are lost to an
// intermediate f64.
impl Serialize for PiValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PiValue::Float(v) => serializer.serialize_f64(*v),
            PiValue::Decimal(d) => serializer.serialize_str(&d.to_string()),
            PiValue::Fixed(d) => serializer.serialize_str(&d.to_string()),
        }
    }
}
