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

//! Plain-text comparison table of batch results.
//!
//! ```text
//! ====================================================================================================
//! Method                              Pi Value             Error           Time (s)
//! ====================================================================================================
//! Machin's Formula                    3.141592653589793    4.44e-16        0.000001
//! ====================================================================================================
//! ```

use crate::accuracy::accuracy;
use crate::harness::{BatchResults, Slot};
use pivalue_core::AlgorithmResult;

/// Width of the horizontal rules.
pub const TABLE_WIDTH: usize = 100;

/// Characters of the value shown per row.
pub const VALUE_DISPLAY_WIDTH: usize = 18;

/// Formats `x` like C's `%.2e`: two fraction digits, signed two-digit exponent.
pub fn scientific(x: f64) -> String {
    let raw = format!("{:.2e}", x);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

fn header() -> String {
    let rule = "=".repeat(TABLE_WIDTH);
    format!(
        "{rule}\n{:<35} {:<20} {:<15} {:<15}\n{rule}\n",
        "Method",
        "Pi Value",
        "Error",
        "Time (s)",
        rule = rule
    )
}

fn result_row(result: &AlgorithmResult) -> String {
    format!(
        "{:<35} {:<20} {:<15} {:<15.6}\n",
        result.method,
        result.value.truncated(VALUE_DISPLAY_WIDTH),
        scientific(accuracy(result)),
        result.elapsed_seconds()
    )
}

fn slot_row(slot: &Slot) -> String {
    match &slot.outcome {
        Ok(result) => result_row(result),
        Err(e) => format!("{:<35} {:<20} {}\n", slot.method(), "FAILED", e),
    }
}

/// Renders results in the order given.
pub fn comparison_table(results: &[AlgorithmResult]) -> String {
    let mut table = header();
    for result in results {
        table.push_str(&result_row(result));
    }
    table.push_str(&"=".repeat(TABLE_WIDTH));
    table.push('\n');
    table
}

/// Renders a batch, with failed slots as error rows.
pub fn batch_table(batch: &BatchResults) -> String {
    let mut table = header();
    for slot in &batch.slots {
        table.push_str(&slot_row(slot));
    }
    table.push_str(&"=".repeat(TABLE_WIDTH));
    table.push('\n');
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivalue_core::{Algorithm, Iterations, PiError};
    use std::time::Duration;

    #[test]
    fn test_scientific_matches_printf() {
        assert_eq!(scientific(0.00012345), "1.23e-04");
        assert_eq!(scientific(0.0), "0.00e+00");
        assert_eq!(scientific(2.5e-16), "2.50e-16");
        assert_eq!(scientific(1234.0), "1.23e+03");
    }

    #[test]
    fn test_table_layout() {
        let result = AlgorithmResult::new(
            3.141592653589793_f64,
            Iterations::NotApplicable,
            Duration::from_micros(12),
            "Machin's Formula",
        );
        let table = comparison_table(&[result]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "=".repeat(100));
        assert!(lines[1].starts_with("Method"));
        assert!(lines[3].starts_with("Machin's Formula"));
        assert!(lines[3].contains("3.141592653589793"));
        assert!(lines[3].contains("0.00e+00"));
        assert!(lines[3].contains("0.000012"));
    }

    #[test]
    fn test_value_is_truncated() {
        let result = AlgorithmResult::new(
            3.14159265358979323_f64 + 1e-15,
            Iterations::Count(1),
            Duration::ZERO,
            "Wide",
        );
        let row = result_row(&result);
        let value = row[36..56].trim();
        assert!(value.len() <= VALUE_DISPLAY_WIDTH);
    }

    #[test]
    fn test_failed_slot_row() {
        let batch = BatchResults {
            slots: vec![Slot {
                algorithm: Algorithm::Mandelbrot,
                outcome: Err(PiError::validation("digits", "must be at least 1")),
            }],
            elapsed: Duration::ZERO,
        };
        let table = batch_table(&batch);
        assert!(table.contains("Mandelbrot Set"));
        assert!(table.contains("FAILED"));
        assert!(table.contains("must be at least 1"));
    }
}
