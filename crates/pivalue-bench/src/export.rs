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

//! JSON export of results, each augmented with its accuracy.
//!
//! Records borrow the results they describe, so exporting never mutates or
//! copies the caller's data. The file is a JSON array, pretty-printed with
//! two-space indentation:
//!
//! ```json
//! [
//!   {
//!     "pi": 3.1415926535897936,
//!     "iterations": "N/A",
//!     "time_seconds": 1.2e-6,
//!     "method": "Machin's Formula",
//!     "platform": "linux-6.8.0-x86_64",
//!     "accuracy_error": 4.440892098500626e-16
//!   }
//! ]
//! ```
//!
//! A failed batch slot becomes `{"algorithm", "method", "error", "error_kind"}`
//! so the array keeps one entry per algorithm.

use crate::accuracy::accuracy;
use crate::error::{BenchError, Result};
use crate::harness::{BatchResults, Slot};
use pivalue_core::AlgorithmResult;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// A successful result plus its accuracy.
#[derive(Debug, Serialize)]
pub struct SuccessRecord<'a> {
    /// The result, serialized with its own field names.
    #[serde(flatten)]
    pub result: &'a AlgorithmResult,
    /// `|π − value|`.
    pub accuracy_error: f64,
}

/// A slot whose algorithm failed.
#[derive(Debug, Serialize)]
pub struct FailureRecord {
    /// Registry identifier.
    pub algorithm: &'static str,
    /// Method name.
    pub method: &'static str,
    /// Error message.
    pub error: String,
    /// `validation`, `arithmetic_boundary` or `not_found`.
    pub error_kind: &'static str,
}

/// One element of the exported array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ExportRecord<'a> {
    /// The algorithm produced a value.
    Success(SuccessRecord<'a>),
    /// The algorithm failed.
    Failure(FailureRecord),
}

impl<'a> ExportRecord<'a> {
    /// Wraps a result, computing its accuracy.
    pub fn from_result(result: &'a AlgorithmResult) -> Self {
        ExportRecord::Success(SuccessRecord {
            result,
            accuracy_error: accuracy(result),
        })
    }

    /// Wraps a batch slot.
    pub fn from_slot(slot: &'a Slot) -> Self {
        match &slot.outcome {
            Ok(result) => Self::from_result(result),
            Err(e) => ExportRecord::Failure(FailureRecord {
                algorithm: slot.algorithm.id(),
                method: slot.method(),
                error: e.to_string(),
                error_kind: e.kind(),
            }),
        }
    }
}

/// Records for a list of results, in the order given.
pub fn records_from_results(results: &[AlgorithmResult]) -> Vec<ExportRecord<'_>> {
    results.iter().map(ExportRecord::from_result).collect()
}

/// Records for every slot of a batch, in slot order.
pub fn records_from_batch(batch: &BatchResults) -> Vec<ExportRecord<'_>> {
    batch.slots.iter().map(ExportRecord::from_slot).collect()
}

/// Serializes records as a pretty-printed JSON array.
pub fn to_json_string(records: &[ExportRecord<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes records to `path`, replacing any existing file.
pub fn export_json(records: &[ExportRecord<'_>], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut json = to_json_string(records)?;
    json.push('\n');
    fs::write(path, json).map_err(|e| BenchError::io_error(path, e))?;
    info!(path = %path.display(), count = records.len(), "results exported");
    Ok(())
}

/// Exports a whole batch to `path`.
pub fn export_batch(batch: &BatchResults, path: impl AsRef<Path>) -> Result<()> {
    export_json(&records_from_batch(batch), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivalue_core::{Algorithm, Iterations, PiError};
    use serde_json::Value;
    use std::time::Duration;
    use tempfile::TempDir;

    fn sample_result() -> AlgorithmResult {
        AlgorithmResult::new(3.0_f64, Iterations::NotApplicable, Duration::ZERO, "Test")
    }

    #[test]
    fn test_success_record_fields() {
        let result = sample_result();
        let json = to_json_string(&records_from_results(std::slice::from_ref(&result))).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        let record = &parsed[0];

        assert_eq!(record["pi"], 3.0);
        assert_eq!(record["iterations"], "N/A");
        assert_eq!(record["method"], "Test");
        assert!(record["platform"].is_string());
        assert!(record["time_seconds"].is_number());
        assert!((record["accuracy_error"].as_f64().unwrap() - 0.14159265358979312).abs() < 1e-15);
        // Extras are omitted when unset.
        assert!(record.get("digits").is_none());
    }

    #[test]
    fn test_two_space_indent() {
        let result = sample_result();
        let json = to_json_string(&records_from_results(&[result])).unwrap();
        assert!(json.starts_with("[\n  {\n    \""));
    }

    #[test]
    fn test_failure_record() {
        let batch = BatchResults {
            slots: vec![Slot {
                algorithm: Algorithm::RelativePrime,
                outcome: Err(PiError::arithmetic("coprime probability is zero")),
            }],
            elapsed: Duration::ZERO,
        };
        let json = to_json_string(&records_from_batch(&batch)).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["algorithm"], "relative_prime");
        assert_eq!(parsed[0]["error_kind"], "arithmetic_boundary");
        assert!(parsed[0].get("pi").is_none());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        let result = sample_result();

        export_json(&records_from_results(&[result.clone()]), &path).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.as_array().unwrap().len(), 1);
        assert_eq!(written[0]["method"], result.method);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("results.json");
        let err = export_json(&records_from_results(&[sample_result()]), &path).unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }));
    }
}
