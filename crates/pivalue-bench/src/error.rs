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

//! Error types for benchmark runs and result export.

use pivalue_core::PiError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while running or exporting a benchmark.
#[derive(Error, Debug, Clone)]
pub enum BenchError {
    /// An algorithm failed or could not be found.
    #[error(transparent)]
    Algorithm(#[from] PiError),

    /// Invalid configuration value, usually from the environment.
    #[error("Invalid configuration '{parameter}': {reason}")]
    InvalidConfig {
        /// Setting name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Writing an export file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file being written
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Serializing results failed.
    #[error("JSON serialization error: {0}")]
    Json(String),
}

impl BenchError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_algorithm_error_is_transparent() {
        let err: BenchError = PiError::validation("digits", "must be at least 1").into();
        assert_eq!(err.to_string(), "Invalid parameter 'digits': must be at least 1");
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = BenchError::io_error(
            "out/results.json",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/results.json"));
        assert!(msg.contains("no such directory"));
    }
}
