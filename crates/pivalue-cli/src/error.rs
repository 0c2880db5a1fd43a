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

//! Structured error types for the PiValue CLI.

use pivalue_bench::BenchError;
use pivalue_core::PiError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by a CLI command.
///
/// Every variant is reported by `main` as `Error: <message>` with a non-zero
/// exit code.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Lookup or computation failed.
    #[error(transparent)]
    Algorithm(#[from] PiError),

    /// Configuration or export failed.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// A command-line argument could not be interpreted.
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Argument name
        argument: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Installing the log subscriber failed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl CliError {
    /// Create an invalid argument error.
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}
