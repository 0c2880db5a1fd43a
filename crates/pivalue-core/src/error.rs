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

//! Error types for Pi approximation routines.
//!
//! Every routine and registry operation returns [`Result<T>`], so callers can
//! tell malformed parameters, arithmetic boundary conditions and unknown
//! algorithm names apart without inspecting message strings.

use thiserror::Error;

/// Result type for Pi approximation operations
pub type Result<T> = std::result::Result<T, PiError>;

/// Errors that can occur while computing a Pi approximation.
///
/// Implements `Clone` and `PartialEq` so batch runs can store a failure in
/// its result slot and tests can compare outcomes directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PiError {
    /// A parameter was malformed or not accepted by the algorithm.
    #[error("Invalid parameter '{parameter}': {reason}")]
    Validation {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The computation would divide by zero or otherwise leave the domain
    /// where a finite approximation exists.
    #[error("Arithmetic boundary reached: {0}")]
    ArithmeticBoundary(String),

    /// No algorithm is registered under the requested identifier.
    #[error("Algorithm '{name}' not found. Available algorithms: {}", .available.join(", "))]
    NotFound {
        /// The identifier that was looked up
        name: String,
        /// Every valid identifier, in registry order
        available: Vec<&'static str>,
    },
}

impl PiError {
    /// Create a validation error for a named parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use pivalue_core::PiError;
    ///
    /// let err = PiError::validation("digits", "must be at least 1");
    /// assert_eq!(err.to_string(), "Invalid parameter 'digits': must be at least 1");
    /// ```
    pub fn validation(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create an arithmetic boundary error.
    pub fn arithmetic(msg: impl Into<String>) -> Self {
        Self::ArithmeticBoundary(msg.into())
    }

    /// Create a lookup failure listing the valid identifiers.
    pub fn not_found(name: impl Into<String>, available: Vec<&'static str>) -> Self {
        Self::NotFound {
            name: name.into(),
            available,
        }
    }

    /// Short machine-readable name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            PiError::Validation { .. } => "validation",
            PiError::ArithmeticBoundary(_) => "arithmetic_boundary",
            PiError::NotFound { .. } => "not_found",
        }
    }

    /// Returns true for a parameter validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, PiError::Validation { .. })
    }

    /// Returns true for an arithmetic boundary condition.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, PiError::ArithmeticBoundary(_))
    }
}
