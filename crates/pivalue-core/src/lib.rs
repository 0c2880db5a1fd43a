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

//! PiValue core
//!
//! Pi approximation algorithms behind one result contract.
//!
//! ## Features
//!
//! - **Nine algorithms**: series, nested radicals, arctangent identities,
//!   Mandelbrot escape counts and coprime sampling
//! - **Mixed precision**: `f64`, 28-digit [`rust_decimal::Decimal`] and
//!   big-integer [`FixedDecimal`] values, all comparable through
//!   [`PiValue::to_f64`]
//! - **Closed registry**: [`Algorithm`] dispatch with keyword-style [`Params`]
//!
//! ## Usage
//!
//! ```
//! use pivalue_core::{lookup, Params};
//!
//! let algorithm = lookup("bailey").unwrap();
//! let result = algorithm.run(&Params::new().iterations(50)).unwrap();
//! assert!((result.value.to_f64() - std::f64::consts::PI).abs() < 1e-4);
//! ```

pub mod algorithms;
pub mod error;
pub mod factorial;
pub mod measure;
pub mod params;
pub mod platform;
pub mod registry;
pub mod result;
pub mod value;

pub use error::{PiError, Result};
pub use factorial::FactorialCache;
pub use params::Params;
pub use registry::{identifiers, lookup, Algorithm};
pub use result::{AlgorithmResult, Extras, Iterations};
pub use value::{Approximation, FixedDecimal, PiValue};
