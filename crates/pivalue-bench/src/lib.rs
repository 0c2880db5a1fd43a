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

//! PiValue benchmark harness
//!
//! Runs the registered Pi approximations and compares them.
//!
//! ## Features
//!
//! - **Run one / run all**: dispatch by identifier, or every algorithm in
//!   registry order with per-algorithm failure isolation
//! - **Accuracy**: absolute error against `std::f64::consts::PI`
//! - **Reporting**: plain-text comparison table and JSON export
//!
//! ## Usage
//!
//! Run the criterion benchmarks:
//! ```bash
//! cargo bench --package pivalue-bench
//! ```

pub mod accuracy;
pub mod config;
pub mod error;
pub mod export;
pub mod harness;
pub mod report;

pub use accuracy::{accuracy, REFERENCE_PI};
pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use export::{export_batch, export_json, ExportRecord};
pub use harness::{run_all, run_batch, run_one, BatchResults, Slot};
pub use report::{batch_table, comparison_table};
