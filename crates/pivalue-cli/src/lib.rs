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

//! PiValue CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **run**: compute Pi with one algorithm and print a report
//! - **run-all**: run every algorithm with its defaults
//! - **benchmark**: run everything and print a comparison table, optionally
//!   exporting JSON
//! - **list**: show the registered algorithms
//!
//! # Examples
//!
//! ```no_run
//! use pivalue_cli::commands::{run, RunArgs};
//!
//! # fn main() -> Result<(), pivalue_cli::error::CliError> {
//! run("machin", &RunArgs::default())?;
//! run("mandelbrot", &RunArgs { digits: Some(4), ..RunArgs::default() })?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
