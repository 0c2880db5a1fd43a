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

//! Commands that compute Pi.

use crate::commands::{self, OutputFormat, RunArgs};
use crate::error::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Run one algorithm, all of them, or a full comparison.
#[derive(Subcommand)]
pub enum AlgorithmCommands {
    /// Run a single algorithm
    ///
    /// Only flags the algorithm accepts may be given; any other flag is
    /// rejected rather than ignored. Run `pivalue list --detailed` to see
    /// which parameters each algorithm takes.
    Run {
        /// Algorithm identifier (see `pivalue list`)
        #[arg(value_name = "ALGORITHM")]
        algorithm: String,

        /// Number of iterations, terms or doublings
        #[arg(short, long)]
        iterations: Option<u64>,

        /// Digits of precision (mandelbrot)
        #[arg(short, long)]
        digits: Option<u32>,

        /// Decimal precision (ramanujan)
        #[arg(short, long)]
        precision: Option<u32>,

        /// Number of sampled pairs (relative_prime)
        #[arg(long)]
        samples: Option<u64>,

        /// Smallest sampled integer (relative_prime)
        #[arg(long = "min")]
        min_value: Option<u64>,

        /// Largest sampled integer (relative_prime)
        #[arg(long = "max")]
        max_value: Option<u64>,

        /// Random seed for reproducible sampling (relative_prime)
        #[arg(long)]
        seed: Option<u64>,

        /// Arctangent terms as a/b*c, comma separated (machin_like)
        #[arg(long, value_name = "TERMS", allow_hyphen_values = true)]
        terms: Option<String>,
    },

    /// Run all algorithms with their defaults
    RunAll {
        /// Run algorithms in parallel (results keep registry order)
        #[arg(long)]
        parallel: bool,
    },

    /// Run all algorithms and compare accuracy and time
    Benchmark {
        /// Export results to a JSON file
        #[arg(short, long)]
        export: bool,

        /// Export file path (default: results.json, or PIVALUE_OUTPUT)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Run algorithms in parallel (results keep registry order)
        #[arg(long)]
        parallel: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

impl AlgorithmCommands {
    /// Execute the algorithm command.
    pub fn execute(self) -> Result<()> {
        match self {
            AlgorithmCommands::Run {
                algorithm,
                iterations,
                digits,
                precision,
                samples,
                min_value,
                max_value,
                seed,
                terms,
            } => commands::run(
                &algorithm,
                &RunArgs {
                    iterations,
                    digits,
                    precision,
                    samples,
                    min_value,
                    max_value,
                    seed,
                    terms,
                },
            ),
            AlgorithmCommands::RunAll { parallel } => commands::run_all(parallel),
            AlgorithmCommands::Benchmark {
                export,
                output,
                parallel,
                format,
            } => commands::benchmark(export, output, parallel, format),
        }
    }
}
