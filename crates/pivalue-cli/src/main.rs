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

//! PiValue Command Line Interface

use clap::Parser;
use pivalue_cli::cli::Commands;
use pivalue_cli::logging;
use std::process::ExitCode;

/// PiValue - calculate Pi with classic and modern algorithms
///
/// # Examples
///
/// ```bash
/// # Run the Mandelbrot method
/// pivalue run mandelbrot --digits 4
///
/// # Run all and show the comparison
/// pivalue benchmark
///
/// # Run all and export to JSON
/// pivalue benchmark --export --output results.json
/// ```
#[derive(Parser)]
#[command(name = "pivalue")]
#[command(author, version, about = "PiValue - calculate Pi using various mathematical algorithms", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
