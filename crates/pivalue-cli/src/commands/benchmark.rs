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

//! Benchmark command - run everything, compare, optionally export

use super::bench_config;
use crate::error::{CliError, Result};
use colored::Colorize;
use pivalue_bench::export::{export_batch, records_from_batch, to_json_string};
use pivalue_bench::{batch_table, run_all};
use std::path::PathBuf;
use std::str::FromStr;

/// How the comparison is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width comparison table.
    #[default]
    Table,
    /// The export records as a JSON array.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::invalid_argument(
                "--format",
                format!("expected 'table' or 'json', got '{}'", other),
            )),
        }
    }
}

/// Runs all algorithms, prints the comparison and exports on request.
///
/// # Errors
///
/// Returns `Err` if the configuration is invalid or the export file cannot
/// be written. Individual algorithm failures appear as rows instead.
pub fn benchmark(
    export: bool,
    output: Option<PathBuf>,
    parallel: bool,
    format: OutputFormat,
) -> Result<()> {
    let config = bench_config(parallel, output)?;
    let batch = run_all(&config);

    match format {
        OutputFormat::Table => print!("{}", batch_table(&batch)),
        OutputFormat::Json => println!("{}", to_json_string(&records_from_batch(&batch))?),
    }

    if export {
        export_batch(&batch, &config.output)?;
        eprintln!(
            "\n{} Results exported to {}",
            "✓".green().bold(),
            config.output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
