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

//! Run command - one algorithm by name

use super::REPORT_WIDTH;
use crate::error::Result;
use pivalue_bench::run_one;
use pivalue_core::params::parse_terms;
use pivalue_core::{AlgorithmResult, Params};
use tracing::debug;

/// Optional parameters collected from the `run` flags.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    /// `--iterations`
    pub iterations: Option<u64>,
    /// `--digits`
    pub digits: Option<u32>,
    /// `--precision`
    pub precision: Option<u32>,
    /// `--samples`
    pub samples: Option<u64>,
    /// `--min`
    pub min_value: Option<u64>,
    /// `--max`
    pub max_value: Option<u64>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `--terms`, as `a/b*c,...`
    pub terms: Option<String>,
}

impl RunArgs {
    /// Converts flags to registry parameters. Only flags that were given
    /// are set, so the algorithm rejects the ones it does not take.
    pub fn to_params(&self) -> Result<Params> {
        let mut params = Params {
            iterations: self.iterations,
            digits: self.digits,
            precision: self.precision,
            samples: self.samples,
            min_value: self.min_value,
            max_value: self.max_value,
            seed: self.seed,
            ..Params::default()
        };
        if let Some(terms) = &self.terms {
            let (numerators, denominators, coefficients) = parse_terms(terms)?;
            params = params.terms(numerators, denominators, coefficients);
        }
        Ok(params)
    }
}

/// Runs one algorithm and prints its report.
///
/// # Errors
///
/// Returns `Err` if the name is not registered, a flag is not accepted by the
/// algorithm, or the computation hits a boundary.
pub fn run(algorithm: &str, args: &RunArgs) -> Result<()> {
    let params = args.to_params()?;
    debug!(algorithm, provided = ?params.provided(), "run command");
    let result = run_one(algorithm, &params)?;
    print!("{}", format_report(&result));
    Ok(())
}

/// Multi-line report for a single result.
pub fn format_report(result: &AlgorithmResult) -> String {
    let rule = "=".repeat(REPORT_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", rule));
    out.push_str(&format!("Method: {}\n", result.method));
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("Pi ≈ {}\n", result.value));
    if let Some(n) = result.iterations.count() {
        out.push_str(&format!("Iterations: {}\n", n));
    }
    out.push_str(&format!("Time: {:.6} seconds\n", result.elapsed_seconds()));
    out.push_str(&format!("Platform: {}\n", result.platform));
    if let Some(digits) = result.extras.digits {
        out.push_str(&format!("Digits: {}\n", digits));
    }
    if let Some(precision) = result.extras.precision {
        out.push_str(&format!("Precision: {}\n", precision));
    }
    if let Some(probability) = result.extras.probability {
        out.push_str(&format!("Coprime probability: {:.6}\n", probability));
    }
    out.push_str(&format!("{}\n\n", rule));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivalue_core::Iterations;
    use std::time::Duration;

    #[test]
    fn test_only_given_flags_are_set() {
        let args = RunArgs {
            digits: Some(4),
            ..RunArgs::default()
        };
        assert_eq!(args.to_params().unwrap().provided(), vec!["digits"]);
    }

    #[test]
    fn test_terms_flag() {
        let args = RunArgs {
            terms: Some("1/2,1/3".to_string()),
            ..RunArgs::default()
        };
        let params = args.to_params().unwrap();
        assert_eq!(params.denominators, Some(vec![2, 3]));
    }

    #[test]
    fn test_report_omits_not_applicable_iterations() {
        let result = AlgorithmResult::new(
            3.14_f64,
            Iterations::NotApplicable,
            Duration::from_millis(2),
            "Closed Form",
        );
        let report = format_report(&result);
        assert!(report.contains("Method: Closed Form"));
        assert!(report.contains("Pi ≈ 3.14"));
        assert!(report.contains("Time: 0.002000 seconds"));
        assert!(!report.contains("Iterations:"));
    }
}
