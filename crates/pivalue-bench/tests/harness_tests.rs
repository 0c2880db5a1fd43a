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

//! Harness properties: batch completeness, order preservation across serial
//! and parallel runs, failure isolation and accuracy idempotence.

use pivalue_bench::export::{records_from_batch, to_json_string};
use pivalue_bench::{accuracy, batch_table, run_batch, run_one, BenchConfig};
use pivalue_core::{identifiers, Algorithm, Params};
use proptest::prelude::*;

/// Every algorithm, with the slow ones scaled down.
fn light_jobs() -> Vec<(Algorithm, Params)> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let params = match algorithm {
                Algorithm::Leibniz => Params::new().iterations(10_000),
                Algorithm::Euler => Params::new().iterations(100),
                Algorithm::RelativePrime => Params::new().samples(2_000).seed(99),
                _ => Params::new(),
            };
            (algorithm, params)
        })
        .collect()
}

fn quiet() -> BenchConfig {
    BenchConfig::default().with_progress(false)
}

#[test]
fn test_batch_has_one_slot_per_algorithm_in_order() {
    let batch = run_batch(&light_jobs(), &quiet());
    let order: Vec<Algorithm> = batch.slots.iter().map(|s| s.algorithm).collect();
    assert_eq!(order, Algorithm::ALL.to_vec());
    assert!(!batch.has_failures(), "{:?}", batch.failures().collect::<Vec<_>>());
}

#[test]
fn test_every_identifier_runs_one_with_no_parameters() {
    for name in identifiers() {
        let result = run_one(name, &Params::new())
            .unwrap_or_else(|e| panic!("{} failed with defaults: {}", name, e));
        assert!(result.value.is_finite(), "{} is not finite", name);
        assert!(accuracy(&result) < 0.5, "{} is far from pi", name);
        assert!(!result.platform.is_empty());
    }
}

#[test]
fn test_parallel_preserves_order() {
    let serial = run_batch(&light_jobs(), &quiet());
    let parallel = run_batch(&light_jobs(), &quiet().with_parallel(true).with_max_threads(4));

    let methods = |b: &pivalue_bench::BatchResults| -> Vec<&'static str> {
        b.results().map(|r| r.method).collect()
    };
    assert_eq!(methods(&serial), methods(&parallel));
}

#[test]
fn test_failures_are_isolated() {
    let mut jobs = light_jobs();
    jobs[0].1 = Params::new().digits(0);
    jobs[5].1 = Params::new().samples(10).range(4, 4).seed(1);

    let batch = run_batch(&jobs, &quiet());
    assert_eq!(batch.len(), Algorithm::ALL.len());
    assert_eq!(batch.failure_count(), 2);
    assert!(batch.slots[0].outcome.as_ref().unwrap_err().is_validation());
    assert!(batch.slots[5].outcome.as_ref().unwrap_err().is_arithmetic());

    let table = batch_table(&batch);
    assert_eq!(table.matches("FAILED").count(), 2);

    let json = to_json_string(&records_from_batch(&batch)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), Algorithm::ALL.len());
}

#[test]
fn test_machin_accuracy_below_threshold() {
    let result = Algorithm::Machin.run_default().unwrap();
    assert!(accuracy(&result) < 1e-10);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_accuracy_is_idempotent(n in 0u64..200) {
        let result = Algorithm::Bailey.run(&Params::new().iterations(n)).unwrap();
        let first = accuracy(&result);
        let second = accuracy(&result);
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert!(first >= 0.0);
    }
}
