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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Test helper to create a pivalue command with a clean environment
fn pivalue_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pivalue").expect("Failed to find pivalue binary");
    cmd.env_remove("PIVALUE_OUTPUT")
        .env_remove("PIVALUE_PARALLEL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    pivalue_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PiValue"))
        .stdout(predicate::str::contains("run-all"))
        .stdout(predicate::str::contains("benchmark"));
}

#[test]
fn test_version_output() {
    pivalue_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pivalue"));
}

#[test]
fn test_no_subcommand_fails() {
    pivalue_cmd().assert().failure();
}

// ===== List Command Tests =====

#[test]
fn test_list_in_registry_order() {
    let output = pivalue_cmd().arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.trim().strip_prefix("- "))
        .collect();
    assert_eq!(
        ids,
        vec![
            "mandelbrot",
            "leibniz",
            "liu_hui",
            "euler",
            "bailey",
            "relative_prime",
            "machin",
            "machin_like",
            "ramanujan",
        ]
    );
}

#[test]
fn test_list_detailed() {
    pivalue_cmd()
        .args(["list", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bailey-Borwein-Plouffe (BBP)"))
        .stdout(predicate::str::contains("no parameters"));
}

// ===== Run Command Tests =====

#[test]
fn test_run_machin() {
    pivalue_cmd()
        .args(["run", "machin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Method: Machin's Formula"))
        .stdout(predicate::str::contains("Pi ≈ 3.14159265358979"))
        .stdout(predicate::str::contains("Platform:"))
        .stdout(predicate::str::contains("Iterations:").not());
}

#[test]
fn test_run_with_iterations() {
    pivalue_cmd()
        .args(["run", "leibniz", "--iterations", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iterations: 1000"));
}

#[test]
fn test_run_mandelbrot_digits() {
    pivalue_cmd()
        .args(["run", "mandelbrot", "--digits", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pi ≈ 3.14"))
        .stdout(predicate::str::contains("Digits: 3"));
}

#[test]
fn test_run_seeded_sampling_is_reproducible() {
    let run = || {
        pivalue_cmd()
            .args(["run", "relative_prime", "--samples", "2000", "--seed", "5"])
            .output()
            .unwrap()
    };
    let first = String::from_utf8(run().stdout).unwrap();
    let second = String::from_utf8(run().stdout).unwrap();
    let pi_line = |s: &str| s.lines().find(|l| l.starts_with("Pi ≈")).map(str::to_string);
    assert!(pi_line(&first).is_some());
    assert_eq!(pi_line(&first), pi_line(&second));
}

#[test]
fn test_run_machin_like_terms() {
    pivalue_cmd()
        .args(["run", "machin_like", "--terms", "1/2,1/3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Method: Machin-like Formula"))
        .stdout(predicate::str::contains("3.14159265358979"));
}

#[test]
fn test_run_unknown_algorithm_fails() {
    pivalue_cmd()
        .args(["run", "archimedes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Algorithm 'archimedes' not found"))
        .stderr(predicate::str::contains("mandelbrot, leibniz"));
}

#[test]
fn test_run_unsupported_parameter_fails() {
    pivalue_cmd()
        .args(["run", "machin", "--iterations", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameter 'iterations'"));
}

#[test]
fn test_run_boundary_fails() {
    pivalue_cmd()
        .args(["run", "mandelbrot", "--digits", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("digits"));

    pivalue_cmd()
        .args(["run", "machin_like", "--terms", "1/0*4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Arithmetic boundary"));
}

// ===== Batch Command Tests =====

#[test]
fn test_run_all_lists_every_method() {
    pivalue_cmd()
        .arg("run-all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Results:"))
        .stdout(predicate::str::contains("Mandelbrot Set:"))
        .stdout(predicate::str::contains("Ramanujan's Formula:"))
        .stderr(predicate::str::contains("[1/9] Running Mandelbrot Set..."));
}

#[test]
fn test_benchmark_table() {
    pivalue_cmd()
        .args(["benchmark", "--parallel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Method"))
        .stdout(predicate::str::contains("Pi Value"))
        .stdout(predicate::str::contains("Euler Convergence"))
        .stdout(predicate::str::contains("=".repeat(100)));
}

#[test]
fn test_benchmark_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pi.json");

    pivalue_cmd()
        .args(["benchmark", "--export", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Results exported to"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 9);
    assert_eq!(records[0]["method"], "Mandelbrot Set");
    assert_eq!(records[0]["digits"], 5);
    for record in records {
        assert!(record["accuracy_error"].as_f64().unwrap() < 0.5);
        assert!(record["time_seconds"].as_f64().unwrap() >= 0.0);
    }
}

#[test]
fn test_benchmark_export_path_from_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.json");

    pivalue_cmd()
        .env("PIVALUE_OUTPUT", &path)
        .args(["benchmark", "--export"])
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn test_benchmark_json_format() {
    let output = pivalue_cmd()
        .args(["benchmark", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 9);
}

#[test]
fn test_benchmark_bad_format_fails() {
    pivalue_cmd()
        .args(["benchmark", "--format", "xml"])
        .assert()
        .failure();
}

#[test]
fn test_bad_parallel_env_fails() {
    pivalue_cmd()
        .env("PIVALUE_PARALLEL", "maybe")
        .arg("run-all")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PIVALUE_PARALLEL"));
}
