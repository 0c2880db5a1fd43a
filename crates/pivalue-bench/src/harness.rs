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

//! Run one algorithm by name, or every registered algorithm as a batch.
//!
//! A batch never aborts early: each algorithm's outcome lands in its own
//! [`Slot`], failures included, and slots always come back in the order the
//! algorithms were given (registry order for [`run_all`]). With
//! [`BenchConfig::parallel`] the algorithms run on a rayon pool, but the
//! indexed collect keeps that order.
//!
//! # Example
//!
//! ```no_run
//! use pivalue_bench::{run_all, BenchConfig};
//!
//! let batch = run_all(&BenchConfig::default().with_progress(false));
//! for slot in &batch.slots {
//!     match &slot.outcome {
//!         Ok(result) => println!("{}: {}", result.method, result.value),
//!         Err(e) => eprintln!("{} failed: {}", slot.algorithm, e),
//!     }
//! }
//! ```

use crate::config::BenchConfig;
use colored::Colorize;
use pivalue_core::{lookup, Algorithm, AlgorithmResult, Params, PiError};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Looks up `name` and runs it with `params`.
///
/// Unknown names come back as [`PiError::NotFound`].
pub fn run_one(name: &str, params: &Params) -> Result<AlgorithmResult, PiError> {
    let algorithm = lookup(name)?;
    info!(algorithm = algorithm.id(), "running single algorithm");
    algorithm.run(params)
}

/// Outcome of one algorithm within a batch.
#[derive(Debug, Clone)]
pub struct Slot {
    /// The algorithm that ran.
    pub algorithm: Algorithm,
    /// Its result, or the error it failed with.
    pub outcome: Result<AlgorithmResult, PiError>,
}

impl Slot {
    /// Check if the algorithm produced a result.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Check if the algorithm failed.
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    /// Method name, whether or not the run succeeded.
    pub fn method(&self) -> &'static str {
        self.algorithm.method_name()
    }
}

/// All slots of a batch plus its total wall-clock time.
#[derive(Debug, Clone)]
pub struct BatchResults {
    /// One slot per algorithm, in input order.
    pub slots: Vec<Slot>,
    /// Wall-clock time for the whole batch.
    pub elapsed: Duration,
}

impl BatchResults {
    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for an empty batch.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of algorithms that produced a result.
    pub fn success_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_success()).count()
    }

    /// Number of algorithms that failed.
    pub fn failure_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_failure()).count()
    }

    /// Check if any algorithm failed.
    pub fn has_failures(&self) -> bool {
        self.slots.iter().any(Slot::is_failure)
    }

    /// Successful results, in slot order.
    pub fn results(&self) -> impl Iterator<Item = &AlgorithmResult> {
        self.slots.iter().filter_map(|s| s.outcome.as_ref().ok())
    }

    /// Failed slots, in slot order.
    pub fn failures(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|s| s.is_failure())
    }
}

/// Progress reporting on stderr, safe to share across rayon workers.
#[derive(Debug)]
struct ProgressTracker {
    total: usize,
    started: AtomicUsize,
    failed: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    fn new(total: usize) -> Self {
        Self {
            total,
            started: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    fn record_start(&self, algorithm: Algorithm) {
        let index = self.started.fetch_add(1, Ordering::Relaxed) + 1;
        eprintln!(
            "{} Running {}...",
            format!("[{}/{}]", index, self.total).bright_blue(),
            algorithm.method_name()
        );
    }

    fn record_failure(&self, algorithm: Algorithm, error: &PiError) {
        self.failed.fetch_add(1, Ordering::Relaxed);
        eprintln!("{} {} - {}", "✗".red().bold(), algorithm.method_name(), error);
    }

    fn print_summary(&self) {
        let failed = self.failed.load(Ordering::Relaxed);
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if failed == 0 {
            eprintln!(
                "\n{} ({:.2}s)\n",
                "All algorithms completed!".green().bold(),
                elapsed
            );
        } else {
            eprintln!(
                "\n{} {} of {} algorithms failed ({:.2}s)\n",
                "Completed with errors:".yellow().bold(),
                failed,
                self.total,
                elapsed
            );
        }
    }
}

/// Runs every registered algorithm with its defaults, in registry order.
pub fn run_all(config: &BenchConfig) -> BatchResults {
    let jobs: Vec<(Algorithm, Params)> = Algorithm::ALL
        .iter()
        .map(|&algorithm| (algorithm, Params::default()))
        .collect();
    run_batch(&jobs, config)
}

/// Runs each `(algorithm, params)` pair, isolating failures per slot.
pub fn run_batch(jobs: &[(Algorithm, Params)], config: &BenchConfig) -> BatchResults {
    let start = Instant::now();
    let tracker = config.show_progress.then(|| ProgressTracker::new(jobs.len()));
    info!(count = jobs.len(), parallel = config.parallel, "running batch");

    let run_slot = |(algorithm, params): &(Algorithm, Params)| {
        if let Some(t) = &tracker {
            t.record_start(*algorithm);
        }
        let outcome = algorithm.run(params);
        if let Err(e) = &outcome {
            warn!(algorithm = algorithm.id(), error = %e, "algorithm failed");
            if let Some(t) = &tracker {
                t.record_failure(*algorithm, e);
            }
        }
        Slot {
            algorithm: *algorithm,
            outcome,
        }
    };

    let slots: Vec<Slot> = if config.parallel {
        let collect = || jobs.par_iter().map(run_slot).collect::<Vec<Slot>>();
        match config.max_threads.map(build_pool) {
            Some(Ok(pool)) => pool.install(collect),
            Some(Err(e)) => {
                warn!(error = %e, "could not build thread pool, using the global pool");
                collect()
            }
            None => collect(),
        }
    } else {
        jobs.iter().map(run_slot).collect()
    };

    if let Some(t) = &tracker {
        t.print_summary();
    }

    let batch = BatchResults {
        slots,
        elapsed: start.elapsed(),
    };
    info!(
        succeeded = batch.success_count(),
        failed = batch.failure_count(),
        "batch complete"
    );
    batch
}

fn build_pool(threads: usize) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new().num_threads(threads).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> BenchConfig {
        BenchConfig::default().with_progress(false)
    }

    #[test]
    fn test_run_one_not_found() {
        let err = run_one("nope", &Params::new()).unwrap_err();
        assert!(matches!(err, PiError::NotFound { .. }));
    }

    #[test]
    fn test_run_one_dispatches() {
        let result = run_one("liu_hui", &Params::new().iterations(7)).unwrap();
        assert_eq!(result.method, "Liu Hui's Algorithm");
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let jobs = vec![
            (Algorithm::Machin, Params::new()),
            (Algorithm::Mandelbrot, Params::new().digits(0)),
            (Algorithm::LiuHui, Params::new()),
        ];
        let batch = run_batch(&jobs, &quiet());
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.success_count(), 2);
        assert_eq!(batch.failure_count(), 1);
        assert!(batch.slots[1].outcome.as_ref().unwrap_err().is_validation());
        assert_eq!(batch.slots[2].algorithm, Algorithm::LiuHui);
    }

    #[test]
    fn test_empty_batch() {
        let batch = run_batch(&[], &quiet());
        assert!(batch.is_empty());
        assert!(!batch.has_failures());
    }
}
