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

//! Liu Hui's polygon doubling, expressed as nested square roots.

use crate::error::Result;
use crate::measure::timed;
use crate::result::{AlgorithmResult, Iterations};

/// Method name reported in results.
pub const METHOD: &str = "Liu Hui's Algorithm";

/// Default number of doublings.
pub const DEFAULT_ITERATIONS: u64 = 7;

/// Seeds `s = √3`, applies `s ← √(2 + s)` `iterations` times, then returns
/// `768 · √(2 − s)`.
pub fn nested_radical(iterations: u64) -> f64 {
    let mut s = 3.0_f64.sqrt();
    for _ in 0..iterations {
        s = (2.0 + s).sqrt();
    }
    768.0 * (2.0 - s).sqrt()
}

/// Computes Pi with the nested radical.
pub fn calculate(iterations: u64) -> Result<AlgorithmResult> {
    let (pi, elapsed) = timed(|| nested_radical(iterations));
    Ok(AlgorithmResult::new(
        pi,
        Iterations::Count(iterations),
        elapsed,
        METHOD,
    ))
}
