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

//! Wall-clock timing around a computation.

use std::time::{Duration, Instant};

/// Runs `f` once and returns its output with the elapsed wall-clock time.
///
/// Only the closure body is timed; callers validate parameters before and
/// build their result record after.
///
/// # Example
///
/// ```
/// use pivalue_core::measure::timed;
///
/// let (sum, elapsed) = timed(|| (1..=10u64).sum::<u64>());
/// assert_eq!(sum, 55);
/// assert!(elapsed.as_secs_f64() >= 0.0);
/// ```
pub fn timed<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}
