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

//! Memoized factorials over arbitrary-size integers.
//!
//! `FactorialCache` is an ordinary value: a routine creates one for the span
//! of a call, or a caller passes its own in to reuse the table across calls.
//! Nothing is shared between threads unless the caller shares it.

use num_bigint::BigUint;
use num_traits::One;

/// Table of `n!` for every `n` computed so far.
///
/// Extending the table to `n` costs one multiplication per new entry, so a
/// series that needs `k!` and `(2k+1)!` for increasing `k` never recomputes a
/// factorial from scratch.
#[derive(Debug, Clone)]
pub struct FactorialCache {
    table: Vec<BigUint>,
}

impl FactorialCache {
    /// Creates a cache holding only `0! = 1`.
    pub fn new() -> Self {
        Self {
            table: vec![BigUint::one()],
        }
    }

    fn extend_to(&mut self, n: usize) {
        while self.table.len() <= n {
            let next = self.table.len();
            let value = &self.table[next - 1] * BigUint::from(next);
            self.table.push(value);
        }
    }

    /// Returns `n!`, extending the table as needed.
    pub fn get(&mut self, n: usize) -> &BigUint {
        self.extend_to(n);
        &self.table[n]
    }

    /// Returns `a!` and `b!` together.
    pub fn pair(&mut self, a: usize, b: usize) -> (&BigUint, &BigUint) {
        self.extend_to(a.max(b));
        (&self.table[a], &self.table[b])
    }

    /// Number of memoized entries, `0!` included.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false: `0!` is present from construction.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for FactorialCache {
    fn default() -> Self {
        Self::new()
    }
}
