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

//! Pi approximation routines.
//!
//! Each submodule exposes a `METHOD` name, its `DEFAULT_*` parameters and a
//! `calculate` entry point returning an [`AlgorithmResult`](crate::AlgorithmResult).
//! Routines are pure: the only state they touch is what the caller passes in.

pub mod bailey;
pub mod euler;
pub mod leibniz;
pub mod liu_hui;
pub mod machin;
pub mod mandelbrot;
pub mod ramanujan;
pub mod relative_prime;

pub use relative_prime::Sampling;
