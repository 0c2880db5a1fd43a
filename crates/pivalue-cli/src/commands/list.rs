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

//! List command - registered algorithms

use pivalue_core::Algorithm;

/// Prints every registered identifier in registry order.
///
/// With `detailed`, each line also shows the method name, description and
/// accepted parameters.
pub fn list(detailed: bool) {
    println!("Available algorithms:");
    for algorithm in Algorithm::ALL {
        if detailed {
            let params = algorithm.accepted_params();
            println!(
                "  - {:<16} {} ({}) [{}]",
                algorithm.id(),
                algorithm.method_name(),
                algorithm.description(),
                if params.is_empty() {
                    "no parameters".to_string()
                } else {
                    params.join(", ")
                }
            );
        } else {
            println!("  - {}", algorithm.id());
        }
    }
}
