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

//! Utility commands.

use crate::commands;
use crate::error::Result;
use clap::Subcommand;

/// Informational commands.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// List all available algorithms
    List {
        /// Show method names, descriptions and accepted parameters
        #[arg(short, long)]
        detailed: bool,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    pub fn execute(self) -> Result<()> {
        match self {
            UtilityCommands::List { detailed } => {
                commands::list(detailed);
                Ok(())
            }
        }
    }
}
