// Copyright contributors to the trace2cirq project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};

/// Layout of the generated script.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// One `cirq.Circuit` that every moment is appended to.
    #[default]
    Flat,
    /// A `build_circuit()` function collecting moments and inserting them without flattening.
    MomentList,
}

/// Options of a translation run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CirqConfig {
    /// Fail when an operation has no primitive gate breakdown.
    /// This happens when an operation is called but does not execute a gate on any qubit.
    pub strict: bool,
    /// Emit a commented-out line where an operation without breakdown takes place.
    pub render_unhandled: bool,
    /// A new moment starts for every operation at this depth of the execution tree or above.
    pub depth: usize,
    /// Log every visited operation and its arguments.
    pub debug: bool,
    pub dialect: Dialect,
}

impl Default for CirqConfig {
    fn default() -> Self {
        Self {
            strict: false,
            render_unhandled: true,
            depth: 2,
            debug: false,
            dialect: Dialect::Flat,
        }
    }
}
