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

use thiserror::Error;

/// Failure to find a register that should have been allocated earlier in the trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No classical registers found for qubit {0}")]
    NoClassicalRegister(usize),
}

/// Reasons a start notification could not be turned into an operation.
/// These never leave the tracer; the notification is recorded as an absent entry instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CaptureError {
    #[error("Measurement {0} has no target qubit")]
    MeasurementWithoutTarget(String),
}
