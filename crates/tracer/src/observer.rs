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


use crate::operation::Operation;

/// Receives operations while a trace is still being captured.
///
/// Depths count the trace root as 1. Absent entries are never reported.
pub trait TraceObserver {
    /// An operation was pushed. Its children are not known yet.
    fn on_start(&mut self, _op: &Operation, _depth: usize) {}

    /// An operation ended, with all of its children attached.
    fn on_end(&mut self, _op: &Operation, _depth: usize) {}
}

impl TraceObserver for () {}
