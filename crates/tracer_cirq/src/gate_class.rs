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

/// Gate labels that map onto Cirq primitives.
///
/// Every label outside this table is either expanded through its children or reported as
/// having no primitive breakdown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GateClass {
    /// Rendered verbatim: the label is a Cirq gate.
    PassThrough,
    /// Single-qubit Clifford element `(index, Pauli)`.
    Clifford,
    /// CNOT with the control as first target.
    CanonicalCx,
    /// Rotation `(axis, angle)` or `(axis, numerator, exponent)`.
    Rotation,
    Measurement,
    Reset,
    NoOp,
}

impl GateClass {
    pub fn classify(label: &str) -> Option<Self> {
        let class = match label {
            "X" | "Y" | "Z" | "H" | "S" | "T" | "CZ" | "CNOT" | "SWAP" | "CCNOT" | "CCX"
            | "CCZ" => Self::PassThrough,
            "Interface_Clifford" => Self::Clifford,
            "Interface_CX" => Self::CanonicalCx,
            "Interface_RFrac" | "Interface_R" | "R" => Self::Rotation,
            "M" | "Measure" => Self::Measurement,
            "Reset" => Self::Reset,
            "NoOp" => Self::NoOp,
            _ => return None,
        };
        Some(class)
    }
}
