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

use std::fmt::{self, Display};

/// Rotation angle as a Python expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Angle {
    /// Used verbatim.
    Literal(String),
    /// Exact dyadic angle `-π·numerator/2^(exponent-1)`.
    Dyadic { numerator: String, exponent: String },
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Literal(angle) => write!(f, "{angle}"),
            Angle::Dyadic {
                numerator,
                exponent,
            } => write!(f, "-np.pi*{numerator}/(2**({exponent}-1))"),
        }
    }
}

/// One primitive Cirq instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Gate {
        symbol: String,
        qubits: Vec<usize>,
    },
    /// `r<axis>` rotation. The identity axis `i` has no Cirq gate and renders as a comment.
    Rotation {
        axis: char,
        angle: Angle,
        qubit: usize,
    },
    Measure {
        qubit: usize,
        key: usize,
    },
    /// An operation without primitive breakdown, rendered as a comment.
    Unhandled {
        gate: String,
        qubits: Vec<usize>,
    },
}

impl Instruction {
    pub fn gate(symbol: impl Into<String>, qubits: Vec<usize>) -> Self {
        Self::Gate {
            symbol: symbol.into(),
            qubits,
        }
    }

    /// The name imported from `cirq.ops`, or `None` for comments.
    pub fn symbol(&self) -> Option<String> {
        match self {
            Self::Gate { symbol, .. } => Some(symbol.clone()),
            Self::Rotation { axis: 'i', .. } | Self::Unhandled { .. } => None,
            Self::Rotation { axis, .. } => Some(format!("r{axis}")),
            Self::Measure { .. } => Some("measure".to_string()),
        }
    }

    pub fn is_comment(&self) -> bool {
        self.symbol().is_none()
    }
}

fn fmt_qubits(qubits: &[usize]) -> String {
    qubits
        .iter()
        .map(|q| format!("qubits[{q}]"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gate { symbol, qubits } => write!(f, "{symbol}({})", fmt_qubits(qubits)),
            Self::Rotation { axis, angle, qubit } => {
                if *axis == 'i' {
                    write!(f, "#")?;
                }
                write!(f, "r{axis}(rads={angle}).on(qubits[{qubit}])")
            }
            Self::Measure { qubit, key } => write!(f, "measure(qubits[{qubit}], key='{key}')"),
            Self::Unhandled { gate, qubits } => write!(f, "#{gate}({})", fmt_qubits(qubits)),
        }
    }
}

/// An instruction placed in a moment, optionally controlled by further qubits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub instruction: Instruction,
    /// Moment index; consecutive lines with the same level share a moment.
    pub level: usize,
    pub controls: Vec<usize>,
}

impl ScriptLine {
    pub fn is_comment(&self) -> bool {
        self.instruction.is_comment()
    }
}

impl Display for ScriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instruction)?;
        if !self.controls.is_empty() {
            write!(f, ".controlled_by({})", fmt_qubits(&self.controls))?;
        }
        Ok(())
    }
}
