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

use std::{fmt::Display, ops::Not};

use serde::{Deserialize, Serialize};
use tracer_common::Register;

/// One traced gate invocation together with everything it called.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub gate: String,
    /// Non-qubit arguments, always formatted as a parenthesized tuple.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_args: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Operation>>,
    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_controlled: bool,
    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_adjoint: bool,
    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_measurement: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<Register>,
    #[serde(default)]
    pub targets: Vec<Register>,
}

impl Operation {
    pub fn new(gate: impl Into<String>) -> Self {
        Self {
            gate: gate.into(),
            ..Default::default()
        }
    }

    pub fn children(&self) -> &[Operation] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// CNOT is reported by the simulator as a controlled X.
    pub fn is_controlled_x(&self) -> bool {
        self.gate == "X" && self.is_controlled
    }

    /// Attach `child` as the last child of this operation.
    ///
    /// Qubit targets of the child that this operation does not target yet are appended to
    /// its targets, so an operation always covers every qubit touched below it.
    pub fn adopt(&mut self, child: Operation) {
        for target in child.targets.iter().filter(|reg| !reg.is_classical()) {
            if !self.targets.contains(target) {
                self.targets.push(*target);
            }
        }
        self.children.get_or_insert_with(Vec::new).push(child);
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.gate)?;
        if self.is_adjoint {
            write!(f, "'")?;
        }
        if let Some(args) = &self.display_args {
            write!(f, "{args}")?;
        }
        let fmt_regs = |regs: &[Register]| {
            regs.iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        if !self.controls.is_empty() {
            write!(f, " ctrl[{}]", fmt_regs(&self.controls))?;
        }
        write!(f, " [{}]", fmt_regs(&self.targets))
    }
}

/// A qubit used in the trace and the number of classical bits its measurements produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QubitDeclaration {
    pub id: usize,
    pub num_children: usize,
}

/// The finished trace: declared qubits and the top-level operations in call order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExecutionPath {
    pub qubits: Vec<QubitDeclaration>,
    pub operations: Vec<Operation>,
}

impl ExecutionPath {
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(gate: &str, targets: &[usize]) -> Operation {
        Operation {
            targets: targets.iter().map(|q| Register::qubit(*q)).collect(),
            ..Operation::new(gate)
        }
    }

    #[test]
    fn adopt_merges_targets_in_order() {
        let mut parent = op("Foo", &[1]);
        parent.adopt(op("H", &[2]));
        parent.adopt(op("CNOT", &[1, 3]));
        parent.adopt(op("H", &[2]));

        assert_eq!(3, parent.children().len());
        assert_eq!(
            vec![Register::qubit(1), Register::qubit(2), Register::qubit(3)],
            parent.targets
        );
    }

    #[test]
    fn adopt_ignores_classical_targets() {
        let mut parent = op("Foo", &[0]);
        let mut measure = Operation::new("M");
        measure.is_measurement = true;
        measure.controls = vec![Register::qubit(0)];
        measure.targets = vec![Register::classical(0, 0)];
        parent.adopt(measure);

        assert_eq!(vec![Register::qubit(0)], parent.targets);
        assert!(parent.has_children());
    }

    #[test]
    fn childless_operation() {
        let leaf = op("H", &[0]);
        assert!(!leaf.has_children());
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn controlled_x() {
        let mut cx = op("X", &[1]);
        assert!(!cx.is_controlled_x());
        cx.is_controlled = true;
        assert!(cx.is_controlled_x());
    }

    #[test]
    fn json_omits_defaults() -> Result<(), serde_json::Error> {
        let leaf = op("H", &[0]);
        assert_eq!(
            r#"{"gate":"H","targets":[{"type":0,"qId":0}]}"#,
            serde_json::to_string(&leaf)?
        );

        let mut rot = op("Interface_R", &[1]);
        rot.display_args = Some("(PauliZ, 0.5)".to_string());
        rot.is_adjoint = true;
        let json = serde_json::to_string(&rot)?;
        assert!(json.contains(r#""displayArgs":"(PauliZ, 0.5)""#));
        assert!(json.contains(r#""isAdjoint":true"#));
        assert_eq!(rot, serde_json::from_str(&json)?);
        Ok(())
    }

    #[test]
    fn display() {
        let mut cx = op("X", &[1]);
        cx.controls = vec![Register::qubit(0)];
        assert_eq!("X ctrl[q0] [q1]", cx.to_string());
    }
}
