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

use log::debug;
use tracer::Operation;
use tracer_common::Pauli;

use crate::{
    args::{CliffordArgs, ExpArgs, RotationArgs},
    config::CirqConfig,
    error::CirqError,
    gate_class::GateClass,
    instruction::{Angle, Instruction, ScriptLine},
};

/// Operations that may legitimately execute without calling any primitive gate.
const NO_EFFECT_MARKERS: &[&str] = &["PauliZFlip"];

/// Pauli exponentials may run without primitive children on some simulators.
const PAULI_EXPONENTIAL: &str = "Exp";

/// The gates making up Clifford element `index` with Pauli correction `pauli`.
///
/// The Pauli comes first, followed by one of the H/S words `H`, `S`, `HS`, `SH`, `HSH`
/// for indices 1 to 5. Together with the Pauli correction these cover the single-qubit
/// Clifford group; other indices add no gates.
pub fn clifford_gates(index: u8, pauli: Pauli) -> Vec<&'static str> {
    let mut gates = match pauli {
        Pauli::I => vec![],
        Pauli::X => vec!["X"],
        Pauli::Y => vec!["Y"],
        Pauli::Z => vec!["Z"],
    };
    let word: &[&str] = match index {
        1 => &["H"],
        2 => &["S"],
        3 => &["H", "S"],
        4 => &["S", "H"],
        5 => &["H", "S", "H"],
        _ => &[],
    };
    gates.extend_from_slice(word);
    gates
}

/// Split the registers of `op` into distinct target and control qubit indices.
///
/// Controls are only collected when `with_controls` is set. A qubit never appears as both
/// target and control. Classical targets contribute the qubit they were measured from.
pub fn targets(op: &Operation, with_controls: bool) -> (Vec<usize>, Vec<usize>) {
    let mut controls: Vec<usize> = vec![];
    if with_controls {
        for reg in &op.controls {
            if !controls.contains(&reg.qubit_id()) {
                controls.push(reg.qubit_id());
            }
        }
    }

    let mut qubits: Vec<usize> = vec![];
    for reg in &op.targets {
        let q = reg.qubit_id();
        if !qubits.contains(&q) && !controls.contains(&q) {
            qubits.push(q);
        }
    }
    (qubits, controls)
}

/// State of one translation of an execution path into primitive instructions.
#[derive(Debug, Clone)]
pub struct Translation {
    config: CirqConfig,
    lines: Vec<ScriptLine>,
    gates_used: Vec<String>,
    gates_errored: Vec<String>,
    cursor: usize,
    measurement_key: usize,
}

impl Translation {
    pub fn new(config: CirqConfig) -> Self {
        Self {
            config,
            lines: vec![],
            gates_used: vec![],
            gates_errored: vec![],
            cursor: 0,
            measurement_key: 0,
        }
    }

    pub fn config(&self) -> &CirqConfig {
        &self.config
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    /// Symbols to import from `cirq.ops`, in order of first use.
    pub fn gates_used(&self) -> &[String] {
        &self.gates_used
    }

    /// Labels of operations that had no primitive gate breakdown.
    pub fn gates_errored(&self) -> &[String] {
        &self.gates_errored
    }

    pub fn visit_all<'a>(
        &mut self,
        ops: impl IntoIterator<Item = &'a Operation>,
    ) -> Result<(), CirqError> {
        ops.into_iter().try_for_each(|op| self.visit(op, 0))
    }

    /// Translate `op`, a node whose parent sits at `parent_depth` of the execution tree.
    pub fn visit(&mut self, op: &Operation, parent_depth: usize) -> Result<(), CirqError> {
        let depth = parent_depth + 1;
        if depth <= self.config.depth {
            self.cursor += 1;
        }
        if self.config.debug {
            let spacing = " ".repeat(depth * 2);
            debug!("{spacing}{}", op.gate);
            debug!("{spacing}{}", op.display_args.as_deref().unwrap_or_default());
        }

        if let Some(class) = GateClass::classify(&op.gate) {
            self.decompose(class, op)
        } else if op.has_children() {
            op.children()
                .iter()
                .try_for_each(|child| self.visit(child, depth))
        } else if NO_EFFECT_MARKERS.contains(&op.gate.as_str()) {
            Ok(())
        } else if op.gate == PAULI_EXPONENTIAL {
            self.pauli_exponential(op)
        } else {
            self.unhandled(op)
        }
    }

    fn decompose(&mut self, class: GateClass, op: &Operation) -> Result<(), CirqError> {
        if self.config.debug {
            debug!("{:?}", class);
        }
        let (qubits, controls) = targets(op, true);

        match class {
            GateClass::PassThrough => self.add_gate(&op.gate, qubits, &controls),
            GateClass::Clifford => {
                let args = CliffordArgs::parse(op)?;
                self.add_clifford(args.index, args.pauli, &qubits, &controls);
            }
            // The control is already the first target
            GateClass::CanonicalCx => self.add_gate("CX", qubits, &[]),
            GateClass::Rotation => {
                let args = RotationArgs::parse(op)?;
                let qubit = *qubits.first().ok_or_else(|| CirqError::MalformedArguments {
                    gate: op.gate.clone(),
                    args: op.display_args.clone(),
                    reason: "rotation without target qubit".to_string(),
                })?;
                self.add_rotation(args.axis, args.angle, qubit, &controls);
            }
            GateClass::Measurement => {
                let (qubits, _) = targets(op, false);
                assert_eq!(
                    1,
                    qubits.len(),
                    "Measurement op on multiple qubits, expecting one"
                );
                self.add_measure(qubits[0]);
            }
            GateClass::Reset => {
                let (qubits, _) = targets(op, false);
                assert_eq!(1, qubits.len(), "Reset op on multiple qubits, expecting one");
                self.add_gate("reset", qubits, &[]);
            }
            GateClass::NoOp => {}
        }
        Ok(())
    }

    fn unhandled(&mut self, op: &Operation) -> Result<(), CirqError> {
        if !self.gates_errored.contains(&op.gate) {
            self.gates_errored.push(op.gate.clone());
        }
        if self.config.strict {
            return Err(CirqError::UnsupportedOperation(op.gate.clone()));
        }
        if self.config.render_unhandled {
            let (qubits, controls) = targets(op, true);
            self.write_line(
                Instruction::Unhandled {
                    gate: op.gate.clone(),
                    qubits,
                },
                &controls,
            );
        }
        Ok(())
    }

    /// Emulate `exp(-iθ P₁⊗P₂⊗…)` by rotating every non-identity factor onto Z, collecting
    /// the parity on the first such qubit with a CNOT ladder and rotating that qubit.
    fn pauli_exponential(&mut self, op: &Operation) -> Result<(), CirqError> {
        let (qubits, _) = targets(op, false);
        let args = ExpArgs::parse(op)?;
        if args.basis.len() != qubits.len() {
            return Err(CirqError::MalformedArguments {
                gate: op.gate.clone(),
                args: op.display_args.clone(),
                reason: format!(
                    "{} Paulis for {} target qubits",
                    args.basis.len(),
                    qubits.len()
                ),
            });
        }
        let angle = Angle::Literal(format!("-2.0*{}", args.angle));

        let active: Vec<(usize, Pauli)> = qubits
            .iter()
            .copied()
            .zip(args.basis)
            .filter(|(_, p)| !p.is_identity())
            .collect();

        let Some(&(pivot, _)) = active.first() else {
            // Only a global phase remains
            let qubit = *qubits.first().ok_or_else(|| CirqError::MalformedArguments {
                gate: op.gate.clone(),
                args: op.display_args.clone(),
                reason: "no target qubits".to_string(),
            })?;
            self.add_rotation('i', angle, qubit, &[]);
            return Ok(());
        };

        for &(qubit, pauli) in &active {
            self.change_basis(qubit, pauli, false);
        }
        for &(qubit, _) in &active[1..] {
            self.add_gate("CX", vec![qubit, pivot], &[]);
        }
        self.add_rotation('z', angle, pivot, &[]);
        for &(qubit, _) in active[1..].iter().rev() {
            self.add_gate("CX", vec![qubit, pivot], &[]);
        }
        for &(qubit, pauli) in active.iter().rev() {
            self.change_basis(qubit, pauli, true);
        }
        Ok(())
    }

    /// Map the eigenbasis of `pauli` onto the Z basis, or back when `undo` is set.
    fn change_basis(&mut self, qubit: usize, pauli: Pauli, undo: bool) {
        let (index, correction) = match (pauli, undo) {
            (Pauli::X, _) => (1, Pauli::I),
            (Pauli::Y, false) => (4, Pauli::Z),
            (Pauli::Y, true) => (3, Pauli::I),
            (Pauli::Z | Pauli::I, _) => return,
        };
        self.add_clifford(index, correction, &[qubit], &[]);
    }

    fn add_clifford(&mut self, index: u8, pauli: Pauli, qubits: &[usize], controls: &[usize]) {
        for gate in clifford_gates(index, pauli) {
            self.add_gate(gate, qubits.to_vec(), controls);
        }
    }

    fn add_gate(&mut self, symbol: &str, qubits: Vec<usize>, controls: &[usize]) {
        self.write_line(Instruction::gate(symbol, qubits), controls);
    }

    fn add_rotation(&mut self, axis: char, angle: Angle, qubit: usize, controls: &[usize]) {
        self.write_line(Instruction::Rotation { axis, angle, qubit }, controls);
    }

    fn add_measure(&mut self, qubit: usize) {
        let key = self.measurement_key;
        self.measurement_key += 1;
        self.write_line(Instruction::Measure { qubit, key }, &[]);
    }

    fn write_line(&mut self, instruction: Instruction, controls: &[usize]) {
        // Comments get a moment of their own
        let symbol = instruction.symbol();
        if symbol.is_none() {
            self.cursor += 1;
        }
        self.lines.push(ScriptLine {
            instruction,
            level: self.cursor,
            controls: controls.to_vec(),
        });
        match symbol {
            None => self.cursor += 1,
            Some(symbol) => {
                if !self.gates_used.contains(&symbol) {
                    self.gates_used.push(symbol);
                }
            }
        }
    }
}
