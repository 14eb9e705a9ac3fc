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

use std::collections::{BTreeMap, HashMap};

use tracer_common::Register;

use crate::{error::LookupError, operation::QubitDeclaration};

/// Hands out one qubit register per qubit id and a fresh classical register per measurement.
#[derive(Debug, Clone, Default)]
pub struct RegisterAllocator {
    qubits: BTreeMap<usize, Register>,
    classical: HashMap<usize, Vec<Register>>,
}

impl RegisterAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the register of `qubit_id`, creating it on first use.
    pub fn register_for(&mut self, qubit_id: usize) -> Register {
        *self
            .qubits
            .entry(qubit_id)
            .or_insert_with(|| Register::qubit(qubit_id))
    }

    pub fn registers_for(&mut self, qubit_ids: &[usize]) -> Vec<Register> {
        qubit_ids.iter().map(|q| self.register_for(*q)).collect()
    }

    /// Append a classical register recording the next measurement of `qubit_id`.
    pub fn allocate_classical(&mut self, qubit_id: usize) -> Register {
        let registers = self.classical.entry(qubit_id).or_default();
        let register = Register::classical(qubit_id, registers.len());
        registers.push(register);
        register
    }

    /// The register of the most recent measurement of `qubit_id`.
    ///
    /// Only needed for classically-controlled operations.
    pub fn lookup_latest_classical(&self, qubit_id: usize) -> Result<Register, LookupError> {
        self.classical
            .get(&qubit_id)
            .and_then(|registers| registers.last())
            .copied()
            .ok_or(LookupError::NoClassicalRegister(qubit_id))
    }

    pub fn classical_count(&self, qubit_id: usize) -> usize {
        self.classical.get(&qubit_id).map_or(0, Vec::len)
    }

    /// Declarations for every qubit seen so far, ordered by id.
    pub fn qubit_declarations(&self) -> Vec<QubitDeclaration> {
        self.qubits
            .keys()
            .map(|&id| QubitDeclaration {
                id,
                num_children: self.classical_count(id),
            })
            .collect()
    }
}
