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

use log::{debug, trace};

use crate::{
    error::CaptureError,
    metadata::{MetadataSource, RuntimeMetadata, TraceEvent},
    observer::TraceObserver,
    operation::{ExecutionPath, Operation},
    registers::RegisterAllocator,
};

/// Builds an [`ExecutionPath`] from the operation start/end notifications of a simulator.
///
/// Notifications must arrive well nested. Every start pushes one stack entry, even when no
/// operation could be derived from it, so that the matching end pops the right entry.
///
/// An optional [`TraceObserver`] sees every operation as it starts and ends.
#[derive(Debug, Clone, Default)]
pub struct ExecutionPathTracer<O = ()> {
    registers: RegisterAllocator,
    operations: Vec<Option<Operation>>,
    observer: O,
}

impl ExecutionPathTracer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: TraceObserver> ExecutionPathTracer<O> {
    pub fn with_observer(observer: O) -> Self {
        Self {
            registers: RegisterAllocator::new(),
            operations: vec![],
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Handle the start of an operation.
    ///
    /// Never fails: metadata that cannot be extracted is recorded as an absent entry.
    pub fn on_operation_start<S: MetadataSource + ?Sized>(&mut self, source: &S) {
        // Operations nested in a measurement would be rendered on the classical target
        let under_measurement =
            matches!(self.operations.last(), Some(Some(parent)) if parent.is_measurement);

        let operation = if under_measurement {
            trace!("Skipping operation nested in a measurement");
            None
        } else {
            match source.runtime_metadata() {
                Ok(Some(metadata)) => match self.metadata_to_operation(metadata) {
                    Ok(op) => Some(op),
                    Err(err) => {
                        debug!("Dropping operation: {err}");
                        None
                    }
                },
                Ok(None) => None,
                Err(err) => {
                    debug!("Could not retrieve runtime metadata: {err}");
                    None
                }
            }
        };

        trace!(
            "Start at depth {}: {}",
            self.operations.len(),
            operation
                .as_ref()
                .map_or_else(|| "<absent>".to_string(), |op| op.to_string())
        );
        if let Some(op) = &operation {
            self.observer.on_start(op, self.operations.len() + 1);
        }
        self.operations.push(operation);
    }

    /// Handle the end of the operation on top of the stack.
    pub fn on_operation_end(&mut self) {
        // The bottom entry is the root of the trace and stays on the stack
        if self.operations.len() <= 1 {
            return;
        }
        let Some(Some(current)) = self.operations.pop() else {
            return;
        };
        self.observer.on_end(&current, self.operations.len() + 1);
        let Some(Some(parent)) = self.operations.last_mut() else {
            return;
        };

        // CNOTs are controlled X under the hood, don't render the nested body twice
        if current.is_controlled_x() && parent.is_controlled_x() {
            trace!("Collapsing nested controlled X");
            return;
        }

        parent.adopt(current);
    }

    pub fn on_event(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::Start(metadata) => self.on_operation_start(metadata),
            TraceEvent::End => self.on_operation_end(),
        }
    }

    /// Feed a recorded sequence of notifications through the tracer.
    pub fn replay<'a>(&mut self, events: impl IntoIterator<Item = &'a TraceEvent>) {
        for event in events {
            self.on_event(event);
        }
    }

    /// Number of entries on the stack, including absent ones.
    pub fn depth(&self) -> usize {
        self.operations.len()
    }

    pub fn registers(&self) -> &RegisterAllocator {
        &self.registers
    }

    /// The execution path traced so far.
    pub fn execution_path(&self) -> ExecutionPath {
        ExecutionPath {
            qubits: self.registers.qubit_declarations(),
            operations: self.operations.iter().flatten().cloned().collect(),
        }
    }

    pub fn into_execution_path(self) -> ExecutionPath {
        ExecutionPath {
            qubits: self.registers.qubit_declarations(),
            operations: self.operations.into_iter().flatten().collect(),
        }
    }

    fn metadata_to_operation(
        &mut self,
        metadata: RuntimeMetadata,
    ) -> Result<Operation, CaptureError> {
        let measured = if metadata.is_measurement {
            let qubit = metadata
                .targets
                .first()
                .copied()
                .ok_or_else(|| CaptureError::MeasurementWithoutTarget(metadata.label.clone()))?;
            Some(qubit)
        } else {
            None
        };

        let mut op = Operation {
            display_args: format_display_args(&metadata.formatted_non_qubit_args),
            is_controlled: metadata.is_controlled,
            is_adjoint: metadata.is_adjoint,
            controls: self.registers.registers_for(&metadata.controls),
            targets: self.registers.registers_for(&metadata.targets),
            ..Operation::new(metadata.label)
        };

        // A measurement reads its qubit and writes a new classical bit
        if let Some(qubit) = measured {
            op.is_measurement = true;
            op.controls = std::mem::take(&mut op.targets);
            op.targets = vec![self.registers.allocate_classical(qubit)];
        }

        Ok(op)
    }
}

/// Normalize simulator arguments to tuple syntax: `0.5` becomes `(0.5)`, `(1, PauliX)` is kept.
fn format_display_args(args: &str) -> Option<String> {
    match args {
        "" => None,
        tuple if tuple.starts_with('(') => Some(tuple.to_string()),
        scalar => Some(format!("({scalar})")),
    }
}
