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

use std::{convert::Infallible, fmt::Display};

use serde::{Deserialize, Serialize};

/// What the simulator knows about an operation when it starts executing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeMetadata {
    pub label: String,
    #[serde(default)]
    pub is_controlled: bool,
    #[serde(default)]
    pub is_adjoint: bool,
    #[serde(default)]
    pub is_measurement: bool,
    #[serde(default)]
    pub controls: Vec<usize>,
    #[serde(default)]
    pub targets: Vec<usize>,
    /// Non-qubit arguments as printed by the simulator, e.g. `PauliZ, 0.5` or `(1, PauliX)`.
    #[serde(default)]
    pub formatted_non_qubit_args: String,
}

impl RuntimeMetadata {
    pub fn new(label: impl Into<String>, targets: &[usize]) -> Self {
        Self {
            label: label.into(),
            targets: targets.to_vec(),
            ..Default::default()
        }
    }

    pub fn with_controls(mut self, controls: &[usize]) -> Self {
        self.is_controlled = !controls.is_empty();
        self.controls = controls.to_vec();
        self
    }

    pub fn with_args(mut self, args: impl Into<String>) -> Self {
        self.formatted_non_qubit_args = args.into();
        self
    }

    pub fn adjoint(mut self) -> Self {
        self.is_adjoint = true;
        self
    }

    pub fn measurement(mut self) -> Self {
        self.is_measurement = true;
        self
    }
}

/// Anything the tracer can ask for the metadata of a starting operation.
///
/// `Ok(None)` means the operation carries no metadata. Errors are swallowed by the tracer.
pub trait MetadataSource {
    type Error: Display;

    fn runtime_metadata(&self) -> Result<Option<RuntimeMetadata>, Self::Error>;
}

impl MetadataSource for RuntimeMetadata {
    type Error = Infallible;

    fn runtime_metadata(&self) -> Result<Option<RuntimeMetadata>, Self::Error> {
        Ok(Some(self.clone()))
    }
}

impl MetadataSource for Option<RuntimeMetadata> {
    type Error = Infallible;

    fn runtime_metadata(&self) -> Result<Option<RuntimeMetadata>, Self::Error> {
        Ok(self.clone())
    }
}

/// A recorded notification, used to replay a trace offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    Start(Option<RuntimeMetadata>),
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_events() -> Result<(), serde_json::Error> {
        let input = r#"
            {"Start":{"label":"H","targets":[0]}}
            "End"
            {"Start":null}
            {"Start":{"label":"M","isMeasurement":true,"targets":[1],"formattedNonQubitArgs":""}}
        "#;
        let events = serde_json::Deserializer::from_str(input)
            .into_iter::<TraceEvent>()
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(
            vec![
                TraceEvent::Start(Some(RuntimeMetadata::new("H", &[0]))),
                TraceEvent::End,
                TraceEvent::Start(None),
                TraceEvent::Start(Some(RuntimeMetadata::new("M", &[1]).measurement())),
            ],
            events
        );
        Ok(())
    }

    #[test]
    fn builder_sets_flags() {
        let meta = RuntimeMetadata::new("X", &[1])
            .with_controls(&[0])
            .with_args("")
            .adjoint();
        assert!(meta.is_controlled);
        assert!(meta.is_adjoint);
        assert!(!meta.is_measurement);
        assert_eq!(vec![0], meta.controls);
    }
}
