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

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A wire in the traced circuit.
///
/// Classical registers hold the outcome of the `c_id`-th measurement of qubit `q_id`.
/// Serialized as `{"type":0,"qId":0}` for qubits and `{"type":1,"qId":0,"cId":0}` for
/// classical bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RawRegister", try_from = "RawRegister")]
pub enum Register {
    Qubit { q_id: usize },
    Classical { q_id: usize, c_id: usize },
}

impl Register {
    pub fn qubit(q_id: usize) -> Self {
        Self::Qubit { q_id }
    }

    pub fn classical(q_id: usize, c_id: usize) -> Self {
        Self::Classical { q_id, c_id }
    }

    /// The qubit this register belongs to. For classical registers this is the measured qubit.
    pub fn qubit_id(&self) -> usize {
        match *self {
            Self::Qubit { q_id } | Self::Classical { q_id, .. } => q_id,
        }
    }

    pub fn classical_id(&self) -> Option<usize> {
        match *self {
            Self::Qubit { .. } => None,
            Self::Classical { c_id, .. } => Some(c_id),
        }
    }

    pub fn is_classical(&self) -> bool {
        matches!(self, Self::Classical { .. })
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Qubit { q_id } => write!(f, "q{q_id}"),
            Self::Classical { q_id, c_id } => write!(f, "c{q_id}.{c_id}"),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawRegister {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(rename = "qId")]
    q_id: usize,
    #[serde(rename = "cId", default, skip_serializing_if = "Option::is_none")]
    c_id: Option<usize>,
}

impl From<Register> for RawRegister {
    fn from(value: Register) -> Self {
        match value {
            Register::Qubit { q_id } => RawRegister {
                kind: 0,
                q_id,
                c_id: None,
            },
            Register::Classical { q_id, c_id } => RawRegister {
                kind: 1,
                q_id,
                c_id: Some(c_id),
            },
        }
    }
}

impl TryFrom<RawRegister> for Register {
    type Error = String;

    fn try_from(value: RawRegister) -> Result<Self, Self::Error> {
        match (value.kind, value.c_id) {
            (0, None) => Ok(Register::qubit(value.q_id)),
            (1, Some(c_id)) => Ok(Register::classical(value.q_id, c_id)),
            (kind, c_id) => Err(format!(
                "Invalid register of type {kind} on qubit {} with classical id {c_id:?}",
                value.q_id
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classical_register_reports_measured_qubit() {
        let reg = Register::classical(3, 1);
        assert_eq!(3, reg.qubit_id());
        assert_eq!(Some(1), reg.classical_id());
        assert!(reg.is_classical());
        assert!(!Register::qubit(3).is_classical());
        assert_eq!(None, Register::qubit(3).classical_id());
    }

    #[test]
    fn json_shape() -> Result<(), serde_json::Error> {
        assert_eq!(
            r#"{"type":0,"qId":2}"#,
            serde_json::to_string(&Register::qubit(2))?
        );
        assert_eq!(
            r#"{"type":1,"qId":2,"cId":0}"#,
            serde_json::to_string(&Register::classical(2, 0))?
        );
        let parsed: Register = serde_json::from_str(r#"{"type":1,"qId":4,"cId":7}"#)?;
        assert_eq!(Register::classical(4, 7), parsed);
        Ok(())
    }

    #[test]
    fn reject_inconsistent_json() {
        assert!(serde_json::from_str::<Register>(r#"{"type":1,"qId":4}"#).is_err());
        assert!(serde_json::from_str::<Register>(r#"{"type":5,"qId":4}"#).is_err());
    }
}
