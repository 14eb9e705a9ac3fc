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

//! Parsing of the display arguments printed by the simulator.
//!
//! The formats are fixed by the simulator: `(3, PauliX)` for Clifford elements,
//! `(PauliZ, 0.5)` or `(PauliZ, 1, 3)` for rotations and `([PauliX, PauliI], 0.5)` for
//! Pauli exponentials.

use std::sync::LazyLock;

use regex::Regex;
use tracer::Operation;
use tracer_common::Pauli;

use crate::{error::CirqError, instruction::Angle};

static CLIFFORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*(?<index>\d+)\s*,\s*(?<pauli>\w+)\s*\)$").expect("Regex should be valid")
});

static ROTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*(?<axis>\w+)\s*,\s*(?<first>[^,]+?)\s*(,\s*(?<second>[^,]+?)\s*)?\)$")
        .expect("Regex should be valid")
});

static EXP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*\[(?<basis>[^\]]*)\]\s*,\s*(?<angle>[^,]+?)\s*\)$")
        .expect("Regex should be valid")
});

fn malformed(op: &Operation, reason: impl Into<String>) -> CirqError {
    CirqError::MalformedArguments {
        gate: op.gate.clone(),
        args: op.display_args.clone(),
        reason: reason.into(),
    }
}

fn display_args(op: &Operation) -> Result<&str, CirqError> {
    op.display_args
        .as_deref()
        .ok_or_else(|| malformed(op, "missing arguments"))
}

/// Single-qubit Clifford element: a Pauli correction followed by an H/S word selected by index.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CliffordArgs {
    pub index: u8,
    pub pauli: Pauli,
}

impl CliffordArgs {
    pub fn parse(op: &Operation) -> Result<Self, CirqError> {
        let caps = CLIFFORD_RE
            .captures(display_args(op)?)
            .ok_or_else(|| malformed(op, "expected (index, Pauli)"))?;
        let index = caps["index"]
            .parse()
            .map_err(|_| malformed(op, "Clifford index out of range"))?;
        let pauli = caps["pauli"].parse().map_err(|e: String| malformed(op, e))?;
        Ok(Self { index, pauli })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RotationArgs {
    /// Lower-case rotation axis, `i` for the identity.
    pub axis: char,
    pub angle: Angle,
}

impl RotationArgs {
    pub fn parse(op: &Operation) -> Result<Self, CirqError> {
        let caps = ROTATION_RE
            .captures(display_args(op)?)
            .ok_or_else(|| malformed(op, "expected (axis, angle) or (axis, numerator, power)"))?;
        let axis = caps["axis"]
            .chars()
            .last()
            .map(|c| c.to_ascii_lowercase())
            .ok_or_else(|| malformed(op, "empty rotation axis"))?;
        let angle = match caps.name("second") {
            None => Angle::Literal(caps["first"].to_string()),
            Some(exponent) => Angle::Dyadic {
                numerator: caps["first"].to_string(),
                exponent: exponent.as_str().to_string(),
            },
        };
        Ok(Self { axis, angle })
    }
}

/// Argument of `Exp`: one Pauli per target qubit and the rotation angle.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExpArgs {
    pub basis: Vec<Pauli>,
    pub angle: String,
}

impl ExpArgs {
    pub fn parse(op: &Operation) -> Result<Self, CirqError> {
        let caps = EXP_RE
            .captures(display_args(op)?)
            .ok_or_else(|| malformed(op, "expected ([Pauli, ...], angle)"))?;
        let basis = caps["basis"]
            .split(',')
            .filter(|p| !p.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Pauli>, String>>()
            .map_err(|e| malformed(op, e))?;
        Ok(Self {
            basis,
            angle: caps["angle"].to_string(),
        })
    }
}
