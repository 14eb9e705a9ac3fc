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

use std::{fmt::Display, str::FromStr};

use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

/// Single-qubit Pauli operator as it appears in gate arguments.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub enum Pauli {
    #[default]
    I,
    X,
    Z,
    Y,
}

impl Pauli {
    pub fn is_identity(&self) -> bool {
        *self == Pauli::I
    }
}

impl Display for Pauli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Distribution<Pauli> for StandardUniform {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Pauli {
        let i = rng.random_range(0..=3);
        match i {
            0 => Pauli::I,
            1 => Pauli::Z,
            2 => Pauli::X,
            3 => Pauli::Y,
            _ => unreachable!("RNG number out of range"),
        }
    }
}

impl TryFrom<&char> for Pauli {
    type Error = String;

    fn try_from(value: &char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'i' => Ok(Pauli::I),
            'x' => Ok(Pauli::X),
            'z' => Ok(Pauli::Z),
            'y' => Ok(Pauli::Y),
            c => Err(format!("Cannot convert {} to Pauli", c)),
        }
    }
}

/// Accepts both the simulator spelling (`PauliX`) and the bare letter (`X`).
impl FromStr for Pauli {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let letter = s.strip_prefix("Pauli").unwrap_or(s);
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Pauli::try_from(&c),
            _ => Err(format!("Cannot convert {} to Pauli", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simulator_names() {
        assert_eq!(Ok(Pauli::X), "PauliX".parse());
        assert_eq!(Ok(Pauli::Y), "PauliY".parse());
        assert_eq!(Ok(Pauli::Z), " PauliZ".parse());
        assert_eq!(Ok(Pauli::I), "PauliI".parse());
    }

    #[test]
    fn parse_letters() {
        assert_eq!(Ok(Pauli::X), "x".parse());
        assert_eq!(Ok(Pauli::Z), "Z".parse());
    }

    #[test]
    fn reject_garbage() {
        assert!("PauliW".parse::<Pauli>().is_err());
        assert!("XX".parse::<Pauli>().is_err());
        assert!("".parse::<Pauli>().is_err());
    }

    #[test]
    fn display_is_letter() {
        assert_eq!("Y", Pauli::Y.to_string());
        assert!(Pauli::I.is_identity());
        assert!(!Pauli::X.is_identity());
    }

    #[test]
    fn rand_paulis() {
        let ps: Vec<Pauli> = StandardUniform.sample_iter(rand::rng()).take(100).collect();
        assert_eq!(100, ps.len());
    }
}
