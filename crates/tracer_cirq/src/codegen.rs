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

use std::fmt::{self, Write};

use crate::{config::Dialect, decompose::Translation, instruction::ScriptLine};

/// Group lines into moments: maximal runs sharing the same level.
pub fn moments(lines: &[ScriptLine]) -> impl Iterator<Item = &[ScriptLine]> {
    lines.chunk_by(|a, b| a.level == b.level)
}

/// Render a moment as a single statement appending to `collection`.
/// Comment moments are emitted as they are.
fn fmt_moment(moment: &[ScriptLine], collection: &str) -> String {
    match moment.first() {
        Some(first) if first.is_comment() => moment
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        _ => format!(
            "{collection}.append([{}])",
            moment
                .iter()
                .map(|line| line.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

fn write_header(f: &mut dyn Write, translation: &Translation, num_qubits: usize) -> fmt::Result {
    writeln!(f, "# Qubits: {num_qubits}")?;
    if !translation.gates_errored().is_empty() {
        writeln!(
            f,
            "# Operations that did not call a primitive gate: {}",
            translation.gates_errored().join(", ")
        )?;
    }
    Ok(())
}

fn write_imports(f: &mut dyn Write, translation: &Translation, indent: &str) -> fmt::Result {
    if !translation.gates_used().is_empty() {
        writeln!(
            f,
            "{indent}from cirq.ops import {}",
            translation.gates_used().join(", ")
        )?;
    }
    Ok(())
}

/// A script building a single `cirq.Circuit` on line qubits.
pub fn write_flat(f: &mut dyn Write, translation: &Translation, num_qubits: usize) -> fmt::Result {
    write_header(f, translation, num_qubits)?;
    writeln!(f)?;
    writeln!(f, "import cirq")?;
    writeln!(f, "import numpy as np")?;
    write_imports(f, translation, "")?;
    writeln!(f, "qubits = cirq.LineQubit.range({num_qubits})")?;
    writeln!(f, "circuit = cirq.Circuit()")?;

    for moment in moments(translation.lines()) {
        writeln!(f, "{}", fmt_moment(moment, "circuit"))?;
    }
    Ok(())
}

/// A script exposing `build_circuit()`, which inserts every moment as a new moment of the
/// circuit instead of letting Cirq flush gates to the left.
pub fn write_moment_list(
    f: &mut dyn Write,
    translation: &Translation,
    num_qubits: usize,
) -> fmt::Result {
    write_header(f, translation, num_qubits)?;
    writeln!(f, "# Import build_circuit() to obtain the traced cirq circuit")?;
    writeln!(f, "def build_circuit():")?;
    writeln!(f, "    '''Function that builds the cirq circuit'''")?;
    writeln!(f, "    import numpy as np")?;
    writeln!(f)?;
    writeln!(f, "    from cirq import GridQubit, Circuit")?;
    writeln!(f, "    from cirq.circuits import InsertStrategy as strategy")?;
    write_imports(f, translation, "    ")?;
    writeln!(f)?;
    writeln!(f, "    # initialise qubits")?;
    writeln!(f, "    qubits = [GridQubit(i, 0) for i in range({num_qubits})]")?;
    writeln!(f)?;
    writeln!(f, "    # initialise moments (vertical slices)")?;
    writeln!(f, "    moments = []")?;
    writeln!(f)?;
    writeln!(f, "    # add vertical slices")?;
    for moment in moments(translation.lines()) {
        for line in fmt_moment(moment, "moments").lines() {
            writeln!(f, "    {line}")?;
        }
    }
    writeln!(f)?;
    writeln!(f, "    circuit = Circuit()")?;
    writeln!(f)?;
    writeln!(f, "    # cirq will flush gates left, the strategy argument prevents this")?;
    writeln!(f, "    for moment in moments:")?;
    writeln!(
        f,
        "        circuit.append(moment, strategy=strategy.NEW_THEN_INLINE)"
    )?;
    writeln!(f)?;
    writeln!(f, "    return circuit")?;
    writeln!(f)?;
    writeln!(f)?;
    writeln!(f, "if __name__ == '__main__':")?;
    writeln!(f, "    circuit = build_circuit()")?;
    writeln!(f, "    print(circuit)")
}

pub fn write_script(
    f: &mut dyn Write,
    translation: &Translation,
    num_qubits: usize,
) -> fmt::Result {
    match translation.config().dialect {
        Dialect::Flat => write_flat(f, translation, num_qubits),
        Dialect::MomentList => write_moment_list(f, translation, num_qubits),
    }
}

pub fn render(translation: &Translation, num_qubits: usize) -> String {
    let mut script = String::new();
    write_script(&mut script, translation, num_qubits)
        .expect("Writing the script to a String should not fail");
    script
}

#[cfg(test)]
mod tests {
    use tracer::Operation;
    use tracer_common::Register;

    use super::*;
    use crate::config::CirqConfig;

    fn op(gate: &str, targets: &[usize]) -> Operation {
        Operation {
            targets: targets.iter().map(|q| Register::qubit(*q)).collect(),
            ..Operation::new(gate)
        }
    }

    fn bell(config: CirqConfig) -> Translation {
        let mut main = op("Main", &[]);
        let mut cx = op("X", &[1]);
        cx.is_controlled = true;
        cx.controls = vec![Register::qubit(0)];
        main.adopt(op("H", &[0]));
        main.adopt(cx);
        main.adopt(op("Foo", &[1]));

        let mut translation = Translation::new(config);
        translation
            .visit_all([&main])
            .expect("Translation should succeed");
        translation
    }

    #[test]
    fn moments_group_equal_levels() {
        let mut main = op("Main", &[]);
        let mut layer = op("Layer", &[]);
        layer.adopt(op("H", &[0]));
        layer.adopt(op("H", &[1]));
        main.adopt(layer);
        main.adopt(op("X", &[0]));

        let mut translation = Translation::new(CirqConfig::default());
        translation
            .visit_all([&main])
            .expect("Translation should succeed");
        let sizes: Vec<usize> = moments(translation.lines()).map(|m| m.len()).collect();
        assert_eq!(vec![2, 1], sizes);
    }

    #[test]
    fn flat_script() {
        let script = render(&bell(CirqConfig::default()), 2);
        let expected = "\
# Qubits: 2
# Operations that did not call a primitive gate: Foo

import cirq
import numpy as np
from cirq.ops import H, X
qubits = cirq.LineQubit.range(2)
circuit = cirq.Circuit()
circuit.append([H(qubits[0])])
circuit.append([X(qubits[1]).controlled_by(qubits[0])])
#Foo(qubits[1])
";
        assert_eq!(expected, script);
    }

    #[test]
    fn moment_list_script() {
        let script = render(
            &bell(CirqConfig {
                dialect: Dialect::MomentList,
                ..Default::default()
            }),
            2,
        );
        assert!(script.starts_with("# Qubits: 2\n"));
        assert!(script.contains("    from cirq.ops import H, X\n"));
        assert!(script.contains("    qubits = [GridQubit(i, 0) for i in range(2)]\n"));
        assert!(script.contains("    moments.append([H(qubits[0])])\n"));
        assert!(
            script.contains("    moments.append([X(qubits[1]).controlled_by(qubits[0])])\n")
        );
        assert!(script.contains("    #Foo(qubits[1])\n"));
        assert!(script.contains("strategy=strategy.NEW_THEN_INLINE"));
        assert!(script.ends_with("    print(circuit)\n"));
    }

    #[test]
    fn empty_translation_has_no_import_line() {
        let translation = Translation::new(CirqConfig::default());
        let script = render(&translation, 0);
        assert!(!script.contains("from cirq.ops"));
        assert!(script.contains("qubits = cirq.LineQubit.range(0)"));
        assert!(!script.contains(".append("));
    }
}
