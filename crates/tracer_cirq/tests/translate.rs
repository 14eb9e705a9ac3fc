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


//! End-to-end checks from recorded events to the generated Cirq script.

use serde_json::Deserializer;
use tracer::{ExecutionPath, ExecutionPathTracer, TraceEvent};
use tracer_cirq::{CirqConfig, CirqError, Dialect, translate};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn trace(input: &str) -> ExecutionPath {
    let mut tracer = ExecutionPathTracer::new();
    for event in Deserializer::from_str(input).into_iter::<TraceEvent>() {
        tracer.on_event(&event.expect("Fixture should deserialize"));
    }
    tracer.into_execution_path()
}

fn script(input: &str, config: CirqConfig) -> String {
    translate(&trace(input), config).expect("Translation should succeed")
}

/// The statements following the circuit construction.
fn body(script: &str) -> Vec<&str> {
    script
        .lines()
        .skip_while(|line| !line.starts_with("circuit = "))
        .skip(1)
        .collect()
}

// ---------------------------------------------------------------------------
// Flat dialect
// ---------------------------------------------------------------------------

#[test]
fn single_gate() {
    let expected = "\
# Qubits: 1

import cirq
import numpy as np
from cirq.ops import H
qubits = cirq.LineQubit.range(1)
circuit = cirq.Circuit()
circuit.append([H(qubits[0])])
";
    assert_eq!(
        expected,
        script(
            r#"{"Start":{"label":"H","targets":[0]}} "End""#,
            CirqConfig::default()
        )
    );
}

#[test]
fn measurement_keys_count_up() {
    let input = r#"
        {"Start":{"label":"Main","targets":[]}}
        {"Start":{"label":"M","isMeasurement":true,"targets":[0]}} "End"
        {"Start":{"label":"M","isMeasurement":true,"targets":[1]}} "End"
        {"Start":{"label":"M","isMeasurement":true,"targets":[0]}} "End"
        "End"
    "#;
    let script = script(input, CirqConfig::default());
    assert!(script.starts_with("# Qubits: 2\n"));
    assert!(script.contains("from cirq.ops import measure\n"));
    assert_eq!(
        vec![
            "circuit.append([measure(qubits[0], key='0')])",
            "circuit.append([measure(qubits[1], key='1')])",
            "circuit.append([measure(qubits[0], key='2')])",
        ],
        body(&script)
    );
}

#[test]
fn dyadic_rotation() {
    let input = r#"
        {"Start":{"label":"Main","targets":[]}}
        {"Start":{"label":"Interface_RFrac","targets":[0],"formattedNonQubitArgs":"(PauliZ, 1, 3)"}}
        "End"
        "End"
    "#;
    let script = script(input, CirqConfig::default());
    assert!(script.contains("from cirq.ops import rz\n"));
    assert_eq!(
        vec!["circuit.append([rz(rads=-np.pi*1/(2**(3-1))).on(qubits[0])])"],
        body(&script)
    );
}

#[test]
fn pauli_exponential_shares_one_moment() {
    let input = r#"
        {"Start":{"label":"Main","targets":[]}}
        {"Start":{"label":"Exp","targets":[0,1],"formattedNonQubitArgs":"([PauliX, PauliZ], 0.5)"}}
        "End"
        "End"
    "#;
    let script = script(input, CirqConfig::default());
    assert!(script.contains("from cirq.ops import H, CX, rz\n"));
    assert_eq!(
        vec![
            "circuit.append([H(qubits[0]), CX(qubits[1], qubits[0]), rz(rads=-2.0*0.5).on(qubits[0]), \
             CX(qubits[1], qubits[0]), H(qubits[0])])"
        ],
        body(&script)
    );
}

#[test]
fn depth_controls_moment_breaks() {
    let input = r#"
        {"Start":{"label":"Main","targets":[]}}
        {"Start":{"label":"H","targets":[0]}} "End"
        {"Start":{"label":"H","targets":[1]}} "End"
        "End"
    "#;
    assert_eq!(
        vec!["circuit.append([H(qubits[0])])", "circuit.append([H(qubits[1])])"],
        body(&script(input, CirqConfig::default()))
    );

    let shallow = CirqConfig {
        depth: 1,
        ..Default::default()
    };
    assert_eq!(
        vec!["circuit.append([H(qubits[0]), H(qubits[1])])"],
        body(&script(input, shallow))
    );
}

// ---------------------------------------------------------------------------
// Operations without primitive gates
// ---------------------------------------------------------------------------

const WITH_UNKNOWN: &str = r#"
    {"Start":{"label":"Main","targets":[]}}
    {"Start":{"label":"X","targets":[0]}} "End"
    {"Start":{"label":"Oracle","targets":[0,1]}} "End"
    "End"
"#;

#[test]
fn unknown_operation_is_commented() {
    let script = script(WITH_UNKNOWN, CirqConfig::default());
    assert!(script.contains("# Operations that did not call a primitive gate: Oracle\n"));
    assert_eq!(
        vec!["circuit.append([X(qubits[0])])", "#Oracle(qubits[0], qubits[1])"],
        body(&script)
    );
}

#[test]
fn unknown_operation_is_dropped() {
    let config = CirqConfig {
        render_unhandled: false,
        ..Default::default()
    };
    let script = script(WITH_UNKNOWN, config);
    assert!(script.contains("# Operations that did not call a primitive gate: Oracle\n"));
    assert_eq!(vec!["circuit.append([X(qubits[0])])"], body(&script));
}

#[test]
fn strict_mode_fails() {
    let config = CirqConfig {
        strict: true,
        ..Default::default()
    };
    let err = translate(&trace(WITH_UNKNOWN), config).expect_err("Oracle should be rejected");
    assert_eq!(CirqError::UnsupportedOperation("Oracle".to_string()), err);
    assert!(
        err.to_string()
            .starts_with("Operation Oracle does not call any primitive gate")
    );
}

#[test]
fn malformed_arguments_fail() {
    let input = r#"
        {"Start":{"label":"Main","targets":[]}}
        {"Start":{"label":"Interface_Clifford","targets":[0],"formattedNonQubitArgs":"(PauliX)"}}
        "End"
        "End"
    "#;
    let err = translate(&trace(input), CirqConfig::default()).expect_err("Arguments are invalid");
    assert!(matches!(
        err,
        CirqError::MalformedArguments { ref gate, .. } if gate == "Interface_Clifford"
    ));
}

// ---------------------------------------------------------------------------
// Moment list dialect
// ---------------------------------------------------------------------------

#[test]
fn moment_list_builds_function() {
    let config = CirqConfig {
        dialect: Dialect::MomentList,
        ..Default::default()
    };
    let script = script(WITH_UNKNOWN, config);
    assert!(script.starts_with("# Qubits: 2\n"));
    assert!(script.contains("def build_circuit():\n"));
    assert!(script.contains("    from cirq.ops import X\n"));
    assert!(script.contains("    moments.append([X(qubits[0])])\n"));
    assert!(script.contains("    #Oracle(qubits[0], qubits[1])\n"));
    assert!(!script.contains("cirq.LineQubit"));
}
