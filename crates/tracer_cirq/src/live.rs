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


//! Translation while the trace is being captured.
//!
//! Every classified operation is decomposed as soon as it starts and its instructions are
//! written out immediately. Its body is skipped. Childless `Exp` operations are only
//! decomposed once they end, since a simulator may still report their primitive children.
//! Operations without a primitive breakdown are not echoed.

use std::io::Write;

use log::warn;
use tracer::{Operation, TraceObserver};

use crate::{config::CirqConfig, decompose::Translation, gate_class::GateClass};

pub struct LiveTranslation<W> {
    translation: Translation,
    writer: W,
    written: usize,
    /// Depth of the last classified operation; deeper operations belong to its body.
    handled_depth: Option<usize>,
}

impl<W: Write> LiveTranslation<W> {
    /// Strict mode is ignored: unsupported operations are left to the final translation.
    pub fn new(config: CirqConfig, writer: W) -> Self {
        Self {
            translation: Translation::new(CirqConfig {
                strict: false,
                ..config
            }),
            writer,
            written: 0,
            handled_depth: None,
        }
    }

    pub fn translation(&self) -> &Translation {
        &self.translation
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn in_handled_body(&self, depth: usize) -> bool {
        self.handled_depth.is_some_and(|handled| depth > handled)
    }

    fn emit(&mut self, op: &Operation, depth: usize) {
        if let Err(err) = self.translation.visit(op, depth - 1) {
            warn!("Live translation of {} failed: {err}", op.gate);
            return;
        }
        for line in &self.translation.lines()[self.written..] {
            if let Err(err) = writeln!(self.writer, "{line}") {
                warn!("Cannot echo live translation: {err}");
                break;
            }
        }
        self.written = self.translation.lines().len();
    }
}

impl<W: Write> TraceObserver for LiveTranslation<W> {
    fn on_start(&mut self, op: &Operation, depth: usize) {
        if self.in_handled_body(depth) {
            return;
        }
        self.handled_depth = None;
        if GateClass::classify(&op.gate).is_some() {
            self.handled_depth = Some(depth);
            self.emit(op, depth);
        }
    }

    fn on_end(&mut self, op: &Operation, depth: usize) {
        if op.gate == "Exp" && !op.has_children() && !self.in_handled_body(depth) {
            self.emit(op, depth);
        }
    }
}
