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


//! Translate traced execution paths into Cirq scripts.
//!
//! [`translate`] decomposes a finished [`ExecutionPath`] into primitive gates and renders
//! one of the script [`Dialect`]s. [`LiveTranslation`] does the same while a trace is still
//! being captured, writing each instruction out as soon as it is known.

mod args;
pub mod codegen;
pub mod config;
pub mod decompose;
mod error;
pub mod gate_class;
pub mod instruction;
pub mod live;
pub mod output;

pub use config::{CirqConfig, Dialect};
pub use decompose::Translation;
pub use error::{CirqError, OutputError};
pub use live::LiveTranslation;

use log::debug;
use tracer::ExecutionPath;

/// Decompose every operation of `path` and render the script selected by `config`.
///
/// Operations without a primitive breakdown are listed in the script header and, unless
/// disabled, rendered as comments.
///
/// # Errors
///
/// [`CirqError::UnsupportedOperation`] for the first such operation in strict mode, and
/// [`CirqError::MalformedArguments`] when the simulator arguments of an interface gate
/// cannot be parsed.
pub fn translate(path: &ExecutionPath, config: CirqConfig) -> Result<String, CirqError> {
    let mut translation = Translation::new(config);
    translation.visit_all(&path.operations)?;
    debug!(
        "Translated {} operations into {} lines",
        path.operations.len(),
        translation.lines().len()
    );
    Ok(codegen::render(&translation, path.num_qubits()))
}
