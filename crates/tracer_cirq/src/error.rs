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

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CirqError {
    #[error(
        "Operation {0} does not call any primitive gate using this simulator. (Try a tracing simulator?)"
    )]
    UnsupportedOperation(String),

    #[error("Cannot decompose {gate} with arguments {args:?}: {reason}")]
    MalformedArguments {
        gate: String,
        args: Option<String>,
        reason: String,
    },
}

/// Failure to write one of the files produced by the binary.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Cannot create output directory '{}': {source}", dir.display())]
    CreateDir { dir: PathBuf, source: io::Error },

    #[error("Cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Cannot serialize the execution path: {0}")]
    Json(#[from] serde_json::Error),
}
