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

//! Reconstruct the execution path of a quantum program.
//!
//! The host simulator reports every operation it enters and leaves. An
//! [`ExecutionPathTracer`] turns this stream of well-nested notifications into a tree of
//! [`Operation`]s, allocating qubit and classical registers along the way.

mod error;
pub mod execution_path_tracer;
pub mod metadata;
mod observer;
pub mod operation;
pub mod registers;

pub use error::LookupError;
pub use execution_path_tracer::ExecutionPathTracer;
pub use metadata::{MetadataSource, RuntimeMetadata, TraceEvent};
pub use observer::TraceObserver;
pub use operation::{ExecutionPath, Operation, QubitDeclaration};
pub use registers::RegisterAllocator;
