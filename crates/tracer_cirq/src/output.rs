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


//! Files written by the `trace2cirq` binary: the script and, on request, the traced
//! execution path.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracer::ExecutionPath;

use crate::error::OutputError;

/// The script file for the `--output` base path. `.py` is appended, so `bell.v2` becomes
/// `bell.v2.py`.
pub fn script_path(base: &Path) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".py");
    PathBuf::from(name)
}

/// Write `contents` to `path`, replacing an existing file and creating missing parent
/// directories.
pub fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            dir: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `execution_path` as pretty-printed JSON.
pub fn write_execution_path(path: &Path, execution_path: &ExecutionPath) -> Result<(), OutputError> {
    write_file(path, &serde_json::to_string_pretty(execution_path)?)
}
