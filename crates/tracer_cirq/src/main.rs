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

use std::{
    error,
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use log::{info, warn};
use serde_json::Deserializer;

use tracer::{ExecutionPath, ExecutionPathTracer, TraceEvent, TraceObserver};
use tracer_cirq::{
    CirqConfig, Dialect, LiveTranslation,
    output::{script_path, write_execution_path, write_file},
    translate,
};

/// Replay a recorded operation trace from stdin and translate it to a Cirq script.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Write the script to `<OUTPUT>.py` instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// JSON file with translation options
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fail on operations without primitive gate breakdown
    #[arg(long)]
    strict: bool,
    /// Drop operations without primitive gate breakdown instead of commenting them
    #[arg(long)]
    no_render_unhandled: bool,
    /// Start a new moment for every operation at this depth or above
    #[arg(long)]
    depth: Option<usize>,
    /// Log every visited operation
    #[arg(long)]
    debug: bool,
    /// Emit a build_circuit() function with explicit moments
    #[arg(long)]
    moment_list: bool,
    /// Also write the traced execution path as JSON
    #[arg(long)]
    emit_path: Option<PathBuf>,
    /// Echo supported gates to stderr while the trace is replayed
    #[arg(long)]
    live: bool,
}

impl Cli {
    fn cirq_config(&self) -> Result<CirqConfig, Box<dyn error::Error>> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_reader(File::open(path)?)?,
            None => CirqConfig::default(),
        };
        config.strict |= self.strict;
        config.render_unhandled &= !self.no_render_unhandled;
        config.debug |= self.debug;
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if self.moment_list {
            config.dialect = Dialect::MomentList;
        }
        Ok(config)
    }
}

/// Replay the events on stdin through `tracer`.
fn capture<O: TraceObserver>(
    mut tracer: ExecutionPathTracer<O>,
) -> Result<ExecutionPath, Box<dyn error::Error>> {
    let reader = io::stdin().lock();
    for event in Deserializer::from_reader(reader).into_iter::<TraceEvent>() {
        tracer.on_event(&event?);
    }
    if tracer.depth() > 1 {
        warn!(
            "Trace ended with {} unterminated operations",
            tracer.depth() - 1
        );
    }
    Ok(tracer.into_execution_path())
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let cli = Cli::parse();
    let config = cli.cirq_config()?;

    // By default log INFO, or DEBUG to show the walk echo
    let default_level = if config.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let path = if cli.live {
        capture(ExecutionPathTracer::with_observer(LiveTranslation::new(
            config,
            io::stderr(),
        )))?
    } else {
        capture(ExecutionPathTracer::new())?
    };
    info!(
        "Traced {} qubits and {} top-level operations",
        path.num_qubits(),
        path.operations.len()
    );

    if let Some(path_file) = &cli.emit_path {
        write_execution_path(path_file, &path)?;
        info!("Wrote execution path to {}", path_file.display());
    }

    let script = translate(&path, config)?;

    match &cli.output {
        Some(output) => {
            let file_name = script_path(output);
            write_file(&file_name, &script)?;
            info!("Translation complete: {}", file_name.display());
        }
        None => {
            io::stdout().write_all(script.as_bytes())?;
        }
    }

    Ok(())
}
