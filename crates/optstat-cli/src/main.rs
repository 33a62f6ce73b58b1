// Optstat - Batch Statistics for Stochastic Optimization Runs
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Optstat Command Line Interface

use clap::Parser;
use optstat_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Optstat - batch statistics for stochastic optimization runs
///
/// # Examples
///
/// ```bash
/// # Mean and spread of the optimal value, per algorithm
/// optstat report runs.json --stat OptimalValue:Mean --stat OptimalValue:sd
///
/// # Grouped by benchmark, best first, as CSV
/// optstat report runs.json -c report.yaml --group-by function --order ascending -f csv
///
/// # What is in a run file
/// optstat index runs.json
/// ```
#[derive(Parser)]
#[command(name = "optstat")]
#[command(author, version, about = "Optstat - batch statistics for stochastic optimization runs", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "optstat_core=debug,optstat_cli=debug"
    } else {
        "optstat_core=info,optstat_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
