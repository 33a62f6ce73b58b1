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

//! CLI command definitions and argument parsing.

use crate::commands::{self, OutputFormat, ReportOverrides};
use crate::error::CliError;
use clap::Subcommand;
use optstat_core::{GroupMode, SeriesPadding, SortOrder, StatRequest};

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use optstat_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a run file into a statistics report
    ///
    /// Runs are grouped per algorithm (or per benchmark function), and each
    /// requested statistic becomes one column. Command-line options override
    /// the values of --config.
    Report {
        /// Run file (JSON array of run records)
        #[arg(value_name = "RUNS")]
        file: String,

        /// Report configuration file (JSON, or YAML by extension)
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,

        /// Report column, as Metric:Statistic (repeatable)
        #[arg(short, long = "stat", value_name = "METRIC:STATISTIC")]
        stats: Vec<StatRequest>,

        /// Outer grouping (algorithm, function)
        #[arg(short, long, value_name = "MODE")]
        group_by: Option<GroupMode>,

        /// Row order inside each group (ascending, descending, none)
        #[arg(long, value_name = "ORDER")]
        order: Option<SortOrder>,

        /// Leave out an algorithm by description (repeatable)
        #[arg(short = 'x', long, value_name = "DESCRIPTION")]
        exclude: Vec<String>,

        /// Omit the Function/Algo description column
        #[arg(long)]
        no_description: bool,

        /// Aggregate cells in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Per-iteration padding for early-stopped runs (repeat-last, skip)
        #[arg(long, value_name = "RULE")]
        padding: Option<SeriesPadding>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List algorithm and benchmark instances in first-seen order
    Index {
        /// Run file (JSON array of run records)
        #[arg(value_name = "RUNS")]
        file: String,

        /// Leave out an algorithm by description (repeatable)
        #[arg(short = 'x', long, value_name = "DESCRIPTION")]
        exclude: Vec<String>,
    },

    /// Check a run file for integrity problems
    Validate {
        /// Run file (JSON array of run records)
        #[arg(value_name = "RUNS")]
        file: String,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O, decoding, validation or report generation
    /// fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report {
                file,
                config,
                stats,
                group_by,
                order,
                exclude,
                no_description,
                parallel,
                padding,
                format,
                output,
            } => {
                let overrides = ReportOverrides {
                    config,
                    stats,
                    group_by,
                    order,
                    exclude,
                    no_description,
                    parallel,
                    padding,
                };
                commands::report(&file, overrides, format, output.as_deref())
            }
            Commands::Index { file, exclude } => commands::index(&file, &exclude),
            Commands::Validate { file } => commands::validate(&file),
        }
    }
}
