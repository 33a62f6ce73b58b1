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

//! Report command - aggregate a run file into a text or CSV table

use super::{load_config, load_runs, write_output};
use crate::error::CliError;
use clap::ValueEnum;
use optstat_core::{generate_report, GroupMode, ReportConfig, SeriesPadding, SortOrder, StatRequest};
use tracing::info;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned `|`-delimited table
    #[default]
    Text,
    /// Comma-separated values
    Csv,
}

/// Command-line settings layered over a config file.
///
/// Unset options leave the file's value alone; `stats` replaces the file's
/// request list when non-empty and `exclude` extends it.
#[derive(Debug, Clone, Default)]
pub struct ReportOverrides {
    /// Config file (JSON or YAML)
    pub config: Option<String>,
    /// Report columns
    pub stats: Vec<StatRequest>,
    /// Grouping mode
    pub group_by: Option<GroupMode>,
    /// In-group order
    pub order: Option<SortOrder>,
    /// Algorithm descriptions to leave out
    pub exclude: Vec<String>,
    /// Omit the description column
    pub no_description: bool,
    /// Aggregate cells in parallel
    pub parallel: bool,
    /// Per-iteration padding rule
    pub padding: Option<SeriesPadding>,
}

impl ReportOverrides {
    /// Resolves the final configuration.
    pub fn resolve(self) -> Result<ReportConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ReportConfig::default(),
        };

        if !self.stats.is_empty() {
            config.requests = self.stats;
        }
        if let Some(mode) = self.group_by {
            config.group_mode = mode;
        }
        if let Some(order) = self.order {
            config.sort_order = order;
        }
        if let Some(padding) = self.padding {
            config.series_padding = padding;
        }
        config.excluded_algorithms.extend(self.exclude);
        if self.no_description {
            config.include_description = false;
        }
        if self.parallel {
            config.parallel = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Generate a report from a run file.
///
/// # Errors
///
/// Returns `Err` if the run file or config cannot be loaded, the resolved
/// configuration is invalid, any cell fails to aggregate, or the output
/// cannot be written.
///
/// # Examples
///
/// ```no_run
/// use optstat_cli::commands::{report, OutputFormat, ReportOverrides};
///
/// # fn main() -> Result<(), optstat_cli::error::CliError> {
/// let overrides = ReportOverrides {
///     stats: vec!["OptimalValue:Mean".parse()?],
///     ..ReportOverrides::default()
/// };
/// report("runs.json", overrides, OutputFormat::Csv, Some("report.csv"))?;
/// # Ok(())
/// # }
/// ```
pub fn report(
    runs: &str,
    overrides: ReportOverrides,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<(), CliError> {
    let config = overrides.resolve()?;
    let records = load_runs(runs)?;
    let report = generate_report(&records, &config)?;

    let rendered = match format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Csv => report.to_csv()?,
    };
    write_output(&rendered, output)?;

    info!(
        file = runs,
        rows = report.data_row_count(),
        format = ?format,
        "Report written"
    );
    Ok(())
}
