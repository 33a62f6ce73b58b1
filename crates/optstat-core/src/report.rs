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

//! Report generation entry point.

use crate::aggregate::{aggregate_cell, StatResult};
use crate::cell::select_cell;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::format::{render_csv, render_text};
use crate::group::{GroupMode, GroupOrderer};
use crate::index::index_runs;
use crate::run::RunRecord;
use crate::stats::StatRequest;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// A generated report: the requested columns and the ordered rows, with
/// `None` marking group boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    requests: Vec<StatRequest>,
    rows: Vec<Option<StatResult>>,
}

impl Report {
    /// Returns the report columns.
    pub fn requests(&self) -> &[StatRequest] {
        &self.requests
    }

    /// Returns the rows, including group separators.
    pub fn rows(&self) -> &[Option<StatResult>] {
        &self.rows
    }

    /// Returns the data rows, skipping separators.
    pub fn data_rows(&self) -> impl Iterator<Item = &StatResult> {
        self.rows.iter().flatten()
    }

    /// Number of data rows.
    pub fn data_row_count(&self) -> usize {
        self.data_rows().count()
    }

    /// Renders the report as an aligned text table.
    pub fn to_text(&self) -> String {
        render_text(&self.requests, &self.rows)
    }

    /// Renders the report as CSV.
    pub fn to_csv(&self) -> Result<String> {
        render_csv(&self.requests, &self.rows)
    }
}

/// One `(outer, inner)` step of the grouping loop.
#[derive(Debug, Clone, Copy)]
struct Visit {
    group: usize,
    algorithm_id: u32,
    benchmark_id: u32,
}

/// Generates a report over `runs`.
///
/// Every algorithm/benchmark pair is visited in the order given by
/// `config.group_mode`; pairs without runs are skipped. Either the full
/// report is produced or the first failing cell, in visiting order, is
/// returned as the error. With `config.parallel` the cells are aggregated on
/// the rayon pool and merged in visiting order, so the output is identical
/// to the sequential path.
///
/// # Examples
///
/// ```
/// use optstat_core::{generate_report, MetricName, ReportConfig, StatRequest, Statistic};
///
/// let mean = StatRequest::new(MetricName::OptimalValue, Statistic::Mean);
/// let config = ReportConfig::new(vec![mean]);
/// let report = generate_report(&[], &config).unwrap();
/// assert_eq!(report.data_row_count(), 0);
/// assert_eq!(report.to_text(), "Function/Algo|OptimaValue/Mean\n");
/// ```
pub fn generate_report(runs: &[RunRecord], config: &ReportConfig) -> Result<Report> {
    config.validate()?;

    let index = index_runs(runs, &config.excluded_algorithms);
    let algorithm_ids = index.algorithm_ids();
    let benchmark_ids = index.benchmark_ids();
    let (outer, inner) = match config.group_mode {
        GroupMode::ByAlgorithm => (&algorithm_ids, &benchmark_ids),
        GroupMode::ByBenchmarkFunction => (&benchmark_ids, &algorithm_ids),
    };

    let visits: Vec<Visit> = outer
        .iter()
        .enumerate()
        .flat_map(|(group, &o)| {
            inner.iter().map(move |&i| {
                let (algorithm_id, benchmark_id) = config.group_mode.pair(o, i);
                Visit {
                    group,
                    algorithm_id,
                    benchmark_id,
                }
            })
        })
        .collect();

    let compute = |visit: &Visit| -> Result<Option<StatResult>> {
        let cell = select_cell(runs, visit.algorithm_id, visit.benchmark_id);
        if cell.is_empty() {
            debug!(
                algorithm_id = visit.algorithm_id,
                benchmark_id = visit.benchmark_id,
                "Skipping empty cell"
            );
            return Ok(None);
        }

        let values = aggregate_cell(&cell, &config.requests, config.series_padding)?;
        let description = if config.include_description {
            cell.description()
        } else {
            None
        };
        Ok(Some(StatResult::new(description, values)))
    };

    let results: Vec<Result<Option<StatResult>>> = if config.parallel {
        visits.par_iter().map(compute).collect()
    } else {
        visits.iter().map(compute).collect()
    };

    let mut orderer = GroupOrderer::new(config.sort_order);
    let mut current_group = None;
    for (visit, result) in visits.iter().zip(results) {
        if current_group != Some(visit.group) {
            orderer.close_group();
            current_group = Some(visit.group);
        }

        match result {
            Ok(Some(row)) => orderer.push(row),
            Ok(None) => {}
            Err(e) => {
                warn!(
                    algorithm_id = visit.algorithm_id,
                    benchmark_id = visit.benchmark_id,
                    error = %e,
                    "Report generation aborted"
                );
                return Err(e);
            }
        }
    }

    let report = Report {
        requests: config.requests.clone(),
        rows: orderer.finish(),
    };
    info!(
        runs = runs.len(),
        cells = visits.len(),
        rows = report.data_row_count(),
        "Generated report"
    );
    Ok(report)
}
