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

//! Per-cell aggregation of requested statistics.
//!
//! Most metrics reduce to one number per run, and the statistic is taken
//! over those numbers. [`MetricName::BestObjectiveByIteration`] instead keeps
//! its time axis: the statistic is taken across runs at every iteration
//! index, producing a [`StatValue::Series`].

use crate::cell::Cell;
use crate::error::{ReportError, Result};
use crate::extract::{extract_value, is_reducible};
use crate::metric::{MetricName, MetricValue};
use crate::run::RunRecord;
use crate::stats::{StatRequest, Statistic};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How runs that converged early are treated when aggregating per-iteration
/// series of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesPadding {
    /// A short series keeps contributing its final value.
    #[default]
    RepeatLast,
    /// A short series stops contributing once exhausted.
    Skip,
}

impl FromStr for SeriesPadding {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "repeat-last" | "repeat" => Ok(SeriesPadding::RepeatLast),
            "skip" => Ok(SeriesPadding::Skip),
            _ => Err(ReportError::unknown("series padding", s)),
        }
    }
}

/// One computed report value.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    /// A statistic over one number per run.
    Scalar(f64),
    /// A statistic taken at every iteration index.
    Series(Vec<f64>),
}

impl StatValue {
    /// Returns the scalar, if this is one.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            StatValue::Scalar(v) => Some(*v),
            StatValue::Series(_) => None,
        }
    }

    /// Returns the series, if this is one.
    pub fn as_series(&self) -> Option<&[f64]> {
        match self {
            StatValue::Series(s) => Some(s),
            StatValue::Scalar(_) => None,
        }
    }

    /// Key used when ordering rows: the scalar itself, or the final element
    /// of a series.
    pub fn sort_key(&self) -> Option<f64> {
        match self {
            StatValue::Scalar(v) => Some(*v),
            StatValue::Series(s) => s.last().copied(),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Scalar(v) => write!(f, "{}", v),
            StatValue::Series(s) => {
                for (i, v) in s.iter().enumerate() {
                    if i > 0 {
                        f.write_str(";")?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
        }
    }
}

/// One report row: an optional label and one value per request.
#[derive(Debug, Clone, PartialEq)]
pub struct StatResult {
    /// Row label.
    pub description: Option<String>,
    /// Values in request order.
    pub values: Vec<StatValue>,
}

impl StatResult {
    /// Creates a row.
    pub fn new(description: Option<String>, values: Vec<StatValue>) -> Self {
        Self {
            description,
            values,
        }
    }

    /// Compares rows by their first value. Numerically equal values,
    /// including `0.0` and `-0.0`, compare equal. Rows without a comparable
    /// first value compare equal to everything.
    pub fn cmp_first(&self, other: &Self) -> Ordering {
        match (
            self.values.first().and_then(StatValue::sort_key),
            other.values.first().and_then(StatValue::sort_key),
        ) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b)),
            _ => Ordering::Equal,
        }
    }
}

/// Computes one value per request for `cell`, in request order.
///
/// Failures are wrapped in [`ReportError::Cell`] naming the request and the
/// cell.
pub fn aggregate_cell(
    cell: &Cell<'_>,
    requests: &[StatRequest],
    padding: SeriesPadding,
) -> Result<Vec<StatValue>> {
    requests
        .iter()
        .map(|request| {
            aggregate_request(cell, *request, padding)
                .map_err(|e| e.in_cell(*request, cell.algorithm_id, cell.benchmark_id))
        })
        .collect()
}

fn aggregate_request(
    cell: &Cell<'_>,
    request: StatRequest,
    padding: SeriesPadding,
) -> Result<StatValue> {
    if !is_reducible(request.metric) {
        return match request.metric {
            MetricName::BestObjectiveByIteration => {
                per_iteration(&cell.runs, request.statistic, padding).map(StatValue::Series)
            }
            metric => Err(ReportError::UnsupportedMetric { metric }),
        };
    }

    let samples = cell
        .runs
        .iter()
        .map(|run| extract_value(run, request.metric))
        .collect::<Result<Vec<f64>>>()?;
    request.statistic.apply(&samples).map(StatValue::Scalar)
}

fn per_iteration(
    runs: &[&RunRecord],
    statistic: Statistic,
    padding: SeriesPadding,
) -> Result<Vec<f64>> {
    let metric = MetricName::BestObjectiveByIteration;
    let mut series = Vec::with_capacity(runs.len());
    for run in runs {
        let values = match run.require(metric)? {
            MetricValue::DoubleSeries(values) if !values.is_empty() => values,
            _ => {
                return Err(ReportError::InvalidResult {
                    metric,
                    algorithm_id: run.algorithm_id(),
                    benchmark_id: run.benchmark_id(),
                    repetition: run.repetition(),
                    reason: "series is empty".to_string(),
                })
            }
        };
        series.push(values.as_slice());
    }

    let length = series.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut samples = Vec::with_capacity(series.len());
    (0..length)
        .map(|i| {
            samples.clear();
            for s in &series {
                match (s.get(i), padding) {
                    (Some(v), _) => samples.push(*v),
                    (None, SeriesPadding::RepeatLast) => samples.extend(s.last()),
                    (None, SeriesPadding::Skip) => {}
                }
            }
            statistic.apply(&samples)
        })
        .collect()
}
