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

//! Error types for report generation.

use crate::metric::{MetricName, ValueKind};
use crate::stats::{StatRequest, Statistic};
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Report generation error types.
///
/// Every variant is fatal for the report being generated: there is no
/// degraded output. Errors raised while aggregating a cell are wrapped in
/// [`ReportError::Cell`], which names the request and the cell; use
/// [`ReportError::root_cause`] to inspect the underlying kind.
///
/// # Examples
///
/// ```
/// use optstat_core::{MetricName, ReportError};
///
/// let err = ReportError::MissingMetric {
///     metric: MetricName::ExecutionTime,
///     algorithm_id: 1,
///     benchmark_id: 2,
///     repetition: 7,
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Metric 'ExecutionTime' missing from repetition 7 of algorithm 1 on benchmark 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// A requested metric is absent from a run record.
    #[error("Metric '{metric}' missing from repetition {repetition} of algorithm {algorithm_id} on benchmark {benchmark_id}")]
    MissingMetric {
        /// The metric that was looked up.
        metric: MetricName,
        /// Algorithm instance of the run.
        algorithm_id: u32,
        /// Benchmark instance of the run.
        benchmark_id: u32,
        /// Repetition identifier of the run.
        repetition: u32,
    },

    /// A derived computation hit an undefined operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use optstat_core::{MetricName, ReportError};
    ///
    /// let err = ReportError::InvalidResult {
    ///     metric: MetricName::MutationSuccessRate,
    ///     algorithm_id: 0,
    ///     benchmark_id: 0,
    ///     repetition: 1,
    ///     reason: "total mutation count is zero".to_string(),
    /// };
    /// assert!(err.to_string().contains("total mutation count is zero"));
    /// ```
    #[error("Invalid '{metric}' result in repetition {repetition} of algorithm {algorithm_id} on benchmark {benchmark_id}: {reason}")]
    InvalidResult {
        /// The metric being computed.
        metric: MetricName,
        /// Algorithm instance of the run.
        algorithm_id: u32,
        /// Benchmark instance of the run.
        benchmark_id: u32,
        /// Repetition identifier of the run.
        repetition: u32,
        /// What went wrong.
        reason: String,
    },

    /// Statistics over this metric are not implemented.
    #[error("Statistics over '{metric}' are not supported")]
    UnsupportedMetric {
        /// The non-reducible metric.
        metric: MetricName,
    },

    /// The statistic is undefined for the number of samples in the cell.
    #[error("{statistic} is undefined for {samples} sample(s)")]
    UndefinedStatistic {
        /// The requested statistic.
        statistic: Statistic,
        /// Number of samples available.
        samples: usize,
    },

    /// A metric record carries a value of the wrong kind for its name.
    #[error("Metric '{metric}' expects a {expected} value, got {found}")]
    KindMismatch {
        /// The metric name of the record.
        metric: MetricName,
        /// Kind required by the metric name.
        expected: ValueKind,
        /// Kind actually supplied.
        found: ValueKind,
    },

    /// A run record lists the same metric more than once.
    #[error("Metric '{metric}' appears more than once in repetition {repetition}")]
    DuplicateMetric {
        /// The duplicated metric.
        metric: MetricName,
        /// Repetition identifier of the run.
        repetition: u32,
    },

    /// Aggregating one cell failed.
    #[error("Cannot compute {request} for algorithm {algorithm_id} on benchmark {benchmark_id}: {source}")]
    Cell {
        /// The request being served.
        request: StatRequest,
        /// Algorithm instance of the cell.
        algorithm_id: u32,
        /// Benchmark instance of the cell.
        benchmark_id: u32,
        /// Underlying failure.
        #[source]
        source: Box<ReportError>,
    },

    /// Invalid report configuration.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Unrecognized textual identifier (metric, statistic, mode).
    #[error("Unknown {what}: '{value}'")]
    UnknownIdentifier {
        /// What kind of identifier was being parsed.
        what: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Error from the underlying CSV writer.
    #[error("CSV writer error: {0}")]
    Csv(String),
}

impl ReportError {
    /// Wraps an aggregation failure with the cell and request it belongs to.
    pub fn in_cell(self, request: StatRequest, algorithm_id: u32, benchmark_id: u32) -> Self {
        Self::Cell {
            request,
            algorithm_id,
            benchmark_id,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, unwrapping any [`ReportError::Cell`] layers.
    pub fn root_cause(&self) -> &ReportError {
        match self {
            Self::Cell { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub(crate) fn unknown(what: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownIdentifier {
            what,
            value: value.into(),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(source: csv::Error) -> Self {
        Self::Csv(source.to_string())
    }
}
