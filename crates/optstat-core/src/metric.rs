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

//! Metric names and tagged metric values.
//!
//! Every metric name has exactly one value kind. The mapping lives in
//! [`MetricName::expected_kind`] and is enforced whenever a [`MetricRecord`]
//! is built, including during deserialization.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named quantity recorded per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricName {
    /// Best objective value found.
    OptimalValue,
    /// Location of the best objective value.
    OptimalPoint,
    /// Iterations performed.
    NumberOfIteration,
    /// Objective function evaluations performed.
    NumberOfEvaluation,
    /// Wall-clock execution time.
    ExecutionTime,
    /// Whether the known optimum was reached.
    OptimumFound,
    /// Cumulative mutation count per iteration.
    MutationCounts,
    /// Cumulative successful mutation count per iteration.
    SuccessfulMutationCounts,
    /// Successful mutations over total mutations.
    MutationSuccessRate,
    /// Best objective value after each iteration.
    BestObjectiveByIteration,
}

impl MetricName {
    /// All metric names, in declaration order.
    pub const ALL: [MetricName; 10] = [
        MetricName::OptimalValue,
        MetricName::OptimalPoint,
        MetricName::NumberOfIteration,
        MetricName::NumberOfEvaluation,
        MetricName::ExecutionTime,
        MetricName::OptimumFound,
        MetricName::MutationCounts,
        MetricName::SuccessfulMutationCounts,
        MetricName::MutationSuccessRate,
        MetricName::BestObjectiveByIteration,
    ];

    /// Returns the stable identifier used in files and report headers.
    pub fn identifier(&self) -> &'static str {
        match self {
            MetricName::OptimalValue => "OptimalValue",
            MetricName::OptimalPoint => "OptimalPoint",
            MetricName::NumberOfIteration => "NumberOfIteration",
            MetricName::NumberOfEvaluation => "NumberOfEvaluation",
            MetricName::ExecutionTime => "ExecutionTime",
            MetricName::OptimumFound => "OptimumFound",
            MetricName::MutationCounts => "MutationCounts",
            MetricName::SuccessfulMutationCounts => "SuccessfulMutationCounts",
            MetricName::MutationSuccessRate => "MutationSuccessRate",
            MetricName::BestObjectiveByIteration => "BestObjectiveByIteration",
        }
    }

    /// Returns the value kind every record of this metric must carry.
    pub fn expected_kind(&self) -> ValueKind {
        match self {
            MetricName::OptimalValue
            | MetricName::NumberOfIteration
            | MetricName::NumberOfEvaluation
            | MetricName::ExecutionTime
            | MetricName::MutationSuccessRate => ValueKind::Scalar,
            MetricName::OptimumFound => ValueKind::Flag,
            MetricName::MutationCounts | MetricName::SuccessfulMutationCounts => {
                ValueKind::IntSeries
            }
            MetricName::OptimalPoint | MetricName::BestObjectiveByIteration => {
                ValueKind::DoubleSeries
            }
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for MetricName {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        MetricName::ALL
            .into_iter()
            .find(|m| m.identifier().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ReportError::unknown("metric", s))
    }
}

/// The shape of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A single floating-point number.
    Scalar,
    /// A boolean.
    Flag,
    /// An ordered sequence of integers.
    IntSeries,
    /// An ordered sequence of floating-point numbers.
    DoubleSeries,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Scalar => "scalar",
            ValueKind::Flag => "flag",
            ValueKind::IntSeries => "integer series",
            ValueKind::DoubleSeries => "double series",
        })
    }
}

/// A metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    /// A single floating-point number.
    Scalar(f64),
    /// A boolean.
    Flag(bool),
    /// An ordered sequence of integers.
    IntSeries(Vec<i64>),
    /// An ordered sequence of floating-point numbers.
    DoubleSeries(Vec<f64>),
}

impl MetricValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            MetricValue::Scalar(_) => ValueKind::Scalar,
            MetricValue::Flag(_) => ValueKind::Flag,
            MetricValue::IntSeries(_) => ValueKind::IntSeries,
            MetricValue::DoubleSeries(_) => ValueKind::DoubleSeries,
        }
    }
}

/// A metric name paired with a value of the matching kind.
///
/// # Examples
///
/// ```
/// use optstat_core::{MetricName, MetricRecord, MetricValue};
///
/// let ok = MetricRecord::new(MetricName::ExecutionTime, MetricValue::Scalar(0.25));
/// assert!(ok.is_ok());
///
/// let bad = MetricRecord::new(MetricName::ExecutionTime, MetricValue::Flag(true));
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMetricRecord")]
pub struct MetricRecord {
    metric: MetricName,
    value: MetricValue,
}

impl MetricRecord {
    /// Builds a record, rejecting a value whose kind does not match the name.
    pub fn new(metric: MetricName, value: MetricValue) -> Result<Self> {
        let expected = metric.expected_kind();
        let found = value.kind();
        if expected != found {
            return Err(ReportError::KindMismatch {
                metric,
                expected,
                found,
            });
        }
        Ok(Self { metric, value })
    }

    /// Returns the metric name.
    pub fn metric(&self) -> MetricName {
        self.metric
    }

    /// Returns the value.
    pub fn value(&self) -> &MetricValue {
        &self.value
    }
}

#[derive(Deserialize)]
struct RawMetricRecord {
    metric: MetricName,
    value: MetricValue,
}

impl TryFrom<RawMetricRecord> for MetricRecord {
    type Error = ReportError;

    fn try_from(raw: RawMetricRecord) -> Result<Self> {
        MetricRecord::new(raw.metric, raw.value)
    }
}
