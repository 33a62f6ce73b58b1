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

//! Scalar extraction of one metric from one run.
//!
//! Extraction is table driven: [`EXTRACTORS`] maps each reducible metric to
//! the function that turns a run into a single `f64`. A metric with no table
//! entry is not reducible and fails with [`ReportError::UnsupportedMetric`].

use crate::error::{ReportError, Result};
use crate::metric::{MetricName, MetricValue};
use crate::run::RunRecord;

type ExtractFn = fn(&RunRecord, MetricName) -> Result<f64>;

const EXTRACTORS: &[(MetricName, ExtractFn)] = &[
    (MetricName::OptimalValue, scalar),
    (MetricName::NumberOfIteration, scalar),
    (MetricName::NumberOfEvaluation, scalar),
    (MetricName::ExecutionTime, scalar),
    (MetricName::OptimumFound, scalar),
    (MetricName::MutationCounts, last_count),
    (MetricName::SuccessfulMutationCounts, last_count),
    (MetricName::MutationSuccessRate, success_rate),
];

/// Returns whether `metric` can be reduced to one number per run.
pub(crate) fn is_reducible(metric: MetricName) -> bool {
    EXTRACTORS.iter().any(|(m, _)| *m == metric)
}

/// Extracts `metric` from `run` as a single number.
///
/// # Errors
///
/// - [`ReportError::MissingMetric`] if the run lacks the metric (or a series
///   it is derived from)
/// - [`ReportError::InvalidResult`] for an empty series or a zero
///   denominator
/// - [`ReportError::UnsupportedMetric`] for metrics with no scalar reduction
///
/// # Examples
///
/// ```
/// use optstat_core::{extract_value, MetricName, MetricRecord, MetricValue, RunRecord};
/// use optstat_core::{Algorithm, AlgorithmInstance, BenchmarkFunction, BenchmarkInstance};
///
/// let counts = MetricValue::IntSeries(vec![3, 8, 12]);
/// let run = RunRecord::new(
///     AlgorithmInstance::new(0, Algorithm::RandomSearch),
///     BenchmarkInstance::new(0, BenchmarkFunction::Sphere { dimension: 2 }),
///     0,
///     vec![MetricRecord::new(MetricName::MutationCounts, counts).unwrap()],
/// )
/// .unwrap();
///
/// assert_eq!(extract_value(&run, MetricName::MutationCounts).unwrap(), 12.0);
/// ```
pub fn extract_value(run: &RunRecord, metric: MetricName) -> Result<f64> {
    let (_, extract) = EXTRACTORS
        .iter()
        .find(|(m, _)| *m == metric)
        .ok_or(ReportError::UnsupportedMetric { metric })?;
    extract(run, metric)
}

fn scalar(run: &RunRecord, metric: MetricName) -> Result<f64> {
    match run.require(metric)? {
        MetricValue::Scalar(v) => Ok(*v),
        MetricValue::Flag(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(invalid(run, metric, format!("not a scalar ({})", other.kind()))),
    }
}

fn last_count(run: &RunRecord, metric: MetricName) -> Result<f64> {
    last_of_series(run, metric).map(|v| v as f64)
}

fn success_rate(run: &RunRecord, metric: MetricName) -> Result<f64> {
    if run.get(metric).is_some() {
        return scalar(run, metric);
    }

    let successful = last_of_series(run, MetricName::SuccessfulMutationCounts)?;
    let total = last_of_series(run, MetricName::MutationCounts)?;
    if total == 0 {
        return Err(invalid(run, metric, "total mutation count is zero".to_string()));
    }
    Ok(successful as f64 / total as f64)
}

fn last_of_series(run: &RunRecord, metric: MetricName) -> Result<i64> {
    match run.require(metric)? {
        MetricValue::IntSeries(series) => series
            .last()
            .copied()
            .ok_or_else(|| invalid(run, metric, "series is empty".to_string())),
        other => Err(invalid(
            run,
            metric,
            format!("not an integer series ({})", other.kind()),
        )),
    }
}

fn invalid(run: &RunRecord, metric: MetricName, reason: String) -> ReportError {
    ReportError::InvalidResult {
        metric,
        algorithm_id: run.algorithm_id(),
        benchmark_id: run.benchmark_id(),
        repetition: run.repetition(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{Algorithm, AlgorithmInstance, BenchmarkFunction, BenchmarkInstance};
    use crate::metric::MetricRecord;

    fn run(metrics: Vec<(MetricName, MetricValue)>) -> RunRecord {
        RunRecord::new(
            AlgorithmInstance::new(5, Algorithm::RandomSearch),
            BenchmarkInstance::new(6, BenchmarkFunction::Ackley { dimension: 3 }),
            2,
            metrics
                .into_iter()
                .map(|(m, v)| MetricRecord::new(m, v).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_scalar_and_flag() {
        let r = run(vec![
            (MetricName::ExecutionTime, MetricValue::Scalar(0.75)),
            (MetricName::OptimumFound, MetricValue::Flag(true)),
        ]);
        assert_eq!(extract_value(&r, MetricName::ExecutionTime).unwrap(), 0.75);
        assert_eq!(extract_value(&r, MetricName::OptimumFound).unwrap(), 1.0);
    }

    #[test]
    fn test_missing_metric_names_the_run() {
        let r = run(vec![]);
        assert_eq!(
            extract_value(&r, MetricName::OptimalValue).unwrap_err(),
            ReportError::MissingMetric {
                metric: MetricName::OptimalValue,
                algorithm_id: 5,
                benchmark_id: 6,
                repetition: 2,
            }
        );
    }

    #[test]
    fn test_last_of_mutation_series() {
        let r = run(vec![
            (MetricName::MutationCounts, MetricValue::IntSeries(vec![1, 4, 9])),
            (MetricName::SuccessfulMutationCounts, MetricValue::IntSeries(vec![0, 1, 3])),
        ]);
        assert_eq!(extract_value(&r, MetricName::MutationCounts).unwrap(), 9.0);
        assert_eq!(
            extract_value(&r, MetricName::SuccessfulMutationCounts).unwrap(),
            3.0
        );
    }

    #[test]
    fn test_derived_success_rate() {
        let r = run(vec![
            (MetricName::MutationCounts, MetricValue::IntSeries(vec![2, 8])),
            (MetricName::SuccessfulMutationCounts, MetricValue::IntSeries(vec![1, 2])),
        ]);
        assert_eq!(
            extract_value(&r, MetricName::MutationSuccessRate).unwrap(),
            0.25
        );
    }

    #[test]
    fn test_stored_success_rate_wins() {
        let r = run(vec![
            (MetricName::MutationSuccessRate, MetricValue::Scalar(0.2)),
            (MetricName::MutationCounts, MetricValue::IntSeries(vec![0])),
        ]);
        assert_eq!(
            extract_value(&r, MetricName::MutationSuccessRate).unwrap(),
            0.2
        );
    }

    #[test]
    fn test_success_rate_division_by_zero() {
        let r = run(vec![
            (MetricName::MutationCounts, MetricValue::IntSeries(vec![0, 0])),
            (MetricName::SuccessfulMutationCounts, MetricValue::IntSeries(vec![0, 0])),
        ]);
        let err = extract_value(&r, MetricName::MutationSuccessRate).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidResult {
                metric: MetricName::MutationSuccessRate,
                ..
            }
        ));
    }

    #[test]
    fn test_success_rate_names_missing_series() {
        let r = run(vec![(
            MetricName::SuccessfulMutationCounts,
            MetricValue::IntSeries(vec![1]),
        )]);
        assert!(matches!(
            extract_value(&r, MetricName::MutationSuccessRate).unwrap_err(),
            ReportError::MissingMetric {
                metric: MetricName::MutationCounts,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_series_is_invalid() {
        let r = run(vec![(MetricName::MutationCounts, MetricValue::IntSeries(vec![]))]);
        assert!(matches!(
            extract_value(&r, MetricName::MutationCounts),
            Err(ReportError::InvalidResult { .. })
        ));
    }

    #[test]
    fn test_non_reducible_metrics() {
        let r = run(vec![(
            MetricName::OptimalPoint,
            MetricValue::DoubleSeries(vec![0.0, 0.0]),
        )]);
        assert_eq!(
            extract_value(&r, MetricName::OptimalPoint).unwrap_err(),
            ReportError::UnsupportedMetric {
                metric: MetricName::OptimalPoint
            }
        );
        assert!(!is_reducible(MetricName::OptimalPoint));
        assert!(!is_reducible(MetricName::BestObjectiveByIteration));
        assert!(is_reducible(MetricName::MutationSuccessRate));
    }
}
