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

//! Shared test fixtures for optstat crates.
//!
//! # Quick Start
//!
//! ```rust
//! use optstat_test::{fixtures, RunBuilder};
//! use optstat_core::MetricName;
//!
//! // Full grid: every algorithm against every benchmark, 5 repetitions
//! let runs = fixtures::grid(5);
//! assert_eq!(runs.len(), fixtures::algorithms().len() * fixtures::benchmarks().len() * 5);
//!
//! // Custom run
//! let run = RunBuilder::new(fixtures::evolution_strategy(0), fixtures::sphere(0))
//!     .repetition(3)
//!     .scalar(MetricName::OptimalValue, 0.5)
//!     .build();
//! assert_eq!(run.repetition(), 3);
//! ```

pub mod fixtures;

use optstat_core::{
    AlgorithmInstance, BenchmarkInstance, MetricName, MetricRecord, MetricValue, RunRecord,
};

/// Fluent builder for [`RunRecord`] fixtures.
///
/// Panics on values that do not match their metric's kind; fixtures are
/// expected to be well formed.
#[derive(Debug, Clone)]
pub struct RunBuilder {
    algorithm: AlgorithmInstance,
    benchmark: BenchmarkInstance,
    repetition: u32,
    metrics: Vec<MetricRecord>,
}

impl RunBuilder {
    /// Starts a run of `algorithm` on `benchmark`, repetition 0.
    pub fn new(algorithm: AlgorithmInstance, benchmark: BenchmarkInstance) -> Self {
        Self {
            algorithm,
            benchmark,
            repetition: 0,
            metrics: Vec::new(),
        }
    }

    /// Sets the repetition id.
    pub fn repetition(mut self, repetition: u32) -> Self {
        self.repetition = repetition;
        self
    }

    /// Adds a metric with an arbitrary value.
    pub fn metric(mut self, metric: MetricName, value: MetricValue) -> Self {
        let record = MetricRecord::new(metric, value)
            .unwrap_or_else(|e| panic!("invalid fixture metric: {}", e));
        self.metrics.push(record);
        self
    }

    /// Adds a scalar metric.
    pub fn scalar(self, metric: MetricName, value: f64) -> Self {
        self.metric(metric, MetricValue::Scalar(value))
    }

    /// Adds the optimum-found flag.
    pub fn optimum_found(self, found: bool) -> Self {
        self.metric(MetricName::OptimumFound, MetricValue::Flag(found))
    }

    /// Adds an integer series metric.
    pub fn int_series(self, metric: MetricName, values: Vec<i64>) -> Self {
        self.metric(metric, MetricValue::IntSeries(values))
    }

    /// Adds a double series metric.
    pub fn double_series(self, metric: MetricName, values: Vec<f64>) -> Self {
        self.metric(metric, MetricValue::DoubleSeries(values))
    }

    /// Builds the run.
    pub fn build(self) -> RunRecord {
        RunRecord::new(self.algorithm, self.benchmark, self.repetition, self.metrics)
            .unwrap_or_else(|e| panic!("invalid fixture run: {}", e))
    }
}

/// Serializes runs the way the CLI expects to read them.
pub fn runs_to_json(runs: &[RunRecord]) -> String {
    serde_json::to_string_pretty(runs).unwrap_or_else(|e| panic!("fixture serialization: {}", e))
}

/// Counts non-blank lines after the header of a text report.
pub fn text_data_lines(text: &str) -> usize {
    text.lines().skip(1).filter(|l| !l.trim().is_empty()).count()
}

/// Counts lines after the header of a CSV report.
pub fn csv_data_lines(csv: &str) -> usize {
    csv.lines().skip(1).count()
}
