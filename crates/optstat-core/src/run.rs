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

//! Per-run result records.

use crate::error::{ReportError, Result};
use crate::instance::{AlgorithmInstance, BenchmarkInstance};
use crate::metric::{MetricName, MetricRecord, MetricValue};
use serde::{Deserialize, Serialize};

/// The outcome of one algorithm instance run once against one benchmark
/// instance.
///
/// Records are immutable once built; [`RunRecord::new`] rejects a metric
/// listed twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRunRecord")]
pub struct RunRecord {
    algorithm: AlgorithmInstance,
    benchmark: BenchmarkInstance,
    repetition: u32,
    metrics: Vec<MetricRecord>,
}

impl RunRecord {
    /// Builds a run record.
    pub fn new(
        algorithm: AlgorithmInstance,
        benchmark: BenchmarkInstance,
        repetition: u32,
        metrics: Vec<MetricRecord>,
    ) -> Result<Self> {
        for (i, record) in metrics.iter().enumerate() {
            if metrics[..i].iter().any(|m| m.metric() == record.metric()) {
                return Err(ReportError::DuplicateMetric {
                    metric: record.metric(),
                    repetition,
                });
            }
        }

        Ok(Self {
            algorithm,
            benchmark,
            repetition,
            metrics,
        })
    }

    /// Returns the algorithm instance.
    pub fn algorithm(&self) -> &AlgorithmInstance {
        &self.algorithm
    }

    /// Returns the benchmark instance.
    pub fn benchmark(&self) -> &BenchmarkInstance {
        &self.benchmark
    }

    /// Returns the algorithm instance id.
    pub fn algorithm_id(&self) -> u32 {
        self.algorithm.id
    }

    /// Returns the benchmark instance id.
    pub fn benchmark_id(&self) -> u32 {
        self.benchmark.id
    }

    /// Returns the repetition identifier.
    pub fn repetition(&self) -> u32 {
        self.repetition
    }

    /// Returns the metric records in production order.
    pub fn metrics(&self) -> &[MetricRecord] {
        &self.metrics
    }

    /// Looks up a metric value.
    pub fn get(&self, metric: MetricName) -> Option<&MetricValue> {
        self.metrics
            .iter()
            .find(|m| m.metric() == metric)
            .map(MetricRecord::value)
    }

    /// Looks up a metric value, failing with [`ReportError::MissingMetric`].
    pub fn require(&self, metric: MetricName) -> Result<&MetricValue> {
        self.get(metric).ok_or(ReportError::MissingMetric {
            metric,
            algorithm_id: self.algorithm_id(),
            benchmark_id: self.benchmark_id(),
            repetition: self.repetition,
        })
    }
}

#[derive(Deserialize)]
struct RawRunRecord {
    algorithm: AlgorithmInstance,
    benchmark: BenchmarkInstance,
    repetition: u32,
    #[serde(default)]
    metrics: Vec<MetricRecord>,
}

impl TryFrom<RawRunRecord> for RunRecord {
    type Error = ReportError;

    fn try_from(raw: RawRunRecord) -> Result<Self> {
        RunRecord::new(raw.algorithm, raw.benchmark, raw.repetition, raw.metrics)
    }
}
