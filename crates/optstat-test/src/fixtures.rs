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

//! Canonical instances and run grids.
//!
//! All values are derived from instance ids and repetition numbers, so every
//! fixture is deterministic.

use crate::RunBuilder;
use optstat_core::{
    Algorithm, AlgorithmInstance, BenchmarkFunction, BenchmarkInstance, MetricName, RunRecord,
    StatRequest, Statistic,
};

/// A (1, 1) evolution strategy.
pub fn evolution_strategy(id: u32) -> AlgorithmInstance {
    AlgorithmInstance::new(
        id,
        Algorithm::EvolutionStrategy {
            mu: 1,
            lambda: 1,
            sigma: 0.5,
        },
    )
}

/// Hill climbing with a 0.1 step.
pub fn hill_climbing(id: u32) -> AlgorithmInstance {
    AlgorithmInstance::new(id, Algorithm::HillClimbing { step_size: 0.1 })
}

/// Random search.
pub fn random_search(id: u32) -> AlgorithmInstance {
    AlgorithmInstance::new(id, Algorithm::RandomSearch)
}

/// Two-dimensional sphere.
pub fn sphere(id: u32) -> BenchmarkInstance {
    BenchmarkInstance::new(id, BenchmarkFunction::Sphere { dimension: 2 })
}

/// Ten-dimensional Rastrigin.
pub fn rastrigin(id: u32) -> BenchmarkInstance {
    BenchmarkInstance::new(id, BenchmarkFunction::Rastrigin { dimension: 10 })
}

/// Five-dimensional Rosenbrock.
pub fn rosenbrock(id: u32) -> BenchmarkInstance {
    BenchmarkInstance::new(id, BenchmarkFunction::Rosenbrock { dimension: 5 })
}

/// The fixture algorithms, ids 0..3.
pub fn algorithms() -> Vec<AlgorithmInstance> {
    vec![evolution_strategy(0), hill_climbing(1), random_search(2)]
}

/// The fixture benchmarks, ids 0..3.
pub fn benchmarks() -> Vec<BenchmarkInstance> {
    vec![sphere(0), rastrigin(1), rosenbrock(2)]
}

/// A run carrying every metric.
pub fn full_run(
    algorithm: &AlgorithmInstance,
    benchmark: &BenchmarkInstance,
    repetition: u32,
) -> RunRecord {
    let base = (algorithm.id * 3 + benchmark.id) as f64;
    let rep = repetition as i64;
    let iterations = 100.0 + 10.0 * repetition as f64;
    let curve_len = 3 + repetition as usize % 3;

    RunBuilder::new(algorithm.clone(), benchmark.clone())
        .repetition(repetition)
        .scalar(MetricName::OptimalValue, base + 0.25 * repetition as f64)
        .double_series(
            MetricName::OptimalPoint,
            vec![0.0; benchmark.function.dimension() as usize],
        )
        .scalar(MetricName::NumberOfIteration, iterations)
        .scalar(MetricName::NumberOfEvaluation, 2.0 * iterations)
        .scalar(MetricName::ExecutionTime, 0.01 * (repetition + 1) as f64)
        .optimum_found(repetition % 2 == 0)
        .int_series(MetricName::MutationCounts, vec![5, 10, 20 + rep])
        .int_series(MetricName::SuccessfulMutationCounts, vec![1, 3, 4 + rep % 3])
        .double_series(
            MetricName::BestObjectiveByIteration,
            (0..curve_len).map(|i| base + 10.0 / (i + 1) as f64).collect(),
        )
        .build()
}

/// Every fixture algorithm against every fixture benchmark.
pub fn grid(repetitions: u32) -> Vec<RunRecord> {
    let mut runs = Vec::new();
    for algorithm in algorithms() {
        for benchmark in benchmarks() {
            for rep in 0..repetitions {
                runs.push(full_run(&algorithm, &benchmark, rep));
            }
        }
    }
    runs
}

/// [`grid`] without random search on Rosenbrock and hill climbing on Sphere.
pub fn sparse_grid(repetitions: u32) -> Vec<RunRecord> {
    grid(repetitions)
        .into_iter()
        .filter(|r| !matches!((r.algorithm_id(), r.benchmark_id()), (2, 2) | (1, 0)))
        .collect()
}

/// One cell (evolution strategy on sphere) with the given optimal values at
/// repetitions 0, 2, 4, ...
pub fn scalar_cell(values: &[f64]) -> Vec<RunRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            RunBuilder::new(evolution_strategy(0), sphere(0))
                .repetition(2 * i as u32)
                .scalar(MetricName::OptimalValue, *v)
                .build()
        })
        .collect()
}

/// One cell whose runs end with the given `(total, successful)` mutation
/// counts.
pub fn mutation_cell(last_counts: &[(i64, i64)]) -> Vec<RunRecord> {
    last_counts
        .iter()
        .enumerate()
        .map(|(i, (total, successful))| {
            RunBuilder::new(evolution_strategy(0), sphere(0))
                .repetition(i as u32)
                .int_series(MetricName::MutationCounts, vec![0, *total])
                .int_series(MetricName::SuccessfulMutationCounts, vec![0, *successful])
                .build()
        })
        .collect()
}

/// A typical column set.
pub fn standard_requests() -> Vec<StatRequest> {
    vec![
        StatRequest::new(MetricName::OptimalValue, Statistic::Mean),
        StatRequest::new(MetricName::OptimalValue, Statistic::StandardDeviation),
        StatRequest::new(MetricName::NumberOfEvaluation, Statistic::Median),
        StatRequest::new(MetricName::ExecutionTime, Statistic::Max),
        StatRequest::new(MetricName::OptimumFound, Statistic::Mean),
        StatRequest::new(MetricName::MutationSuccessRate, Statistic::Min),
    ]
}
