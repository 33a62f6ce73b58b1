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

//! Discovery of the algorithm and benchmark instances present in a run set.

use crate::instance::{AlgorithmInstance, BenchmarkInstance};
use crate::run::RunRecord;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Distinct instances in first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct RunIndex<'a> {
    /// Algorithm instances, one per distinct id.
    pub algorithms: Vec<&'a AlgorithmInstance>,
    /// Benchmark instances, one per distinct id.
    pub benchmarks: Vec<&'a BenchmarkInstance>,
}

impl RunIndex<'_> {
    /// Algorithm ids in first-encounter order.
    pub fn algorithm_ids(&self) -> Vec<u32> {
        self.algorithms.iter().map(|a| a.id).collect()
    }

    /// Benchmark ids in first-encounter order.
    pub fn benchmark_ids(&self) -> Vec<u32> {
        self.benchmarks.iter().map(|b| b.id).collect()
    }

    /// Returns true if no instance was found.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty() && self.benchmarks.is_empty()
    }
}

/// Scans `runs` once and records each algorithm and benchmark id the first
/// time it is seen.
///
/// Runs whose algorithm description is in `excluded` do not contribute their
/// algorithm, but still contribute their benchmark.
pub fn index_runs<'a>(runs: &'a [RunRecord], excluded: &BTreeSet<String>) -> RunIndex<'a> {
    let mut index = RunIndex::default();
    let mut seen_algorithms = HashSet::new();
    let mut seen_benchmarks = HashSet::new();

    for run in runs {
        let algorithm = run.algorithm();
        if !excluded.contains(&algorithm.description()) && seen_algorithms.insert(algorithm.id) {
            index.algorithms.push(algorithm);
        }

        let benchmark = run.benchmark();
        if seen_benchmarks.insert(benchmark.id) {
            index.benchmarks.push(benchmark);
        }
    }

    debug!(
        runs = runs.len(),
        algorithms = index.algorithms.len(),
        benchmarks = index.benchmarks.len(),
        "Indexed run records"
    );
    index
}
