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

//! Selection of the runs sharing one algorithm/benchmark pair.

use crate::run::RunRecord;

/// All runs of one algorithm instance against one benchmark instance,
/// ordered by repetition.
#[derive(Debug, Clone)]
pub struct Cell<'a> {
    /// Algorithm instance id.
    pub algorithm_id: u32,
    /// Benchmark instance id.
    pub benchmark_id: u32,
    /// Member runs, ascending by repetition.
    pub runs: Vec<&'a RunRecord>,
}

impl Cell<'_> {
    /// Returns true if no run matched the pair.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of repetitions in the cell.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `"<benchmark description>/<algorithm description>"`, or `None`
    /// for an empty cell.
    pub fn description(&self) -> Option<String> {
        self.runs.first().map(|run| {
            format!(
                "{}/{}",
                run.benchmark().description(),
                run.algorithm().description()
            )
        })
    }
}

/// Selects the runs matching both ids, sorted ascending by repetition.
///
/// An empty result is a normal outcome: not every algorithm is run against
/// every benchmark.
pub fn select_cell(runs: &[RunRecord], algorithm_id: u32, benchmark_id: u32) -> Cell<'_> {
    let mut members: Vec<&RunRecord> = runs
        .iter()
        .filter(|r| r.algorithm_id() == algorithm_id && r.benchmark_id() == benchmark_id)
        .collect();
    members.sort_by_key(|r| r.repetition());

    Cell {
        algorithm_id,
        benchmark_id,
        runs: members,
    }
}
