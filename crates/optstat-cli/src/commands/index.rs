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

//! Index command - list the instances present in a run file

use super::load_runs;
use crate::error::CliError;
use optstat_core::index_runs;
use std::collections::BTreeSet;

/// Print the algorithm and benchmark instances of a run file in first-seen
/// order, which is also the order reports visit them in.
///
/// Algorithms whose description is in `exclude` are left out, as they would
/// be from a report.
pub fn index(file: &str, exclude: &[String]) -> Result<(), CliError> {
    let runs = load_runs(file)?;
    let excluded: BTreeSet<String> = exclude.iter().cloned().collect();
    let index = index_runs(&runs, &excluded);

    println!("Algorithms ({}):", index.algorithms.len());
    for algorithm in &index.algorithms {
        println!("  {:>4}  {}", algorithm.id, algorithm.description());
    }
    println!("Benchmarks ({}):", index.benchmarks.len());
    for benchmark in &index.benchmarks {
        println!("  {:>4}  {}", benchmark.id, benchmark.description());
    }
    Ok(())
}
