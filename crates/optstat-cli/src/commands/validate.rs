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

//! Validate command - integrity checks on a run file

use super::load_runs;
use crate::error::CliError;
use colored::Colorize;
use optstat_core::{index_runs, AlgorithmInstance, BenchmarkInstance, RunRecord};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Validate a run file.
///
/// Decoding already rejects metric values of the wrong kind and duplicated
/// metrics. On top of that, every id must name one instance definition and
/// every `(algorithm, benchmark, repetition)` triple must occur once.
///
/// # Output
///
/// Prints a summary to stdout: run, algorithm and benchmark counts on
/// success, one line per problem otherwise.
pub fn validate(file: &str) -> Result<(), CliError> {
    let runs = match load_runs(file) {
        Ok(runs) => runs,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(e);
        }
    };

    let problems = find_problems(&runs);
    if !problems.is_empty() {
        println!("{} {}", "✗".red().bold(), file);
        for problem in &problems {
            println!("  {}", problem);
        }
        return Err(CliError::invalid_input(format!(
            "{} integrity problem(s) in '{}'",
            problems.len(),
            file
        )));
    }

    let index = index_runs(&runs, &BTreeSet::new());
    println!("{} {}", "✓".green().bold(), file);
    println!("  Runs: {}", runs.len());
    println!("  Algorithms: {}", index.algorithms.len());
    println!("  Benchmarks: {}", index.benchmarks.len());
    Ok(())
}

fn find_problems(runs: &[RunRecord]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut algorithms: HashMap<u32, &AlgorithmInstance> = HashMap::new();
    let mut benchmarks: HashMap<u32, &BenchmarkInstance> = HashMap::new();
    let mut triples = HashSet::new();

    for run in runs {
        let algorithm = algorithms.entry(run.algorithm_id()).or_insert(run.algorithm());
        if *algorithm != run.algorithm() {
            problems.push(format!(
                "algorithm id {} names both '{}' and '{}'",
                run.algorithm_id(),
                algorithm.description(),
                run.algorithm().description()
            ));
        }

        let benchmark = benchmarks.entry(run.benchmark_id()).or_insert(run.benchmark());
        if *benchmark != run.benchmark() {
            problems.push(format!(
                "benchmark id {} names both '{}' and '{}'",
                run.benchmark_id(),
                benchmark.description(),
                run.benchmark().description()
            ));
        }

        if !triples.insert((run.algorithm_id(), run.benchmark_id(), run.repetition())) {
            problems.push(format!(
                "repetition {} of algorithm {} on benchmark {} appears more than once",
                run.repetition(),
                run.algorithm_id(),
                run.benchmark_id()
            ));
        }
    }
    problems
}
