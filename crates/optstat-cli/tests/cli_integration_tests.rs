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

//! CLI integration tests

use assert_cmd::Command;
use optstat_test::{fixtures, runs_to_json};
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn optstat_cmd() -> Command {
    Command::cargo_bin("optstat").expect("Failed to find optstat binary")
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

fn grid_file(repetitions: u32) -> NamedTempFile {
    create_temp_file(&runs_to_json(&fixtures::grid(repetitions)), ".json")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    optstat_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("batch statistics for stochastic optimization runs"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_no_subcommand_fails() {
    optstat_cmd().assert().failure();
}

// ===== Report Command Tests =====

#[test]
fn test_report_text() {
    let runs = grid_file(3);

    optstat_cmd()
        .args(["report", runs.path().to_str().unwrap()])
        .args(["--stat", "OptimalValue:Mean", "--stat", "ExecutionTime:sd"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Function/Algo"))
        .stdout(predicate::str::contains("OptimaValue/Mean"))
        .stdout(predicate::str::contains("ExecutTime/StandaDeviati"))
        .stdout(predicate::str::contains("Sphere(d=2)/RandomSearch"));
}

#[test]
fn test_report_csv_to_file() {
    let runs = grid_file(2);
    let output = NamedTempFile::new().unwrap();

    optstat_cmd()
        .args(["report", runs.path().to_str().unwrap()])
        .args(["-s", "OptimalValue:Min", "-f", "csv", "--no-description"])
        .args(["-o", output.path().to_str().unwrap()])
        .assert()
        .success();

    let csv = fs::read_to_string(output.path()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Function/Algo,OptimaValue/Min");
    assert_eq!(lines.len(), 1 + 9);
    assert!(lines[1..].iter().all(|l| l.starts_with(',')));
}

#[test]
fn test_report_with_yaml_config_and_override() {
    let runs = grid_file(2);
    let config = create_temp_file(
        "requests:\n  - OptimalValue:Mean\ngroup_mode: by-benchmark-function\nexcluded_algorithms:\n  - RandomSearch\n",
        ".yaml",
    );

    optstat_cmd()
        .args(["report", runs.path().to_str().unwrap()])
        .args(["-c", config.path().to_str().unwrap()])
        .args(["--order", "descending", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RandomSearch").not())
        .stdout(predicate::str::contains("Rastrigin(d=10)/HillClimbing(step=0.1)"));
}

#[test]
fn test_report_parallel_matches_sequential() {
    let runs = grid_file(4);
    let path = runs.path().to_str().unwrap();

    let run = |parallel: bool| {
        let mut cmd = optstat_cmd();
        cmd.args(["report", path])
            .args(["-s", "OptimalValue:Median", "-s", "BestObjectiveByIteration:Mean"]);
        if parallel {
            cmd.arg("--parallel");
        }
        cmd.assert().success().get_output().stdout.clone()
    };

    assert_eq!(run(false), run(true));
}

#[test]
fn test_report_without_stats_fails() {
    let runs = grid_file(1);

    optstat_cmd()
        .args(["report", runs.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requests"));
}

#[test]
fn test_report_bad_stat_fails() {
    let runs = grid_file(1);

    optstat_cmd()
        .args(["report", runs.path().to_str().unwrap(), "--stat", "Fitness:Mean"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fitness"));
}

#[test]
fn test_report_cell_failure_names_cell() {
    let runs = create_temp_file(&runs_to_json(&fixtures::mutation_cell(&[(0, 0)])), ".json");

    optstat_cmd()
        .args(["report", runs.path().to_str().unwrap(), "-s", "MutationSuccessRate:Mean"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("algorithm 0 on benchmark 0"))
        .stderr(predicate::str::contains("total mutation count is zero"));
}

#[test]
fn test_report_file_too_large() {
    let runs = grid_file(1);

    optstat_cmd()
        .env("OPTSTAT_MAX_FILE_SIZE", "10")
        .args(["report", runs.path().to_str().unwrap(), "-s", "OptimalValue:Mean"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// ===== Index Command Tests =====

#[test]
fn test_index_lists_instances() {
    let runs = grid_file(1);

    optstat_cmd()
        .args(["index", runs.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithms (3):"))
        .stdout(predicate::str::contains("EvolutionStrategy(mu=1, lambda=1, sigma=0.5)"))
        .stdout(predicate::str::contains("Benchmarks (3):"))
        .stdout(predicate::str::contains("Rosenbrock(d=5)"));
}

#[test]
fn test_index_exclude() {
    let runs = grid_file(1);

    optstat_cmd()
        .args(["index", runs.path().to_str().unwrap(), "-x", "RandomSearch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithms (2):"));
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_file() {
    let runs = grid_file(4);

    optstat_cmd()
        .args(["validate", runs.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Runs: 36"));
}

#[test]
fn test_validate_kind_mismatch() {
    let content = r#"[{
        "algorithm": { "id": 0, "type": "RandomSearch" },
        "benchmark": { "id": 0, "type": "Sphere", "dimension": 2 },
        "repetition": 0,
        "metrics": [ { "metric": "ExecutionTime", "value": { "Flag": true } } ]
    }]"#;
    let file = create_temp_file(content, ".json");

    optstat_cmd()
        .args(["validate", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("expects a scalar value"));
}

#[test]
fn test_validate_duplicate_repetition() {
    let mut runs = fixtures::grid(1);
    runs.push(runs[0].clone());
    let file = create_temp_file(&runs_to_json(&runs), ".json");

    optstat_cmd()
        .args(["validate", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("appears more than once"));
}

#[test]
fn test_validate_missing_file() {
    optstat_cmd()
        .args(["validate", "/nonexistent/runs.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/runs.json"));
}
