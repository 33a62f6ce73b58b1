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

//! Property-based tests for report generation.
//!
//! # Properties Tested
//!
//! 1. **Determinism**: the same runs and config always render identical output,
//!    sequentially or on the rayon pool
//! 2. **Completeness**: one data row per non-empty algorithm/benchmark pair
//! 3. **Ordering**: rows are monotone in their first value inside each group
//! 4. **Bounds**: min <= median <= max and min <= mean <= max
//! 5. **Format agreement**: text and CSV carry the same number of data rows

use optstat_core::{
    generate_report, short_name, Algorithm, AlgorithmInstance, BenchmarkFunction,
    BenchmarkInstance, GroupMode, MetricName, ReportConfig, RunRecord, SortOrder, StatRequest,
    Statistic,
};
use optstat_test::{csv_data_lines, text_data_lines, RunBuilder};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn algorithm(id: u32) -> AlgorithmInstance {
    AlgorithmInstance::new(
        id,
        Algorithm::HillClimbing {
            step_size: id as f64,
        },
    )
}

fn benchmark(id: u32) -> BenchmarkInstance {
    BenchmarkInstance::new(id, BenchmarkFunction::Sphere { dimension: id + 1 })
}

/// Builds one run per sample; repetitions are numbered per sample index, so
/// they are unique inside every cell.
fn runs_from(samples: &[(u32, u32, f64)]) -> Vec<RunRecord> {
    samples
        .iter()
        .enumerate()
        .map(|(rep, &(a, b, value))| {
            RunBuilder::new(algorithm(a), benchmark(b))
                .repetition(rep as u32)
                .scalar(MetricName::OptimalValue, value)
                .scalar(MetricName::ExecutionTime, value.abs())
                .build()
        })
        .collect()
}

fn samples() -> impl Strategy<Value = Vec<(u32, u32, f64)>> {
    prop::collection::vec((0u32..4, 0u32..4, -1000.0f64..1000.0), 0..40)
}

fn group_mode() -> impl Strategy<Value = GroupMode> {
    prop_oneof![Just(GroupMode::ByAlgorithm), Just(GroupMode::ByBenchmarkFunction)]
}

fn sort_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![
        Just(SortOrder::None),
        Just(SortOrder::Ascending),
        Just(SortOrder::Descending)
    ]
}

fn config(mode: GroupMode, order: SortOrder) -> ReportConfig {
    ReportConfig::new(vec![
        StatRequest::new(MetricName::OptimalValue, Statistic::Mean),
        StatRequest::new(MetricName::OptimalValue, Statistic::Max),
        StatRequest::new(MetricName::ExecutionTime, Statistic::Median),
    ])
    .with_group_mode(mode)
    .with_sort_order(order)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: repeated generation yields byte-identical text and CSV.
    #[test]
    fn prop_report_determinism(samples in samples(), mode in group_mode(), order in sort_order()) {
        let runs = runs_from(&samples);
        let config = config(mode, order);

        let first = generate_report(&runs, &config).unwrap();
        let second = generate_report(&runs, &config).unwrap();
        let parallel = generate_report(&runs, &config.clone().with_parallel(true)).unwrap();

        prop_assert_eq!(first.to_text(), second.to_text());
        prop_assert_eq!(first.to_csv().unwrap(), second.to_csv().unwrap());
        prop_assert_eq!(first.to_text(), parallel.to_text());
    }

    /// Property: every non-empty cell produces exactly one row, and excluded
    /// algorithms produce none.
    #[test]
    fn prop_one_row_per_cell(
        samples in samples(),
        mode in group_mode(),
        excluded in prop::option::of(0u32..4),
    ) {
        let runs = runs_from(&samples);
        let mut config = config(mode, SortOrder::None);
        if let Some(id) = excluded {
            config = config.excluding(algorithm(id).description());
        }

        let expected: BTreeSet<(u32, u32)> = samples
            .iter()
            .filter(|(a, _, _)| Some(*a) != excluded)
            .map(|(a, b, _)| (*a, *b))
            .collect();

        let report = generate_report(&runs, &config).unwrap();
        prop_assert_eq!(report.data_row_count(), expected.len());

        let groups = report.rows().split(|r| r.is_none()).count();
        let outer: BTreeSet<u32> = expected
            .iter()
            .map(|(a, b)| if mode == GroupMode::ByAlgorithm { *a } else { *b })
            .collect();
        if !expected.is_empty() {
            prop_assert_eq!(groups, outer.len());
        }
    }

    /// Property: inside each group, first values follow the sort order.
    #[test]
    fn prop_groups_are_sorted(
        samples in samples(),
        mode in group_mode(),
        ascending in any::<bool>(),
    ) {
        let runs = runs_from(&samples);
        let order = if ascending { SortOrder::Ascending } else { SortOrder::Descending };
        let report = generate_report(&runs, &config(mode, order)).unwrap();

        for group in report.rows().split(|r| r.is_none()) {
            let firsts: Vec<f64> = group
                .iter()
                .flatten()
                .filter_map(|r| r.values[0].as_scalar())
                .collect();
            for pair in firsts.windows(2) {
                if ascending {
                    prop_assert!(pair[0] <= pair[1]);
                } else {
                    prop_assert!(pair[0] >= pair[1]);
                }
            }
        }
    }

    /// Property: central statistics lie between the extremes.
    #[test]
    fn prop_statistics_bounded(values in prop::collection::vec(-1e6f64..1e6, 1..50)) {
        let min = Statistic::Min.apply(&values).unwrap();
        let max = Statistic::Max.apply(&values).unwrap();
        let mean = Statistic::Mean.apply(&values).unwrap();
        let median = Statistic::Median.apply(&values).unwrap();

        let slack = 1e-9 * (1.0 + max.abs().max(min.abs()));
        prop_assert!(min <= median && median <= max);
        prop_assert!(min - slack <= mean && mean <= max + slack);

        if values.len() > 1 {
            let sd = Statistic::StandardDeviation.apply(&values).unwrap();
            prop_assert!(sd >= 0.0);
        }
    }

    /// Property: text and CSV agree on the number of data rows.
    #[test]
    fn prop_formats_agree(samples in samples(), mode in group_mode(), order in sort_order()) {
        let runs = runs_from(&samples);
        let report = generate_report(&runs, &config(mode, order)).unwrap();

        prop_assert_eq!(text_data_lines(&report.to_text()), report.data_row_count());
        prop_assert_eq!(csv_data_lines(&report.to_csv().unwrap()), report.data_row_count());
    }

    /// Property: short names never grow and keep the leading segment prefix.
    #[test]
    fn prop_short_name_shrinks(identifier in "[A-Z][a-z]{0,12}([A-Z][a-z]{0,12}){0,4}") {
        let short = short_name(&identifier);
        prop_assert!(short.len() <= identifier.len());
        prop_assert_eq!(short.chars().next(), identifier.chars().next());
    }
}
