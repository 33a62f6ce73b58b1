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

//! Batch statistics over repeated stochastic optimization runs.
//!
//! This crate turns a flat collection of per-run result records into
//! comparative statistics per algorithm/benchmark pair, and renders them as
//! an aligned text table or as CSV.
//!
//! # Features
//!
//! - **Typed metrics**: every metric name has one value kind, enforced when a
//!   record is built or deserialized
//! - **Statistics**: mean, sample standard deviation, min, max, median
//! - **Per-iteration series**: best-objective curves aggregated index by index
//! - **Grouping**: by algorithm or by benchmark function, with stable
//!   ascending/descending order inside each group
//! - **Parallel aggregation**: cells computed on the rayon pool with
//!   deterministic output
//!
//! # Pipeline
//!
//! ```text
//! runs ─▶ index_runs ─▶ (outer × inner) ─▶ select_cell ─▶ aggregate_cell
//!                                                              │
//!                       render_text / render_csv ◀─ GroupOrderer
//! ```
//!
//! # Example
//!
//! ```
//! use optstat_core::*;
//!
//! let algorithm = AlgorithmInstance::new(0, Algorithm::RandomSearch);
//! let sphere = BenchmarkInstance::new(0, BenchmarkFunction::Sphere { dimension: 2 });
//!
//! let runs: Vec<RunRecord> = [1.0, 2.0, 3.0, 4.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(rep, v)| {
//!         let value = MetricValue::Scalar(*v);
//!         let value = MetricRecord::new(MetricName::OptimalValue, value).unwrap();
//!         RunRecord::new(algorithm.clone(), sphere.clone(), rep as u32, vec![value]).unwrap()
//!     })
//!     .collect();
//!
//! let config = ReportConfig::new(vec![
//!     StatRequest::new(MetricName::OptimalValue, Statistic::Mean),
//!     StatRequest::new(MetricName::OptimalValue, Statistic::Median),
//! ]);
//!
//! let report = generate_report(&runs, &config).unwrap();
//! assert_eq!(
//!     report.to_csv().unwrap(),
//!     "Function/Algo,OptimaValue/Mean,OptimaValue/Median\nSphere(d=2)/RandomSearch,2.5,2.5\n"
//! );
//! ```

pub mod aggregate;
pub mod cell;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod group;
pub mod index;
pub mod instance;
pub mod metric;
pub mod report;
pub mod run;
pub mod short_name;
pub mod stats;

// Re-export public API
pub use aggregate::{aggregate_cell, SeriesPadding, StatResult, StatValue};
pub use cell::{select_cell, Cell};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use extract::extract_value;
pub use format::{render_csv, render_text};
pub use group::{GroupMode, GroupOrderer, SortOrder};
pub use index::{index_runs, RunIndex};
pub use instance::{
    Algorithm, AlgorithmInstance, BenchmarkFunction, BenchmarkInstance, IdAllocator,
};
pub use metric::{MetricName, MetricRecord, MetricValue, ValueKind};
pub use report::{generate_report, Report};
pub use run::RunRecord;
pub use short_name::short_name;
pub use stats::{StatRequest, Statistic};
