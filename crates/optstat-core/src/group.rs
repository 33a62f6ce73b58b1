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

//! Grouping and in-group ordering of report rows.

use crate::aggregate::StatResult;
use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which instance family forms the outer loop of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupMode {
    /// One group per algorithm, benchmarks inside.
    #[default]
    ByAlgorithm,
    /// One group per benchmark function, algorithms inside.
    ByBenchmarkFunction,
}

impl GroupMode {
    /// Maps an `(outer, inner)` visit to its `(algorithm_id, benchmark_id)`.
    pub fn pair(&self, outer: u32, inner: u32) -> (u32, u32) {
        match self {
            GroupMode::ByAlgorithm => (outer, inner),
            GroupMode::ByBenchmarkFunction => (inner, outer),
        }
    }
}

impl FromStr for GroupMode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "algorithm" | "by-algorithm" | "algo" => Ok(GroupMode::ByAlgorithm),
            "function" | "by-benchmark-function" | "benchmark" => {
                Ok(GroupMode::ByBenchmarkFunction)
            }
            _ => Err(ReportError::unknown("group mode", s)),
        }
    }
}

/// In-group row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Smallest first value first.
    Ascending,
    /// Largest first value first.
    Descending,
    /// Iteration order.
    #[default]
    None,
}

impl FromStr for SortOrder {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" => Ok(SortOrder::Descending),
            "none" => Ok(SortOrder::None),
            _ => Err(ReportError::unknown("sort order", s)),
        }
    }
}

/// Buffers the rows of one outer group, sorts them on close, and emits them
/// with a `None` separator between consecutive groups.
///
/// # Examples
///
/// ```
/// use optstat_core::{GroupOrderer, SortOrder, StatResult, StatValue};
///
/// let row = |v: f64| StatResult::new(None, vec![StatValue::Scalar(v)]);
///
/// let mut orderer = GroupOrderer::new(SortOrder::Descending);
/// orderer.push(row(1.0));
/// orderer.push(row(2.0));
/// orderer.close_group();
/// orderer.push(row(3.0));
/// orderer.close_group();
///
/// let rows = orderer.finish();
/// assert_eq!(rows, vec![Some(row(2.0)), Some(row(1.0)), None, Some(row(3.0))]);
/// ```
#[derive(Debug, Clone)]
pub struct GroupOrderer {
    order: SortOrder,
    pending: Vec<StatResult>,
    rows: Vec<Option<StatResult>>,
}

impl GroupOrderer {
    /// Creates an orderer.
    pub fn new(order: SortOrder) -> Self {
        Self {
            order,
            pending: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Adds a row to the open group.
    pub fn push(&mut self, row: StatResult) {
        self.pending.push(row);
    }

    /// Closes the open group. A group with no rows leaves no trace.
    pub fn close_group(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        match self.order {
            SortOrder::Ascending => self.pending.sort_by(|a, b| a.cmp_first(b)),
            SortOrder::Descending => self.pending.sort_by(|a, b| b.cmp_first(a)),
            SortOrder::None => {}
        }

        if !self.rows.is_empty() {
            self.rows.push(None);
        }
        self.rows.extend(self.pending.drain(..).map(Some));
    }

    /// Closes any open group and returns the rows with separators.
    pub fn finish(mut self) -> Vec<Option<StatResult>> {
        self.close_group();
        self.rows
    }
}
