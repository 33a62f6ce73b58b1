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

//! Report configuration.

use crate::aggregate::SeriesPadding;
use crate::error::{ReportError, Result};
use crate::group::{GroupMode, SortOrder};
use crate::stats::StatRequest;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything that shapes one report.
///
/// Deserializes from JSON or YAML with every field optional except
/// `requests`:
///
/// ```yaml
/// requests: ["OptimalValue:Mean", "OptimalValue:sd", "ExecutionTime:Median"]
/// include_description: true
/// excluded_algorithms: ["RandomSearch"]
/// group_mode: by-benchmark-function
/// sort_order: ascending
/// ```
///
/// # Example
///
/// ```
/// use optstat_core::{GroupMode, MetricName, ReportConfig, SortOrder, StatRequest, Statistic};
///
/// let mean = StatRequest::new(MetricName::OptimalValue, Statistic::Mean);
/// let config = ReportConfig::new(vec![mean])
///     .with_group_mode(GroupMode::ByBenchmarkFunction)
///     .with_sort_order(SortOrder::Ascending)
///     .with_description(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report columns, in output order.
    pub requests: Vec<StatRequest>,
    /// Label each row with its benchmark and algorithm descriptions.
    pub include_description: bool,
    /// Algorithm descriptions left out of the report.
    pub excluded_algorithms: BTreeSet<String>,
    /// Outer loop of the report.
    pub group_mode: GroupMode,
    /// Row order inside each group.
    pub sort_order: SortOrder,
    /// Treatment of short per-iteration series.
    pub series_padding: SeriesPadding,
    /// Aggregate cells on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
            include_description: true,
            excluded_algorithms: BTreeSet::new(),
            group_mode: GroupMode::default(),
            sort_order: SortOrder::default(),
            series_padding: SeriesPadding::default(),
            parallel: false,
        }
    }
}

impl ReportConfig {
    /// Creates a configuration for the given columns.
    pub fn new(requests: Vec<StatRequest>) -> Self {
        Self {
            requests,
            ..Default::default()
        }
    }

    /// Sets whether rows carry a description.
    pub fn with_description(mut self, include: bool) -> Self {
        self.include_description = include;
        self
    }

    /// Leaves out the algorithm with this description.
    pub fn excluding(mut self, description: impl Into<String>) -> Self {
        self.excluded_algorithms.insert(description.into());
        self
    }

    /// Sets the outer loop.
    pub fn with_group_mode(mut self, mode: GroupMode) -> Self {
        self.group_mode = mode;
        self
    }

    /// Sets the in-group order.
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Sets the per-iteration padding policy.
    pub fn with_series_padding(mut self, padding: SeriesPadding) -> Self {
        self.series_padding = padding;
        self
    }

    /// Enables parallel cell aggregation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the configuration before a report is generated.
    pub fn validate(&self) -> Result<()> {
        if self.requests.is_empty() {
            return Err(ReportError::InvalidConfig {
                parameter: "requests".to_string(),
                reason: "at least one statistic must be requested".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::MetricName;
    use crate::stats::Statistic;

    #[test]
    fn test_empty_requests_rejected() {
        let err = ReportConfig::default().validate().unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfig { .. }));
        assert!(err.to_string().contains("requests"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "requests": ["OptimalValue:Mean", "ExecutionTime:sd"],
            "group_mode": "by-benchmark-function",
            "excluded_algorithms": ["RandomSearch"]
        }"#;
        let config: ReportConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.requests,
            vec![
                StatRequest::new(MetricName::OptimalValue, Statistic::Mean),
                StatRequest::new(MetricName::ExecutionTime, Statistic::StandardDeviation),
            ]
        );
        assert_eq!(config.group_mode, GroupMode::ByBenchmarkFunction);
        assert_eq!(config.sort_order, SortOrder::None);
        assert!(config.include_description);
        assert!(config.excluded_algorithms.contains("RandomSearch"));
    }

    #[test]
    fn test_unknown_request_rejected() {
        let json = r#"{ "requests": ["Fitness:Mean"] }"#;
        assert!(serde_json::from_str::<ReportConfig>(json).is_err());
    }
}
