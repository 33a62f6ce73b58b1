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

//! Report renderers.
//!
//! # Modules
//!
//! - `text`: column-aligned table with `|` delimiters
//! - `csv`: comma-separated values

pub mod csv;
pub mod text;

pub use self::csv::{render_csv, render_csv_with_config, CsvConfig};
pub use self::text::{render_text, render_text_with_delimiter};

use crate::aggregate::StatResult;
use crate::short_name::short_name;
use crate::stats::StatRequest;

/// Header of the description column.
pub const DESCRIPTION_HEADER: &str = "Function/Algo";

/// Returns the `<metric>/<statistic>` header for a request.
///
/// # Examples
///
/// ```
/// use optstat_core::format::column_header;
/// use optstat_core::{MetricName, StatRequest, Statistic};
///
/// let request = StatRequest::new(MetricName::OptimalValue, Statistic::Mean);
/// assert_eq!(column_header(&request), "OptimaValue/Mean");
/// ```
pub fn column_header(request: &StatRequest) -> String {
    format!(
        "{}/{}",
        short_name(request.metric.identifier()),
        short_name(request.statistic.identifier())
    )
}

fn header_cells(requests: &[StatRequest]) -> Vec<String> {
    std::iter::once(DESCRIPTION_HEADER.to_string())
        .chain(requests.iter().map(column_header))
        .collect()
}

fn row_cells(row: &StatResult) -> Vec<String> {
    std::iter::once(row.description.clone().unwrap_or_default())
        .chain(row.values.iter().map(ToString::to_string))
        .collect()
}
