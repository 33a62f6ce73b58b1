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

//! CSV rendering.

use super::{header_cells, row_cells};
use crate::aggregate::StatResult;
use crate::error::{ReportError, Result};
use crate::stats::StatRequest;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

/// Renders rows as CSV with the default configuration.
///
/// Separator rows are omitted. Descriptions containing the delimiter are
/// quoted.
pub fn render_csv(requests: &[StatRequest], rows: &[Option<StatResult>]) -> Result<String> {
    render_csv_with_config(requests, rows, &CsvConfig::default())
}

/// Renders rows as CSV.
pub fn render_csv_with_config(
    requests: &[StatRequest],
    rows: &[Option<StatResult>],
    config: &CsvConfig,
) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(64 * (rows.len() + 1)));

    if config.include_headers {
        wtr.write_record(header_cells(requests))?;
    }
    for row in rows.iter().flatten() {
        wtr.write_record(row_cells(row))?;
    }

    let buffer = wtr
        .into_inner()
        .map_err(|e| ReportError::Csv(format!("Failed to flush CSV writer: {}", e)))?;
    String::from_utf8(buffer).map_err(|e| ReportError::Csv(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::StatValue;
    use crate::metric::MetricName;
    use crate::stats::Statistic;

    fn requests() -> Vec<StatRequest> {
        vec![
            StatRequest::new(MetricName::OptimalValue, Statistic::Mean),
            StatRequest::new(MetricName::OptimalValue, Statistic::StandardDeviation),
        ]
    }

    fn row(label: &str, a: f64, b: f64) -> Option<StatResult> {
        Some(StatResult::new(
            Some(label.to_string()),
            vec![StatValue::Scalar(a), StatValue::Scalar(b)],
        ))
    }

    #[test]
    fn test_header_and_rows() {
        let rows = vec![
            row("Sphere(d=2)/RandomSearch", 0.5, 0.25),
            None,
            row("Ackley(d=2)/RandomSearch", 1.0, 0.0),
        ];
        let csv = render_csv(&requests(), &rows).unwrap();

        assert_eq!(
            csv,
            "Function/Algo,OptimaValue/Mean,OptimaValue/StandaDeviati\n\
             Sphere(d=2)/RandomSearch,0.5,0.25\n\
             Ackley(d=2)/RandomSearch,1,0\n"
        );
    }

    #[test]
    fn test_description_with_commas_is_quoted() {
        let description = "Sphere(d=2)/EvolutionStrategy(mu=1, lambda=1, sigma=0.5)";
        let rows = vec![row(description, 1.0, 2.0)];
        let csv = render_csv(&requests(), &rows).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "\"Sphere(d=2)/EvolutionStrategy(mu=1, lambda=1, sigma=0.5)\",1,2"
        );
    }

    #[test]
    fn test_without_headers() {
        let config = CsvConfig {
            include_headers: false,
            ..Default::default()
        };
        let csv = render_csv_with_config(&requests(), &[row("x", 1.0, 2.0)], &config).unwrap();
        assert_eq!(csv, "x,1,2\n");
    }

    #[test]
    fn test_series_value_is_semicolon_joined() {
        let rows = vec![Some(StatResult::new(
            Some("x".to_string()),
            vec![StatValue::Series(vec![3.0, 2.0, 1.5]), StatValue::Scalar(0.0)],
        ))];
        let csv = render_csv(&requests(), &rows).unwrap();
        assert_eq!(csv.lines().nth(1), Some("x,3;2;1.5,0"));
    }
}
