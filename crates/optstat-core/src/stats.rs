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

//! Summary statistics over per-run samples.

use crate::error::{ReportError, Result};
use crate::metric::MetricName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A summary function applied across a cell's per-run values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    /// Arithmetic mean.
    Mean,
    /// Sample standard deviation (Bessel-corrected).
    StandardDeviation,
    /// Largest sample.
    Max,
    /// Smallest sample.
    Min,
    /// Middle value of the sorted sample.
    Median,
}

impl Statistic {
    /// All statistics, in declaration order.
    pub const ALL: [Statistic; 5] = [
        Statistic::Mean,
        Statistic::StandardDeviation,
        Statistic::Max,
        Statistic::Min,
        Statistic::Median,
    ];

    /// Returns the stable identifier used in files and report headers.
    pub fn identifier(&self) -> &'static str {
        match self {
            Statistic::Mean => "Mean",
            Statistic::StandardDeviation => "StandardDeviation",
            Statistic::Max => "Max",
            Statistic::Min => "Min",
            Statistic::Median => "Median",
        }
    }

    /// Applies the statistic to `samples`.
    ///
    /// Fails with [`ReportError::UndefinedStatistic`] on an empty sample, and
    /// for the standard deviation on a single sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use optstat_core::Statistic;
    ///
    /// let samples = [5.0, 1.0, 3.0];
    /// assert_eq!(Statistic::Median.apply(&samples).unwrap(), 3.0);
    /// assert_eq!(Statistic::Mean.apply(&samples).unwrap(), 3.0);
    /// assert!(Statistic::StandardDeviation.apply(&[1.0]).is_err());
    /// ```
    pub fn apply(&self, samples: &[f64]) -> Result<f64> {
        let n = samples.len();
        if n == 0 || (n == 1 && *self == Statistic::StandardDeviation) {
            return Err(ReportError::UndefinedStatistic {
                statistic: *self,
                samples: n,
            });
        }

        let value = match self {
            Statistic::Mean => mean(samples),
            Statistic::StandardDeviation => {
                let mean = mean(samples);
                let sum_sq: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
                (sum_sq / (n - 1) as f64).sqrt()
            }
            Statistic::Max => samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Statistic::Min => samples.iter().copied().fold(f64::INFINITY, f64::min),
            Statistic::Median => {
                let mut sorted = samples.to_vec();
                sorted.sort_by(f64::total_cmp);
                if n % 2 == 0 {
                    (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
                } else {
                    sorted[n / 2]
                }
            }
        };
        Ok(value)
    }
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Statistic {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "avg" | "average" => return Ok(Statistic::Mean),
            "sd" | "std" | "stddev" => return Ok(Statistic::StandardDeviation),
            _ => {}
        }
        Statistic::ALL
            .into_iter()
            .find(|st| st.identifier().eq_ignore_ascii_case(s))
            .ok_or_else(|| ReportError::unknown("statistic", s))
    }
}

/// One report column: a statistic over a metric.
///
/// The textual form is `Metric:Statistic`.
///
/// # Examples
///
/// ```
/// use optstat_core::{MetricName, StatRequest, Statistic};
///
/// let request: StatRequest = "OptimalValue:sd".parse().unwrap();
/// assert_eq!(request.metric, MetricName::OptimalValue);
/// assert_eq!(request.statistic, Statistic::StandardDeviation);
/// assert_eq!(request.to_string(), "StandardDeviation of OptimalValue");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatRequest {
    /// The metric to reduce.
    pub metric: MetricName,
    /// How to reduce it.
    pub statistic: Statistic,
}

impl StatRequest {
    /// Creates a request.
    pub fn new(metric: MetricName, statistic: Statistic) -> Self {
        Self { metric, statistic }
    }
}

impl fmt::Display for StatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.statistic, self.metric)
    }
}

impl FromStr for StatRequest {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let (metric, statistic) = s
            .split_once(':')
            .ok_or_else(|| ReportError::unknown("statistic request", s))?;
        Ok(Self::new(metric.parse()?, statistic.parse()?))
    }
}

impl TryFrom<String> for StatRequest {
    type Error = ReportError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<StatRequest> for String {
    fn from(request: StatRequest) -> Self {
        format!("{}:{}", request.metric, request.statistic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

    #[test]
    fn test_statistics_over_four_samples() {
        assert_eq!(Statistic::Mean.apply(&SAMPLES).unwrap(), 2.5);
        assert_eq!(Statistic::Min.apply(&SAMPLES).unwrap(), 1.0);
        assert_eq!(Statistic::Max.apply(&SAMPLES).unwrap(), 4.0);
        assert_eq!(Statistic::Median.apply(&SAMPLES).unwrap(), 2.5);

        let expected = ((2.25 + 0.25 + 0.25 + 2.25) / 3.0_f64).sqrt();
        let sd = Statistic::StandardDeviation.apply(&SAMPLES).unwrap();
        assert!((sd - expected).abs() < 1e-12);
        assert!((sd - 1.2910).abs() < 1e-4);
    }

    #[test]
    fn test_median_parity() {
        assert_eq!(Statistic::Median.apply(&[5.0, 1.0, 3.0]).unwrap(), 3.0);
        assert_eq!(Statistic::Median.apply(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(Statistic::Mean.apply(&[7.0]).unwrap(), 7.0);
        assert_eq!(Statistic::Median.apply(&[7.0]).unwrap(), 7.0);
        assert_eq!(
            Statistic::StandardDeviation.apply(&[7.0]).unwrap_err(),
            ReportError::UndefinedStatistic {
                statistic: Statistic::StandardDeviation,
                samples: 1,
            }
        );
    }

    #[test]
    fn test_empty_sample_is_undefined() {
        for statistic in Statistic::ALL {
            assert!(matches!(
                statistic.apply(&[]),
                Err(ReportError::UndefinedStatistic { samples: 0, .. })
            ));
        }
    }

    #[test]
    fn test_statistic_aliases() {
        assert_eq!("avg".parse::<Statistic>().unwrap(), Statistic::Mean);
        assert_eq!("STD".parse::<Statistic>().unwrap(), Statistic::StandardDeviation);
        assert_eq!("median".parse::<Statistic>().unwrap(), Statistic::Median);
        assert!("mode".parse::<Statistic>().is_err());
    }

    #[test]
    fn test_request_parse_rejects_missing_separator() {
        assert!(matches!(
            "OptimalValue".parse::<StatRequest>(),
            Err(ReportError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn test_request_string_form() {
        let request = StatRequest::new(MetricName::ExecutionTime, Statistic::Max);
        assert_eq!(String::from(request), "ExecutionTime:Max");
    }
}
