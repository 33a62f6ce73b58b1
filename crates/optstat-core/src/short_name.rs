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

//! Compaction of identifiers for column headers.

/// Segments shorter than this are kept whole.
pub const SEGMENT_WIDTH: usize = 6;

/// Width kept for the last segment of an identifier.
pub const TAIL_SEGMENT_WIDTH: usize = 7;

/// Compacts an identifier for use in a column header.
///
/// The identifier is split before every uppercase letter and at whitespace
/// (which is dropped). Numeric segments and segments shorter than
/// [`SEGMENT_WIDTH`] are kept; other segments are cut to [`SEGMENT_WIDTH`]
/// characters, the final one to [`TAIL_SEGMENT_WIDTH`].
///
/// # Examples
///
/// ```
/// use optstat_core::short_name;
///
/// assert_eq!(short_name("MaximalNumberOfIteration"), "MaximaNumberOfIterati");
/// assert_eq!(short_name("Mean"), "Mean");
/// ```
pub fn short_name(identifier: &str) -> String {
    let segments = segments(identifier);
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let width = if i == last {
                TAIL_SEGMENT_WIDTH
            } else {
                SEGMENT_WIDTH
            };
            compact(segment, width)
        })
        .collect()
}

fn segments(identifier: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for c in identifier.chars() {
        if c.is_whitespace() || c.is_uppercase() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            if c.is_whitespace() {
                continue;
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn compact(segment: &str, width: usize) -> String {
    let len = segment.chars().count();
    if len < SEGMENT_WIDTH || segment.chars().all(|c| c.is_ascii_digit()) {
        return segment.to_string();
    }
    segment.chars().take(width).collect()
}
