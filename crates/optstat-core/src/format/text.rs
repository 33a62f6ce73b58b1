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

//! Column-aligned text tables.

use super::{header_cells, row_cells};
use crate::aggregate::StatResult;
use crate::stats::StatRequest;

/// Renders rows as a `|`-delimited table.
///
/// Every cell is left-aligned and padded to the widest cell of its column.
/// A `None` row renders as a blank line.
pub fn render_text(requests: &[StatRequest], rows: &[Option<StatResult>]) -> String {
    render_text_with_delimiter(requests, rows, '|')
}

/// Renders rows as a table with a custom column delimiter.
pub fn render_text_with_delimiter(
    requests: &[StatRequest],
    rows: &[Option<StatResult>],
    delimiter: char,
) -> String {
    let header = header_cells(requests);
    let body: Vec<Option<Vec<String>>> = rows.iter().map(|r| r.as_ref().map(row_cells)).collect();

    let mut widths: Vec<usize> = header.iter().map(|c| c.chars().count()).collect();
    for cells in body.iter().flatten() {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths, delimiter);
    for cells in &body {
        match cells {
            Some(cells) => push_line(&mut out, cells, &widths, delimiter),
            None => out.push('\n'),
        }
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize], delimiter: char) {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(&format!("{:<width$}", cell, width = *width));
    }
    out.push('\n');
}
