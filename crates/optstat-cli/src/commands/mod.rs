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

//! CLI command implementations

mod index;
mod report;
mod validate;

pub use index::index;
pub use report::{report, OutputFormat, ReportOverrides};
pub use validate::validate;

use crate::error::CliError;
use optstat_core::{ReportConfig, RunRecord};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Default maximum input file size (1 GB).
/// Can be overridden via the `OPTSTAT_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("OPTSTAT_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum (see [`DEFAULT_MAX_FILE_SIZE`])
/// are rejected before any memory is allocated for them.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is too large, or
/// the content is not valid UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Loads a JSON array of run records.
///
/// Kind and duplicate-metric checks run during decoding, so every returned
/// record is well formed.
pub fn load_runs(path: &str) -> Result<Vec<RunRecord>, CliError> {
    let content = read_file(path)?;
    let runs: Vec<RunRecord> = serde_json::from_str(&content)?;
    debug!(path, runs = runs.len(), "Loaded run file");
    Ok(runs)
}

/// Loads a report configuration, choosing YAML for `.yaml`/`.yml` files and
/// JSON otherwise.
pub fn load_config(path: &str) -> Result<ReportConfig, CliError> {
    let content = read_file(path)?;
    let is_yaml = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    let config: ReportConfig = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    debug!(path, requests = config.requests.len(), "Loaded report config");
    Ok(config)
}
