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

//! Optstat CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **report**: aggregate a run file into a text or CSV statistics table
//! - **index**: list the algorithm and benchmark instances of a run file
//! - **validate**: check a run file for conflicting ids and repeated runs
//!
//! Run files are JSON arrays of run records. Report settings come from an
//! optional JSON or YAML config file, overridden by command-line flags.

pub mod cli;
pub mod commands;
pub mod error;
