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

//! Algorithm and benchmark-function instances.
//!
//! Both families are closed sets. On the wire each variant is identified by
//! its `"type"` tag, e.g.
//!
//! ```json
//! { "id": 3, "type": "EvolutionStrategy", "mu": 1, "lambda": 1, "sigma": 0.5 }
//! ```

use serde::{Deserialize, Serialize};

/// Known optimization algorithms and their parameter sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Algorithm {
    /// Uniform random sampling of the search space.
    RandomSearch,
    /// Greedy local search with a fixed step.
    HillClimbing {
        /// Neighbourhood step size.
        step_size: f64,
    },
    /// Simulated annealing with geometric cooling.
    SimulatedAnnealing {
        /// Starting temperature.
        initial_temperature: f64,
        /// Multiplicative cooling factor per iteration.
        cooling_rate: f64,
    },
    /// (mu, lambda) evolution strategy.
    EvolutionStrategy {
        /// Parent population size.
        mu: u32,
        /// Offspring count.
        lambda: u32,
        /// Initial mutation strength.
        sigma: f64,
    },
    /// Generational genetic algorithm.
    GeneticAlgorithm {
        /// Population size.
        population: u32,
        /// Crossover probability.
        crossover_rate: f64,
        /// Per-gene mutation probability.
        mutation_rate: f64,
    },
}

impl Algorithm {
    /// Returns the variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::RandomSearch => "RandomSearch",
            Algorithm::HillClimbing { .. } => "HillClimbing",
            Algorithm::SimulatedAnnealing { .. } => "SimulatedAnnealing",
            Algorithm::EvolutionStrategy { .. } => "EvolutionStrategy",
            Algorithm::GeneticAlgorithm { .. } => "GeneticAlgorithm",
        }
    }

    /// Returns the name followed by the parameter set.
    pub fn description(&self) -> String {
        match self {
            Algorithm::RandomSearch => self.name().to_string(),
            Algorithm::HillClimbing { step_size } => {
                format!("{}(step={})", self.name(), step_size)
            }
            Algorithm::SimulatedAnnealing {
                initial_temperature,
                cooling_rate,
            } => format!(
                "{}(t0={}, cooling={})",
                self.name(),
                initial_temperature,
                cooling_rate
            ),
            Algorithm::EvolutionStrategy { mu, lambda, sigma } => format!(
                "{}(mu={}, lambda={}, sigma={})",
                self.name(),
                mu,
                lambda,
                sigma
            ),
            Algorithm::GeneticAlgorithm {
                population,
                crossover_rate,
                mutation_rate,
            } => format!(
                "{}(pop={}, cx={}, mut={})",
                self.name(),
                population,
                crossover_rate,
                mutation_rate
            ),
        }
    }
}

/// Known benchmark objective functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BenchmarkFunction {
    /// Sum of squares.
    Sphere {
        /// Search-space dimension.
        dimension: u32,
    },
    /// Rastrigin's multimodal function.
    Rastrigin {
        /// Search-space dimension.
        dimension: u32,
    },
    /// Rosenbrock's valley.
    Rosenbrock {
        /// Search-space dimension.
        dimension: u32,
    },
    /// Ackley's function.
    Ackley {
        /// Search-space dimension.
        dimension: u32,
    },
    /// Griewank's function.
    Griewank {
        /// Search-space dimension.
        dimension: u32,
    },
    /// Schwefel's function.
    Schwefel {
        /// Search-space dimension.
        dimension: u32,
    },
}

impl BenchmarkFunction {
    /// Returns the variant name.
    pub fn name(&self) -> &'static str {
        match self {
            BenchmarkFunction::Sphere { .. } => "Sphere",
            BenchmarkFunction::Rastrigin { .. } => "Rastrigin",
            BenchmarkFunction::Rosenbrock { .. } => "Rosenbrock",
            BenchmarkFunction::Ackley { .. } => "Ackley",
            BenchmarkFunction::Griewank { .. } => "Griewank",
            BenchmarkFunction::Schwefel { .. } => "Schwefel",
        }
    }

    /// Returns the search-space dimension.
    pub fn dimension(&self) -> u32 {
        match self {
            BenchmarkFunction::Sphere { dimension }
            | BenchmarkFunction::Rastrigin { dimension }
            | BenchmarkFunction::Rosenbrock { dimension }
            | BenchmarkFunction::Ackley { dimension }
            | BenchmarkFunction::Griewank { dimension }
            | BenchmarkFunction::Schwefel { dimension } => *dimension,
        }
    }

    /// Returns the name followed by the dimension.
    pub fn description(&self) -> String {
        format!("{}(d={})", self.name(), self.dimension())
    }
}

/// One configured algorithm, identified by an explicit id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmInstance {
    /// Instance identifier.
    pub id: u32,
    /// Algorithm and parameters.
    #[serde(flatten)]
    pub algorithm: Algorithm,
}

impl AlgorithmInstance {
    /// Creates an instance.
    pub fn new(id: u32, algorithm: Algorithm) -> Self {
        Self { id, algorithm }
    }

    /// Returns the algorithm name.
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Returns the algorithm description.
    pub fn description(&self) -> String {
        self.algorithm.description()
    }
}

/// One configured benchmark function, identified by an explicit id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkInstance {
    /// Instance identifier.
    pub id: u32,
    /// Function and dimension.
    #[serde(flatten)]
    pub function: BenchmarkFunction,
}

impl BenchmarkInstance {
    /// Creates an instance.
    pub fn new(id: u32, function: BenchmarkFunction) -> Self {
        Self { id, function }
    }

    /// Returns the function name.
    pub fn name(&self) -> &'static str {
        self.function.name()
    }

    /// Returns the function description.
    pub fn description(&self) -> String {
        self.function.description()
    }
}

/// Hands out monotonically increasing instance ids.
///
/// # Examples
///
/// ```
/// use optstat_core::IdAllocator;
///
/// let mut ids = IdAllocator::new();
/// assert_eq!(ids.next_id(), 0);
/// assert_eq!(ids.next_id(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Starts allocating at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts allocating at `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Returns the next unused id.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_description() {
        let es = Algorithm::EvolutionStrategy {
            mu: 1,
            lambda: 1,
            sigma: 0.5,
        };
        assert_eq!(es.name(), "EvolutionStrategy");
        assert_eq!(es.description(), "EvolutionStrategy(mu=1, lambda=1, sigma=0.5)");
        assert_eq!(Algorithm::RandomSearch.description(), "RandomSearch");
    }

    #[test]
    fn test_benchmark_description() {
        let f = BenchmarkFunction::Rastrigin { dimension: 10 };
        assert_eq!(f.description(), "Rastrigin(d=10)");
        assert_eq!(f.dimension(), 10);
    }

    #[test]
    fn test_id_allocator_starting_at() {
        let mut ids = IdAllocator::starting_at(10);
        assert_eq!(ids.next_id(), 10);
        assert_eq!(ids.next_id(), 11);
    }
}
