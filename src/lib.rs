//! Evolutionary travelling-salesman optimization.
//!
//! Approximates the TSP by evolving a population of candidate tours over
//! many generations: each generation the population is reduced by a
//! selection strategy, expanded back by an edge-preserving crossover
//! strategy, and perturbed by swap mutation, converging toward a short
//! closed tour over a fixed set of locations.
//!
//! # Key Types
//!
//! - [`Tour`]: a candidate route — a permutation of location indices
//! - [`DistanceMatrix`]: caller-owned location-to-location distances
//! - [`Selection`]: truncation or fitness-proportionate (roulette)
//! - [`Crossover`]: single-child merged-edge or twin nearest-edge
//! - [`EvolveConfig`]: run parameters (builder pattern, fail-fast validation)
//! - [`EvolveRunner`]: executes the evolutionary loop
//! - [`EvolveResult`]: best tour, its distance, and run statistics
//!
//! # Example
//!
//! ```
//! use tsp_evo::{DistanceMatrix, EvolveConfig, EvolveRunner};
//!
//! let matrix = DistanceMatrix::from_points(&[
//!     (0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 3.0),
//! ]);
//! let config = EvolveConfig::new(5)
//!     .with_population_size(20)
//!     .with_max_generations(100)
//!     .with_seed(42);
//!
//! let result = EvolveRunner::run(&matrix, &config).unwrap();
//! println!("{} ({})", result.best, result.best_distance);
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one seedable source; fixed-seed runs are
//! fully reproducible, including under the `parallel` feature (which only
//! parallelizes order-preserving fitness evaluation).
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Grefenstette et al. (1985), *Genetic Algorithms for the Traveling Salesman Problem*

mod config;
mod crossover;
mod error;
pub mod eval;
mod matrix;
mod mutation;
mod population;
pub mod random;
mod runner;
mod selection;
mod tour;

pub use config::EvolveConfig;
pub use crossover::Crossover;
pub use error::ConfigError;
pub use matrix::DistanceMatrix;
pub use mutation::mutate;
pub use population::{initialize, Population};
pub use runner::{EvolveResult, EvolveRunner};
pub use selection::Selection;
pub use tour::Tour;
