//! Evolutionary loop execution.
//!
//! [`EvolveRunner`] orchestrates the complete process: initialization →
//! (selection → crossover → mutation) per generation → termination check →
//! best-tour extraction.

use crate::config::EvolveConfig;
use crate::error::ConfigError;
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::Tour;
use crate::{eval, mutation, population};

/// Result of an evolutionary run.
///
/// Contains the best tour of the final population along with statistics
/// about the run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveResult {
    /// The fittest tour of the final population.
    pub best: Tour,

    /// Total cyclic distance of `best`.
    pub best_distance: f64,

    /// Number of generations actually executed.
    pub generations: usize,

    /// Whether the run stopped early because the fittest distance reached
    /// the configured target.
    pub converged: bool,

    /// Fittest distance after initialization and after each generation.
    pub distance_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_evo::{DistanceMatrix, EvolveConfig, EvolveRunner};
///
/// let matrix = DistanceMatrix::from_points(&[
///     (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0),
/// ]);
/// let config = EvolveConfig::new(4)
///     .with_population_size(10)
///     .with_max_generations(50)
///     .with_seed(42);
///
/// let result = EvolveRunner::run(&matrix, &config).unwrap();
/// assert!((result.best_distance - 4.0).abs() < 1e-10);
/// ```
pub struct EvolveRunner;

impl EvolveRunner {
    /// Runs the evolutionary search.
    ///
    /// Validates the configuration against the matrix first; once
    /// validation passes, the run itself cannot fail.
    pub fn run(matrix: &DistanceMatrix, config: &EvolveConfig) -> Result<EvolveResult, ConfigError> {
        config.validate(matrix)?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population =
            population::initialize(config.population_size, config.num_locations, &mut rng);

        let mut distance_history = Vec::with_capacity(config.max_generations + 1);
        let (_, initial_best) = eval::fittest(&population, matrix);
        distance_history.push(initial_best);

        let mut converged = false;
        let mut generations = config.max_generations;

        for gen in 0..config.max_generations {
            let selected =
                config
                    .selection
                    .select(&population, matrix, config.population_size, &mut rng);
            let mut next =
                config
                    .crossover
                    .cross(&selected, matrix, config.num_locations, &mut rng);
            mutation::mutate(&mut next, config.mutation_denominator, &mut rng);
            population = next;

            let (_, best_distance) = eval::fittest(&population, matrix);
            distance_history.push(best_distance);

            if let Some(target) = config.target_distance {
                if best_distance <= target {
                    converged = true;
                    generations = gen + 1;
                    break;
                }
            }
        }

        let (best_idx, best_distance) = eval::fittest(&population, matrix);
        Ok(EvolveResult {
            best: population[best_idx].clone(),
            best_distance,
            generations,
            converged,
            distance_history,
        })
    }
}
