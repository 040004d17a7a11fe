//! Tour fitness evaluation.
//!
//! The canonical comparable throughout the crate is the **total cyclic
//! distance** of a tour — lower is better. It drives sorting, tie-breaks,
//! elitism, and the termination test. The reciprocal score returned by
//! [`fitness`] exists solely as the roulette-wheel weighting function.

use crate::matrix::DistanceMatrix;
use crate::tour::Tour;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Total distance of the closed tour: every consecutive edge plus the
/// closing edge back from the last location to the first.
///
/// Upfront config validation guarantees at least 2 locations and in-range
/// indices, so evaluation itself cannot fail.
pub fn tour_distance(tour: &Tour, matrix: &DistanceMatrix) -> f64 {
    let cities = tour.cities();
    debug_assert!(cities.len() >= 2, "a tour needs at least 2 locations");

    let mut total = 0.0;
    for pair in cities.windows(2) {
        total += matrix.get(pair[0], pair[1]);
    }
    total + matrix.get(cities[cities.len() - 1], cities[0])
}

/// Reciprocal fitness score: `1 / total distance`, higher is better.
///
/// A degenerate zero-distance tour scores `+∞` rather than dividing by
/// zero; it is trivially the best tour possible.
pub fn fitness(tour: &Tour, matrix: &DistanceMatrix) -> f64 {
    let d = tour_distance(tour, matrix);
    if d > 0.0 {
        1.0 / d
    } else {
        f64::INFINITY
    }
}

/// Finds the fittest member: `(index, total distance)` of the tour with
/// the lowest distance. Ties keep the first-seen (leftmost) member.
///
/// # Panics
///
/// Panics if the population is empty.
pub fn fittest(population: &[Tour], matrix: &DistanceMatrix) -> (usize, f64) {
    assert!(!population.is_empty(), "population must not be empty");

    let mut best_idx = 0;
    let mut best_d = tour_distance(&population[0], matrix);
    for (i, tour) in population.iter().enumerate().skip(1) {
        let d = tour_distance(tour, matrix);
        if d < best_d {
            best_d = d;
            best_idx = i;
        }
    }
    (best_idx, best_d)
}

/// Mean total distance across the population.
///
/// # Panics
///
/// Panics if the population is empty.
pub fn average_distance(population: &[Tour], matrix: &DistanceMatrix) -> f64 {
    assert!(!population.is_empty(), "population must not be empty");

    let total: f64 = population.iter().map(|t| tour_distance(t, matrix)).sum();
    total / population.len() as f64
}

/// Total distance of every member, in population order.
#[cfg(not(feature = "parallel"))]
pub fn population_distances(population: &[Tour], matrix: &DistanceMatrix) -> Vec<f64> {
    population.iter().map(|t| tour_distance(t, matrix)).collect()
}

/// Total distance of every member, in population order.
///
/// Evaluated in parallel; the result ordering matches the sequential
/// version exactly, so fixed-seed runs stay deterministic.
#[cfg(feature = "parallel")]
pub fn population_distances(population: &[Tour], matrix: &DistanceMatrix) -> Vec<f64> {
    population
        .par_iter()
        .map(|t| tour_distance(t, matrix))
        .collect()
}
