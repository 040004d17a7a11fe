//! Population mutation.
//!
//! Mutation applies probabilistic pairwise swaps within individual tours
//! to maintain genetic diversity. It never changes the population size,
//! and a swap of two positions keeps the permutation invariant intact.

use rand::Rng;

use crate::tour::Tour;

/// First population index eligible for mutation. Both selection
/// strategies place their fittest members at the front of the population,
/// and crossover keeps that prefix, so leaving the leading window
/// untouched lets the best tours survive a generation intact.
const ELITE_GUARD: usize = 5;

/// Upper bound of the per-generation random modulus drawn when the
/// configured denominator is zero.
const MAX_RANDOM_MODULUS: u32 = 5;

/// Mutates the population in place.
///
/// The modulus is `rate_denominator`, or a fresh uniform draw from
/// `[1, 5]` when it is zero. Every member index `i` from the protected
/// leading window onward with `i % modulus == 0` has two uniformly
/// random positions of its tour swapped.
pub fn mutate<R: Rng>(population: &mut [Tour], rate_denominator: u32, rng: &mut R) {
    let modulus = if rate_denominator == 0 {
        rng.random_range(1..=MAX_RANDOM_MODULUS)
    } else {
        rate_denominator
    } as usize;

    for i in ELITE_GUARD..population.len() {
        if i % modulus != 0 {
            continue;
        }
        let len = population[i].len();
        if len < 2 {
            continue;
        }
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        population[i].swap(a, b);
    }
}
