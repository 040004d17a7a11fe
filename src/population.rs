//! Population initialization and random padding.
//!
//! Both initialization and crossover padding draw random permutations and
//! reject duplicates against a set keyed on the visit order, so a
//! population never gains two identical tours from these paths.

use std::collections::HashSet;

use rand::Rng;

use crate::tour::Tour;

/// Consecutive duplicate draws tolerated while padding before
/// distinctness is given up as best-effort.
const MAX_CONSECUTIVE_DUPLICATES: usize = 1000;

/// An ordered collection of candidate tours.
///
/// The size varies across pipeline stages: selection shrinks it to the
/// configured target, crossover expands it back by a fixed multiple.
pub type Population = Vec<Tour>;

/// Builds the initial population: `size` distinct random permutations of
/// `[0, num_locations)`.
///
/// Feasibility (`size` not exceeding the number of distinct permutations)
/// is validated by [`EvolveConfig::validate`](crate::EvolveConfig::validate)
/// before this runs.
pub fn initialize<R: Rng>(size: usize, num_locations: usize, rng: &mut R) -> Population {
    let mut population = Vec::with_capacity(size);
    let mut seen: HashSet<Tour> = HashSet::with_capacity(size);
    fill_random_distinct(&mut population, &mut seen, size, num_locations, rng);
    population
}

/// Pads `population` with fresh random permutations until it reaches
/// `target`, rejecting any tour already in `seen`.
///
/// Distinctness is best-effort: when the permutation space is effectively
/// exhausted (a long run of consecutive duplicate draws), duplicates are
/// accepted so that padding always terminates.
pub(crate) fn fill_random_distinct<R: Rng>(
    population: &mut Population,
    seen: &mut HashSet<Tour>,
    target: usize,
    num_locations: usize,
    rng: &mut R,
) {
    let mut misses = 0;
    while population.len() < target {
        let tour = Tour::random(num_locations, rng);
        if seen.insert(tour.clone()) {
            population.push(tour);
            misses = 0;
        } else if misses < MAX_CONSECUTIVE_DUPLICATES {
            misses += 1;
        } else {
            population.push(tour);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_initialize_size_and_validity() {
        let mut rng = create_rng(42);
        let population = initialize(20, 8, &mut rng);
        assert_eq!(population.len(), 20);
        for tour in &population {
            assert!(tour.is_permutation(8));
        }
    }

    #[test]
    fn test_initialize_all_distinct() {
        let mut rng = create_rng(42);
        let population = initialize(30, 6, &mut rng);
        let distinct: HashSet<&Tour> = population.iter().collect();
        assert_eq!(distinct.len(), 30);
    }

    #[test]
    fn test_initialize_exhaustive_small_space() {
        // 3! = 6 permutations: requesting all of them must terminate.
        let mut rng = create_rng(42);
        let population = initialize(6, 3, &mut rng);
        let distinct: HashSet<&Tour> = population.iter().collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn test_fill_terminates_when_space_exhausted() {
        // Only two permutations exist over 2 locations; a target of 5 can
        // only be met by accepting duplicates.
        let mut rng = create_rng(42);
        let mut population = Vec::new();
        let mut seen = HashSet::new();
        fill_random_distinct(&mut population, &mut seen, 5, 2, &mut rng);
        assert_eq!(population.len(), 5);
        for tour in &population {
            assert!(tour.is_permutation(2));
        }
    }

    #[test]
    fn test_fill_random_distinct_respects_existing() {
        let mut rng = create_rng(42);
        let existing = Tour::new(vec![0, 1, 2, 3]);
        let mut population = vec![existing.clone()];
        let mut seen: HashSet<Tour> = population.iter().cloned().collect();

        fill_random_distinct(&mut population, &mut seen, 10, 4, &mut rng);

        assert_eq!(population.len(), 10);
        let distinct: HashSet<&Tour> = population.iter().collect();
        assert_eq!(distinct.len(), 10);
        assert_eq!(population[0], existing);
    }
}
