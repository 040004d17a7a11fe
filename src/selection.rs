//! Selection strategies.
//!
//! Selection reduces a population to a target size, biased toward tours
//! with lower total distance. The input population is never mutated.

use rand::Rng;

use crate::eval;
use crate::matrix::DistanceMatrix;
use crate::population::Population;
use crate::tour::Tour;

/// Consecutive rejected roulette draws tolerated before the wheel is
/// abandoned and the remainder is filled from the unselected pool.
const MAX_CONSECUTIVE_MISSES: usize = 100;

/// Strategy for reducing a population to a target size.
///
/// # Examples
///
/// ```
/// use tsp_evo::Selection;
///
/// let deterministic = Selection::Truncation;
/// let probabilistic = Selection::Roulette;
/// assert_eq!(Selection::default(), Selection::Truncation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Keep the `target_size` tours with the lowest total distance.
    ///
    /// Deterministic given the population; ties keep the original
    /// population order (stable sort).
    #[default]
    Truncation,

    /// Fitness-proportionate selection.
    ///
    /// The single fittest tour is always selected first (elitism). The
    /// rest are drawn from a wheel whose slice widths are proportional to
    /// reciprocal fitness, skipping already-selected members.
    Roulette,
}

impl Selection {
    /// Selects `target_size` members of `population`.
    ///
    /// If `target_size` is at least the population size, every member is
    /// selected — still in the strategy's order, so the fittest leads.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(
        &self,
        population: &[Tour],
        matrix: &DistanceMatrix,
        target_size: usize,
        rng: &mut R,
    ) -> Population {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        let target_size = target_size.min(population.len());
        if target_size == 0 {
            return Vec::new();
        }
        match self {
            Selection::Truncation => truncation(population, matrix, target_size),
            Selection::Roulette => roulette(population, matrix, target_size, rng),
        }
    }
}

fn truncation(population: &[Tour], matrix: &DistanceMatrix, target_size: usize) -> Population {
    let distances = eval::population_distances(population, matrix);

    let mut order: Vec<usize> = (0..population.len()).collect();
    // Stable: equal distances keep their input order.
    order.sort_by(|&a, &b| {
        distances[a]
            .partial_cmp(&distances[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    order
        .into_iter()
        .take(target_size)
        .map(|i| population[i].clone())
        .collect()
}

fn roulette<R: Rng>(
    population: &[Tour],
    matrix: &DistanceMatrix,
    target_size: usize,
    rng: &mut R,
) -> Population {
    let n = population.len();
    let distances = eval::population_distances(population, matrix);

    // Reciprocal fitness, floored so a zero-distance tour keeps the wheel
    // finite.
    let weights: Vec<f64> = distances
        .iter()
        .map(|&d| 1.0 / d.max(f64::EPSILON))
        .collect();
    let total: f64 = weights.iter().sum();

    let mut chosen = vec![false; n];
    let mut selected = Vec::with_capacity(target_size);

    // Elitism: the fittest member is always selected, first.
    let (best_idx, _) = eval::fittest(population, matrix);
    chosen[best_idx] = true;
    selected.push(population[best_idx].clone());

    let mut misses = 0;
    while selected.len() < target_size {
        if misses >= MAX_CONSECUTIVE_MISSES {
            // The wheel keeps landing on already-selected members; fill
            // the remainder from the unselected pool in index order.
            for (i, flag) in chosen.iter_mut().enumerate() {
                if selected.len() >= target_size {
                    break;
                }
                if !*flag {
                    *flag = true;
                    selected.push(population[i].clone());
                }
            }
            break;
        }

        let draw = rng.random_range(0.0..1.0);
        let mut cumulative = 0.0;
        let mut pick = n - 1;
        for (i, &w) in weights.iter().enumerate() {
            cumulative += w / total;
            if cumulative > draw {
                pick = i;
                break;
            }
        }

        if chosen[pick] {
            misses += 1;
        } else {
            chosen[pick] = true;
            selected.push(population[pick].clone());
            misses = 0;
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::initialize;
    use crate::random::create_rng;
    use std::collections::HashSet;

    fn square_matrix() -> DistanceMatrix {
        DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_truncation_sorted_ascending() {
        let matrix = DistanceMatrix::from_points(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 3.0),
            (0.0, 3.0),
            (2.0, 5.0),
            (7.0, 1.0),
        ]);
        let mut rng = create_rng(42);
        let population = initialize(30, 6, &mut rng);

        let selected = Selection::Truncation.select(&population, &matrix, 10, &mut rng);
        assert_eq!(selected.len(), 10);

        let distances: Vec<f64> = selected
            .iter()
            .map(|t| eval::tour_distance(t, &matrix))
            .collect();
        for pair in distances.windows(2) {
            assert!(pair[0] <= pair[1], "not sorted: {distances:?}");
        }
        assert!(distances[0] <= eval::average_distance(&population, &matrix));
    }

    #[test]
    fn test_truncation_stable_on_ties() {
        let matrix = square_matrix();
        // A rotation has the same cyclic distance, so the first two tours
        // tie; the stable sort must keep the rotation in front.
        let rotation = Tour::new(vec![1, 2, 3, 0]);
        let population = vec![
            rotation.clone(),
            Tour::new(vec![0, 2, 1, 3]),
            Tour::new(vec![0, 1, 2, 3]),
        ];
        let mut rng = create_rng(42);

        let selected = Selection::Truncation.select(&population, &matrix, 2, &mut rng);
        assert_eq!(selected[0], rotation);
        assert_eq!(selected[1], Tour::new(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_roulette_includes_fittest_first() {
        let matrix = DistanceMatrix::from_points(&[
            (0.0, 0.0),
            (1.0, 2.0),
            (5.0, 1.0),
            (3.0, 4.0),
            (6.0, 6.0),
        ]);
        let mut rng = create_rng(42);
        let population = initialize(20, 5, &mut rng);
        let (best_idx, _) = eval::fittest(&population, &matrix);

        let selected = Selection::Roulette.select(&population, &matrix, 8, &mut rng);
        assert_eq!(selected.len(), 8);
        assert_eq!(selected[0], population[best_idx]);
    }

    #[test]
    fn test_roulette_selects_distinct_members() {
        let matrix = square_matrix();
        let mut rng = create_rng(7);
        let population = initialize(12, 4, &mut rng);

        let selected = Selection::Roulette.select(&population, &matrix, 6, &mut rng);
        let distinct: HashSet<&Tour> = selected.iter().collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn test_roulette_fallback_on_dominant_member() {
        // The cycle 0-1-2-3 has total distance zero, so its wheel slice
        // dwarfs everything else and the retry cap must kick in.
        let mut matrix = DistanceMatrix::new(4);
        for (a, b) in [(0, 2), (2, 0), (1, 3), (3, 1)] {
            matrix.set(a, b, 1.0);
        }
        let population = vec![
            Tour::new(vec![0, 1, 2, 3]),
            Tour::new(vec![0, 2, 1, 3]),
            Tour::new(vec![0, 1, 3, 2]),
            Tour::new(vec![1, 0, 2, 3]),
        ];
        let mut rng = create_rng(42);

        let selected = Selection::Roulette.select(&population, &matrix, 3, &mut rng);
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0], population[0]);
        // Remainder filled from the unselected pool in index order.
        assert_eq!(selected[1], population[1]);
        assert_eq!(selected[2], population[2]);
    }

    #[test]
    fn test_target_at_least_population_selects_all_fittest_first() {
        let matrix = square_matrix();
        let mut rng = create_rng(42);
        let population = initialize(5, 4, &mut rng);
        let (best_idx, _) = eval::fittest(&population, &matrix);

        for strategy in [Selection::Truncation, Selection::Roulette] {
            for target in [5, 9] {
                let selected = strategy.select(&population, &matrix, target, &mut rng);
                assert_eq!(selected.len(), population.len());
                let input: HashSet<&Tour> = population.iter().collect();
                let output: HashSet<&Tour> = selected.iter().collect();
                assert_eq!(input, output);
                assert_eq!(selected[0], population[best_idx]);
            }
        }
    }
}
