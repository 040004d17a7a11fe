//! Crossover strategies.
//!
//! Crossover expands a selected population back toward a target size by
//! recombining adjacent parent pairs. The input members are carried over
//! as the output prefix; offspring are appended with set-based duplicate
//! rejection; the remainder is padded with fresh random permutations,
//! which is what keeps exploration pressure beyond pure recombination.

use std::collections::HashSet;

use rand::Rng;

use crate::matrix::DistanceMatrix;
use crate::population::{self, Population};
use crate::tour::Tour;

/// Strategy for expanding a population through recombination.
///
/// # Examples
///
/// ```
/// use tsp_evo::Crossover;
///
/// assert_eq!(Crossover::SingleChild.expansion(), 2);
/// assert_eq!(Crossover::Twin.expansion(), 3);
/// assert_eq!(Crossover::default(), Crossover::Twin);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// One child per adjacent parent pair, built from both parents' own
    /// shortest-edge pairs with random fill. Expands the population 2×.
    SingleChild,

    /// Two children per adjacent parent pair — the two asymmetric
    /// nearest-edge recombinations. Expands the population 3×.
    #[default]
    Twin,
}

impl Crossover {
    /// Growth factor: the output size is this multiple of the input size.
    pub fn expansion(&self) -> usize {
        match self {
            Crossover::SingleChild => 2,
            Crossover::Twin => 3,
        }
    }

    /// Expands `population` to `expansion() ×` its size.
    ///
    /// The input members come first, in order. Offspring duplicating an
    /// existing member are discarded; random distinct permutations fill
    /// whatever recombination could not.
    pub fn cross<R: Rng>(
        &self,
        population: &[Tour],
        matrix: &DistanceMatrix,
        num_locations: usize,
        rng: &mut R,
    ) -> Population {
        let target = population.len() * self.expansion();
        let mut next: Population = population.to_vec();
        let mut seen: HashSet<Tour> = next.iter().cloned().collect();

        for i in 0..population.len().saturating_sub(1) {
            if next.len() >= target {
                break;
            }
            match self {
                Crossover::Twin => {
                    let first = recombine(&population[i], &population[i + 1], matrix);
                    if seen.insert(first.clone()) {
                        next.push(first);
                    }
                    if next.len() >= target {
                        break;
                    }
                    let second = recombine(&population[i + 1], &population[i], matrix);
                    if seen.insert(second.clone()) {
                        next.push(second);
                    }
                }
                Crossover::SingleChild => {
                    let child = merge_edges(&population[i], &population[i + 1], matrix, rng);
                    if seen.insert(child.clone()) {
                        next.push(child);
                    }
                }
            }
        }

        population::fill_random_distinct(&mut next, &mut seen, target, num_locations, rng);
        next
    }
}

/// Position `i` of the shortest adjacent edge `(tour[i], tour[i+1])`,
/// scanning the open-path edges only. Ties keep the leftmost position.
fn shortest_edge(tour: &Tour, matrix: &DistanceMatrix) -> usize {
    let cities = tour.cities();
    let mut best = 0;
    let mut best_d = matrix.get(cities[0], cities[1]);
    for i in 1..cities.len() - 1 {
        let d = matrix.get(cities[i], cities[i + 1]);
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

/// Nearest-edge recombination: preserve `a`'s shortest edge verbatim at
/// its positions, fill every other position with the next unused city of
/// `b`, scanned left to right.
fn recombine(a: &Tour, b: &Tour, matrix: &DistanceMatrix) -> Tour {
    let ca = a.cities();
    let n = ca.len();

    let pos = shortest_edge(a, matrix);
    let keep = (ca[pos], ca[pos + 1]);

    let mut donor = b
        .cities()
        .iter()
        .copied()
        .filter(|&c| c != keep.0 && c != keep.1);

    let cities = (0..n)
        .map(|i| {
            if i == pos {
                keep.0
            } else if i == pos + 1 {
                keep.1
            } else {
                donor
                    .next()
                    .expect("donor covers every city outside the preserved edge")
            }
        })
        .collect();
    Tour::new(cities)
}

/// Merged-edge recombination: both parents' own shortest-edge pairs are
/// placed at their original positions; the remaining slots are filled with
/// the unused cities in shuffled order.
///
/// When the second parent's placement collides with the first's (occupied
/// slot or already-placed city), the colliding city falls back into the
/// random-fill pool.
fn merge_edges<R: Rng>(a: &Tour, b: &Tour, matrix: &DistanceMatrix, rng: &mut R) -> Tour {
    let n = a.len();
    let ca = a.cities();
    let cb = b.cities();

    let mut slots: Vec<Option<usize>> = vec![None; n];
    let mut used = vec![false; n];

    let pa = shortest_edge(a, matrix);
    slots[pa] = Some(ca[pa]);
    used[ca[pa]] = true;
    slots[pa + 1] = Some(ca[pa + 1]);
    used[ca[pa + 1]] = true;

    let pb = shortest_edge(b, matrix);
    for (slot, city) in [(pb, cb[pb]), (pb + 1, cb[pb + 1])] {
        if slots[slot].is_none() && !used[city] {
            slots[slot] = Some(city);
            used[city] = true;
        }
    }

    let mut pool: Vec<usize> = (0..n).filter(|&c| !used[c]).collect();
    for i in (1..pool.len()).rev() {
        let j = rng.random_range(0..=i);
        pool.swap(i, j);
    }

    let mut fill = pool.into_iter();
    let cities = slots
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| fill.next().expect("pool covers every empty slot"))
        })
        .collect();
    Tour::new(cities)
}
