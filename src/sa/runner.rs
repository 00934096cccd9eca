//! SA execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use super::neighbor::swap_two;
use crate::tsp::{identity_tour, TspInstance};

/// How often the best cost is sampled into [`SaResult::cost_history`].
const HISTORY_INTERVAL: usize = 100;

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best tour found.
    pub best_tour: Vec<usize>,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Total number of iterations (candidate evaluations).
    pub iterations: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals; non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the annealing search.
pub struct SaRunner;

impl SaRunner {
    /// Runs simulated annealing over `instance` and returns the best tour
    /// discovered.
    ///
    /// Starts from the identity tour, draws candidates from the swap
    /// neighborhood, accepts by the Metropolis criterion, and cools
    /// geometrically each iteration until the budget is exhausted or the
    /// temperature falls below the cutoff.
    ///
    /// Instances with fewer than two cities have no swap move; the
    /// trivial identity tour (cost `0.0`) is returned immediately.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run(instance: &TspInstance, config: &SaConfig) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let n = instance.len();
        if n < 2 {
            return SaResult {
                best_tour: identity_tour(n),
                best_cost: 0.0,
                iterations: 0,
                final_temperature: config.start_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                cost_history: vec![0.0],
            };
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initialize
        let mut current = identity_tour(n);
        let mut current_cost = instance.tour_cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.start_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = vec![best_cost];

        for _ in 0..config.iterations {
            let candidate = swap_two(&current, &mut rng);
            let candidate_cost = instance.tour_cost(&candidate);
            let delta = candidate_cost - current_cost;

            // Metropolis acceptance criterion. For improving moves
            // exp(-delta / T) > 1, so the first branch subsumes them.
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            total_iterations += 1;
            if total_iterations.is_multiple_of(HISTORY_INTERVAL) {
                cost_history.push(best_cost);
            }

            // Cool down; below the cutoff no worsening move has a
            // non-negligible chance of acceptance.
            temperature *= config.alpha;
            if temperature < config.min_temperature {
                break;
            }
        }

        // Final history entry
        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        SaResult {
            best_tour: best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }
}
