//! Simulated Annealing (SA) search for the Euclidean TSP.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod neighbor;
mod runner;

pub use config::SaConfig;
pub use neighbor::swap_two;
pub use runner::{SaResult, SaRunner};
