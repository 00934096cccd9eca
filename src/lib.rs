//! Approximate Euclidean TSP solver based on simulated annealing.
//!
//! Given a set of 2D city coordinates, finds a closed tour (a permutation
//! of all cities, returning to the start) of low total Euclidean length:
//!
//! - **`tsp`**: the problem domain: cities, instances, cyclic tour cost,
//!   and the line-oriented instance format.
//! - **`sa`**: the search: swap-neighborhood simulated annealing with
//!   Metropolis acceptance and geometric cooling.
//!
//! # Reproducibility
//!
//! All randomness flows through an injectable, seedable generator: the
//! same seed, parameters, and instance produce the same tour and cost.
//!
//! # Examples
//!
//! ```
//! use tsp_anneal::sa::{SaConfig, SaRunner};
//! use tsp_anneal::tsp::{City, TspInstance};
//!
//! let instance = TspInstance::new(vec![
//!     City { x: 0.0, y: 0.0 },
//!     City { x: 10.0, y: 0.0 },
//!     City { x: 10.0, y: 10.0 },
//!     City { x: 0.0, y: 10.0 },
//! ]);
//!
//! let config = SaConfig::default().with_seed(42);
//! let result = SaRunner::run(&instance, &config);
//! assert!((result.best_cost - 40.0).abs() < 1e-9);
//! ```

pub mod sa;
pub mod tsp;
