//! Cities, instances, and tour cost evaluation.

/// A city: an immutable point in the Euclidean plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

/// Euclidean distance between two cities.
///
/// Pure; never fails for finite coordinates.
#[inline]
pub fn distance(a: City, b: City) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// The identity tour `[0, 1, ..., n-1]`.
pub fn identity_tour(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// A TSP instance: an ordered, immutable set of cities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspInstance {
    cities: Vec<City>,
}

impl TspInstance {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, i: usize) -> City {
        self.cities[i]
    }

    /// Total cost of a cyclic tour over this instance.
    ///
    /// Sums the Euclidean distance between consecutive cities in tour
    /// order, including the wrap-around edge from the last city back to
    /// the first. An empty tour costs `0.0` (no edges); a single-city
    /// tour costs `0.0` (the self-loop has zero length).
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        debug_assert_eq!(tour.len(), self.cities.len(), "tour/instance length mismatch");
        if tour.is_empty() {
            return 0.0;
        }
        let n = tour.len();
        let mut cost = 0.0;
        for i in 0..n {
            cost += distance(self.cities[tour[i]], self.cities[tour[(i + 1) % n]]);
        }
        cost
    }

    /// Whether `tour` is a valid tour of this instance: a permutation of
    /// `0..n` with no duplicate and no omitted index.
    pub fn is_valid_tour(&self, tour: &[usize]) -> bool {
        let n = self.cities.len();
        if tour.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in tour {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}
