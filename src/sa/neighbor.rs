//! Swap neighborhood.

use rand::Rng;

/// Returns a fresh tour equal to `tour` with the city indices at two
/// distinct positions exchanged, chosen uniformly over all pairs of
/// distinct positions.
///
/// The input is never mutated; the caller's current tour stays valid for
/// comparison against the candidate. Pairwise exchange is the sole move
/// operator of this search, a deliberately simple connected neighborhood
/// rather than a richer one such as segment reversal.
///
/// # Panics
///
/// Panics if `tour.len() < 2`; there is no pair of distinct positions to
/// swap.
pub fn swap_two<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let n = tour.len();
    assert!(n >= 2, "swap neighborhood requires at least two positions, got {n}");

    let i = rng.random_range(0..n);
    // Draw j from the n-1 positions other than i.
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }

    let mut candidate = tour.to_vec();
    candidate.swap(i, j);
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_swap_two_differs_in_two_positions() {
        let tour = vec![0, 1, 2, 3, 4];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let candidate = swap_two(&tour, &mut rng);
            let moved: Vec<usize> = (0..tour.len()).filter(|&k| candidate[k] != tour[k]).collect();
            assert_eq!(moved.len(), 2, "expected exactly two positions to change");
            assert_eq!(candidate[moved[0]], tour[moved[1]]);
            assert_eq!(candidate[moved[1]], tour[moved[0]]);
        }
    }

    #[test]
    fn test_swap_two_leaves_input_untouched() {
        let tour = vec![3, 1, 0, 2];
        let original = tour.clone();
        let mut rng = StdRng::seed_from_u64(9);
        let _ = swap_two(&tour, &mut rng);
        assert_eq!(tour, original);
    }

    #[test]
    fn test_swap_two_minimal_tour() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(swap_two(&[0, 1], &mut rng), vec![1, 0]);
    }

    #[test]
    #[should_panic(expected = "at least two positions")]
    fn test_swap_two_rejects_single_city() {
        let mut rng = StdRng::seed_from_u64(0);
        let _ = swap_two(&[0], &mut rng);
    }

    proptest! {
        #[test]
        fn prop_swap_two_is_permutation(n in 2usize..20, seed in any::<u64>()) {
            let tour: Vec<usize> = (0..n).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut candidate = swap_two(&tour, &mut rng);
            candidate.sort_unstable();
            prop_assert_eq!(candidate, tour);
        }
    }
}
