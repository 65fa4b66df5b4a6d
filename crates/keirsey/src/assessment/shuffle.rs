//! Presentation order for questions.
//!
//! Ordering is decided upstream of scoring; answers stay keyed by question id
//! so any permutation scores identically.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fisher-Yates shuffle driven by a caller-supplied random source.
pub fn shuffle_with<R>(ids: &[u16], rng: &mut R) -> Vec<u16>
where
    R: Rng + ?Sized,
{
    let mut order = ids.to_vec();
    order.shuffle(rng);
    order
}

/// Reproducible shuffle: the same seed always yields the same order.
pub fn shuffle_with_seed(ids: &[u16], seed: u64) -> Vec<u16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffle_with(ids, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<u16> {
        (1..=100).collect()
    }

    #[test]
    fn same_seed_reproduces_order() {
        let first = shuffle_with_seed(&ids(), 42);
        let second = shuffle_with_seed(&ids(), 42);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_produce_different_orders() {
        assert_ne!(shuffle_with_seed(&ids(), 1), shuffle_with_seed(&ids(), 2));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut order = shuffle_with_seed(&ids(), 7);
        assert_eq!(order.len(), 100);
        assert_ne!(order, ids());
        order.sort_unstable();
        assert_eq!(order, ids());
    }

    #[test]
    fn accepts_external_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let order = shuffle_with(&[5, 6, 7], &mut rng);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![5, 6, 7]);
    }

    #[test]
    fn empty_and_single_inputs_are_stable() {
        assert!(shuffle_with_seed(&[], 3).is_empty());
        assert_eq!(shuffle_with_seed(&[12], 3), vec![12]);
    }
}
