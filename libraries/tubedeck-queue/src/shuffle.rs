//! Shuffle for play order
//!
//! Shuffles indices rather than tracks so the original order can always be
//! restored.

use rand::seq::SliceRandom;
use rand::Rng;

/// Build a shuffled play order over `len` tracks
///
/// When `first` is given, that track index stays at the front so shuffling
/// mid-playback does not jump away from the current track.
pub(crate) fn shuffled_order<R: Rng + ?Sized>(
    len: usize,
    first: Option<usize>,
    rng: &mut R,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).filter(|&i| Some(i) != first).collect();
    order.shuffle(rng);

    if let Some(first) = first.filter(|&f| f < len) {
        order.insert(0, first);
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut order = shuffled_order(20, None, &mut rng);
        order.sort_unstable();
        assert_eq!(order, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn keeps_first() {
        let mut rng = StdRng::seed_from_u64(7);
        let order = shuffled_order(10, Some(4), &mut rng);
        assert_eq!(order[0], 4);
        assert_eq!(order.len(), 10);
    }

    #[test]
    fn out_of_range_first_is_ignored() {
        let mut rng = StdRng::seed_from_u64(7);
        let order = shuffled_order(3, Some(9), &mut rng);
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(shuffled_order(0, None, &mut rng).is_empty());
    }
}
