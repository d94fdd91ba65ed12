//! In-place shuffle logic
//!
//! The reorder control uses a Fisher-Yates walk so every permutation of
//! the store is equally likely.

use rand::Rng;

/// Shuffle a slice in place
///
/// Walks from the back, swapping each position with a uniformly chosen
/// index at or below it. Taking the rng as a parameter keeps the walk
/// deterministic under a seeded generator for tests.
///
/// # Examples
/// ```
/// use galtui::logic::shuffle::fisher_yates;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut items = vec![1, 2, 3, 4];
/// let mut rng = StdRng::seed_from_u64(7);
/// fisher_yates(&mut items, &mut rng);
///
/// let mut sorted = items.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![1, 2, 3, 4]);
/// ```
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
