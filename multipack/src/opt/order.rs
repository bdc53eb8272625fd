use rand::Rng;
use rand::seq::SliceRandom;

/// Randomizes an insertion order while keeping most of its structure.
///
/// Only a prefix of `base` is shuffled, its length drawn uniformly from `[0, n)`.
/// The remainder keeps its original sequence. Prefixes shorter than 2 leave the order unchanged.
pub fn partially_shuffled(base: &[usize], rng: &mut impl Rng) -> Vec<usize> {
    let mut order = base.to_vec();
    if order.is_empty() {
        return order;
    }
    let prefix_len = rng.random_range(0..order.len());
    order[..prefix_len].shuffle(rng);
    order
}
