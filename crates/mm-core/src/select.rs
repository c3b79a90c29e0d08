//! Question selection and presentation order.

use rand::Rng;

use crate::question::Question;

/// Shuffle `items` in place with a from-the-end Fisher-Yates pass.
///
/// Each of the n! orderings is equally likely given a uniform `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle a category's questions and keep the first `count` of them.
///
/// `count` larger than the pool yields the whole pool.
pub fn presentation_order<R: Rng + ?Sized>(
    pool: &[&'static Question],
    count: usize,
    rng: &mut R,
) -> Vec<&'static Question> {
    let mut order = pool.to_vec();
    shuffle(&mut order, rng);
    order.truncate(count);
    order
}
