use rand::Rng;

/// Uniform integer in `min..=max`. `None` unless `min < max`.
pub fn random_between<R: Rng>(min: i64, max: i64, rng: &mut R) -> Option<i64> {
    if min < max {
        Some(rng.random_range(min..=max))
    } else {
        None
    }
}
