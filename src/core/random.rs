//! Random sampling helpers shared by the simulation systems
//!
//! Every draw goes through a caller-supplied `Rng` so a run seeded with the
//! same value replays exactly.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one element uniformly, or `None` for an empty slice
pub fn random_item<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Roll `true` with the given probability
///
/// Probabilities at or below zero never succeed, probabilities at or above
/// one always do. A uniform value is drawn either way.
pub fn chance<R: Rng + ?Sized>(probability: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() < probability
}

/// Uniform float in `[0, max)`
pub fn fraction_of<R: Rng + ?Sized>(max: f64, rng: &mut R) -> f64 {
    rng.gen::<f64>() * max
}

/// Roll 3d6 for an attribute score (3..=18, peaking around 10-11)
pub fn roll_attribute<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let total: u32 = (0..3).map(|_| rng.gen_range(1..=6u32)).sum();
    f64::from(total)
}

/// Uniform delta in `[-spread, spread)`
pub fn variation<R: Rng + ?Sized>(spread: f64, rng: &mut R) -> f64 {
    rng.gen::<f64>() * spread * 2.0 - spread
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_attribute_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let roll = roll_attribute(&mut rng);
            assert!((3.0..=18.0).contains(&roll), "roll {} out of range", roll);
            assert_eq!(roll.fract(), 0.0);
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(!chance(0.0, &mut rng));
            assert!(!chance(-0.5, &mut rng));
            assert!(chance(1.0, &mut rng));
        }
    }

    #[test]
    fn test_random_item_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert!(random_item(&empty, &mut rng).is_none());
        assert_eq!(random_item(&[5], &mut rng), Some(&5));
    }

    #[test]
    fn test_variation_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let delta = variation(2.0, &mut rng);
            assert!((-2.0..2.0).contains(&delta));
        }
    }
}
