use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The single reseedable generator threaded through a simulation run.
pub type SimRng = ChaCha8Rng;

pub fn seeded(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub struct IntegerUtils;

impl IntegerUtils {
    /// Inclusive on both ends; returns `min` when the range is empty.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }

        rng.gen_range(min..=max)
    }
}

pub struct FloatUtils;

impl FloatUtils {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }

        rng.gen_range(min..max)
    }

    /// Uniform draw in `[0, 1)`.
    pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        rng.gen_range(0.0..1.0)
    }

    pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
        rng.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seeded(7);
        let mut b = seeded(7);

        for _ in 0..20 {
            assert_eq!(IntegerUtils::random(&mut a, 0, 100), IntegerUtils::random(&mut b, 0, 100));
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut rng = seeded(1);
        assert_eq!(IntegerUtils::random(&mut rng, 5, 5), 5);
        assert_eq!(IntegerUtils::random(&mut rng, 5, 2), 5);
        assert_eq!(FloatUtils::random(&mut rng, 3.0, 3.0), 3.0);
    }
}
