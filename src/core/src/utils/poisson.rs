use rand::Rng;
use std::collections::HashMap;

/// Knuth inverse-transform Poisson sampler.
///
/// `e^(-λ)` is memoized by λ rounded to two decimals; within a stage the same
/// handful of expected-goal values recur for every fixture.
#[derive(Debug, Default)]
pub struct PoissonSampler {
    limits: HashMap<i64, f64>,
}

impl PoissonSampler {
    pub fn new() -> Self {
        PoissonSampler {
            limits: HashMap::new(),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&mut self, lambda: f64, rng: &mut R) -> u32 {
        let limit = self.limit(lambda);

        let mut product = 1.0;
        let mut draws: u32 = 0;

        loop {
            draws += 1;
            product *= rng.gen_range(0.0..1.0);

            if product < limit {
                return draws - 1;
            }
        }
    }

    fn limit(&mut self, lambda: f64) -> f64 {
        let key = (lambda * 100.0).round() as i64;

        *self
            .limits
            .entry(key)
            .or_insert_with(|| (-(key as f64) / 100.0).exp())
    }

    pub fn cached_limits(&self) -> usize {
        self.limits.len()
    }
}
