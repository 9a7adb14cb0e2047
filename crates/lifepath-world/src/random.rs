//! The simulation's single source of randomness.
//!
//! Every stochastic step of a run draws from one [`SimRng`] that is
//! threaded explicitly through the world layers, the transition rules, and
//! the family draw. The generator is a `ChaCha8` stream, so a seed yields
//! the same sequence on every platform.
//!
//! Gaussian samples use the Box-Muller transform over two uniform draws.
//! [`SimRng::draws`] counts consumed uniforms, which lets tests assert that
//! a code path consumes a fixed number of draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable generator with a draw counter.
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: ChaCha8Rng,
    seed: u64,
    draws: u64,
}

impl SimRng {
    /// Create a generator from an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            draws: 0,
        }
    }

    /// Create a generator seeded from the thread-local entropy source.
    ///
    /// The chosen seed is retained and available through [`SimRng::seed`],
    /// so an unseeded run can still be replayed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// The seed this generator was created with.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of uniform draws consumed so far.
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Uniform sample in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.draws = self.draws.saturating_add(1);
        self.inner.random::<f64>()
    }

    /// Uniform sample in `[low, high)`.
    pub fn range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.uniform()
    }

    /// Gaussian sample with the given mean and standard deviation.
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        // 1 - u keeps the logarithm's argument in (0, 1].
        let u1 = 1.0 - self.uniform();
        let u2 = self.uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }

    /// Scale `value` by a Gaussian factor centred on 1.
    pub fn noise(&mut self, value: f64, std_dev: f64) -> f64 {
        value * self.gauss(1.0, std_dev)
    }

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.draws = self.draws.saturating_add(1);
        self.inner.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::seeded(7);
        let mut b = SimRng::seeded(7);
        for _ in 0..100 {
            assert!((a.gauss(0.0, 1.0) - b.gauss(0.0, 1.0)).abs() < f64::EPSILON);
        }
        assert_eq!(a.draws(), 200);
        assert_eq!(a.draws(), b.draws());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::seeded(1);
        let mut b = SimRng::seeded(2);
        let same = (0..16).all(|_| (a.uniform() - b.uniform()).abs() < f64::EPSILON);
        assert!(!same);
    }

    #[test]
    fn gauss_has_expected_moments() {
        let mut rng = SimRng::seeded(42);
        let samples: Vec<f64> = (0..20_000).map(|_| rng.gauss(2.0, 0.5)).collect();
        let n = f64::from(20_000_u32);
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        assert!((mean - 2.0).abs() < 0.02, "mean {mean}");
        assert!((var.sqrt() - 0.5).abs() < 0.02, "std {}", var.sqrt());
    }

    #[test]
    fn uniform_stays_in_unit_interval() {
        let mut rng = SimRng::seeded(3);
        for _ in 0..1000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn index_respects_bounds() {
        let mut rng = SimRng::seeded(9);
        for _ in 0..100 {
            assert!(rng.index(3) < 3);
        }
        assert_eq!(rng.index(0), 0);
    }

    #[test]
    fn entropy_seed_is_replayable() {
        let mut original = SimRng::from_entropy();
        let mut replay = SimRng::seeded(original.seed());
        assert!((original.uniform() - replay.uniform()).abs() < f64::EPSILON);
    }
}
