//! Random-sampling seam for result generators.
//!
//! Generators never touch a global RNG directly: they draw through a
//! [`Sampler`], so concurrent requests stay independent (each call gets its
//! own source) and tests can substitute a deterministic source.

use rand::Rng;

/// Source of uniform random draws over half-open ranges.
pub trait Sampler {
    /// Returns a value uniformly distributed in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

/// Production sampler backed by the calling thread's RNG.
///
/// `rand::rng()` is thread-local, so per-call construction shares no state
/// across requests.
#[derive(Debug, Default)]
pub struct ThreadSampler {
    rng: rand::rngs::ThreadRng,
}

impl ThreadSampler {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Sampler for ThreadSampler {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.random_range(lo..hi)
    }
}

/// Test sampler replaying a fixed sequence of unit-interval values.
///
/// Each draw consumes the next value `t` in `[0, 1)` and maps it to
/// `lo + t * (hi - lo)`. Cycles when the sequence is exhausted.
#[derive(Debug)]
pub struct FixedSampler {
    values: Vec<f64>,
    next: usize,
}

impl FixedSampler {
    /// # Panics
    ///
    /// Panics if `values` is empty or contains a value outside `[0, 1)`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "FixedSampler needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "FixedSampler values must lie in [0, 1)"
        );
        Self { values, next: 0 }
    }
}

impl Sampler for FixedSampler {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let t = self.values[self.next % self.values.len()];
        self.next += 1;
        lo + t * (hi - lo)
    }
}
