use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws in `[0, 1)`.
///
/// The simulators take this instead of reaching for a global generator so
/// tests can feed them fixed draws.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Browser-side source, seeded from `crypto.getRandomValues`.
pub struct EntropySource(StdRng);

impl EntropySource {
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// `floor(draw * len)`, kept in bounds for draws at the top of the range.
pub fn index(rng: &mut impl RandomSource, len: usize) -> usize {
    let i = (rng.next_f64() * len as f64) as usize;
    i.min(len.saturating_sub(1))
}

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T>(rng: &mut impl RandomSource, items: &'a [T]) -> &'a T {
    &items[index(rng, items.len())]
}

/// Uniform value in `[low, high)`.
pub fn between(rng: &mut impl RandomSource, low: f64, high: f64) -> f64 {
    low + rng.next_f64() * (high - low)
}
