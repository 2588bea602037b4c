//! Randomness seam.
//!
//! Everything random in a scan (step jitter, the verdict draw, the score and
//! the digest bytes) goes through [`Entropy`], so tests can swap in a
//! scripted source.

/// A source of uniform random draws.
pub trait Entropy: Send {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `[low, high]`. Implementations may assume `low <= high`.
    fn between(&mut self, low: u32, high: u32) -> u32;

    /// Fill `dest` with uniform random bytes.
    fn fill(&mut self, dest: &mut [u8]);

    fn name(&self) -> &str;
}
