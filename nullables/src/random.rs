//! Nullable random — deterministic entropy.

use authentic_types::Entropy;

/// A deterministic [`Entropy`] for testing.
///
/// `unit` returns the configured draws in order, cycling. `between` returns
/// `low + offset`, clamped to `high`. `fill` writes a constant byte.
pub struct NullRandom {
    units: Vec<f64>,
    index: usize,
    offset: u32,
    byte: u8,
}

impl NullRandom {
    /// Create with a sequence of `[0, 1)` draws returned in order.
    pub fn new(units: Vec<f64>) -> Self {
        let units = if units.is_empty() { vec![0.0] } else { units };
        Self {
            units,
            index: 0,
            offset: 0,
            byte: 0,
        }
    }

    /// Create with a single draw that will be returned for every call.
    pub fn constant(unit: f64) -> Self {
        Self::new(vec![unit])
    }

    /// Every verdict draw lands on the verified side.
    pub fn always_verified() -> Self {
        Self::constant(0.99)
    }

    /// Every verdict draw lands on the failed side.
    pub fn always_failed() -> Self {
        Self::constant(0.0)
    }

    /// Offset added to `low` by [`Entropy::between`].
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Byte written by [`Entropy::fill`].
    pub fn with_byte(mut self, byte: u8) -> Self {
        self.byte = byte;
        self
    }

    /// Number of `unit` draws taken so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl Entropy for NullRandom {
    fn unit(&mut self) -> f64 {
        let value = self.units[self.index % self.units.len()];
        self.index += 1;
        value
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        low.saturating_add(self.offset).min(high)
    }

    fn fill(&mut self, dest: &mut [u8]) {
        dest.fill(self.byte);
    }

    fn name(&self) -> &str {
        "null-random"
    }
}
