//! The scripted scan timeline: fixed status lines and their delays.

use authentic_types::Entropy;
use std::time::Duration;

/// Status lines appended during a scan, in order.
pub const SCAN_LOG_LINES: [&str; 10] = [
    "Initializing cryptographic verifier v3.1.4...",
    "Loading ECDSA-SECP256k1 validation module...",
    "Connecting to distributed trust network...",
    "Establishing secure channel...",
    "Parsing content payload...",
    "Computing SHA-256 hash fingerprint...",
    "Cross-referencing signature database...",
    "Running neural authenticity analysis...",
    "Validating temporal consistency...",
    "Aggregating trust signals...",
];

/// Delays between timeline steps.
///
/// Each log line waits `step_delay + uniform[0, step_jitter)`; after the last
/// line the verdict waits a further `settle_delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanTimings {
    pub step_delay: Duration,
    pub step_jitter: Duration,
    pub settle_delay: Duration,
}

impl ScanTimings {
    pub const DEFAULT_STEP_MS: u64 = 280;
    pub const DEFAULT_JITTER_MS: u64 = 200;
    pub const DEFAULT_SETTLE_MS: u64 = 400;

    pub fn from_millis(step_ms: u64, jitter_ms: u64, settle_ms: u64) -> Self {
        Self {
            step_delay: Duration::from_millis(step_ms),
            step_jitter: Duration::from_millis(jitter_ms),
            settle_delay: Duration::from_millis(settle_ms),
        }
    }

    /// No delays at all.
    pub fn instant() -> Self {
        Self::from_millis(0, 0, 0)
    }

    /// Delay before the next log line.
    pub fn next_step(&self, entropy: &mut dyn Entropy) -> Duration {
        if self.step_jitter.is_zero() {
            return self.step_delay;
        }
        let jitter_ms = self.step_jitter.as_millis() as f64;
        let extra = (entropy.unit() * jitter_ms).floor() as u64;
        self.step_delay + Duration::from_millis(extra)
    }

    /// Upper bound on a full scan's duration.
    pub fn max_total(&self) -> Duration {
        let steps = SCAN_LOG_LINES.len() as u32;
        (self.step_delay + self.step_jitter) * steps + self.settle_delay
    }
}

impl Default for ScanTimings {
    fn default() -> Self {
        Self::from_millis(
            Self::DEFAULT_STEP_MS,
            Self::DEFAULT_JITTER_MS,
            Self::DEFAULT_SETTLE_MS,
        )
    }
}
