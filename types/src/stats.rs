//! Session counters shown in the console header.

use serde::{Deserialize, Serialize};

/// Running verified / flagged / pending counters for one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub verified: u64,
    pub flagged: u64,
    pub pending: u64,
}

impl ScanStats {
    pub const SEED_VERIFIED: u64 = 2847;
    pub const SEED_FLAGGED: u64 = 193;
    pub const SEED_PENDING: u64 = 12;

    pub fn new(verified: u64, flagged: u64, pending: u64) -> Self {
        Self {
            verified,
            flagged,
            pending,
        }
    }

    /// Total completed scans represented by the counters.
    pub fn total(&self) -> u64 {
        self.verified.saturating_add(self.flagged)
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new(Self::SEED_VERIFIED, Self::SEED_FLAGGED, Self::SEED_PENDING)
    }
}
