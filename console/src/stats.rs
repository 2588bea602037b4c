//! Session counters.

use authentic_types::{Outcome, ScanStats};

/// Accumulates verified / flagged / pending counts for one session.
///
/// Owned by the session, never global.
#[derive(Clone, Debug, Default)]
pub struct StatsAccumulator {
    stats: ScanStats,
}

impl StatsAccumulator {
    pub fn new(initial: ScanStats) -> Self {
        Self { stats: initial }
    }

    /// Count a completed scan. `pending` floors at zero.
    pub fn record(&mut self, outcome: Outcome) -> ScanStats {
        match outcome {
            Outcome::Verified => self.stats.verified = self.stats.verified.saturating_add(1),
            Outcome::Failed => self.stats.flagged = self.stats.flagged.saturating_add(1),
        }
        self.stats.pending = self.stats.pending.saturating_sub(1);
        self.stats
    }

    pub fn snapshot(&self) -> ScanStats {
        self.stats
    }
}
