//! The record produced by a completed scan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::digest::Digest;
use crate::error::ConsoleError;
use crate::flag::Flag;
use crate::state::Outcome;
use crate::time::iso8601;

/// Result of one completed scan.
///
/// Fields are private; a `ScanResult` is immutable once built and the
/// constructor enforces the score range and flag set of its outcome.
/// Deserialization goes through the same constructor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScanResult")]
pub struct ScanResult {
    status: Outcome,
    score: u8,
    #[serde(rename = "hash")]
    digest: Digest,
    timestamp: String,
    flags: Vec<Flag>,
}

impl ScanResult {
    /// Build a result, attaching the fixed flag set for `status`.
    ///
    /// Fails if `score` is outside the range for `status`.
    pub fn new(
        status: Outcome,
        score: u8,
        digest: Digest,
        at: DateTime<Utc>,
    ) -> Result<Self, ConsoleError> {
        if !status.score_range().contains(&score) {
            return Err(ConsoleError::ScoreOutOfRange {
                outcome: status,
                score,
            });
        }
        Ok(Self {
            status,
            score,
            digest,
            timestamp: iso8601(at),
            flags: status.flags().to_vec(),
        })
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn is_verified(&self) -> bool {
        self.status == Outcome::Verified
    }
}

/// Wire form of [`ScanResult`], checked before it becomes one.
#[derive(Deserialize)]
struct RawScanResult {
    status: Outcome,
    score: u8,
    hash: Digest,
    timestamp: String,
    flags: Vec<Flag>,
}

impl TryFrom<RawScanResult> for ScanResult {
    type Error = ConsoleError;

    fn try_from(raw: RawScanResult) -> Result<Self, Self::Error> {
        let at = DateTime::parse_from_rfc3339(&raw.timestamp)
            .map_err(|e| {
                ConsoleError::InvalidResult(format!("timestamp {:?}: {e}", raw.timestamp))
            })?
            .with_timezone(&Utc);
        let result = Self::new(raw.status, raw.score, raw.hash, at)?;
        if raw.flags != result.flags {
            return Err(ConsoleError::InvalidResult(format!(
                "flags do not match the {} flag set",
                raw.status
            )));
        }
        Ok(result)
    }
}
