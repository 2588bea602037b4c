//! Console state machine states and scan outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::flag::{Flag, FAILED_FLAGS, VERIFIED_FLAGS};

/// The four states of the verification console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleState {
    /// Waiting for input.
    #[default]
    Idle,
    /// The scripted log sequence is running.
    Scanning,
    /// Last scan ended verified.
    Verified,
    /// Last scan ended failed.
    Failed,
}

impl ConsoleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Scanning => "scanning",
            Self::Verified => "verified",
            Self::Failed => "failed",
        }
    }

    /// Whether the state holds a finished result.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Verified | Self::Failed)
    }
}

impl fmt::Display for ConsoleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Outcome> for ConsoleState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Verified => Self::Verified,
            Outcome::Failed => Self::Failed,
        }
    }
}

/// The binary result of a completed scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Verified,
    Failed,
}

impl Outcome {
    pub const VERIFIED_SCORES: RangeInclusive<u8> = 78..=99;
    pub const FAILED_SCORES: RangeInclusive<u8> = 12..=49;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Failed => "failed",
        }
    }

    /// Inclusive score range a result with this outcome must fall in.
    pub fn score_range(&self) -> RangeInclusive<u8> {
        match self {
            Self::Verified => Self::VERIFIED_SCORES,
            Self::Failed => Self::FAILED_SCORES,
        }
    }

    /// The fixed flag set attached to results with this outcome.
    pub fn flags(&self) -> &'static [Flag] {
        match self {
            Self::Verified => &VERIFIED_FLAGS,
            Self::Failed => &FAILED_FLAGS,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_the_initial_state() {
        assert_eq!(ConsoleState::default(), ConsoleState::Idle);
        assert!(!ConsoleState::Idle.is_terminal());
        assert!(!ConsoleState::Scanning.is_terminal());
    }

    #[test]
    fn outcomes_map_to_terminal_states() {
        assert_eq!(ConsoleState::from(Outcome::Verified), ConsoleState::Verified);
        assert_eq!(ConsoleState::from(Outcome::Failed), ConsoleState::Failed);
        assert!(ConsoleState::Verified.is_terminal());
        assert!(ConsoleState::Failed.is_terminal());
    }

    #[test]
    fn score_ranges_do_not_overlap() {
        let verified = Outcome::Verified.score_range();
        let failed = Outcome::Failed.score_range();
        assert!(failed.end() < verified.start());
        assert_eq!((*verified.start(), *verified.end()), (78, 99));
        assert_eq!((*failed.start(), *failed.end()), (12, 49));
    }

    #[test]
    fn states_serialize_lowercase() {
        let json = serde_json::to_string(&ConsoleState::Scanning).unwrap();
        assert_eq!(json, "\"scanning\"");
        let json = serde_json::to_string(&Outcome::Failed).unwrap();
        assert_eq!(json, "\"failed\"");
    }
}
