//! Top-level error type shared across crates.

use thiserror::Error;

use crate::state::{ConsoleState, Outcome};

/// Common error type for the verification console.
///
/// A `Failed` verification is an ordinary outcome and never shows up here.
#[derive(Debug, Error, PartialEq)]
pub enum ConsoleError {
    #[error("scan input is empty")]
    EmptyInput,

    #[error("a scan is already in progress")]
    ScanInProgress,

    #[error("console is shutting down")]
    ShuttingDown,

    #[error("scan ticket {ticket} is stale (current scan is {current})")]
    StaleScan { ticket: u64, current: u64 },

    #[error("console is {0}, not scanning")]
    NotScanning(ConsoleState),

    #[error("score {score} is outside the {outcome} range")]
    ScoreOutOfRange { outcome: Outcome, score: u8 },

    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    #[error("invalid scan result: {0}")]
    InvalidResult(String),

    #[error("unknown preset {0}")]
    UnknownPreset(usize),

    #[error("config error: {0}")]
    Config(String),
}
