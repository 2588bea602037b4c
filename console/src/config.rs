//! Console configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use authentic_types::{ConsoleError, ScanStats};

use crate::timeline::ScanTimings;
use crate::verifier::RandomVerifier;

/// Configuration for a console session.
///
/// Can be loaded from a TOML file via [`ConsoleConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Probability that a scan ends verified, in `[0, 1]`.
    #[serde(default = "default_verified_probability")]
    pub verified_probability: f64,

    /// Base delay before each log line, in milliseconds.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,

    /// Maximum extra random delay per log line, in milliseconds.
    #[serde(default = "default_step_jitter_ms")]
    pub step_jitter_ms: u64,

    /// Delay between the last log line and the verdict, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Fixed seed for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_initial_verified")]
    pub initial_verified: u64,

    #[serde(default = "default_initial_flagged")]
    pub initial_flagged: u64,

    #[serde(default = "default_initial_pending")]
    pub initial_pending: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_verified_probability() -> f64 {
    RandomVerifier::DEFAULT_VERIFIED_PROBABILITY
}

fn default_step_delay_ms() -> u64 {
    ScanTimings::DEFAULT_STEP_MS
}

fn default_step_jitter_ms() -> u64 {
    ScanTimings::DEFAULT_JITTER_MS
}

fn default_settle_delay_ms() -> u64 {
    ScanTimings::DEFAULT_SETTLE_MS
}

fn default_initial_verified() -> u64 {
    ScanStats::SEED_VERIFIED
}

fn default_initial_flagged() -> u64 {
    ScanStats::SEED_FLAGGED
}

fn default_initial_pending() -> u64 {
    ScanStats::SEED_PENDING
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ConsoleConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConsoleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConsoleError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConsoleError> {
        let config: Self = toml::from_str(s).map_err(|e| ConsoleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConsoleError> {
        toml::to_string_pretty(self).map_err(|e| ConsoleError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConsoleError> {
        if !(0.0..=1.0).contains(&self.verified_probability) {
            return Err(ConsoleError::Config(format!(
                "verified_probability must be within [0, 1], got {}",
                self.verified_probability
            )));
        }
        Ok(())
    }

    pub fn timings(&self) -> ScanTimings {
        ScanTimings::from_millis(self.step_delay_ms, self.step_jitter_ms, self.settle_delay_ms)
    }

    pub fn initial_stats(&self) -> ScanStats {
        ScanStats::new(
            self.initial_verified,
            self.initial_flagged,
            self.initial_pending,
        )
    }

    /// Zero every delay.
    pub fn without_delays(mut self) -> Self {
        self.step_delay_ms = 0;
        self.step_jitter_ms = 0;
        self.settle_delay_ms = 0;
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            verified_probability: default_verified_probability(),
            step_delay_ms: default_step_delay_ms(),
            step_jitter_ms: default_step_jitter_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            seed: None,
            initial_verified: default_initial_verified(),
            initial_flagged: default_initial_flagged(),
            initial_pending: default_initial_pending(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
