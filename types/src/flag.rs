//! Categorical tags attached to scan results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed tag attached to a result, selected by outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    EcdsaValid,
    NeuralPass,
    TemporalOk,
    SourceTrusted,
    SignatureMismatch,
    OriginUnknown,
    AnomalyDetected,
}

pub const VERIFIED_FLAGS: [Flag; 4] = [
    Flag::EcdsaValid,
    Flag::NeuralPass,
    Flag::TemporalOk,
    Flag::SourceTrusted,
];

pub const FAILED_FLAGS: [Flag; 3] = [
    Flag::SignatureMismatch,
    Flag::OriginUnknown,
    Flag::AnomalyDetected,
];

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EcdsaValid => "ECDSA_VALID",
            Self::NeuralPass => "NEURAL_PASS",
            Self::TemporalOk => "TEMPORAL_OK",
            Self::SourceTrusted => "SOURCE_TRUSTED",
            Self::SignatureMismatch => "SIGNATURE_MISMATCH",
            Self::OriginUnknown => "ORIGIN_UNKNOWN",
            Self::AnomalyDetected => "ANOMALY_DETECTED",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
