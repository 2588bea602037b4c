//! Scan input.

use serde::{Deserialize, Serialize};

/// Raw text submitted for a scan. Opaque: never parsed or validated beyond
/// the non-empty check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest(String);

impl ScanRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the input has no non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ScanRequest {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ScanRequest {
    fn from(s: String) -> Self {
        Self(s)
    }
}
