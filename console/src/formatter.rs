//! Display-ready rendering of scan results.

use authentic_types::ScanResult;
use serde::Serialize;

/// Display strings for one result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormattedResult {
    /// `VERIFIED` or `FAILED`.
    pub status: String,
    /// Score with a `%` suffix.
    pub score: String,
    /// Score over 100, as on the trust bar.
    pub trust_index: String,
    /// Digest in space-separated 8-character groups.
    pub digest: String,
    pub flags: Vec<String>,
    pub timestamp: String,
}

/// Maps results to display strings. Total over all valid results.
pub struct ResultFormatter;

impl ResultFormatter {
    pub const DIGEST_GROUP: usize = 8;

    pub fn format(result: &ScanResult) -> FormattedResult {
        FormattedResult {
            status: result.status().as_str().to_ascii_uppercase(),
            score: format!("{}%", result.score()),
            trust_index: format!("{}/100", result.score()),
            digest: Self::group_digest(&result.digest().to_hex()),
            flags: result.flags().iter().map(|f| f.as_str().to_string()).collect(),
            timestamp: result.timestamp().to_string(),
        }
    }

    /// Split hex into groups of [`Self::DIGEST_GROUP`] joined by single spaces.
    pub fn group_digest(hex: &str) -> String {
        let mut out = String::with_capacity(hex.len() + hex.len() / Self::DIGEST_GROUP);
        for (i, c) in hex.chars().enumerate() {
            if i > 0 && i % Self::DIGEST_GROUP == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}
