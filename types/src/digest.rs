//! The result digest shown as the scan "hash".
//!
//! A digest is 32 uniformly random bytes. Rendered as lowercase hex this
//! gives 64 characters whose nibbles are independently uniform over
//! `0-9a-f`. It is not derived from the scanned content.

use hex::FromHex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ConsoleError;

/// A 32-byte scan digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Length of the hex rendering.
    pub const HEX_LEN: usize = 64;

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Lowercase hex rendering, always [`Self::HEX_LEN`] characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character lowercase hex string.
    pub fn from_hex(s: &str) -> Result<Self, ConsoleError> {
        if s.len() != Self::HEX_LEN {
            return Err(ConsoleError::InvalidDigest(format!(
                "expected {} hex characters, got {}",
                Self::HEX_LEN,
                s.len()
            )));
        }
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(ConsoleError::InvalidDigest("uppercase hex".into()));
        }
        <[u8; 32]>::from_hex(s)
            .map(Self)
            .map_err(|e| ConsoleError::InvalidDigest(e.to_string()))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_64_lowercase_chars() {
        let digest = Digest::new([0xAB; 32]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), Digest::HEX_LEN);
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert!(hex.starts_with("abab"));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            Digest::from_hex("abcd"),
            Err(ConsoleError::InvalidDigest(_))
        ));
    }

    #[test]
    fn from_hex_rejects_uppercase() {
        let upper = "AB".repeat(32);
        assert!(Digest::from_hex(&upper).is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let bad = "zz".repeat(32);
        assert!(Digest::from_hex(&bad).is_err());
    }

    #[test]
    fn serializes_as_hex_string() {
        let digest = Digest::new([0x0f; 32]);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", "0f".repeat(32)));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }

    #[test]
    fn debug_is_abbreviated() {
        let digest = Digest::new([0x12; 32]);
        assert_eq!(format!("{digest:?}"), "Digest(12121212\u{2026})");
    }
}
