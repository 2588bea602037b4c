//! Nullable infrastructure for deterministic testing.
//!
//! The console's external dependencies (wall clock and randomness) sit
//! behind the [`authentic_types::Clock`] and [`authentic_types::Entropy`]
//! traits. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod random;

pub use clock::NullClock;
pub use random::NullRandom;
