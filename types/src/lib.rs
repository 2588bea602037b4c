//! Core data model for the AuthenticAI verification console.
//!
//! This crate defines the types shared by every other crate in the workspace:
//! console states, scan outcomes and flags, the result digest, the result
//! record, the session counters, and the two seams (clock and entropy) that
//! tests replace with deterministic doubles.

pub mod digest;
pub mod entropy;
pub mod error;
pub mod flag;
pub mod request;
pub mod result;
pub mod state;
pub mod stats;
pub mod time;

pub use digest::Digest;
pub use entropy::Entropy;
pub use error::ConsoleError;
pub use flag::Flag;
pub use request::ScanRequest;
pub use result::ScanResult;
pub use state::{ConsoleState, Outcome};
pub use stats::ScanStats;
pub use time::{iso8601, Clock, SystemClock};
