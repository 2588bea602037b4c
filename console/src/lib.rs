//! Core of the AuthenticAI verification console.
//!
//! A scan runs a fixed, ordered sequence of status lines on a jittered timer
//! and then produces a randomized verdict:
//! 1. **Orchestrator**: the `Idle → Scanning → Verified | Failed → Idle`
//!    state machine, its log buffer and its event queue.
//! 2. **Session**: the async driver that runs the timeline as a cancellable
//!    tokio task and publishes events to subscribers.
//!
//! The verdict itself is a placeholder. [`Verifier`] is the seam where a
//! real signature check would plug in; [`RandomVerifier`] draws the outcome,
//! score and digest from an [`authentic_types::Entropy`] source.

pub mod catalog;
pub mod config;
pub mod entropy;
pub mod formatter;
pub mod orchestrator;
pub mod session;
pub mod shutdown;
pub mod stats;
pub mod timeline;
pub mod verifier;

pub use config::ConsoleConfig;
pub use entropy::StdEntropy;
pub use formatter::{FormattedResult, ResultFormatter};
pub use orchestrator::{ConsoleEvent, ConsoleSnapshot, ScanOrchestrator, ScanTicket};
pub use session::ConsoleSession;
pub use shutdown::{ShutdownController, ShutdownSignal};
pub use stats::StatsAccumulator;
pub use timeline::{ScanTimings, SCAN_LOG_LINES};
pub use verifier::{RandomVerifier, Verdict, Verifier};
