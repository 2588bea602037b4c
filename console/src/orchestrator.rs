//! Scan orchestrator — the console state machine.
//!
//! ```text
//!   Idle ──start──▶ Scanning ──complete──▶ Verified | Failed
//!    ▲                 │                        │
//!    └──────reset──────┴────────reset───────────┘
//! ```
//!
//! The orchestrator is synchronous and does no timing of its own. The
//! session drives it step by step and drains the queued [`ConsoleEvent`]s.
//! Every scan is identified by a [`ScanTicket`]; steps carrying a ticket
//! other than the current scan's are rejected, so a timer chain that
//! outlives a reset can never touch the session.

use authentic_types::{ConsoleError, ConsoleState, Outcome, ScanRequest, ScanResult, ScanStats};
use serde::Serialize;

/// Identifies one scan within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ScanTicket(u64);

impl ScanTicket {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Notifications for the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsoleEvent {
    /// The console moved between states.
    StateChanged {
        from: ConsoleState,
        to: ConsoleState,
    },
    /// A status line was appended to the scan log.
    LogAppended { index: usize, line: String },
    /// A scan finished with a result.
    ResultReady(ScanResult),
    /// Session counters changed after a completed scan.
    StatsUpdated(ScanStats),
}

/// Read-only view of the orchestrator.
#[derive(Clone, Debug, Serialize)]
pub struct ConsoleSnapshot {
    pub state: ConsoleState,
    pub input: ScanRequest,
    pub logs: Vec<String>,
    pub result: Option<ScanResult>,
    pub scans_started: u64,
}

#[derive(Default)]
pub struct ScanOrchestrator {
    state: ConsoleState,
    input: ScanRequest,
    logs: Vec<String>,
    result: Option<ScanResult>,
    /// Ticket of the most recently started scan; 0 before the first.
    current: u64,
    pending_events: Vec<ConsoleEvent>,
}

impl ScanOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn input(&self) -> &ScanRequest {
        &self.input
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    /// Ticket of the running scan, if any.
    pub fn active_ticket(&self) -> Option<ScanTicket> {
        (self.state == ConsoleState::Scanning).then_some(ScanTicket(self.current))
    }

    /// Replace the input text. The input is locked while a scan runs.
    pub fn set_input(&mut self, request: ScanRequest) -> Result<(), ConsoleError> {
        if self.state == ConsoleState::Scanning {
            return Err(ConsoleError::ScanInProgress);
        }
        self.input = request;
        Ok(())
    }

    /// Start a scan of `request`.
    ///
    /// Blank input is rejected and leaves the orchestrator untouched. A new
    /// scan may start from `Idle` or from a finished result; the previous
    /// result and log buffer are cleared.
    pub fn start(&mut self, request: ScanRequest) -> Result<ScanTicket, ConsoleError> {
        if self.state == ConsoleState::Scanning {
            return Err(ConsoleError::ScanInProgress);
        }
        if request.is_blank() {
            return Err(ConsoleError::EmptyInput);
        }

        self.input = request;
        self.result = None;
        self.logs.clear();
        self.current += 1;
        self.transition(ConsoleState::Scanning);

        tracing::info!(
            ticket = self.current,
            input_len = self.input.len(),
            "scan started"
        );
        Ok(ScanTicket(self.current))
    }

    /// Append the next status line of the running scan. Returns its index.
    pub fn append_log(
        &mut self,
        ticket: ScanTicket,
        line: impl Into<String>,
    ) -> Result<usize, ConsoleError> {
        self.check_ticket(ticket)?;
        let line = line.into();
        let index = self.logs.len();
        tracing::debug!(ticket = ticket.0, index, line = %line, "scan step");
        self.logs.push(line.clone());
        self.pending_events
            .push(ConsoleEvent::LogAppended { index, line });
        Ok(index)
    }

    /// Finish the running scan with `result`.
    pub fn complete(
        &mut self,
        ticket: ScanTicket,
        result: ScanResult,
    ) -> Result<Outcome, ConsoleError> {
        self.check_ticket(ticket)?;
        let outcome = result.status();
        tracing::info!(
            ticket = ticket.0,
            outcome = %outcome,
            score = result.score(),
            digest = %result.digest(),
            "scan complete"
        );
        self.result = Some(result.clone());
        self.transition(ConsoleState::from(outcome));
        self.pending_events.push(ConsoleEvent::ResultReady(result));
        Ok(outcome)
    }

    /// Return to `Idle`, clearing result, log buffer and input.
    ///
    /// Resetting mid-scan invalidates the running scan's ticket.
    pub fn reset(&mut self) {
        if self.state == ConsoleState::Scanning {
            tracing::info!(ticket = self.current, "scan abandoned by reset");
        }
        self.result = None;
        self.logs.clear();
        self.input = ScanRequest::default();
        self.transition(ConsoleState::Idle);
    }

    /// Queue a stats notification behind the current events.
    pub fn push_stats(&mut self, stats: ScanStats) {
        self.pending_events.push(ConsoleEvent::StatsUpdated(stats));
    }

    /// Drain all pending events.
    pub fn drain_events(&mut self) -> Vec<ConsoleEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn snapshot(&self) -> ConsoleSnapshot {
        ConsoleSnapshot {
            state: self.state,
            input: self.input.clone(),
            logs: self.logs.clone(),
            result: self.result.clone(),
            scans_started: self.current,
        }
    }

    fn check_ticket(&self, ticket: ScanTicket) -> Result<(), ConsoleError> {
        if ticket.0 != self.current {
            return Err(ConsoleError::StaleScan {
                ticket: ticket.0,
                current: self.current,
            });
        }
        if self.state != ConsoleState::Scanning {
            return Err(ConsoleError::NotScanning(self.state));
        }
        Ok(())
    }

    fn transition(&mut self, to: ConsoleState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        self.pending_events
            .push(ConsoleEvent::StateChanged { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::SCAN_LOG_LINES;
    use authentic_types::{Digest, Flag};
    use chrono::{TimeZone, Utc};

    fn result(outcome: Outcome) -> ScanResult {
        let score = *outcome.score_range().start();
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap();
        ScanResult::new(outcome, score, Digest::new([7; 32]), at).unwrap()
    }

    fn run_to_completion(orch: &mut ScanOrchestrator, outcome: Outcome) -> ScanTicket {
        let ticket = orch.start(ScanRequest::new("test")).unwrap();
        for line in SCAN_LOG_LINES {
            orch.append_log(ticket, line).unwrap();
        }
        orch.complete(ticket, result(outcome)).unwrap();
        ticket
    }

    // ── Start ───────────────────────────────────────────────────────────

    #[test]
    fn empty_input_has_no_effect() {
        let mut orch = ScanOrchestrator::new();
        assert_eq!(orch.start(ScanRequest::new("")), Err(ConsoleError::EmptyInput));
        assert_eq!(orch.start(ScanRequest::new("   ")), Err(ConsoleError::EmptyInput));
        assert_eq!(orch.state(), ConsoleState::Idle);
        assert!(orch.drain_events().is_empty());
        assert_eq!(orch.snapshot().scans_started, 0);
    }

    #[test]
    fn start_enters_scanning_and_emits_transition() {
        let mut orch = ScanOrchestrator::new();
        let ticket = orch.start(ScanRequest::new("test")).unwrap();
        assert_eq!(orch.state(), ConsoleState::Scanning);
        assert_eq!(orch.active_ticket(), Some(ticket));
        assert_eq!(orch.input().as_str(), "test");
        assert_eq!(
            orch.drain_events(),
            vec![ConsoleEvent::StateChanged {
                from: ConsoleState::Idle,
                to: ConsoleState::Scanning
            }]
        );
    }

    #[test]
    fn start_while_scanning_is_rejected() {
        let mut orch = ScanOrchestrator::new();
        orch.start(ScanRequest::new("a")).unwrap();
        assert_eq!(
            orch.start(ScanRequest::new("b")),
            Err(ConsoleError::ScanInProgress)
        );
        assert_eq!(orch.input().as_str(), "a");
    }

    #[test]
    fn input_is_locked_while_scanning() {
        let mut orch = ScanOrchestrator::new();
        orch.set_input(ScanRequest::new("draft")).unwrap();
        orch.start(ScanRequest::new("draft")).unwrap();
        assert_eq!(
            orch.set_input(ScanRequest::new("other")),
            Err(ConsoleError::ScanInProgress)
        );
    }

    #[test]
    fn restart_from_result_clears_previous_scan() {
        let mut orch = ScanOrchestrator::new();
        run_to_completion(&mut orch, Outcome::Verified);
        orch.drain_events();

        let ticket = orch.start(ScanRequest::new("again")).unwrap();
        assert_eq!(ticket.as_u64(), 2);
        assert!(orch.result().is_none());
        assert!(orch.logs().is_empty());
        assert_eq!(
            orch.drain_events(),
            vec![ConsoleEvent::StateChanged {
                from: ConsoleState::Verified,
                to: ConsoleState::Scanning
            }]
        );
    }

    // ── Steps and completion ────────────────────────────────────────────

    #[test]
    fn logs_keep_sequence_order() {
        let mut orch = ScanOrchestrator::new();
        let ticket = orch.start(ScanRequest::new("test")).unwrap();
        orch.drain_events();
        for (i, line) in SCAN_LOG_LINES.iter().enumerate() {
            assert_eq!(orch.append_log(ticket, *line).unwrap(), i);
        }
        assert_eq!(orch.logs(), SCAN_LOG_LINES.as_slice());
        let events = orch.drain_events();
        assert_eq!(events.len(), SCAN_LOG_LINES.len());
        assert_eq!(
            events[3],
            ConsoleEvent::LogAppended {
                index: 3,
                line: SCAN_LOG_LINES[3].to_string()
            }
        );
    }

    #[test]
    fn complete_moves_to_outcome_state() {
        let mut orch = ScanOrchestrator::new();
        run_to_completion(&mut orch, Outcome::Failed);
        assert_eq!(orch.state(), ConsoleState::Failed);
        assert_eq!(orch.active_ticket(), None);
        let result = orch.result().unwrap();
        assert_eq!(result.flags()[0], Flag::SignatureMismatch);

        let events = orch.drain_events();
        assert!(matches!(
            events[events.len() - 2],
            ConsoleEvent::StateChanged {
                from: ConsoleState::Scanning,
                to: ConsoleState::Failed
            }
        ));
        assert!(matches!(events.last(), Some(ConsoleEvent::ResultReady(_))));
    }

    #[test]
    fn steps_after_completion_are_rejected() {
        let mut orch = ScanOrchestrator::new();
        let ticket = run_to_completion(&mut orch, Outcome::Verified);
        assert_eq!(
            orch.append_log(ticket, "late"),
            Err(ConsoleError::NotScanning(ConsoleState::Verified))
        );
        assert_eq!(
            orch.complete(ticket, result(Outcome::Failed)),
            Err(ConsoleError::NotScanning(ConsoleState::Verified))
        );
        assert_eq!(orch.state(), ConsoleState::Verified);
    }

    // ── Reset ───────────────────────────────────────────────────────────

    #[test]
    fn reset_from_either_result_returns_to_idle() {
        for outcome in [Outcome::Verified, Outcome::Failed] {
            let mut orch = ScanOrchestrator::new();
            run_to_completion(&mut orch, outcome);
            assert_eq!(orch.state(), ConsoleState::from(outcome));
            orch.drain_events();

            orch.reset();
            assert_eq!(orch.state(), ConsoleState::Idle);
            assert!(orch.result().is_none());
            assert!(orch.logs().is_empty());
            assert!(orch.input().is_empty());
            assert_eq!(
                orch.drain_events(),
                vec![ConsoleEvent::StateChanged {
                    from: ConsoleState::from(outcome),
                    to: ConsoleState::Idle
                }]
            );
        }
    }

    #[test]
    fn reset_mid_scan_invalidates_ticket() {
        let mut orch = ScanOrchestrator::new();
        let stale = orch.start(ScanRequest::new("test")).unwrap();
        orch.append_log(stale, SCAN_LOG_LINES[0]).unwrap();
        orch.reset();
        assert_eq!(orch.state(), ConsoleState::Idle);
        assert!(orch.logs().is_empty());
        assert_eq!(
            orch.append_log(stale, SCAN_LOG_LINES[1]),
            Err(ConsoleError::NotScanning(ConsoleState::Idle))
        );

        let fresh = orch.start(ScanRequest::new("next")).unwrap();
        assert_eq!(
            orch.append_log(stale, SCAN_LOG_LINES[1]),
            Err(ConsoleError::StaleScan {
                ticket: stale.as_u64(),
                current: fresh.as_u64()
            })
        );
        assert!(orch.logs().is_empty());
    }

    #[test]
    fn reset_while_idle_emits_nothing() {
        let mut orch = ScanOrchestrator::new();
        orch.set_input(ScanRequest::new("draft")).unwrap();
        orch.reset();
        assert!(orch.drain_events().is_empty());
        assert!(orch.input().is_empty());
    }
}
