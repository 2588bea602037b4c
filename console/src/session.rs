//! Console session — the async driver around the orchestrator.
//!
//! A session owns one [`ScanOrchestrator`] and one [`StatsAccumulator`]
//! behind a mutex that is never held across an `.await`. Starting a scan
//! spawns the timeline as a tokio task: one jittered sleep per status line,
//! a settle delay, then the verdict. Reset aborts the task; dropping the
//! session does the same, so no timer outlives the session that armed it.
//!
//! A session attached to a [`ShutdownController`] also resets its own
//! running scan when shutdown is requested, and refuses new scans after.
//!
//! Every state change is published on a broadcast channel; presentation
//! layers call [`ConsoleSession::subscribe`] before starting a scan.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use authentic_types::{
    Clock, ConsoleError, ConsoleState, Entropy, ScanRequest, ScanResult, ScanStats, SystemClock,
};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::catalog;
use crate::config::ConsoleConfig;
use crate::entropy::StdEntropy;
use crate::orchestrator::{ConsoleEvent, ConsoleSnapshot, ScanOrchestrator, ScanTicket};
use crate::shutdown::{ShutdownController, ShutdownSignal};
use crate::stats::StatsAccumulator;
use crate::timeline::{ScanTimings, SCAN_LOG_LINES};
use crate::verifier::{RandomVerifier, Verifier};

const EVENT_CAPACITY: usize = 64;

struct Shared {
    orchestrator: ScanOrchestrator,
    stats: StatsAccumulator,
    verifier: Box<dyn Verifier>,
    jitter: Box<dyn Entropy>,
    clock: Arc<dyn Clock>,
}

impl Shared {
    fn publish(&mut self, events: &broadcast::Sender<ConsoleEvent>) {
        for event in self.orchestrator.drain_events() {
            // No subscribers is fine.
            let _ = events.send(event);
        }
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One interactive console session.
pub struct ConsoleSession {
    shared: Arc<Mutex<Shared>>,
    events: broadcast::Sender<ConsoleEvent>,
    timings: ScanTimings,
    shutdown: Option<ShutdownSignal>,
    task: Option<JoinHandle<()>>,
}

impl ConsoleSession {
    /// Build a session from configuration, with the system clock and
    /// `rand`-backed entropy (seeded when `config.seed` is set).
    pub fn new(config: &ConsoleConfig) -> Self {
        let verifier = RandomVerifier::new(
            Box::new(StdEntropy::from_seed_option(config.seed)),
            config.verified_probability,
        );
        let jitter = StdEntropy::from_seed_option(config.seed.map(|s| s.wrapping_add(1)));
        Self::with_parts(
            config.timings(),
            config.initial_stats(),
            Box::new(verifier),
            Box::new(jitter),
            Arc::new(SystemClock),
        )
    }

    /// Build a session from explicit parts.
    pub fn with_parts(
        timings: ScanTimings,
        initial_stats: ScanStats,
        verifier: Box<dyn Verifier>,
        jitter: Box<dyn Entropy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        tracing::debug!(
            verifier = verifier.name(),
            jitter = jitter.name(),
            "console session ready"
        );
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let shared = Shared {
            orchestrator: ScanOrchestrator::new(),
            stats: StatsAccumulator::new(initial_stats),
            verifier,
            jitter,
            clock,
        };
        Self {
            shared: Arc::new(Mutex::new(shared)),
            events,
            timings,
            shutdown: None,
            task: None,
        }
    }

    /// Tie this session to `controller`: a requested shutdown resets the
    /// running scan and rejects later starts with `ShuttingDown`.
    pub fn with_shutdown(mut self, controller: &ShutdownController) -> Self {
        self.shutdown = Some(controller.subscribe());
        self
    }

    /// Receive every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.events.subscribe()
    }

    pub fn timings(&self) -> ScanTimings {
        self.timings
    }

    pub fn state(&self) -> ConsoleState {
        lock(&self.shared).orchestrator.state()
    }

    pub fn logs(&self) -> Vec<String> {
        lock(&self.shared).orchestrator.logs().to_vec()
    }

    pub fn result(&self) -> Option<ScanResult> {
        lock(&self.shared).orchestrator.result().cloned()
    }

    pub fn input(&self) -> ScanRequest {
        lock(&self.shared).orchestrator.input().clone()
    }

    pub fn stats(&self) -> ScanStats {
        lock(&self.shared).stats.snapshot()
    }

    pub fn snapshot(&self) -> ConsoleSnapshot {
        lock(&self.shared).orchestrator.snapshot()
    }

    /// Whether a scan task is still running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Replace the input text (rejected while scanning).
    pub fn set_input(&self, text: impl Into<ScanRequest>) -> Result<(), ConsoleError> {
        lock(&self.shared).orchestrator.set_input(text.into())
    }

    /// Load sample preset `number` (1-based) into the input.
    pub fn select_preset(&self, number: usize) -> Result<(), ConsoleError> {
        let preset = catalog::preset(number)?;
        self.set_input(preset.content)
    }

    /// Scan the current input.
    pub fn start_current(&mut self) -> Result<ScanTicket, ConsoleError> {
        let input = self.input();
        self.start(input)
    }

    /// Start a scan of `input` and spawn its timeline.
    ///
    /// Must be called from within a tokio runtime. Blank input and a scan
    /// already in progress are rejected without side effects.
    pub fn start(&mut self, input: impl Into<ScanRequest>) -> Result<ScanTicket, ConsoleError> {
        if self.shutdown.as_ref().is_some_and(ShutdownSignal::is_triggered) {
            tracing::warn!("scan start rejected, console is shutting down");
            return Err(ConsoleError::ShuttingDown);
        }

        let ticket = {
            let mut shared = lock(&self.shared);
            let ticket = shared.orchestrator.start(input.into()).inspect_err(|e| {
                tracing::warn!(error = %e, "scan start rejected");
            })?;
            shared.publish(&self.events);
            ticket
        };

        // Any previous task has already finished or been invalidated.
        if let Some(previous) = self.task.take() {
            previous.abort();
        }

        let shared = Arc::clone(&self.shared);
        let events = self.events.clone();
        let timings = self.timings;
        let shutdown = self.shutdown.clone();
        self.task = Some(tokio::spawn(run_scan(shared, events, timings, ticket, shutdown)));
        Ok(ticket)
    }

    /// Cancel any running scan and return to `Idle`.
    pub fn reset(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        let mut shared = lock(&self.shared);
        shared.orchestrator.reset();
        shared.publish(&self.events);
    }

    /// Wait for the running scan, if any, and return the resulting state.
    pub async fn wait(&mut self) -> ConsoleState {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    tracing::error!(error = %e, "scan task failed");
                }
            }
        }
        self.state()
    }

    /// Start a scan and wait for its outcome.
    pub async fn scan(
        &mut self,
        input: impl Into<ScanRequest>,
    ) -> Result<ScanResult, ConsoleError> {
        self.start(input)?;
        let state = self.wait().await;
        self.result().ok_or(ConsoleError::NotScanning(state))
    }
}

impl Drop for ConsoleSession {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Play the timeline for `ticket`, racing it against shutdown when the
/// session has a controller attached.
async fn run_scan(
    shared: Arc<Mutex<Shared>>,
    events: broadcast::Sender<ConsoleEvent>,
    timings: ScanTimings,
    ticket: ScanTicket,
    shutdown: Option<ShutdownSignal>,
) {
    let Some(mut shutdown) = shutdown else {
        return play_timeline(&shared, &events, timings, ticket).await;
    };
    tokio::select! {
        () = play_timeline(&shared, &events, timings, ticket) => {}
        () = shutdown.recv() => interrupt(&shared, &events, ticket),
    }
}

/// Reset the scan identified by `ticket` if it is still the running one.
fn interrupt(
    shared: &Mutex<Shared>,
    events: &broadcast::Sender<ConsoleEvent>,
    ticket: ScanTicket,
) {
    let mut guard = lock(shared);
    if guard.orchestrator.active_ticket() != Some(ticket) {
        return;
    }
    tracing::info!(ticket = ticket.as_u64(), "shutdown requested, resetting scan");
    guard.orchestrator.reset();
    guard.publish(events);
}

/// The scan timeline. Stops silently once its ticket goes stale.
async fn play_timeline(
    shared: &Mutex<Shared>,
    events: &broadcast::Sender<ConsoleEvent>,
    timings: ScanTimings,
    ticket: ScanTicket,
) {
    for line in SCAN_LOG_LINES {
        let delay = {
            let mut guard = lock(shared);
            timings.next_step(guard.jitter.as_mut())
        };
        tokio::time::sleep(delay).await;

        let mut guard = lock(shared);
        if let Err(e) = guard.orchestrator.append_log(ticket, line) {
            tracing::debug!(ticket = ticket.as_u64(), error = %e, "scan timeline stopped");
            return;
        }
        guard.publish(events);
    }

    tokio::time::sleep(timings.settle_delay).await;

    let mut guard = lock(shared);
    let shared = &mut *guard;
    if shared.orchestrator.active_ticket() != Some(ticket) {
        tracing::debug!(ticket = ticket.as_u64(), "scan superseded before verdict");
        return;
    }

    let verdict = shared.verifier.verify(shared.orchestrator.input());
    let range = verdict.outcome.score_range();
    let score = verdict.score.clamp(*range.start(), *range.end());
    if score != verdict.score {
        tracing::warn!(
            verifier = shared.verifier.name(),
            outcome = %verdict.outcome,
            score = verdict.score,
            "verifier score outside outcome range, clamped"
        );
    }

    let result = match ScanResult::new(verdict.outcome, score, verdict.digest, shared.clock.now())
    {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "could not build scan result");
            return;
        }
    };

    match shared.orchestrator.complete(ticket, result) {
        Ok(outcome) => {
            let stats = shared.stats.record(outcome);
            shared.orchestrator.push_stats(stats);
            shared.publish(events);
        }
        Err(e) => tracing::debug!(error = %e, "scan completion rejected"),
    }
}
