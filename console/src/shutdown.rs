//! Console teardown on SIGINT/SIGTERM.
//!
//! A [`ShutdownController`] latches a single "shutting down" flag on a
//! `tokio::sync::watch` channel. Sessions attached with
//! [`ConsoleSession::with_shutdown`](crate::ConsoleSession::with_shutdown)
//! race every scan timeline against it: once the flag is set the running
//! scan is reset to `Idle` by the session itself and new scans are refused.
//! The flag is sticky, so a signal that arrives between scans still stops
//! the next one.

use tokio::signal;
use tokio::sync::watch;

/// Owns the shutdown flag for one console process.
pub struct ShutdownController {
    tx: watch::Sender<bool>,
}

impl ShutdownController {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// A handle that resolves once shutdown has been requested.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Request shutdown. Idempotent.
    pub fn shutdown(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.tx.borrow()
    }

    /// Wait for SIGTERM or SIGINT, then request shutdown.
    pub async fn wait_for_signal(&self) {
        let ctrl_c = signal::ctrl_c();

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "could not install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => { tracing::info!("received SIGINT, stopping console"); }
            _ = terminate => { tracing::info!("received SIGTERM, stopping console"); }
        }

        self.shutdown();
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of a [`ShutdownController`].
#[derive(Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown is requested. Never resolves if the controller
    /// is dropped without requesting it.
    pub async fn recv(&mut self) {
        if self.rx.wait_for(|down| *down).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
