//! Cooperative refresh delay.
//!
//! # Responsibility
//! - Model the dashboard's artificial refresh pause as a cancellable timer.
//!
//! # Invariants
//! - The only observable effect is the completion signal; no data changes.
//! - Cancellation before the deadline wins; after completion it is a no-op.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default artificial delay before a refresh reports completion.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(500);

/// Outcome of a refresh wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The delay elapsed without interruption.
    Completed,
    /// `cancel` arrived before the deadline.
    Cancelled,
}

/// Handle to an in-flight refresh timer.
pub struct RefreshHandle {
    cancel_tx: Sender<()>,
    worker: JoinHandle<RefreshOutcome>,
}

impl RefreshHandle {
    /// Starts a refresh timer with the given delay.
    pub fn start(delay: Duration) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let worker = thread::spawn(move || match cancel_rx.recv_timeout(delay) {
            Ok(()) => RefreshOutcome::Cancelled,
            Err(RecvTimeoutError::Timeout) => RefreshOutcome::Completed,
            // Sender dropped without cancelling: run to completion.
            Err(RecvTimeoutError::Disconnected) => RefreshOutcome::Completed,
        });
        Self { cancel_tx, worker }
    }

    /// Starts a refresh timer with the default 500 ms delay.
    pub fn start_default() -> Self {
        Self::start(DEFAULT_REFRESH_DELAY)
    }

    /// Requests cancellation. Harmless if the timer already completed.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(());
    }

    /// Blocks until the timer resolves and returns the outcome.
    pub fn wait(self) -> RefreshOutcome {
        // A panicked timer thread cannot happen from this module's own code;
        // treat it as completion rather than propagating the panic.
        self.worker.join().unwrap_or(RefreshOutcome::Completed)
    }
}
