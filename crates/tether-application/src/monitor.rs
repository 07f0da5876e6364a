//! Exchange lifecycle tracking: `Idle -> InFlight -> {Succeeded, Failed}`.
//!
//! The monitor is the in-flight guard. While one exchange runs, `try_begin`
//! refuses a second one, the same way the trigger control is disabled on a
//! screen. Nothing ever retries.

use std::sync::{Arc, Mutex, MutexGuard};
use tether_core::ApiResult;
use tether_core::error::{Result, TetherError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl ExchangeState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ExchangeState::Succeeded | ExchangeState::Failed)
    }
}

/// Shareable handle on the state of the current exchange.
///
/// Clones observe the same state, so a presenter can keep one to render a
/// busy indicator while the controller awaits the response.
#[derive(Debug, Clone, Default)]
pub struct ExchangeMonitor {
    state: Arc<Mutex<ExchangeState>>,
}

impl ExchangeMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExchangeState {
        *self.lock()
    }

    pub fn is_busy(&self) -> bool {
        self.state() == ExchangeState::InFlight
    }

    /// Moves to `InFlight`, or fails with `Busy` if an exchange is already running.
    pub fn try_begin(&self) -> Result<InFlightTicket> {
        let mut state = self.lock();
        if *state == ExchangeState::InFlight {
            return Err(TetherError::Busy);
        }
        *state = ExchangeState::InFlight;
        Ok(InFlightTicket {
            monitor: self.clone(),
            finished: false,
        })
    }

    fn set(&self, next: ExchangeState) {
        *self.lock() = next;
    }

    // A poisoned lock still holds a valid state value.
    fn lock(&self) -> MutexGuard<'_, ExchangeState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Proof that an exchange is in flight.
///
/// Dropping it unfinished (the caller abandoned the await) puts the monitor
/// back to `Idle`.
#[derive(Debug)]
pub struct InFlightTicket {
    monitor: ExchangeMonitor,
    finished: bool,
}

impl InFlightTicket {
    /// Records the terminal state for `result`.
    pub fn finish(mut self, result: &ApiResult) {
        let next = if result.success {
            ExchangeState::Succeeded
        } else {
            ExchangeState::Failed
        };
        self.monitor.set(next);
        self.finished = true;
    }
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("Exchange abandoned before completion");
            self.monitor.set(ExchangeState::Idle);
        }
    }
}
