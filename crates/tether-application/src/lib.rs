//! Application layer: the controller that owns the session and drives the
//! authenticate-then-call flow.

pub mod calculator;
pub mod controller;
pub mod monitor;

pub use controller::AppController;
pub use monitor::{ExchangeMonitor, ExchangeState, InFlightTicket};
