//! Core systems for Horizon Tabular.
//!
//! This crate provides the notification plumbing shared by the model layer:
//!
//! - **Signal/Slot System**: Synchronous, ordered observer callbacks
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_tabular_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
