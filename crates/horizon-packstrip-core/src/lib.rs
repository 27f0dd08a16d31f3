//! Core systems for Horizon Packstrip.
//!
//! This crate provides the foundational pieces shared by the strip widget:
//!
//! - **Signal/Slot System**: Type-safe, component-owned notifications
//! - **Errors**: Contract-violation errors raised by the state machine
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_packstrip_core::Signal;
//!
//! let item_selected = Signal::<(usize, usize)>::new();
//!
//! let conn_id = item_selected.connect(|(section, item)| {
//!     println!("Selected item {} of section {}", item, section);
//! });
//!
//! item_selected.emit((2, 0));
//! item_selected.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{StripError, StripResult};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
