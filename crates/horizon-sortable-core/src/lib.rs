//! Core systems for Horizon Sortable.
//!
//! This crate provides the foundational pieces that the sorting engine is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe notifications used for sort hooks
//! - **Errors**: The error taxonomy shared by every crate in the workspace
//! - **Logging**: `tracing` targets and span helpers
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_sortable_core::Signal;
//!
//! let before_sort = Signal::<usize>::new();
//!
//! let conn_id = before_sort.connect(|column| {
//!     println!("About to sort column {}", column);
//! });
//!
//! before_sort.emit(0);
//! before_sort.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{ConfigError, DateParseError, Result, SortableError};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
