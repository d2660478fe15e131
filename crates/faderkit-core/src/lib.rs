//! Core plumbing for faderkit.
//!
//! - **Signals**: the callback mechanism widgets use to report user-driven
//!   value changes ([`Signal`], [`ConnectionId`])
//! - **Logging**: `tracing` span names and targets shared by the workspace
//!
//! # Example
//!
//! ```
//! use faderkit_core::Signal;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! let last = Arc::new(AtomicU32::new(0));
//! let value_changed = Signal::<f32>::new();
//!
//! let last_clone = last.clone();
//! value_changed.connect(move |value| {
//!     last_clone.store(value.to_bits(), Ordering::SeqCst);
//! });
//!
//! value_changed.emit(0.75);
//! assert_eq!(f32::from_bits(last.load(Ordering::SeqCst)), 0.75);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
