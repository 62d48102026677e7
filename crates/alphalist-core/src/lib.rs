//! Core systems for Alphalist.
//!
//! This crate provides the foundation the alphabet list is built on:
//!
//! - **Signal/Slot System**: Notifications out of the list shell
//! - **Property System**: Change-detecting values and memoized derived values
//! - **Errors**: The scroll-surface and configuration error types
//! - **Logging**: `tracing` targets, span names, and helper macros
//!
//! # Example
//!
//! ```
//! use alphalist_core::{Property, Signal};
//!
//! struct Placement {
//!     at_top: Property<bool>,
//!     changed: Signal<bool>,
//! }
//!
//! let placement = Placement {
//!     at_top: Property::new(false),
//!     changed: Signal::new(),
//! };
//!
//! placement.changed.connect(|at_top| println!("uncategorized at top: {}", at_top));
//! if placement.at_top.set(true) {
//!     placement.changed.emit(true);
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{ConfigError, Error, Result, ScrollError};
pub use logging::PerfSpan;
pub use property::{Derived, Property};
pub use signal::{ConnectionId, Signal};
