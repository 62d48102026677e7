//! Letter-index navigation for Alphalist.
//!
//! The letter strip is derived from the section titles, one letter per
//! section, in section order. A tap resolves the letter to its section and
//! produces a [`ScrollCommand`] for the external [`ScrollSurface`]. Commands
//! are never queued or retried.

mod navigator;
mod scroll;

pub use navigator::{IndexNavigator, LetterEntry, LetterStrip};
pub use scroll::{ScrollAlignment, ScrollCommand, ScrollSurface};
