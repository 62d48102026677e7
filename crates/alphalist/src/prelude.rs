//! Prelude module for Alphalist.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use alphalist::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::{ConnectionId, Derived, Property, Signal};

// ============================================================================
// Errors
// ============================================================================

pub use crate::{ConfigError, Error, Result, ScrollError};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    Alphabet, GroupBy, GroupKey, Item, ListEntry, Section, SectionBuilder, SectionSequence,
    UncategorizedPlacement,
};

// ============================================================================
// Layout and Navigation
// ============================================================================

pub use crate::layout::{LayoutIndex, LayoutMetrics, RowHeight};
pub use crate::navigation::{
    IndexNavigator, LetterStrip, ScrollAlignment, ScrollCommand, ScrollSurface,
};

// ============================================================================
// List Shell
// ============================================================================

pub use crate::config::{ListConfig, WindowConfig};
pub use crate::widget::{
    AlphabetList, DefaultDelegate, Element, ElementStyle, RenderOverrides, SectionDelegate,
    SurfaceModel,
};
