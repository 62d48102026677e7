//! Height inputs to the layout index.

use std::fmt;
use std::sync::Arc;

/// Default row height, also the default section header height.
pub const DEFAULT_ITEM_HEIGHT: f32 = 40.0;

/// Default height of the leading list header.
pub const DEFAULT_LIST_HEADER_HEIGHT: f32 = 0.0;

/// Type alias for a row height callback keyed by (section index, row index).
pub type RowHeightFn = Arc<dyn Fn(usize, usize) -> f32 + Send + Sync>;

/// Per-row height source.
///
/// Negative or NaN heights are a caller error; the layout does not correct them.
#[derive(Clone)]
pub enum RowHeight {
    /// Every row has the same height.
    Fixed(f32),
    /// Heights come from a callback and may differ per row.
    Custom(RowHeightFn),
}

impl RowHeight {
    /// Wraps a height callback.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(usize, usize) -> f32 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Height of the row at (`section`, `row`).
    pub fn height(&self, section: usize, row: usize) -> f32 {
        match self {
            Self::Fixed(h) => *h,
            Self::Custom(f) => f(section, row),
        }
    }
}

impl Default for RowHeight {
    fn default() -> Self {
        Self::Fixed(DEFAULT_ITEM_HEIGHT)
    }
}

/// Callbacks compare by identity.
impl PartialEq for RowHeight {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for RowHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(h) => f.debug_tuple("Fixed").field(h).finish(),
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// Fixed heights that apply once per section or once per list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Height of every section header.
    pub section_header_height: f32,
    /// Height of the content above the first section.
    pub list_header_height: f32,
}

impl LayoutMetrics {
    /// Creates metrics.
    pub fn new(section_header_height: f32, list_header_height: f32) -> Self {
        Self {
            section_header_height,
            list_header_height,
        }
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            section_header_height: DEFAULT_ITEM_HEIGHT,
            list_header_height: DEFAULT_LIST_HEADER_HEIGHT,
        }
    }
}
