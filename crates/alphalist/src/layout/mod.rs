//! Layout geometry for Alphalist.
//!
//! Given a section sequence and its heights, [`LayoutIndex`] answers where any
//! row or header sits in the scroll content, and what sits under any offset.
//!
//! Heights come from three places:
//!
//! - A per-row [`RowHeight`] (fixed, or a callback keyed by section and row)
//! - One section header height, applied once per section
//! - One leading list header height, applied once at the top
//!
//! Section footers are always zero height.
//!
//! The table is a derived cache: [`LayoutCache`] rebuilds it only when the
//! section sequence, the row-height source, or either header height changes.

mod cache;
mod index;
mod metrics;

pub use cache::LayoutCache;
pub use index::{FlatElement, ItemLayout, LayoutIndex, ListLocation};
pub use metrics::{
    LayoutMetrics, RowHeight, RowHeightFn, DEFAULT_ITEM_HEIGHT, DEFAULT_LIST_HEADER_HEIGHT,
};
