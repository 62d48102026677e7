//! Memoized layout index keyed on its invalidation triggers.

use std::sync::Arc;

use alphalist_core::logging::targets;
use parking_lot::RwLock;

use crate::model::SectionSequence;

use super::index::LayoutIndex;
use super::metrics::{LayoutMetrics, RowHeight};

/// Holds the last built [`LayoutIndex`] and rebuilds it only when the section
/// revision, the row-height source, or the metrics change.
#[derive(Debug, Default)]
pub struct LayoutCache {
    cached: RwLock<Option<Arc<LayoutIndex>>>,
}

impl LayoutCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout for these inputs, rebuilding if any trigger changed.
    pub fn get<T>(
        &self,
        sections: &SectionSequence<T>,
        row_height: &RowHeight,
        metrics: LayoutMetrics,
    ) -> Arc<LayoutIndex> {
        if let Some(layout) = self.cached.read().as_ref() {
            if layout.matches(sections.revision(), row_height, metrics) {
                return Arc::clone(layout);
            }
        }

        tracing::trace!(target: targets::LAYOUT, revision = sections.revision(), "layout cache miss");
        let layout = Arc::new(LayoutIndex::build(sections, row_height, metrics));
        *self.cached.write() = Some(Arc::clone(&layout));
        layout
    }

    /// Drops the cached layout.
    pub fn invalidate(&self) {
        *self.cached.write() = None;
    }
}
