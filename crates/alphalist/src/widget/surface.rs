//! What the list hands to the windowed scroll surface on registration.

use std::fmt;
use std::sync::Arc;

use crate::config::WindowConfig;
use crate::layout::{ItemLayout, LayoutIndex};
use crate::model::{ListEntry, SectionSequence};
use crate::navigation::ScrollCommand;

/// Backing model, layout lookups, and tuning for a windowed scroll surface.
///
/// A snapshot: it stays valid for the sections it was taken from even if
/// the list is rebuilt afterwards.
pub struct SurfaceModel<T> {
    sections: SectionSequence<T>,
    layout: Arc<LayoutIndex>,
    window: WindowConfig,
}

impl<T: ListEntry> SurfaceModel<T> {
    pub(crate) fn new(
        sections: SectionSequence<T>,
        layout: Arc<LayoutIndex>,
        window: WindowConfig,
    ) -> Self {
        Self {
            sections,
            layout,
            window,
        }
    }

    /// The backing section sequence.
    pub fn sections(&self) -> &SectionSequence<T> {
        &self.sections
    }

    /// The layout table for [`sections`](Self::sections).
    pub fn layout(&self) -> &Arc<LayoutIndex> {
        &self.layout
    }

    /// Geometry of a flattened element, for the surface's virtualization.
    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        self.layout.item_layout(index)
    }

    /// Height of the row at (`section`, `row`).
    pub fn row_height(&self, section: usize, row: usize) -> f32 {
        self.layout.height_of(section, row)
    }

    /// Section header height.
    pub fn section_header_height(&self) -> f32 {
        self.layout.metrics().section_header_height
    }

    /// Stable row identity for diffing.
    pub fn key_of(&self, section: usize, row: usize) -> Option<&str> {
        self.sections.item(section, row).map(|item| item.key())
    }

    /// Destination offset for a scroll command in a viewport of this height.
    pub fn scroll_offset(&self, command: &ScrollCommand, viewport_height: f32) -> Option<f32> {
        self.layout.scroll_offset(command, viewport_height)
    }

    /// Rendering tuning.
    pub fn window(&self) -> WindowConfig {
        self.window
    }
}

impl<T> Clone for SurfaceModel<T> {
    fn clone(&self) -> Self {
        Self {
            sections: self.sections.clone(),
            layout: Arc::clone(&self.layout),
            window: self.window,
        }
    }
}

impl<T> fmt::Debug for SurfaceModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceModel")
            .field("revision", &self.sections.revision())
            .field("sections", &self.sections.len())
            .field("total_height", &self.layout.total_height())
            .field("window", &self.window)
            .finish()
    }
}
