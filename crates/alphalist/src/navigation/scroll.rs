//! Scroll commands and the scroll surface they are sent to.

use alphalist_core::ScrollError;

/// Where the target lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlignment {
    /// Target section header at the top edge of the viewport.
    #[default]
    Top,
    /// Target row centered in the viewport.
    Center,
    /// Target row at the bottom edge of the viewport.
    Bottom,
}

impl ScrollAlignment {
    /// Fraction of the viewport above the target (0.0 top, 1.0 bottom).
    pub fn view_position(self) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// A request to move the viewport to a (section, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    /// Target section.
    pub section_index: usize,
    /// Target row within the section.
    pub row_index: usize,
    /// Whether the surface should animate the scroll.
    pub animated: bool,
    /// Viewport alignment of the target.
    pub alignment: ScrollAlignment,
}

impl ScrollCommand {
    /// An animated, top-aligned command to the first row of a section.
    pub fn to_section(section_index: usize) -> Self {
        Self {
            section_index,
            row_index: 0,
            animated: true,
            alignment: ScrollAlignment::Top,
        }
    }

    /// Fraction of the viewport above the target.
    pub fn view_position(&self) -> f32 {
        self.alignment.view_position()
    }
}

/// The windowed scroll surface that executes scroll commands.
///
/// Implementations compute the destination offset themselves, typically
/// with [`LayoutIndex::scroll_offset`](crate::layout::LayoutIndex::scroll_offset).
/// An unmounted surface returns [`ScrollError::Detached`].
pub trait ScrollSurface: Send + Sync {
    /// Scroll to the command's target.
    fn scroll_to_location(&self, command: &ScrollCommand) -> Result<(), ScrollError>;
}
