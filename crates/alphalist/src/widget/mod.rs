//! The list shell and its rendering seams.
//!
//! [`AlphabetList`] wires the sectioning model, the layout table, and the
//! letter navigator together and owns their derived state. Presentation goes
//! through a [`SectionDelegate`]; the host registers a [`SurfaceModel`] with
//! its windowed scroll surface.

mod alphabet_list;
mod delegate;
mod surface;

pub use alphabet_list::AlphabetList;
pub use delegate::{
    DefaultDelegate, Element, ElementStyle, IndexLetterRenderer, ItemRenderer, ListHeaderRenderer,
    OverrideDelegate, RenderOverrides, SectionDelegate, SectionHeaderRenderer, CELL_LABEL_TEST_ID,
    CELL_TEST_ID, HEADER_LABEL_TEST_ID, HEADER_TEST_ID, INDEX_LABEL_TEST_ID, INDEX_LETTER_TEST_ID,
    INDEX_TEST_ID,
};
pub use surface::SurfaceModel;
