//! Section delegates for custom row, header, and letter rendering.
//!
//! The list never draws anything itself. It asks a [`SectionDelegate`] for an
//! abstract [`Element`] tree per row, section header, list header, and letter
//! cell, and the host renderer turns those trees into its own views.
//!
//! # Usage
//!
//! ```ignore
//! use alphalist::widget::{DefaultDelegate, Element, ElementStyle, RenderOverrides};
//!
//! // Stock templates
//! let delegate = DefaultDelegate;
//!
//! // Replace just the row template; everything else falls back
//! let overrides = RenderOverrides::new().with_item(|item: &Item| {
//!     Element::new(ElementStyle::Custom("contact-row".into())).with_text(item.value.clone())
//! });
//! ```

use std::fmt;
use std::sync::Arc;

use crate::model::{ListEntry, Section};
use crate::navigation::{LetterEntry, LetterStrip};

/// Test id of the stock section header container.
pub const HEADER_TEST_ID: &str = "header";
/// Test id of the stock section header label.
pub const HEADER_LABEL_TEST_ID: &str = "header__label";
/// Test id of the stock row container.
pub const CELL_TEST_ID: &str = "cell";
/// Test id of the stock row label.
pub const CELL_LABEL_TEST_ID: &str = "cell__label";
/// Test id of the stock letter strip container.
pub const INDEX_TEST_ID: &str = "letter-index";
/// Test id of a stock letter cell.
pub const INDEX_LETTER_TEST_ID: &str = "letter-index__letter";
/// Test id of a stock letter cell label.
pub const INDEX_LABEL_TEST_ID: &str = "letter-index__label";

/// Style class of an element. The host maps each class to its own visuals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ElementStyle {
    /// Plain container with no styling of its own.
    #[default]
    Container,
    /// Section header background.
    SectionHeaderContainer,
    /// Section header title text.
    SectionHeaderLabel,
    /// Row background.
    ItemContainer,
    /// Row label text.
    ItemLabel,
    /// Letter strip column.
    IndexContainer,
    /// One letter cell.
    IndexLetterContainer,
    /// Letter cell text.
    IndexLetterLabel,
    /// A class supplied by a custom renderer.
    Custom(String),
}

/// A node in a rendered element tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Identifier for UI tests.
    pub test_id: Option<String>,
    /// Style class.
    pub style: ElementStyle,
    /// Text content, for label nodes.
    pub text: Option<String>,
    /// Child nodes in display order.
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given style.
    pub fn new(style: ElementStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Sets the test id.
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Sets the text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search for the first node with `test_id`, including `self`.
    pub fn find(&self, test_id: &str) -> Option<&Element> {
        if self.test_id.as_deref() == Some(test_id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(test_id))
    }

    /// All text in the subtree, depth-first.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

/// Produces element trees for the list's render slots.
///
/// Every method has a default that renders the stock template, so an
/// implementation only overrides the slots it cares about.
pub trait SectionDelegate<T: ListEntry>: Send + Sync {
    /// Renders one row.
    fn render_item(&self, item: &T) -> Element {
        Element::new(ElementStyle::ItemContainer)
            .with_test_id(CELL_TEST_ID)
            .with_child(
                Element::new(ElementStyle::ItemLabel)
                    .with_test_id(CELL_LABEL_TEST_ID)
                    .with_text(item.value()),
            )
    }

    /// Renders a section header.
    fn render_section_header(&self, section: &Section<T>) -> Element {
        Element::new(ElementStyle::SectionHeaderContainer)
            .with_test_id(HEADER_TEST_ID)
            .with_child(
                Element::new(ElementStyle::SectionHeaderLabel)
                    .with_test_id(HEADER_LABEL_TEST_ID)
                    .with_text(section.title().to_string()),
            )
    }

    /// Renders the content above the first section. None by default.
    fn render_list_header(&self) -> Option<Element> {
        None
    }

    /// Renders one letter cell of the strip.
    fn render_index_letter(&self, entry: &LetterEntry) -> Element {
        Element::new(ElementStyle::IndexLetterContainer)
            .with_test_id(INDEX_LETTER_TEST_ID)
            .with_child(
                Element::new(ElementStyle::IndexLetterLabel)
                    .with_test_id(INDEX_LABEL_TEST_ID)
                    .with_text(entry.letter.to_string()),
            )
    }

    /// Renders the whole strip from its letter cells.
    fn render_index_strip(&self, strip: &LetterStrip) -> Element {
        Element {
            test_id: Some(INDEX_TEST_ID.to_string()),
            style: ElementStyle::IndexContainer,
            text: None,
            children: strip
                .entries()
                .iter()
                .map(|entry| self.render_index_letter(entry))
                .collect(),
        }
    }
}

/// The stock templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDelegate;

impl<T: ListEntry> SectionDelegate<T> for DefaultDelegate {}

/// Type alias for a row renderer.
pub type ItemRenderer<T> = Arc<dyn Fn(&T) -> Element + Send + Sync>;

/// Type alias for a section header renderer.
pub type SectionHeaderRenderer<T> = Arc<dyn Fn(&Section<T>) -> Element + Send + Sync>;

/// Type alias for a list header renderer.
pub type ListHeaderRenderer = Arc<dyn Fn() -> Element + Send + Sync>;

/// Type alias for a letter cell renderer.
pub type IndexLetterRenderer = Arc<dyn Fn(&LetterEntry) -> Element + Send + Sync>;

/// Optional per-slot render closures.
pub struct RenderOverrides<T> {
    /// Row renderer.
    pub item: Option<ItemRenderer<T>>,
    /// Section header renderer.
    pub section_header: Option<SectionHeaderRenderer<T>>,
    /// List header renderer.
    pub list_header: Option<ListHeaderRenderer>,
    /// Letter cell renderer.
    pub index_letter: Option<IndexLetterRenderer>,
}

impl<T> RenderOverrides<T> {
    /// No overrides.
    pub fn new() -> Self {
        Self {
            item: None,
            section_header: None,
            list_header: None,
            index_letter: None,
        }
    }

    /// Sets the row renderer.
    pub fn with_item<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Element + Send + Sync + 'static,
    {
        self.item = Some(Arc::new(f));
        self
    }

    /// Sets the section header renderer.
    pub fn with_section_header<F>(mut self, f: F) -> Self
    where
        F: Fn(&Section<T>) -> Element + Send + Sync + 'static,
    {
        self.section_header = Some(Arc::new(f));
        self
    }

    /// Sets the list header renderer.
    pub fn with_list_header<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Element + Send + Sync + 'static,
    {
        self.list_header = Some(Arc::new(f));
        self
    }

    /// Sets the letter cell renderer.
    pub fn with_index_letter<F>(mut self, f: F) -> Self
    where
        F: Fn(&LetterEntry) -> Element + Send + Sync + 'static,
    {
        self.index_letter = Some(Arc::new(f));
        self
    }

    /// Returns `true` if no slot is overridden.
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
            && self.section_header.is_none()
            && self.list_header.is_none()
            && self.index_letter.is_none()
    }
}

impl<T> Default for RenderOverrides<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RenderOverrides<T> {
    fn clone(&self) -> Self {
        Self {
            item: self.item.clone(),
            section_header: self.section_header.clone(),
            list_header: self.list_header.clone(),
            index_letter: self.index_letter.clone(),
        }
    }
}

impl<T> fmt::Debug for RenderOverrides<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOverrides")
            .field("item", &self.item.is_some())
            .field("section_header", &self.section_header.is_some())
            .field("list_header", &self.list_header.is_some())
            .field("index_letter", &self.index_letter.is_some())
            .finish()
    }
}

/// A delegate built from [`RenderOverrides`], using the stock template for
/// every slot left unset.
pub struct OverrideDelegate<T> {
    overrides: RenderOverrides<T>,
}

impl<T> OverrideDelegate<T> {
    /// Wraps `overrides`.
    pub fn new(overrides: RenderOverrides<T>) -> Self {
        Self { overrides }
    }

    /// The wrapped overrides.
    pub fn overrides(&self) -> &RenderOverrides<T> {
        &self.overrides
    }
}

impl<T> Default for OverrideDelegate<T> {
    fn default() -> Self {
        Self::new(RenderOverrides::new())
    }
}

impl<T> Clone for OverrideDelegate<T> {
    fn clone(&self) -> Self {
        Self::new(self.overrides.clone())
    }
}

impl<T> fmt::Debug for OverrideDelegate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideDelegate")
            .field("overrides", &self.overrides)
            .finish()
    }
}

impl<T: ListEntry> SectionDelegate<T> for OverrideDelegate<T> {
    fn render_item(&self, item: &T) -> Element {
        match &self.overrides.item {
            Some(render) => render(item),
            None => SectionDelegate::<T>::render_item(&DefaultDelegate, item),
        }
    }

    fn render_section_header(&self, section: &Section<T>) -> Element {
        match &self.overrides.section_header {
            Some(render) => render(section),
            None => DefaultDelegate.render_section_header(section),
        }
    }

    fn render_list_header(&self) -> Option<Element> {
        self.overrides.list_header.as_ref().map(|render| render())
    }

    fn render_index_letter(&self, entry: &LetterEntry) -> Element {
        match &self.overrides.index_letter {
            Some(render) => render(entry),
            None => SectionDelegate::<T>::render_index_letter(&DefaultDelegate, entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupKey, Item, SectionBuilder};
    use crate::navigation::IndexNavigator;

    fn sections() -> crate::model::SectionSequence<Item> {
        let items = vec![
            Arc::new(Item::new("1", "Banana")),
            Arc::new(Item::new("2", "7-Eleven")),
        ];
        SectionBuilder::new().build(&items)
    }

    #[test]
    fn test_default_templates() {
        let delegate = DefaultDelegate;
        let seq = sections();

        let cell = SectionDelegate::<Item>::render_item(&delegate, &Item::new("1", "Banana"));
        assert_eq!(cell.test_id.as_deref(), Some(CELL_TEST_ID));
        assert_eq!(cell.style, ElementStyle::ItemContainer);
        assert_eq!(
            cell.find(CELL_LABEL_TEST_ID).and_then(|e| e.text.as_deref()),
            Some("Banana")
        );

        let header = delegate.render_section_header(&seq.as_slice()[1]);
        assert_eq!(header.test_id.as_deref(), Some(HEADER_TEST_ID));
        assert_eq!(header.text_content(), "#");

        assert_eq!(SectionDelegate::<Item>::render_list_header(&delegate), None);
    }

    #[test]
    fn test_default_index_strip() {
        let strip = IndexNavigator::new().strip_for(&sections());
        let rendered = SectionDelegate::<Item>::render_index_strip(&DefaultDelegate, &strip);

        assert_eq!(rendered.test_id.as_deref(), Some(INDEX_TEST_ID));
        assert_eq!(rendered.children.len(), 2);
        assert_eq!(rendered.children[0].text_content(), "B");
        assert_eq!(rendered.children[1].text_content(), "#");
        assert_eq!(
            rendered.children[0].find(INDEX_LABEL_TEST_ID).map(|e| &e.style),
            Some(&ElementStyle::IndexLetterLabel)
        );
    }

    #[test]
    fn test_overrides_fall_back_per_slot() {
        let overrides = RenderOverrides::<Item>::new()
            .with_item(|item| Element::new(ElementStyle::Custom("row".into())).with_text(item.key.clone()))
            .with_list_header(|| Element::new(ElementStyle::Container).with_text("Contacts"));
        assert!(!overrides.is_empty());

        let delegate = OverrideDelegate::new(overrides);
        let seq = sections();

        let row = delegate.render_item(&Item::new("42", "Banana"));
        assert_eq!(row.style, ElementStyle::Custom("row".into()));
        assert_eq!(row.text.as_deref(), Some("42"));

        assert_eq!(
            delegate.render_list_header().map(|e| e.text_content()),
            Some("Contacts".to_string())
        );

        let header = delegate.render_section_header(&seq.as_slice()[0]);
        assert_eq!(header, DefaultDelegate.render_section_header(&seq.as_slice()[0]));

        let letter = delegate.render_index_letter(&LetterEntry {
            letter: GroupKey::Letter('B'),
            section_index: 0,
        });
        assert_eq!(letter.test_id.as_deref(), Some(INDEX_LETTER_TEST_ID));
    }

    #[test]
    fn test_custom_letter_flows_into_strip() {
        let delegate = OverrideDelegate::<Item>::new(
            RenderOverrides::new()
                .with_index_letter(|entry| Element::default().with_text(format!("[{}]", entry.letter))),
        );
        let strip = IndexNavigator::new().strip_for(&sections());

        assert_eq!(delegate.render_index_strip(&strip).text_content(), "[B][#]");
    }
}
