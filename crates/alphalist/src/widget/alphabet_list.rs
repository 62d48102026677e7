//! The alphabet-sectioned list.

use std::fmt;
use std::sync::Arc;

use alphalist_core::logging::targets;
use alphalist_core::{Derived, Property, Signal};
use parking_lot::RwLock;

use crate::config::{ListConfig, WindowConfig};
use crate::layout::{LayoutCache, LayoutIndex, LayoutMetrics, RowHeight, DEFAULT_ITEM_HEIGHT, DEFAULT_LIST_HEADER_HEIGHT};
use crate::model::{Alphabet, GroupBy, GroupKey, ListEntry, SectionBuilder, SectionSequence, UncategorizedPlacement};
use crate::navigation::{IndexNavigator, LetterStrip, ScrollCommand, ScrollSurface};

use super::delegate::{DefaultDelegate, Element, OverrideDelegate, RenderOverrides, SectionDelegate};
use super::surface::SurfaceModel;

/// A list of entries grouped into alphabetic sections, with a letter strip
/// that jumps to each section.
///
/// `AlphabetList` owns the derived state: the section sequence is rebuilt
/// when the entries, the grouping source, the alphabet, or the uncategorized
/// placement change, and the layout table when the sections or any height
/// changes. Both rebuild lazily, on the next read.
///
/// Drawing and scrolling belong to the host. It registers
/// [`surface_model`](Self::surface_model) with its windowed scroll surface,
/// calls the `render_*` methods for content, and attaches the surface with
/// [`attach_surface`](Self::attach_surface) so letter presses can scroll it.
///
/// # Example
///
/// ```ignore
/// use alphalist::prelude::*;
///
/// let list = AlphabetList::new(vec![
///     Item::new("1", "Banana"),
///     Item::new("2", "apple"),
///     Item::new("3", "7-Eleven"),
/// ])
/// .with_placement(UncategorizedPlacement::Top);
///
/// list.letter_pressed.connect(|letter| println!("jump to {letter}"));
/// list.attach_surface(surface);
/// list.press_letter(GroupKey::Letter('B'));
/// ```
///
/// # Signals
///
/// - `sections_changed(usize)`: The section sequence was rebuilt; carries the section count
/// - `letter_pressed(GroupKey)`: A letter in the strip was pressed
/// - `scroll_requested(ScrollCommand)`: A press resolved to a scroll command
pub struct AlphabetList<T: ListEntry + 'static> {
    // Input
    items: Vec<Arc<T>>,
    group_by: GroupBy<T>,
    alphabet: Property<Alphabet>,
    placement: Property<UncategorizedPlacement>,

    // Layout
    row_height: RowHeight,
    section_header_height: Property<f32>,
    list_header_height: Property<f32>,
    window: WindowConfig,

    // Presentation and navigation
    delegate: Arc<dyn SectionDelegate<T>>,
    navigator: IndexNavigator,
    surface: RwLock<Option<Arc<dyn ScrollSurface>>>,

    // Derived state
    sections: Derived<SectionSequence<T>>,
    layout: LayoutCache,

    // Signals
    /// Emitted after the section sequence is rebuilt.
    pub sections_changed: Signal<usize>,
    /// Emitted when a letter is pressed, before it is resolved.
    pub letter_pressed: Signal<GroupKey>,
    /// Emitted when a pressed letter resolves to a scroll command.
    pub scroll_requested: Signal<ScrollCommand>,
}

impl<T: ListEntry + 'static> AlphabetList<T> {
    /// Creates a list with default grouping, heights, and templates.
    pub fn new(items: Vec<T>) -> Self {
        Self::from_shared(items.into_iter().map(Arc::new).collect())
    }

    /// Creates a list over entries that are already shared.
    pub fn from_shared(items: Vec<Arc<T>>) -> Self {
        Self {
            items,
            group_by: GroupBy::Value,
            alphabet: Property::new(Alphabet::Unicode),
            placement: Property::new(UncategorizedPlacement::Bottom),
            row_height: RowHeight::default(),
            section_header_height: Property::new(DEFAULT_ITEM_HEIGHT),
            list_header_height: Property::new(DEFAULT_LIST_HEADER_HEIGHT),
            window: WindowConfig::default(),
            delegate: Arc::new(DefaultDelegate),
            navigator: IndexNavigator::new(),
            surface: RwLock::new(None),
            sections: Derived::new(),
            layout: LayoutCache::new(),
            sections_changed: Signal::new(),
            letter_pressed: Signal::new(),
            scroll_requested: Signal::new(),
        }
    }

    /// Creates a list configured from a [`ListConfig`].
    pub fn from_config(items: Vec<T>, config: &ListConfig) -> Self {
        Self::new(items)
            .with_group_by(config.group_by())
            .with_alphabet(config.alphabet())
            .with_placement(config.uncategorized)
            .with_row_height(config.row_height())
            .with_section_header_height(config.section_header_height)
            .with_list_header_height(config.list_header_height)
            .with_window(config.window)
    }

    // =========================================================================
    // Builder Pattern Methods
    // =========================================================================

    /// Set the grouping source using builder pattern.
    pub fn with_group_by(mut self, group_by: GroupBy<T>) -> Self {
        self.set_group_by(group_by);
        self
    }

    /// Set the alphabet using builder pattern.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.set_alphabet(alphabet);
        self
    }

    /// Set the uncategorized placement using builder pattern.
    pub fn with_placement(mut self, placement: UncategorizedPlacement) -> Self {
        self.set_placement(placement);
        self
    }

    /// Put the uncategorized bucket first (`true`) or last (`false`).
    pub fn with_uncategorized_at_top(self, at_top: bool) -> Self {
        self.with_placement(UncategorizedPlacement::from_at_top(at_top))
    }

    /// Set the row height source using builder pattern.
    pub fn with_row_height(mut self, row_height: RowHeight) -> Self {
        self.set_row_height(row_height);
        self
    }

    /// Set a per-row height callback using builder pattern.
    pub fn with_row_height_fn<F>(self, f: F) -> Self
    where
        F: Fn(usize, usize) -> f32 + Send + Sync + 'static,
    {
        self.with_row_height(RowHeight::custom(f))
    }

    /// Set the section header height using builder pattern.
    pub fn with_section_header_height(mut self, height: f32) -> Self {
        self.set_section_header_height(height);
        self
    }

    /// Set the list header height using builder pattern.
    pub fn with_list_header_height(mut self, height: f32) -> Self {
        self.set_list_header_height(height);
        self
    }

    /// Set the scroll surface tuning using builder pattern.
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Set the delegate using builder pattern.
    pub fn with_delegate<D>(mut self, delegate: D) -> Self
    where
        D: SectionDelegate<T> + 'static,
    {
        self.set_delegate(Arc::new(delegate));
        self
    }

    /// Set per-slot render overrides using builder pattern.
    pub fn with_overrides(self, overrides: RenderOverrides<T>) -> Self {
        self.with_delegate(OverrideDelegate::new(overrides))
    }

    /// Set the navigator using builder pattern.
    pub fn with_navigator(mut self, navigator: IndexNavigator) -> Self {
        self.navigator = navigator;
        self
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// The entries, in input order.
    pub fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    /// Replaces the entries.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.set_shared_items(items.into_iter().map(Arc::new).collect());
    }

    /// Replaces the entries with already shared ones.
    pub fn set_shared_items(&mut self, items: Vec<Arc<T>>) {
        tracing::trace!(target: targets::WIDGET, items = items.len(), "items replaced");
        self.items = items;
        self.sections.invalidate();
    }

    /// The grouping source.
    pub fn group_by(&self) -> &GroupBy<T> {
        &self.group_by
    }

    /// Sets the grouping source.
    pub fn set_group_by(&mut self, group_by: GroupBy<T>) {
        if self.group_by != group_by {
            self.group_by = group_by;
            self.sections.invalidate();
        }
    }

    /// The bucket alphabet.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet.get()
    }

    /// Sets the bucket alphabet.
    pub fn set_alphabet(&mut self, alphabet: Alphabet) {
        if self.alphabet.set(alphabet) {
            self.sections.invalidate();
        }
    }

    /// Where the uncategorized bucket goes.
    pub fn placement(&self) -> UncategorizedPlacement {
        self.placement.get()
    }

    /// Sets where the uncategorized bucket goes.
    pub fn set_placement(&mut self, placement: UncategorizedPlacement) {
        if self.placement.set(placement) {
            self.sections.invalidate();
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// The row height source.
    pub fn row_height(&self) -> &RowHeight {
        &self.row_height
    }

    /// Sets the row height source.
    pub fn set_row_height(&mut self, row_height: RowHeight) {
        self.row_height = row_height;
    }

    /// Section header height.
    pub fn section_header_height(&self) -> f32 {
        self.section_header_height.get()
    }

    /// Sets the section header height.
    pub fn set_section_header_height(&mut self, height: f32) {
        self.section_header_height.set(height);
    }

    /// Height of the content above the first section.
    pub fn list_header_height(&self) -> f32 {
        self.list_header_height.get()
    }

    /// Sets the height of the content above the first section.
    pub fn set_list_header_height(&mut self, height: f32) {
        self.list_header_height.set(height);
    }

    /// The per-section and per-list heights.
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics::new(self.section_header_height.get(), self.list_header_height.get())
    }

    /// Scroll surface tuning.
    pub fn window(&self) -> WindowConfig {
        self.window
    }

    /// Sets the scroll surface tuning.
    pub fn set_window(&mut self, window: WindowConfig) {
        self.window = window;
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    /// The current section sequence, rebuilt if an input changed.
    pub fn sections(&self) -> SectionSequence<T> {
        let mut rebuilt = false;
        let sections = self.sections.get_or_update(|| {
            rebuilt = true;
            SectionBuilder::new()
                .with_group_by(self.group_by.clone())
                .with_alphabet(self.alphabet.get())
                .with_placement(self.placement.get())
                .build(&self.items)
        });

        if rebuilt {
            tracing::debug!(
                target: targets::WIDGET,
                revision = sections.revision(),
                sections = sections.len(),
                "sections rebuilt"
            );
            self.sections_changed.emit(sections.len());
        }
        sections
    }

    /// The layout table for the current sections and heights.
    pub fn layout(&self) -> Arc<LayoutIndex> {
        self.layout
            .get(&self.sections(), &self.row_height, self.metrics())
    }

    /// The letters of the strip, in section order.
    pub fn letters(&self) -> Vec<GroupKey> {
        self.navigator.letters_for(&self.sections())
    }

    /// The letter strip.
    pub fn letter_strip(&self) -> LetterStrip {
        self.navigator.strip_for(&self.sections())
    }

    /// The registration bundle for a windowed scroll surface.
    pub fn surface_model(&self) -> SurfaceModel<T> {
        let sections = self.sections();
        let layout = self.layout.get(&sections, &self.row_height, self.metrics());
        SurfaceModel::new(sections, layout, self.window)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// The navigator that turns letter presses into scroll commands.
    pub fn navigator(&self) -> IndexNavigator {
        self.navigator
    }

    /// Attaches the scroll surface letter presses are sent to.
    pub fn attach_surface(&self, surface: Arc<dyn ScrollSurface>) {
        tracing::debug!(target: targets::WIDGET, "scroll surface attached");
        *self.surface.write() = Some(surface);
    }

    /// Detaches the scroll surface. Later presses are dropped.
    pub fn detach_surface(&self) -> Option<Arc<dyn ScrollSurface>> {
        tracing::debug!(target: targets::WIDGET, "scroll surface detached");
        self.surface.write().take()
    }

    /// Returns `true` if a scroll surface is attached.
    pub fn has_surface(&self) -> bool {
        self.surface.read().is_some()
    }

    /// Handles a press on `letter` in the strip.
    ///
    /// Returns the command sent to the surface, or `None` if no section has
    /// that title. The command is returned even when no surface is attached.
    pub fn press_letter(&self, letter: GroupKey) -> Option<ScrollCommand> {
        self.letter_pressed.emit(letter);

        let command = self.navigator.on_letter_tapped(letter, &self.sections())?;
        self.scroll_requested.emit(command);

        // Clone out so the surface can re-enter the list.
        let surface = self.surface.read().clone();
        self.navigator.dispatch(command, surface.as_deref());
        Some(command)
    }

    /// Handles a drag over the strip at `fraction` (0.0 top, 1.0 bottom).
    pub fn press_letter_at(&self, fraction: f32) -> Option<ScrollCommand> {
        let letter = self.letter_strip().letter_at(fraction)?;
        self.press_letter(letter)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The delegate used by the `render_*` methods.
    pub fn delegate(&self) -> &Arc<dyn SectionDelegate<T>> {
        &self.delegate
    }

    /// Sets the delegate.
    pub fn set_delegate(&mut self, delegate: Arc<dyn SectionDelegate<T>>) {
        self.delegate = delegate;
    }

    /// Renders the row at (`section`, `row`).
    pub fn render_item(&self, section: usize, row: usize) -> Option<Element> {
        let sections = self.sections();
        let item = sections.item(section, row)?;
        Some(self.delegate.render_item(item))
    }

    /// Renders the header of `section`.
    pub fn render_section_header(&self, section: usize) -> Option<Element> {
        let sections = self.sections();
        let section = sections.get(section)?;
        Some(self.delegate.render_section_header(section))
    }

    /// Renders the content above the first section, if any.
    pub fn render_list_header(&self) -> Option<Element> {
        self.delegate.render_list_header()
    }

    /// Renders the letter strip.
    pub fn render_index_strip(&self) -> Element {
        self.delegate.render_index_strip(&self.letter_strip())
    }
}

impl<T: ListEntry + 'static> fmt::Debug for AlphabetList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphabetList")
            .field("items", &self.items.len())
            .field("group_by", &self.group_by)
            .field("alphabet", &self.alphabet)
            .field("placement", &self.placement)
            .field("row_height", &self.row_height)
            .field("metrics", &self.metrics())
            .field("window", &self.window)
            .field("has_surface", &self.has_surface())
            .finish()
    }
}
