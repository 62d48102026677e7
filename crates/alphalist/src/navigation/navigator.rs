//! Letter strip derivation and tap handling.

use alphalist_core::logging::targets;

use crate::model::{GroupKey, SectionSequence};

use super::scroll::{ScrollAlignment, ScrollCommand, ScrollSurface};

/// One navigable letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEntry {
    /// The letter, or the uncategorized sentinel.
    pub letter: GroupKey,
    /// Index of the section it jumps to.
    pub section_index: usize,
}

/// The ordered letters shown alongside the list.
///
/// Built 1:1 from the section titles, in section order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterStrip {
    entries: Vec<LetterEntry>,
}

impl LetterStrip {
    /// Number of letters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no letters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in strip order.
    pub fn entries(&self) -> &[LetterEntry] {
        &self.entries
    }

    /// Letters in strip order.
    pub fn letters(&self) -> Vec<GroupKey> {
        self.entries.iter().map(|e| e.letter).collect()
    }

    /// Strip position of `letter`.
    pub fn position(&self, letter: GroupKey) -> Option<usize> {
        self.entries.iter().position(|e| e.letter == letter)
    }

    /// The letter under a point along the strip, for drag scrubbing.
    ///
    /// `fraction` runs from 0.0 (top) to 1.0 (bottom) and is clamped.
    pub fn letter_at(&self, fraction: f32) -> Option<GroupKey> {
        if self.entries.is_empty() || fraction.is_nan() {
            return None;
        }
        let last = self.entries.len() - 1;
        let slot = (fraction.clamp(0.0, 1.0) * self.entries.len() as f32) as usize;
        Some(self.entries[slot.min(last)].letter)
    }
}

/// Maps letter taps to scroll commands.
///
/// # Example
///
/// ```ignore
/// use alphalist::navigation::IndexNavigator;
/// use alphalist::model::GroupKey;
///
/// let navigator = IndexNavigator::new();
/// if let Some(command) = navigator.on_letter_tapped(GroupKey::Letter('B'), &sections) {
///     navigator.dispatch(command, surface.as_deref());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexNavigator {
    alignment: ScrollAlignment,
    animated: bool,
}

impl Default for IndexNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexNavigator {
    /// Creates a navigator issuing animated, top-aligned commands.
    pub fn new() -> Self {
        Self {
            alignment: ScrollAlignment::Top,
            animated: true,
        }
    }

    /// Sets the alignment of issued commands.
    pub fn with_alignment(mut self, alignment: ScrollAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets whether issued commands animate.
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// The section titles, in section order.
    pub fn letters_for<T>(&self, sections: &SectionSequence<T>) -> Vec<GroupKey> {
        sections.titles()
    }

    /// The letter strip for `sections`.
    pub fn strip_for<T>(&self, sections: &SectionSequence<T>) -> LetterStrip {
        LetterStrip {
            entries: sections
                .iter()
                .map(|s| LetterEntry {
                    letter: s.title(),
                    section_index: s.index(),
                })
                .collect(),
        }
    }

    /// Resolves a tapped letter to a scroll command.
    ///
    /// Returns `None` when no section has that title, which happens when the
    /// strip was drawn from older data.
    pub fn on_letter_tapped<T>(
        &self,
        letter: GroupKey,
        sections: &SectionSequence<T>,
    ) -> Option<ScrollCommand> {
        let Some(section_index) = sections.position_of(letter) else {
            tracing::debug!(target: targets::NAVIGATION, %letter, "no section for tapped letter");
            return None;
        };

        Some(ScrollCommand {
            section_index,
            row_index: 0,
            animated: self.animated,
            alignment: self.alignment,
        })
    }

    /// Sends a command to the surface, fire-and-forget.
    ///
    /// A missing or rejecting surface drops the command. Returns whether the
    /// surface accepted it.
    pub fn dispatch(&self, command: ScrollCommand, surface: Option<&dyn ScrollSurface>) -> bool {
        let Some(surface) = surface else {
            tracing::debug!(target: targets::NAVIGATION, ?command, "scroll surface not attached, dropping command");
            return false;
        };

        match surface.scroll_to_location(&command) {
            Ok(()) => {
                tracing::trace!(target: targets::NAVIGATION, ?command, "scroll command delivered");
                true
            }
            Err(err) => {
                tracing::debug!(target: targets::NAVIGATION, ?command, %err, "scroll surface rejected command");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use alphalist_core::ScrollError;
    use parking_lot::Mutex;

    use crate::model::{Item, SectionBuilder, UncategorizedPlacement};

    fn fruit(placement: UncategorizedPlacement) -> SectionSequence<Item> {
        let items: Vec<Arc<Item>> = ["Banana", "apple", "7-Eleven", "Avocado"]
            .iter()
            .enumerate()
            .map(|(i, v)| Arc::new(Item::new((i + 1).to_string(), *v)))
            .collect();
        SectionBuilder::new().with_placement(placement).build(&items)
    }

    #[derive(Default)]
    struct Recorder {
        commands: Mutex<Vec<ScrollCommand>>,
    }

    impl ScrollSurface for Recorder {
        fn scroll_to_location(&self, command: &ScrollCommand) -> Result<(), ScrollError> {
            self.commands.lock().push(*command);
            Ok(())
        }
    }

    struct Unmounted;

    impl ScrollSurface for Unmounted {
        fn scroll_to_location(&self, _command: &ScrollCommand) -> Result<(), ScrollError> {
            Err(ScrollError::Detached)
        }
    }

    #[test]
    fn test_letters_mirror_section_order() {
        let navigator = IndexNavigator::new();

        let bottom = fruit(UncategorizedPlacement::Bottom);
        assert_eq!(
            navigator.letters_for(&bottom),
            vec![GroupKey::Letter('A'), GroupKey::Letter('B'), GroupKey::Uncategorized]
        );

        let top = fruit(UncategorizedPlacement::Top);
        let strip = navigator.strip_for(&top);
        assert_eq!(strip.letters(), navigator.letters_for(&top));
        assert_eq!(strip.position(GroupKey::Uncategorized), Some(0));
        for entry in strip.entries() {
            assert_eq!(top.get(entry.section_index).map(|s| s.title()), Some(entry.letter));
        }
    }

    #[test]
    fn test_tap_resolves_section() {
        let navigator = IndexNavigator::new();
        let sections = fruit(UncategorizedPlacement::Bottom);

        assert_eq!(
            navigator.on_letter_tapped(GroupKey::Letter('B'), &sections),
            Some(ScrollCommand {
                section_index: 1,
                row_index: 0,
                animated: true,
                alignment: ScrollAlignment::Top,
            })
        );
    }

    #[test]
    fn test_stale_tap_is_noop() {
        let navigator = IndexNavigator::new();
        let sections = fruit(UncategorizedPlacement::Bottom);

        assert_eq!(navigator.on_letter_tapped(GroupKey::Letter('Z'), &sections), None);
        assert_eq!(
            navigator.on_letter_tapped(GroupKey::Letter('A'), &SectionSequence::<Item>::empty()),
            None
        );
    }

    #[test]
    fn test_dispatch() {
        let navigator = IndexNavigator::new().with_animated(false);
        let command = navigator
            .on_letter_tapped(GroupKey::Uncategorized, &fruit(UncategorizedPlacement::Bottom))
            .unwrap();
        assert!(!command.animated);

        let recorder = Recorder::default();
        assert!(navigator.dispatch(command, Some(&recorder)));
        assert_eq!(*recorder.commands.lock(), vec![command]);

        assert!(!navigator.dispatch(command, None));
        assert!(!navigator.dispatch(command, Some(&Unmounted)));
    }

    #[test]
    fn test_letter_at() {
        let strip = IndexNavigator::new().strip_for(&fruit(UncategorizedPlacement::Bottom));

        assert_eq!(strip.letter_at(0.0), Some(GroupKey::Letter('A')));
        assert_eq!(strip.letter_at(0.5), Some(GroupKey::Letter('B')));
        assert_eq!(strip.letter_at(1.0), Some(GroupKey::Uncategorized));
        assert_eq!(strip.letter_at(7.0), Some(GroupKey::Uncategorized));
        assert_eq!(strip.letter_at(f32::NAN), None);
        assert_eq!(LetterStrip::default().letter_at(0.3), None);
    }
}
