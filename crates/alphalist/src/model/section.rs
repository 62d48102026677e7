//! Sections and the immutable section sequence snapshot.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::alphabet::GroupKey;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// One alphabetic bucket.
pub struct Section<T> {
    title: GroupKey,
    index: usize,
    items: Vec<Arc<T>>,
}

impl<T> Section<T> {
    pub(crate) fn new(title: GroupKey, index: usize, items: Vec<Arc<T>>) -> Self {
        Self {
            title,
            index,
            items,
        }
    }

    /// The bucket letter, or the uncategorized sentinel.
    pub fn title(&self) -> GroupKey {
        self.title
    }

    /// Position of this section in its sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Entries in input order.
    pub fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    /// Number of rows in the section.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the entry at `row`.
    pub fn get(&self, row: usize) -> Option<&T> {
        self.items.get(row).map(Arc::as_ref)
    }
}

impl<T> Clone for Section<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            index: self.index,
            items: self.items.clone(),
        }
    }
}

impl<T> fmt::Debug for Section<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("title", &self.title)
            .field("index", &self.index)
            .field("rows", &self.items.len())
            .finish()
    }
}

/// An immutable snapshot of the sections produced for the current input.
///
/// Cloning is cheap. Every build yields a new `revision`; derived caches use it
/// to tell snapshots apart without comparing contents.
pub struct SectionSequence<T> {
    sections: Arc<[Section<T>]>,
    revision: u64,
}

impl<T> SectionSequence<T> {
    /// An empty sequence. All empty sequences share revision 0.
    pub fn empty() -> Self {
        Self {
            sections: Arc::from(Vec::new()),
            revision: 0,
        }
    }

    pub(crate) fn new(sections: Vec<Section<T>>) -> Self {
        if sections.is_empty() {
            return Self::empty();
        }
        Self {
            sections: sections.into(),
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Identity of this snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the section at `index`.
    pub fn get(&self, index: usize) -> Option<&Section<T>> {
        self.sections.get(index)
    }

    /// Iterates sections in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section<T>> {
        self.sections.iter()
    }

    /// The sections as a slice.
    pub fn as_slice(&self) -> &[Section<T>] {
        &self.sections
    }

    /// Index of the section titled `key`.
    pub fn position_of(&self, key: GroupKey) -> Option<usize> {
        self.sections.iter().position(|s| s.title == key)
    }

    /// Total number of rows across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Section titles in order.
    pub fn titles(&self) -> Vec<GroupKey> {
        self.sections.iter().map(Section::title).collect()
    }

    /// Returns the entry at (`section`, `row`).
    pub fn item(&self, section: usize, row: usize) -> Option<&Arc<T>> {
        self.sections.get(section)?.items.get(row)
    }
}

impl<T> Clone for SectionSequence<T> {
    fn clone(&self) -> Self {
        Self {
            sections: Arc::clone(&self.sections),
            revision: self.revision,
        }
    }
}

impl<T> Default for SectionSequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for SectionSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionSequence")
            .field("revision", &self.revision)
            .field("sections", &self.sections)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a SectionSequence<T> {
    type Item = &'a Section<T>;
    type IntoIter = std::slice::Iter<'a, Section<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> SectionSequence<&'static str> {
        SectionSequence::new(vec![
            Section::new(GroupKey::Letter('A'), 0, vec![Arc::new("apple"), Arc::new("avocado")]),
            Section::new(GroupKey::Uncategorized, 1, vec![Arc::new("7-eleven")]),
        ])
    }

    #[test]
    fn test_sequence_accessors() {
        let seq = sequence();

        assert_eq!(seq.len(), 2);
        assert_eq!(seq.item_count(), 3);
        assert_eq!(seq.titles(), vec![GroupKey::Letter('A'), GroupKey::Uncategorized]);
        assert_eq!(seq.position_of(GroupKey::Uncategorized), Some(1));
        assert_eq!(seq.position_of(GroupKey::Letter('B')), None);
        assert_eq!(seq.item(0, 1).map(|s| **s), Some("avocado"));
        assert!(seq.item(1, 1).is_none());
        assert_eq!(seq.get(1).and_then(|s| s.get(0)), Some(&"7-eleven"));
    }

    #[test]
    fn test_revisions_are_unique() {
        let a = sequence();
        let b = sequence();

        assert_ne!(a.revision(), b.revision());
        assert_eq!(a.revision(), a.clone().revision());
        assert_eq!(SectionSequence::<()>::empty().revision(), 0);
        assert_eq!(SectionSequence::<()>::new(Vec::new()).revision(), 0);
    }
}
