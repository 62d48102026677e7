//! Partitioning entries into ordered alphabetic sections.
//!
//! Building is a pure function of the entries and the grouping configuration.
//! It scans the input once, sorts only the distinct bucket letters, and keeps
//! the input order of entries within each bucket.

use std::collections::HashMap;
use std::sync::Arc;

use alphalist_core::logging::{span_names, targets};
use alphalist_core::PerfSpan;
use serde::{Deserialize, Serialize};

use super::alphabet::{Alphabet, GroupKey};
use super::grouping::GroupBy;
use super::item::ListEntry;
use super::section::{Section, SectionSequence};

/// Where the uncategorized bucket goes in the section sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UncategorizedPlacement {
    /// Before all lettered sections.
    Top,
    /// After all lettered sections.
    #[default]
    Bottom,
}

impl UncategorizedPlacement {
    /// Maps the boolean "uncategorized at top" flag.
    pub fn from_at_top(at_top: bool) -> Self {
        if at_top {
            Self::Top
        } else {
            Self::Bottom
        }
    }

    /// Returns `true` for [`UncategorizedPlacement::Top`].
    pub fn is_top(self) -> bool {
        self == Self::Top
    }
}

/// Builds a [`SectionSequence`] from a flat slice of entries.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use alphalist::model::{Item, SectionBuilder, GroupKey};
///
/// let items: Vec<Arc<Item>> = ["Banana", "apple", "7-Eleven", "Avocado"]
///     .iter()
///     .enumerate()
///     .map(|(i, v)| Arc::new(Item::new(i.to_string(), *v)))
///     .collect();
///
/// let sections = SectionBuilder::new().build(&items);
/// assert_eq!(
///     sections.titles(),
///     vec![GroupKey::Letter('A'), GroupKey::Letter('B'), GroupKey::Uncategorized]
/// );
/// ```
pub struct SectionBuilder<T> {
    group_by: GroupBy<T>,
    alphabet: Alphabet,
    placement: UncategorizedPlacement,
}

impl<T: ListEntry> SectionBuilder<T> {
    /// Creates a builder grouping by display label, Unicode alphabet,
    /// uncategorized bucket at the bottom.
    pub fn new() -> Self {
        Self {
            group_by: GroupBy::Value,
            alphabet: Alphabet::Unicode,
            placement: UncategorizedPlacement::Bottom,
        }
    }

    /// Sets the grouping source.
    pub fn with_group_by(mut self, group_by: GroupBy<T>) -> Self {
        self.group_by = group_by;
        self
    }

    /// Sets the alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets the uncategorized bucket placement.
    pub fn with_placement(mut self, placement: UncategorizedPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Builds the section sequence for `items`.
    pub fn build(&self, items: &[Arc<T>]) -> SectionSequence<T> {
        partition(
            items,
            |entry| self.alphabet.classify(self.group_by.source_char(entry)),
            &self.alphabet,
            self.placement,
        )
    }
}

impl<T: ListEntry> Default for SectionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds sections with a caller-supplied grouping function.
///
/// `group_key_of` returns the character to bucket on; it is uppercased, and
/// `None` or a non-alphabetic character routes the entry to the
/// uncategorized bucket.
pub fn build_sections<T, F>(
    items: &[Arc<T>],
    group_key_of: F,
    uncategorized_at_top: bool,
) -> SectionSequence<T>
where
    F: Fn(&T) -> Option<char>,
{
    let alphabet = Alphabet::Unicode;
    partition(
        items,
        |entry| alphabet.classify(group_key_of(entry)),
        &alphabet,
        UncategorizedPlacement::from_at_top(uncategorized_at_top),
    )
}

fn partition<T, K>(
    items: &[Arc<T>],
    key_of: K,
    alphabet: &Alphabet,
    placement: UncategorizedPlacement,
) -> SectionSequence<T>
where
    K: Fn(&T) -> GroupKey,
{
    let _span = PerfSpan::new(span_names::BUILD_SECTIONS);

    let mut buckets: HashMap<GroupKey, Vec<Arc<T>>> = HashMap::new();
    for item in items {
        buckets.entry(key_of(item)).or_default().push(Arc::clone(item));
    }

    let uncategorized = buckets.remove(&GroupKey::Uncategorized);

    let mut lettered: Vec<(char, Vec<Arc<T>>)> = buckets
        .into_iter()
        .filter_map(|(key, rows)| key.letter().map(|c| (c, rows)))
        .collect();
    lettered.sort_unstable_by(|a, b| alphabet.compare(a.0, b.0));

    let mut ordered: Vec<(GroupKey, Vec<Arc<T>>)> = Vec::with_capacity(lettered.len() + 1);
    let trailing = match placement {
        UncategorizedPlacement::Top => {
            ordered.extend(uncategorized.map(|rows| (GroupKey::Uncategorized, rows)));
            None
        }
        UncategorizedPlacement::Bottom => uncategorized,
    };
    ordered.extend(lettered.into_iter().map(|(c, rows)| (GroupKey::Letter(c), rows)));
    ordered.extend(trailing.map(|rows| (GroupKey::Uncategorized, rows)));

    let sections: Vec<Section<T>> = ordered
        .into_iter()
        .enumerate()
        .map(|(index, (title, rows))| Section::new(title, index, rows))
        .collect();

    tracing::debug!(
        target: targets::MODEL,
        items = items.len(),
        sections = sections.len(),
        ?placement,
        "built section sequence"
    );

    SectionSequence::new(sections)
}
