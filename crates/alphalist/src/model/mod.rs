//! Sectioning model for Alphalist.
//!
//! This module turns a flat collection of entries into an ordered sequence of
//! alphabetic sections.
//!
//! # Core Types
//!
//! - `ListEntry`: The trait entries implement; `Item` is the stock entry
//! - `GroupBy`: Where each entry's bucket letter comes from
//! - `Alphabet`: Which letters form buckets, and in what order
//! - `GroupKey`: A bucket letter or the uncategorized sentinel
//! - `SectionBuilder`: Partitions entries into a `SectionSequence`
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use alphalist::model::{GroupKey, Item, SectionBuilder, UncategorizedPlacement};
//!
//! let items = vec![
//!     Arc::new(Item::new("1", "Banana")),
//!     Arc::new(Item::new("2", "apple")),
//!     Arc::new(Item::new("3", "7-Eleven")),
//! ];
//!
//! let sections = SectionBuilder::new()
//!     .with_placement(UncategorizedPlacement::Top)
//!     .build(&items);
//!
//! assert_eq!(sections.titles()[0], GroupKey::Uncategorized);
//! ```

mod alphabet;
mod builder;
mod grouping;
mod item;
mod section;

pub use alphabet::{Alphabet, GroupKey, UNCATEGORIZED_TITLE};
pub use builder::{build_sections, SectionBuilder, UncategorizedPlacement};
pub use grouping::{GroupBy, KeyFn};
pub use item::{Item, ListEntry};
pub use section::{Section, SectionSequence};
