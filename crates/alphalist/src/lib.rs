//! Alphalist - an alphabetically sectioned list with letter-index navigation.
//!
//! Entries are grouped into one section per leading letter, plus an
//! uncategorized `#` section for entries that do not start with a letter.
//! A letter strip beside the list jumps straight to a section, and a
//! cumulative offset table lets a windowed scroll surface land there without
//! measuring the rows in between.
//!
//! This is the main crate; it re-exports the core signal, property, error,
//! and logging types from `alphalist-core`.
//!
//! # Example
//!
//! ```no_run
//! use alphalist::prelude::*;
//!
//! let list = AlphabetList::new(vec![
//!     Item::new("1", "Banana"),
//!     Item::new("2", "apple"),
//!     Item::new("3", "7-Eleven"),
//!     Item::new("4", "Avocado"),
//! ]);
//!
//! assert_eq!(
//!     list.letters(),
//!     vec![GroupKey::Letter('A'), GroupKey::Letter('B'), GroupKey::Uncategorized]
//! );
//!
//! let command = list.press_letter(GroupKey::Letter('B'));
//! assert_eq!(command.map(|c| c.section_index), Some(1));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Entries, grouping, and the section builder
//! - [`layout`]: The offset table a windowed renderer queries
//! - [`navigation`]: The letter strip and scroll commands
//! - [`widget`]: The list shell and render delegates
//! - [`config`]: Serializable list configuration

pub use alphalist_core::*;

pub mod config;
pub mod layout;
pub mod model;
pub mod navigation;
pub mod prelude;
pub mod widget;
