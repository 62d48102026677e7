//! End-to-end tests for sectioning, layout, and letter navigation.

use std::collections::HashSet;
use std::sync::Arc;

use alphalist::layout::{FlatElement, ListLocation};
use alphalist::prelude::*;
use parking_lot::Mutex;

struct Contact {
    id: String,
    first: String,
    last: String,
}

impl Contact {
    fn new(id: u32, first: &str, last: &str) -> Self {
        Self {
            id: id.to_string(),
            first: first.to_string(),
            last: last.to_string(),
        }
    }
}

impl ListEntry for Contact {
    fn key(&self) -> &str {
        &self.id
    }

    fn value(&self) -> &str {
        &self.first
    }

    fn field(&self, name: &str) -> Option<&str> {
        (name == "last").then_some(self.last.as_str())
    }
}

fn contacts() -> Vec<Contact> {
    [
        ("Ada", "Lovelace"),
        ("Alan", "Turing"),
        ("Barbara", "Liskov"),
        ("Brian", "Kernighan"),
        ("Charles", "Babbage"),
        ("Dennis", "Ritchie"),
        ("Edsger", "Dijkstra"),
        ("Grace", "Hopper"),
        ("Ken", "Thompson"),
        ("Linus", "Torvalds"),
        ("Margaret", "Hamilton"),
        ("Niklaus", "Wirth"),
        ("Tim", "Berners-Lee"),
        ("42 Wallaby Way", ""),
    ]
    .iter()
    .enumerate()
    .map(|(i, (first, last))| Contact::new(i as u32, first, last))
    .collect()
}

/// A windowed scroll surface that keeps the registered model and jumps to
/// the offset the layout table gives it.
struct WindowedSurface {
    model: Mutex<Option<SurfaceModel<Contact>>>,
    viewport_height: f32,
    offset: Mutex<f32>,
}

impl WindowedSurface {
    fn new(viewport_height: f32) -> Self {
        Self {
            model: Mutex::new(None),
            viewport_height,
            offset: Mutex::new(0.0),
        }
    }

    fn register(&self, model: SurfaceModel<Contact>) {
        *self.model.lock() = Some(model);
    }

    fn offset(&self) -> f32 {
        *self.offset.lock()
    }
}

impl ScrollSurface for WindowedSurface {
    fn scroll_to_location(&self, command: &ScrollCommand) -> std::result::Result<(), ScrollError> {
        let guard = self.model.lock();
        let model = guard.as_ref().ok_or(ScrollError::Detached)?;

        let sections = model.sections();
        let section = sections
            .get(command.section_index)
            .ok_or(ScrollError::SectionOutOfRange {
                section: command.section_index,
                len: sections.len(),
            })?;
        if command.row_index >= section.len() {
            return Err(ScrollError::RowOutOfRange {
                section: command.section_index,
                row: command.row_index,
                len: section.len(),
            });
        }

        let offset = model
            .scroll_offset(command, self.viewport_height)
            .ok_or(ScrollError::Detached)?;
        *self.offset.lock() = offset;
        Ok(())
    }
}

#[test]
fn test_letter_press_scrolls_surface() {
    let list = AlphabetList::new(contacts());
    let surface = Arc::new(WindowedSurface::new(200.0));
    surface.register(list.surface_model());
    list.attach_surface(surface.clone());

    // 12 sections, 14 rows, 40 each
    let layout = list.layout();
    assert_eq!(layout.total_height(), 1040.0);

    let command = list.press_letter(GroupKey::Letter('C'));
    assert_eq!(command.map(|c| c.section_index), Some(2));
    assert_eq!(surface.offset(), 240.0);
    assert_eq!(layout.location_at(surface.offset()), Some(ListLocation::SectionHeader { section: 2 }));
    assert_eq!(layout.sticky_section_at(surface.offset() + 50.0), Some(2));

    // The last section cannot reach the top edge.
    list.press_letter(GroupKey::Uncategorized);
    assert_eq!(surface.offset(), 840.0);
}

#[test]
fn test_surface_rejections_are_dropped() {
    let list = AlphabetList::new(contacts());
    let surface = WindowedSurface::new(200.0);
    let navigator = list.navigator();

    let command = ScrollCommand::to_section(1);
    assert!(!navigator.dispatch(command, Some(&surface)));

    surface.register(list.surface_model());
    assert!(navigator.dispatch(command, Some(&surface)));
    assert!(!navigator.dispatch(ScrollCommand { row_index: 9, ..command }, Some(&surface)));
    assert!(!navigator.dispatch(ScrollCommand::to_section(40), Some(&surface)));
}

#[test]
fn test_group_by_field_with_custom_entry() {
    let list = AlphabetList::new(contacts())
        .with_group_by(GroupBy::field("last"))
        .with_uncategorized_at_top(true);

    let sections = list.sections();
    assert_eq!(sections.titles()[0], GroupKey::Uncategorized);
    assert_eq!(
        sections.get(0).map(|s| s.items()[0].first.clone()),
        Some("42 Wallaby Way".to_string())
    );

    let l = sections.position_of(GroupKey::Letter('L')).and_then(|i| sections.get(i));
    let names: Vec<&str> = l
        .map(|s| s.items().iter().map(|c| c.first.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Ada", "Barbara"]);
}

#[test]
fn test_scrub_across_strip() {
    let list = AlphabetList::new(contacts());
    let strip = list.letter_strip();

    assert_eq!(strip.len(), 12);
    assert_eq!(list.press_letter_at(0.0).map(|c| c.section_index), Some(0));
    assert_eq!(list.press_letter_at(1.0).map(|c| c.section_index), Some(11));
    assert_eq!(strip.letter_at(0.5), Some(GroupKey::Letter('K')));
}

/// Deterministic label generator covering letters, case, digits, symbols,
/// accents, and empty labels.
fn generated_items(count: usize) -> Vec<Item> {
    const FIRST: &[&str] = &[
        "a", "B", "c", "D", "e", "z", "Z", "é", "Ö", "1", "9", "#", "-", " ", "", "ß",
    ];
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|i| {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            let first = FIRST[(seed >> 33) as usize % FIRST.len()];
            Item::new(i.to_string(), format!("{first}label{i}"))
        })
        .collect()
}

#[test]
fn test_sectioning_properties() {
    let items = generated_items(300);

    for placement in [UncategorizedPlacement::Top, UncategorizedPlacement::Bottom] {
        let list = AlphabetList::new(items.clone()).with_placement(placement);
        let sections = list.sections();

        // Every entry lands in exactly one section.
        let mut keys: Vec<usize> = sections
            .iter()
            .flat_map(|s| s.items().iter().map(|i| i.key.parse::<usize>().unwrap()))
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, (0..items.len()).collect::<Vec<_>>());

        // Input order survives within a section.
        for section in &sections {
            let order: Vec<usize> = section.items().iter().map(|i| i.key.parse().unwrap()).collect();
            assert!(order.windows(2).all(|w| w[0] < w[1]));
        }

        // Lettered sections are sorted; the uncategorized one sits at an end.
        let titles = sections.titles();
        let letters: Vec<char> = titles.iter().filter_map(GroupKey::letter).collect();
        assert!(letters.windows(2).all(|w| w[0] < w[1]));
        let hash = sections.position_of(GroupKey::Uncategorized);
        match placement {
            UncategorizedPlacement::Top => assert_eq!(hash, Some(0)),
            UncategorizedPlacement::Bottom => assert_eq!(hash, Some(titles.len() - 1)),
        }

        // The strip mirrors the titles.
        let strip = list.letters();
        assert_eq!(strip, titles);
        assert_eq!(strip.iter().collect::<HashSet<_>>().len(), strip.len());
    }
}

#[test]
fn test_offsets_are_monotonic() {
    let list = AlphabetList::new(generated_items(120))
        .with_row_height_fn(|section, row| 20.0 + ((section * 7 + row * 3) % 5) as f32 * 4.0)
        .with_list_header_height(64.0);
    let model = list.surface_model();
    let layout = model.layout();

    let mut previous = 0.0_f32;
    for index in 0..layout.flat_len() {
        let item = model.item_layout(index).unwrap();
        assert_eq!(item.index, index);
        assert!(item.offset >= previous, "offset went backwards at {index}");
        if let FlatElement::Row { .. } | FlatElement::SectionHeader { .. } = item.element {
            assert!(item.offset + item.length > item.offset);
        }
        previous = item.offset;
    }
    assert_eq!(model.item_layout(layout.flat_len()), None);
    assert_eq!(layout.header_offset(0), Some(64.0));
}

#[test]
fn test_list_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.toml");
    std::fs::write(
        &path,
        r#"
        group_field = "last"
        alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        uncategorized = "top"
        list_header_height = 56.0

        [window]
        sticky_section_headers = false
        "#,
    )
    .unwrap();

    let config = ListConfig::load(&path).unwrap();
    let list = AlphabetList::from_config(contacts(), &config);

    assert_eq!(list.letters()[0], GroupKey::Uncategorized);
    assert_eq!(list.layout().header_offset(0), Some(56.0));
    assert!(!list.surface_model().window().sticky_section_headers);
}

#[test]
fn test_logging_during_rebuild() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("alphalist=trace")
        .with_test_writer()
        .try_init();

    let mut list = AlphabetList::new(contacts());
    assert_eq!(list.sections().len(), 12);
    list.set_items(Vec::new());
    assert!(list.sections().is_empty());
}
