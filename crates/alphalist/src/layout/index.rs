//! Cumulative offset table for a sectioned, variable-height list.
//!
//! The table is built in one pass over the section sequence. After that, the
//! pixel offset of any row, header, or flattened element is a table lookup,
//! and the element under a scroll offset is a binary search. This is what lets
//! a windowed renderer jump to a letter without measuring the rows in between.

use alphalist_core::logging::{span_names, targets};
use alphalist_core::PerfSpan;

use crate::model::SectionSequence;
use crate::navigation::{ScrollAlignment, ScrollCommand};

use super::metrics::{LayoutMetrics, RowHeight};

/// What a flattened element index refers to.
///
/// The flattened order matches a section list: each section contributes its
/// header, its rows, then a zero-height footer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatElement {
    /// The header of a section.
    SectionHeader { section: usize },
    /// A data row.
    Row { section: usize, row: usize },
    /// The (always empty) footer slot of a section.
    SectionFooter { section: usize },
}

/// Geometry of one flattened element, as consumed by a windowing engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Height of the element.
    pub length: f32,
    /// Distance from the top of the scroll content.
    pub offset: f32,
    /// Flattened index.
    pub index: usize,
    /// What the index refers to.
    pub element: FlatElement,
}

/// What lies under a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLocation {
    /// The leading list header.
    ListHeader,
    /// A section header.
    SectionHeader { section: usize },
    /// A data row.
    Row { section: usize, row: usize },
}

/// Offset table for one section sequence and one set of heights.
#[derive(Debug, Clone)]
pub struct LayoutIndex {
    revision: u64,
    metrics: LayoutMetrics,
    row_height: RowHeight,
    /// Top of each section header.
    header_offsets: Vec<f32>,
    /// Start of each section's slice in `row_tops`; one extra trailing entry.
    row_starts: Vec<usize>,
    /// Per section, the top of each row plus the section's end.
    row_tops: Vec<f32>,
    /// Cached row heights, parallel to rows (not to `row_tops`).
    row_heights: Vec<f32>,
    /// First flattened index of each section; one extra trailing entry.
    flat_starts: Vec<usize>,
    total_height: f32,
}

impl LayoutIndex {
    /// Builds the table.
    ///
    /// The row-height callback is called exactly once per row.
    pub fn build<T>(
        sections: &SectionSequence<T>,
        row_height: &RowHeight,
        metrics: LayoutMetrics,
    ) -> Self {
        let _span = PerfSpan::new(span_names::BUILD_LAYOUT);

        let section_count = sections.len();
        let row_count = sections.item_count();

        let mut header_offsets = Vec::with_capacity(section_count);
        let mut row_starts = Vec::with_capacity(section_count + 1);
        let mut row_tops = Vec::with_capacity(row_count + section_count);
        let mut row_heights = Vec::with_capacity(row_count);
        let mut flat_starts = Vec::with_capacity(section_count + 1);

        let mut y = metrics.list_header_height;
        let mut flat = 0;

        for (s, section) in sections.iter().enumerate() {
            header_offsets.push(y);
            row_starts.push(row_tops.len());
            flat_starts.push(flat);

            y += metrics.section_header_height;
            for r in 0..section.len() {
                let h = row_height.height(s, r);
                row_tops.push(y);
                row_heights.push(h);
                y += h;
            }
            // Section end; footers have zero height.
            row_tops.push(y);

            flat += section.len() + 2;
        }
        row_starts.push(row_tops.len());
        flat_starts.push(flat);

        tracing::debug!(
            target: targets::LAYOUT,
            sections = section_count,
            rows = row_count,
            total_height = y,
            "built layout index"
        );

        Self {
            revision: sections.revision(),
            metrics,
            row_height: row_height.clone(),
            header_offsets,
            row_starts,
            row_tops,
            row_heights,
            flat_starts,
            total_height: y,
        }
    }

    /// Returns `true` if this table was built from these inputs.
    pub fn matches(&self, revision: u64, row_height: &RowHeight, metrics: LayoutMetrics) -> bool {
        self.revision == revision && self.row_height == *row_height && self.metrics == metrics
    }

    /// Revision of the section sequence this table was built from.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The metrics this table was built with.
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.header_offsets.len()
    }

    /// Number of rows in `section`.
    pub fn row_count(&self, section: usize) -> Option<usize> {
        let (start, end) = self.row_range(section)?;
        Some(end - start)
    }

    /// Height of the row at (`section`, `row`).
    ///
    /// Served from the table when the row exists, otherwise from the callback.
    pub fn height_of(&self, section: usize, row: usize) -> f32 {
        self.row_range(section)
            .filter(|(start, end)| start + row < *end)
            .map(|(start, _)| self.row_heights[start - section + row])
            .unwrap_or_else(|| self.row_height.height(section, row))
    }

    /// Pixel offset of the top of row `row` in `section`.
    ///
    /// `row` may equal the row count, giving the end of the section.
    pub fn offset_for(&self, section: usize, row: usize) -> Option<f32> {
        let (start, end) = self.row_range(section)?;
        if start + row > end {
            return None;
        }
        Some(self.row_tops[start + row])
    }

    /// Pixel offset of the top of a section header.
    pub fn header_offset(&self, section: usize) -> Option<f32> {
        self.header_offsets.get(section).copied()
    }

    /// Height of a section: header plus all rows.
    pub fn section_height(&self, section: usize) -> Option<f32> {
        let top = self.header_offset(section)?;
        let (_, end) = self.row_range(section)?;
        Some(self.row_tops[end] - top)
    }

    /// Height of the whole scroll content.
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Number of flattened elements (headers, rows, footers).
    pub fn flat_len(&self) -> usize {
        self.flat_starts.last().copied().unwrap_or(0)
    }

    /// Flattened index of a row.
    pub fn flat_index(&self, section: usize, row: usize) -> Option<usize> {
        let rows = self.row_count(section)?;
        (row < rows).then(|| self.flat_starts[section] + 1 + row)
    }

    /// Geometry of a flattened element.
    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        if index >= self.flat_len() {
            return None;
        }

        let section = self.flat_starts.partition_point(|&start| start <= index) - 1;
        let local = index - self.flat_starts[section];
        let rows = self.row_count(section)?;

        let (element, offset, length) = if local == 0 {
            (
                FlatElement::SectionHeader { section },
                self.header_offsets[section],
                self.metrics.section_header_height,
            )
        } else if local <= rows {
            let row = local - 1;
            (
                FlatElement::Row { section, row },
                self.offset_for(section, row)?,
                self.height_of(section, row),
            )
        } else {
            (
                FlatElement::SectionFooter { section },
                self.offset_for(section, rows)?,
                0.0,
            )
        };

        Some(ItemLayout {
            length,
            offset,
            index,
            element,
        })
    }

    /// What lies under `offset`, or `None` outside the content.
    pub fn location_at(&self, offset: f32) -> Option<ListLocation> {
        if !(0.0..self.total_height).contains(&offset) {
            return None;
        }

        let Some(section) = self.sticky_section_at(offset) else {
            return Some(ListLocation::ListHeader);
        };

        let header_end = self.header_offsets[section] + self.metrics.section_header_height;
        if offset < header_end {
            return Some(ListLocation::SectionHeader { section });
        }

        let (start, end) = self.row_range(section)?;
        let tops = &self.row_tops[start..end];
        let row = tops.partition_point(|&top| top <= offset).checked_sub(1)?;
        Some(ListLocation::Row { section, row })
    }

    /// The section whose header should be pinned when the viewport top is at
    /// `offset`, or `None` while the list header is still showing.
    pub fn sticky_section_at(&self, offset: f32) -> Option<usize> {
        self.header_offsets
            .partition_point(|&top| top <= offset)
            .checked_sub(1)
    }

    /// Destination scroll offset for a command, clamped to the scrollable range.
    ///
    /// Top alignment leaves room for the section header above the target row,
    /// so targeting row 0 puts the header itself at the top edge.
    pub fn scroll_offset(&self, command: &ScrollCommand, viewport_height: f32) -> Option<f32> {
        let row_top = self.offset_for(command.section_index, command.row_index)?;
        let row_height = if Some(command.row_index) < self.row_count(command.section_index) {
            self.height_of(command.section_index, command.row_index)
        } else {
            0.0
        };

        let target = match command.alignment {
            ScrollAlignment::Top => row_top - self.metrics.section_header_height,
            ScrollAlignment::Center => row_top + row_height / 2.0 - viewport_height / 2.0,
            ScrollAlignment::Bottom => row_top + row_height - viewport_height,
        };

        let max = (self.total_height - viewport_height).max(0.0);
        Some(target.clamp(0.0, max))
    }

    /// Start (inclusive) and end (exclusive of the end-of-section entry) of a
    /// section's slice in `row_tops`.
    fn row_range(&self, section: usize) -> Option<(usize, usize)> {
        let start = *self.row_starts.get(section)?;
        let next = *self.row_starts.get(section + 1)?;
        Some((start, next - 1))
    }
}
