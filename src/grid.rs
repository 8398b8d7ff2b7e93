//! Grid resolution.
//!
//! Turns the logical rows of a table (headers, content, footers, each with
//! an optional span list) into a rectangular grid: every row covers the same
//! number of grid slots, every cell knows which slot it starts at and how
//! many it covers. [`resolve`] then runs the layout and merge passes to
//! produce the [`ResolvedGrid`] the renderer draws.

use smallvec::SmallVec;

use crate::config::{Alignment, TableConfig};
use crate::{layout, merge};

/// Span list for one row, indexed by cell.
pub type Spans = SmallVec<[usize; 8]>;

/// Which section of the table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowRole {
    Header,
    Content,
    Footer,
}

/// A row as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalRow {
    pub role: RowRole,
    pub cells: Vec<String>,
    /// Span per cell. Missing entries and values below one count as one.
    pub spans: Spans,
}

impl LogicalRow {
    /// Create a row with no explicit spans.
    pub fn new<I, S>(role: RowRole, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role,
            cells: cells.into_iter().map(Into::into).collect(),
            spans: Spans::new(),
        }
    }

    /// The effective span of the cell at `index`.
    #[must_use]
    pub fn span_of(&self, index: usize) -> usize {
        self.spans.get(index).copied().unwrap_or(1).max(1)
    }

    /// Number of grid slots this row covers before padding.
    #[must_use]
    pub fn span_sum(&self) -> usize {
        (0..self.cells.len()).map(|i| self.span_of(i)).sum()
    }
}

/// Mapping between cell indexes and grid slots for one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanMap {
    starts: SmallVec<[usize; 8]>,
    total: usize,
}

impl SpanMap {
    /// Build the map for a row whose cells have the given spans.
    pub fn new(spans: impl IntoIterator<Item = usize>) -> Self {
        let mut starts = SmallVec::new();
        let mut total = 0;
        for span in spans {
            starts.push(total);
            total += span.max(1);
        }
        Self { starts, total }
    }

    /// Number of slots covered.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// First slot of the cell at `cell`.
    #[must_use]
    pub fn slot_of(&self, cell: usize) -> Option<usize> {
        self.starts.get(cell).copied()
    }

    /// Index of the cell covering `slot`.
    #[must_use]
    pub fn cell_at(&self, slot: usize) -> Option<usize> {
        if slot >= self.total {
            return None;
        }
        // starts is sorted and begins at 0, so the partition point is >= 1.
        Some(self.starts.partition_point(|&start| start <= slot) - 1)
    }

    /// Whether a cell starts exactly at `slot`.
    #[must_use]
    pub fn starts_at(&self, slot: usize) -> bool {
        self.starts.binary_search(&slot).is_ok()
    }

    /// Whether a vertical divider sits at the left of `slot`.
    ///
    /// Slot positions run from 0 (left edge) to `total()` (right edge).
    #[must_use]
    pub fn is_boundary(&self, slot: usize) -> bool {
        slot == self.total || self.starts_at(slot)
    }
}

/// A cell of the resolved grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCell {
    /// Text as supplied, escapes and newlines included.
    pub text: String,
    /// Wrapped lines before alignment.
    pub wrapped: Vec<String>,
    /// Lines padded to the row height and to exactly `width` visible cells.
    pub lines: Vec<String>,
    /// Visible width of every entry in `lines`.
    pub width: usize,
    pub span: usize,
    /// First grid slot covered.
    pub slot: usize,
    pub alignment: Alignment,
    pub first: bool,
    pub last: bool,
    /// Continues the identical cell directly above.
    pub merge_above: bool,
    /// Whether this cell prints its text; false inside a merged block
    /// everywhere but the row chosen to carry it.
    pub show_content: bool,
    pub height: usize,
}

impl ResolvedCell {
    fn new(text: String, slot: usize, span: usize, alignment: Alignment) -> Self {
        Self {
            text,
            wrapped: Vec::new(),
            lines: Vec::new(),
            width: 0,
            span,
            slot,
            alignment,
            first: false,
            last: false,
            merge_above: false,
            show_content: true,
            height: 0,
        }
    }

    /// Grid slots covered by this cell.
    #[must_use]
    pub fn slots(&self) -> std::ops::Range<usize> {
        self.slot..self.slot + self.span
    }

    /// Key used to compare vertically adjacent cells for merging: the
    /// rendered lines, so height and alignment count as well as text.
    #[must_use]
    pub fn merge_key(&self) -> String {
        self.lines.join("\n")
    }
}

/// A row of the resolved grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRow {
    pub role: RowRole,
    pub cells: Vec<ResolvedCell>,
    pub spans: SpanMap,
    /// First row of the whole table.
    pub first: bool,
    /// Last row of the whole table.
    pub last: bool,
    pub height: usize,
}

impl ResolvedRow {
    /// The cell covering `slot`.
    #[must_use]
    pub fn cell_at(&self, slot: usize) -> Option<&ResolvedCell> {
        self.spans.cell_at(slot).and_then(|i| self.cells.get(i))
    }
}

/// The fully laid out table, ready to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedGrid {
    pub rows: Vec<ResolvedRow>,
    /// Final width of each grid slot, padding excluded.
    pub slot_widths: Vec<usize>,
    pub padding: usize,
}

impl ResolvedGrid {
    /// Number of grid slots (columns).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.slot_widths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rendered width of the table in cells with the given edge borders.
    #[must_use]
    pub fn rendered_width(&self, left: bool, right: bool) -> usize {
        layout::rendered_width(&self.slot_widths, self.padding, left, right)
    }
}

/// Number of grid slots needed to hold every row.
#[must_use]
pub fn max_columns<'a>(rows: impl IntoIterator<Item = &'a LogicalRow>) -> usize {
    rows.into_iter().map(LogicalRow::span_sum).max().unwrap_or(0)
}

/// Expand logical rows into rectangular resolved rows.
///
/// Cells carry text, placement, alignment and edge flags; lines and widths
/// are left for the layout pass.
#[must_use]
pub fn build_rows(rows: &[&LogicalRow], config: &TableConfig) -> Vec<ResolvedRow> {
    let columns = max_columns(rows.iter().copied());
    if columns == 0 {
        return Vec::new();
    }

    let count = rows.len();
    rows.iter()
        .enumerate()
        .map(|(r, row)| {
            let mut spans: Spans = (0..row.cells.len()).map(|i| row.span_of(i)).collect();
            let mut texts = row.cells.clone();
            let mut covered = row.span_sum();
            while covered < columns {
                spans.push(1);
                texts.push(String::new());
                covered += 1;
            }

            let map = SpanMap::new(spans.iter().copied());
            let last_index = texts.len().saturating_sub(1);
            let cells = texts
                .into_iter()
                .zip(spans.iter().copied())
                .enumerate()
                .map(|(i, (text, span))| {
                    let slot = map.slot_of(i).unwrap_or(0);
                    let mut cell =
                        ResolvedCell::new(text, slot, span, config.alignment_for(row.role, i));
                    cell.first = i == 0;
                    cell.last = i == last_index;
                    cell
                })
                .collect();

            ResolvedRow {
                role: row.role,
                cells,
                spans: map,
                first: r == 0,
                last: r + 1 == count,
                height: 0,
            }
        })
        .collect()
}

/// Resolve rows into a drawable grid.
///
/// `rows` must already be in display order: headers, content, footers.
#[must_use]
pub fn resolve(rows: &[&LogicalRow], config: &TableConfig) -> ResolvedGrid {
    let mut resolved = build_rows(rows, config);
    if resolved.is_empty() {
        return ResolvedGrid {
            padding: config.padding,
            ..ResolvedGrid::default()
        };
    }

    let slot_widths = layout::format(&mut resolved, config);
    merge::detect(&mut resolved, config);

    log::debug!(
        "resolved grid: {} rows x {} columns, widths {:?}",
        resolved.len(),
        slot_widths.len(),
        slot_widths
    );

    ResolvedGrid {
        rows: resolved,
        slot_widths,
        padding: config.padding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(role: RowRole, cells: &[&str]) -> LogicalRow {
        LogicalRow::new(role, cells.iter().copied())
    }

    #[test]
    fn test_span_defaults() {
        let mut r = row(RowRole::Content, &["a", "b", "c"]);
        r.spans = Spans::from_slice(&[2, 0]);
        assert_eq!(r.span_of(0), 2);
        assert_eq!(r.span_of(1), 1);
        assert_eq!(r.span_of(2), 1);
        assert_eq!(r.span_sum(), 4);
    }

    #[test]
    fn test_span_map() {
        let map = SpanMap::new([1, 3, 2]);
        assert_eq!(map.total(), 6);
        assert_eq!(map.slot_of(0), Some(0));
        assert_eq!(map.slot_of(1), Some(1));
        assert_eq!(map.slot_of(2), Some(4));
        assert_eq!(map.slot_of(3), None);
        assert_eq!(map.cell_at(0), Some(0));
        assert_eq!(map.cell_at(2), Some(1));
        assert_eq!(map.cell_at(3), Some(1));
        assert_eq!(map.cell_at(5), Some(2));
        assert_eq!(map.cell_at(6), None);
        assert!(map.starts_at(4));
        assert!(!map.starts_at(2));
        assert!(map.is_boundary(0));
        assert!(map.is_boundary(6));
        assert!(!map.is_boundary(3));
    }

    #[test]
    fn test_max_columns_counts_spans() {
        let mut header = row(RowRole::Header, &["a", "b"]);
        header.spans = Spans::from_slice(&[1, 4]);
        let content = row(RowRole::Content, &["1", "2", "3"]);
        assert_eq!(max_columns([&header, &content]), 5);
    }

    #[test]
    fn test_build_rows_pads_short_rows() {
        let header = row(RowRole::Header, &["A", "B", "C"]);
        let short = row(RowRole::Content, &["1"]);
        let empty = row(RowRole::Content, &[]);
        let config = TableConfig::default();
        let rows = build_rows(&[&header, &short, &empty], &config);

        assert_eq!(rows.len(), 3);
        for r in &rows {
            assert_eq!(r.cells.len(), 3);
            assert_eq!(r.spans.total(), 3);
            assert!(r.cells[0].first);
            assert!(r.cells[2].last);
        }
        assert!(rows[0].first);
        assert!(rows[2].last);
        assert_eq!(rows[1].cells[1].text, "");
    }

    #[test]
    fn test_build_rows_alignment_by_role() {
        let header = row(RowRole::Header, &["A"]);
        let content = row(RowRole::Content, &["1"]);
        let footer = row(RowRole::Footer, &["F"]);
        let config = TableConfig::default();
        let rows = build_rows(&[&header, &content, &footer], &config);
        assert_eq!(rows[0].cells[0].alignment, Alignment::Center);
        assert_eq!(rows[1].cells[0].alignment, Alignment::Left);
        assert_eq!(rows[2].cells[0].alignment, Alignment::Center);
    }

    #[test]
    fn test_build_rows_without_cells_is_empty() {
        let blank = row(RowRole::Content, &[]);
        assert!(build_rows(&[&blank], &TableConfig::default()).is_empty());
    }

    #[test]
    fn test_resolve_empty() {
        let grid = resolve(&[], &TableConfig::default());
        assert!(grid.is_empty());
        assert_eq!(grid.column_count(), 0);
    }

    #[test]
    fn test_row_cell_at_spanned_slot() {
        let mut header = row(RowRole::Header, &["wide", "x"]);
        header.spans = Spans::from_slice(&[2]);
        let content = row(RowRole::Content, &["1", "2", "3"]);
        let grid = resolve(&[&header, &content], &TableConfig::default());
        let top = &grid.rows[0];
        assert_eq!(top.cell_at(1).map(|c| c.text.as_str()), Some("wide"));
        assert_eq!(top.cell_at(2).map(|c| c.text.as_str()), Some("x"));
    }
}
