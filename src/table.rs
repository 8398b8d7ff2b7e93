//! The [`Table`] facade.
//!
//! A table accumulates header, content and footer rows plus configuration,
//! and renders them to the sink it was created with. Every render resolves
//! the grid from scratch, so rows and settings may change between renders.
//!
//! # Examples
//!
//! ```
//! use boxtable::Table;
//!
//! let mut table = Table::new(Vec::new());
//! table.set_headers(["A", "B", "C"]);
//! table.add_row(["1", "2", "3"]);
//! table.render();
//!
//! let output = String::from_utf8(table.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "┌───┬───┬───┐\n│ A │ B │ C │\n├───┼───┼───┤\n│ 1 │ 2 │ 3 │\n└───┴───┴───┘\n"
//! );
//! ```

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::r#box::Dividers;
use crate::config::{Alignment, Borders, TableConfig, VerticalAlign};
use crate::grid::{self, LogicalRow, ResolvedGrid, RowRole, Spans};
use crate::render;
use crate::style::Style;
use crate::terminal;

/// A table bound to an output sink.
#[derive(Debug)]
pub struct Table<W: Write> {
    sink: W,
    headers: Section,
    rows: Section,
    footers: Section,
    config: TableConfig,
}

/// The rows of one table section.
///
/// Spans may be set before the row they belong to is added; they are held
/// by row index and attached when that row arrives.
#[derive(Debug)]
struct Section {
    role: RowRole,
    rows: Vec<LogicalRow>,
    pending: BTreeMap<usize, Spans>,
}

impl Section {
    fn new(role: RowRole) -> Self {
        Self {
            role,
            rows: Vec::new(),
            pending: BTreeMap::new(),
        }
    }

    fn push<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(LogicalRow::new(self.role, cells));
    }

    /// Append `row`. Spans held for its index apply unless it brings its own.
    fn push_row(&mut self, mut row: LogicalRow) {
        let held = self.pending.remove(&self.rows.len());
        if row.spans.is_empty()
            && let Some(spans) = held
        {
            row.spans = spans;
        }
        self.rows.push(row);
    }

    fn replace<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.clear();
        self.push(cells);
    }

    fn set_spans(&mut self, index: usize, spans: Spans) {
        match self.rows.get_mut(index) {
            Some(row) => row.spans = spans,
            None => {
                log::debug!(
                    "holding column spans for {:?} row {index} until it is added",
                    self.role
                );
                self.pending.insert(index, spans);
            }
        }
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.pending.clear();
    }
}

impl<W: Write> Table<W> {
    /// Create an empty table with default settings that renders to `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            headers: Section::new(RowRole::Header),
            rows: Section::new(RowRole::Content),
            footers: Section::new(RowRole::Footer),
            config: TableConfig::default(),
        }
    }

    /// Consume the table, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    // ------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------

    /// Replace all header rows with a single row.
    pub fn set_headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.replace(headers);
        self
    }

    /// Append another header row below the existing ones.
    pub fn add_headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.push(headers);
        self
    }

    /// Replace all footer rows with a single row.
    pub fn set_footers<I, S>(&mut self, footers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footers.replace(footers);
        self
    }

    /// Append another footer row below the existing ones.
    pub fn add_footers<I, S>(&mut self, footers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footers.push(footers);
        self
    }

    /// Append a content row. Rows may have any number of cells; short rows
    /// are padded with empty cells when rendered.
    pub fn add_row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells);
        self
    }

    /// Append several content rows.
    pub fn add_rows<R, I, S>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    /// Append a content row whose cells span the given numbers of columns.
    pub fn add_row_with_spans<I, S, P>(&mut self, cells: I, spans: P) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        P: IntoIterator<Item = usize>,
    {
        let mut row = LogicalRow::new(RowRole::Content, cells);
        row.spans = spans.into_iter().collect();
        self.rows.push_row(row);
        self
    }

    /// Set column spans for the header row at `row_index`.
    ///
    /// If that row does not exist yet, the spans apply once it is added.
    pub fn set_header_col_spans(
        &mut self,
        row_index: usize,
        spans: impl IntoIterator<Item = usize>,
    ) -> &mut Self {
        self.headers.set_spans(row_index, spans.into_iter().collect());
        self
    }

    /// Set column spans for the content row at `row_index`, now or once the
    /// row is added.
    pub fn set_col_spans(
        &mut self,
        row_index: usize,
        spans: impl IntoIterator<Item = usize>,
    ) -> &mut Self {
        self.rows.set_spans(row_index, spans.into_iter().collect());
        self
    }

    /// Set column spans for the footer row at `row_index`, now or once the
    /// row is added.
    pub fn set_footer_col_spans(
        &mut self,
        row_index: usize,
        spans: impl IntoIterator<Item = usize>,
    ) -> &mut Self {
        self.footers.set_spans(row_index, spans.into_iter().collect());
        self
    }

    // ------------------------------------------------------------------
    // Alignment
    // ------------------------------------------------------------------

    /// Alignment of content cells, by cell index.
    pub fn set_alignment(&mut self, columns: impl IntoIterator<Item = Alignment>) -> &mut Self {
        self.config.alignment = columns.into_iter().collect();
        self
    }

    /// Alignment of header cells, by cell index.
    pub fn set_header_alignment(
        &mut self,
        columns: impl IntoIterator<Item = Alignment>,
    ) -> &mut Self {
        self.config.header_alignment = columns.into_iter().collect();
        self
    }

    /// Alignment of footer cells, by cell index.
    pub fn set_footer_alignment(
        &mut self,
        columns: impl IntoIterator<Item = Alignment>,
    ) -> &mut Self {
        self.config.footer_alignment = columns.into_iter().collect();
        self
    }

    pub fn set_header_vertical_alignment(&mut self, align: VerticalAlign) -> &mut Self {
        self.config.header_vertical_align = align;
        self
    }

    // ------------------------------------------------------------------
    // Borders and lines
    // ------------------------------------------------------------------

    /// Enable or disable all four outer borders.
    pub fn set_borders(&mut self, enabled: bool) -> &mut Self {
        self.config.borders = if enabled {
            Borders::all()
        } else {
            Borders::empty()
        };
        self
    }

    pub fn set_border_left(&mut self, enabled: bool) -> &mut Self {
        self.config.borders.set(Borders::LEFT, enabled);
        self
    }

    pub fn set_border_top(&mut self, enabled: bool) -> &mut Self {
        self.config.borders.set(Borders::TOP, enabled);
        self
    }

    pub fn set_border_right(&mut self, enabled: bool) -> &mut Self {
        self.config.borders.set(Borders::RIGHT, enabled);
        self
    }

    pub fn set_border_bottom(&mut self, enabled: bool) -> &mut Self {
        self.config.borders.set(Borders::BOTTOM, enabled);
        self
    }

    /// Draw divider lines between content rows.
    pub fn set_row_lines(&mut self, enabled: bool) -> &mut Self {
        self.config.row_lines = enabled;
        self
    }

    pub fn set_dividers(&mut self, dividers: Dividers) -> &mut Self {
        self.config.dividers = dividers;
        self
    }

    pub fn set_line_style(&mut self, style: Style) -> &mut Self {
        self.config.line_style = style;
        self
    }

    pub fn set_header_style(&mut self, style: Style) -> &mut Self {
        self.config.header_style = style;
        self
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Spaces on each side of every cell.
    pub fn set_padding(&mut self, padding: usize) -> &mut Self {
        self.config.padding = padding;
        self
    }

    /// Visible columns before cell text wraps.
    pub fn set_wrap_width(&mut self, width: usize) -> &mut Self {
        self.config.wrap_width = width;
        self
    }

    pub fn set_auto_merge(&mut self, enabled: bool) -> &mut Self {
        self.config.auto_merge = enabled;
        self
    }

    pub fn set_auto_merge_headers(&mut self, enabled: bool) -> &mut Self {
        self.config.auto_merge_headers = enabled;
        self
    }

    /// Total width the table may occupy, borders included.
    pub fn set_available_width(&mut self, width: impl Into<Option<usize>>) -> &mut Self {
        self.config.available_width = width.into();
        self
    }

    /// Stretch columns to fill the available width.
    pub fn set_fill_width(&mut self, enabled: bool) -> &mut Self {
        self.config.fill_width = enabled;
        self
    }

    /// Use the width of the controlling terminal as the available width.
    ///
    /// Returns the detected width, leaving the setting untouched when none
    /// could be found.
    pub fn set_available_width_from_terminal(&mut self) -> Option<usize> {
        let width = terminal::get_terminal_width();
        match width {
            Some(w) => self.config.available_width = Some(w),
            None => log::debug!(
                "terminal width unavailable, keeping {:?}",
                self.config.available_width
            ),
        }
        width
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TableConfig {
        &mut self.config
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Whether the table has no rows in any section.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.rows.is_empty()
            && self.rows.rows.is_empty()
            && self.footers.rows.is_empty()
    }

    /// Number of content rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.rows.len()
    }

    /// Remove all header, content and footer rows and any spans waiting for
    /// rows. Settings are kept.
    pub fn clear(&mut self) {
        self.headers.clear();
        self.rows.clear();
        self.footers.clear();
    }

    /// Lay out the table without drawing it.
    #[must_use]
    pub fn resolve(&self) -> ResolvedGrid {
        let rows: Vec<&LogicalRow> = self
            .headers
            .rows
            .iter()
            .chain(&self.rows.rows)
            .chain(&self.footers.rows)
            .collect();
        grid::resolve(&rows, &self.config)
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render the table to a string without touching the sink.
    #[must_use]
    pub fn render_to_string(&self) -> String {
        render::render(&self.resolve(), &self.config)
    }

    /// Render the table to the sink.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to or flushing the sink.
    pub fn try_render(&mut self) -> io::Result<()> {
        let output = self.render_to_string();
        if output.is_empty() {
            return Ok(());
        }
        self.sink.write_all(output.as_bytes())?;
        self.sink.flush()
    }

    /// Render the table to the sink, ignoring write errors.
    ///
    /// Failures are logged at debug level; use [`Table::try_render`] to
    /// handle them.
    pub fn render(&mut self) {
        if let Err(err) = self.try_render() {
            log::debug!("table render failed: {err}");
        }
    }
}
