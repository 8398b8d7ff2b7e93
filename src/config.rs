//! Table configuration.
//!
//! [`TableConfig`] holds every knob that affects layout and drawing but not
//! the data itself. [`crate::Table`] exposes a setter for each field, and
//! [`crate::Table::config_mut`] hands out the struct for bulk changes.

use bitflags::bitflags;

use crate::r#box::{self, Dividers};
use crate::grid::RowRole;
use crate::style::Style;

/// Spaces on each side of every cell unless overridden.
pub const DEFAULT_PADDING: usize = 1;

/// Visible columns before cell text wraps unless overridden.
pub const DEFAULT_WRAP_WIDTH: usize = 60;

bitflags! {
    /// Which outer borders are drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Borders: u8 {
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

impl Default for Borders {
    fn default() -> Self {
        Self::all()
    }
}

/// Horizontal alignment of text within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    /// Centered; an odd leftover space goes on the right.
    Center,
    Right,
}

/// Vertical placement of text within a cell taller than its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    /// Centered; an odd leftover line goes below.
    Middle,
    Bottom,
}

/// Layout and drawing settings for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Outer borders to draw.
    pub borders: Borders,
    /// Whether a divider line separates consecutive content rows.
    pub row_lines: bool,
    /// Spaces on each side of every cell.
    pub padding: usize,
    /// Visible columns before cell text wraps. Zero behaves like one.
    pub wrap_width: usize,
    /// Glyphs used for lines and junctions.
    pub dividers: Dividers,
    /// Style applied to every border and divider glyph.
    pub line_style: Style,
    /// Style applied to header cell text.
    pub header_style: Style,
    /// Merge vertically adjacent identical content cells.
    pub auto_merge: bool,
    /// Merge vertically adjacent identical header cells.
    pub auto_merge_headers: bool,
    /// Vertical placement of header text, both within tall header rows and
    /// within merged header blocks.
    pub header_vertical_align: VerticalAlign,
    /// Total width available to the table, including borders.
    pub available_width: Option<usize>,
    /// Stretch columns so the table spans `available_width` exactly.
    pub fill_width: bool,
    /// Per-cell alignment for content rows.
    pub alignment: Vec<Alignment>,
    /// Per-cell alignment for header rows.
    pub header_alignment: Vec<Alignment>,
    /// Per-cell alignment for footer rows.
    pub footer_alignment: Vec<Alignment>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            borders: Borders::default(),
            row_lines: true,
            padding: DEFAULT_PADDING,
            wrap_width: DEFAULT_WRAP_WIDTH,
            dividers: r#box::UNICODE,
            line_style: Style::Normal,
            header_style: Style::Normal,
            auto_merge: false,
            auto_merge_headers: false,
            header_vertical_align: VerticalAlign::Top,
            available_width: None,
            fill_width: false,
            alignment: Vec::new(),
            header_alignment: Vec::new(),
            footer_alignment: Vec::new(),
        }
    }
}

impl TableConfig {
    /// Alignment for the cell at `index` of a row with the given role.
    ///
    /// Falls back to [`Alignment::Left`] for content and
    /// [`Alignment::Center`] for headers and footers.
    #[must_use]
    pub fn alignment_for(&self, role: RowRole, index: usize) -> Alignment {
        let (overrides, fallback) = match role {
            RowRole::Header => (&self.header_alignment, Alignment::Center),
            RowRole::Content => (&self.alignment, Alignment::Left),
            RowRole::Footer => (&self.footer_alignment, Alignment::Center),
        };
        overrides.get(index).copied().unwrap_or(fallback)
    }

    /// Vertical alignment used for rows with the given role.
    #[must_use]
    pub fn vertical_align_for(&self, role: RowRole) -> VerticalAlign {
        match role {
            RowRole::Header => self.header_vertical_align,
            RowRole::Content | RowRole::Footer => VerticalAlign::Top,
        }
    }

    /// Whether vertically adjacent cells of rows with `role` may merge.
    #[must_use]
    pub fn merges(&self, role: RowRole) -> bool {
        match role {
            RowRole::Header => self.auto_merge_headers,
            RowRole::Content => self.auto_merge,
            RowRole::Footer => false,
        }
    }

    /// Effective wrap width, never zero.
    #[must_use]
    pub fn effective_wrap_width(&self) -> usize {
        self.wrap_width.max(1)
    }
}
