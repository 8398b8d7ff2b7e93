//! Drawing a resolved grid as text.
//!
//! The renderer walks the rows of a [`ResolvedGrid`], drawing a divider line
//! before each row when one is due, then the row's content lines, then the
//! closing line. Divider glyphs are chosen per slot boundary from the arms
//! that meet there, so spans and merged cells get the right junctions.
//!
//! Style escapes are tracked by a cursor that starts at [`Style::Normal`];
//! an escape is only written when the wanted style differs from the cursor.

use crate::r#box::Arms;
use crate::config::{Borders, TableConfig};
use crate::grid::{ResolvedGrid, ResolvedRow, RowRole};
use crate::style::Style;

/// Where the renderer is relative to the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    BeforeFirstRow,
    BetweenRows,
    AfterLastRow,
}

/// Output buffer that remembers the active style.
struct Painter {
    out: String,
    cursor: Style,
}

impl Painter {
    fn new() -> Self {
        Self {
            out: String::new(),
            cursor: Style::Normal,
        }
    }

    fn set_style(&mut self, style: Style) {
        if style != self.cursor {
            self.out.push_str(&style.escape());
            self.cursor = style;
        }
    }

    fn reset_style(&mut self) {
        self.set_style(Style::Normal);
    }

    fn push(&mut self, c: char) {
        self.out.push(c);
    }

    fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn repeat(&mut self, c: char, count: usize) {
        self.out.extend(std::iter::repeat_n(c, count));
    }
}

struct Renderer<'a> {
    grid: &'a ResolvedGrid,
    config: &'a TableConfig,
    painter: Painter,
    phase: Phase,
}

/// Render `grid` to a string.
///
/// An empty grid renders to an empty string.
#[must_use]
pub fn render(grid: &ResolvedGrid, config: &TableConfig) -> String {
    let mut renderer = Renderer {
        grid,
        config,
        painter: Painter::new(),
        phase: Phase::BeforeFirstRow,
    };
    renderer.run();
    renderer.painter.out
}

impl<'a> Renderer<'a> {
    fn border(&self, flag: Borders) -> bool {
        self.config.borders.contains(flag)
    }

    fn run(&mut self) {
        let grid = self.grid;
        let mut previous: Option<&'a ResolvedRow> = None;

        for row in &grid.rows {
            let draw = match self.phase {
                Phase::BeforeFirstRow => self.border(Borders::TOP),
                Phase::BetweenRows | Phase::AfterLastRow => {
                    self.config.row_lines
                        || previous.is_some_and(|p| p.role == RowRole::Header)
                }
            };
            if draw {
                self.divider_line(previous, Some(row));
            }
            self.content_lines(row);
            previous = Some(row);
            self.phase = Phase::BetweenRows;
        }

        if self.phase == Phase::BetweenRows {
            self.phase = Phase::AfterLastRow;
            if self.border(Borders::BOTTOM) {
                self.divider_line(previous, None);
            }
        }
    }

    /// Draw the horizontal line between `above` and `below`.
    ///
    /// `above` is `None` for the top border and `below` is `None` for the
    /// bottom border.
    fn divider_line(&mut self, above: Option<&ResolvedRow>, below: Option<&ResolvedRow>) {
        let columns = self.grid.column_count();
        let padding = self.grid.padding;
        let dividers = self.config.dividers;

        // Horizontal runs over a cell merged into the one above stay open.
        let open: Vec<bool> = (0..columns)
            .map(|slot| {
                below
                    .and_then(|row| row.cell_at(slot))
                    .is_some_and(|cell| cell.merge_above)
            })
            .collect();

        self.painter.set_style(self.config.line_style);
        for point in 0..=columns {
            let edge_hidden = (point == 0 && !self.border(Borders::LEFT))
                || (point == columns && !self.border(Borders::RIGHT));
            if !edge_hidden {
                let mut arms = Arms::empty();
                arms.set(
                    Arms::NORTH,
                    above.is_some_and(|row| row.spans.is_boundary(point)),
                );
                arms.set(
                    Arms::SOUTH,
                    below.is_some_and(|row| row.spans.is_boundary(point)),
                );
                arms.set(Arms::WEST, point > 0 && !open[point - 1]);
                arms.set(Arms::EAST, point < columns && !open[point]);
                self.painter.push(dividers.junction(arms).unwrap_or(' '));
            }

            if point < columns {
                let run = if open[point] { ' ' } else { dividers.ew };
                self.painter
                    .repeat(run, self.grid.slot_widths[point] + 2 * padding);
            }
        }
        self.painter.reset_style();
        self.painter.push('\n');
    }

    fn content_lines(&mut self, row: &ResolvedRow) {
        let padding = self.grid.padding;
        let ns = self.config.dividers.ns;
        let text_style = if row.role == RowRole::Header {
            self.config.header_style
        } else {
            Style::Normal
        };

        for y in 0..row.height {
            if self.border(Borders::LEFT) {
                self.vertical(ns);
            }
            for cell in &row.cells {
                self.painter.repeat(' ', padding);
                match cell.lines.get(y) {
                    Some(line) if cell.show_content => {
                        self.painter.set_style(text_style);
                        self.painter.push_str(line);
                        self.painter.reset_style();
                    }
                    _ => self.painter.repeat(' ', cell.width),
                }
                self.painter.repeat(' ', padding);
                if !cell.last || self.border(Borders::RIGHT) {
                    self.vertical(ns);
                }
            }
            self.painter.push('\n');
        }
    }

    fn vertical(&mut self, glyph: char) {
        self.painter.set_style(self.config.line_style);
        self.painter.push(glyph);
        self.painter.reset_style();
    }
}
