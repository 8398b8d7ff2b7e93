//! Content layout: wrapping, row heights, column widths and alignment.
//!
//! Widths are computed per grid slot. Unspanned cells set the base width of
//! their slot; spanned cells then widen the slots they cover when their text
//! does not fit; finally, when an available width is set with filling on,
//! the leftover space is shared out in proportion to the slot widths.

use num_rational::Ratio;

use crate::ansi;
use crate::config::{Alignment, Borders, TableConfig, VerticalAlign};
use crate::grid::ResolvedRow;
use crate::wrap;

/// Extra visible width a cell gains from the padding and dividers it
/// swallows by spanning `span` slots.
#[must_use]
pub fn span_gap(span: usize, padding: usize) -> usize {
    span.saturating_sub(1) * (2 * padding + 1)
}

/// Total rendered width of a table with the given slot widths.
#[must_use]
pub fn rendered_width(slot_widths: &[usize], padding: usize, left: bool, right: bool) -> usize {
    if slot_widths.is_empty() {
        return 0;
    }
    let cells: usize = slot_widths.iter().map(|w| w + 2 * padding).sum();
    cells + (slot_widths.len() - 1) + usize::from(left) + usize::from(right)
}

/// Pad `line` with spaces to `width` visible cells.
///
/// Lines already at or beyond `width` are returned unchanged.
///
/// # Examples
///
/// ```
/// use boxtable::config::Alignment;
/// use boxtable::layout::align_line;
///
/// assert_eq!(align_line("ab", 5, Alignment::Left), "ab   ");
/// assert_eq!(align_line("ab", 5, Alignment::Center), " ab  ");
/// assert_eq!(align_line("ab", 5, Alignment::Right), "   ab");
/// ```
#[must_use]
pub fn align_line(line: &str, width: usize, alignment: Alignment) -> String {
    let visible = ansi::visible_width(line);
    let gap = width.saturating_sub(visible);
    let (before, after) = match alignment {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        Alignment::Center => (gap / 2, gap - gap / 2),
    };
    let mut out = String::with_capacity(line.len() + gap);
    out.extend(std::iter::repeat_n(' ', before));
    out.push_str(line);
    out.extend(std::iter::repeat_n(' ', after));
    out
}

/// Pad `lines` with blank lines up to `height` according to `valign`.
#[must_use]
pub fn pad_lines(lines: &[String], height: usize, valign: VerticalAlign) -> Vec<String> {
    let missing = height.saturating_sub(lines.len());
    let before = match valign {
        VerticalAlign::Top => 0,
        VerticalAlign::Middle => missing / 2,
        VerticalAlign::Bottom => missing,
    };
    let mut out = Vec::with_capacity(lines.len() + missing);
    out.extend(std::iter::repeat_n(String::new(), before));
    out.extend(lines.iter().cloned());
    out.extend(std::iter::repeat_n(String::new(), missing - before));
    out
}

fn max_line_width(lines: &[String]) -> usize {
    lines.iter().map(|l| ansi::visible_width(l)).max().unwrap_or(0)
}

/// Lay out `rows` in place and return the final slot widths.
///
/// Fills in `wrapped`, `lines`, `width` and `height` of every cell and the
/// height of every row.
pub fn format(rows: &mut [ResolvedRow], config: &TableConfig) -> Vec<usize> {
    wrap_cells(rows, config);

    let columns = rows.first().map_or(0, |r| r.spans.total());
    let mut widths = base_widths(rows, columns);
    grow_for_spans(rows, &mut widths, config.padding);

    if config.fill_width
        && let Some(available) = config.available_width
    {
        let left = config.borders.contains(Borders::LEFT);
        let right = config.borders.contains(Borders::RIGHT);
        let current = rendered_width(&widths, config.padding, left, right);
        if current < available {
            fill_widths(&mut widths, available - current);
        }
    }

    for row in rows.iter_mut() {
        let valign = config.vertical_align_for(row.role);
        let height = row.height;
        for cell in &mut row.cells {
            cell.width = cell.slots().map(|s| widths[s]).sum::<usize>()
                + span_gap(cell.span, config.padding);
            cell.lines = pad_lines(&cell.wrapped, height, valign)
                .iter()
                .map(|line| align_line(line, cell.width, cell.alignment))
                .collect();
            cell.height = height;
        }
    }

    widths
}

fn wrap_cells(rows: &mut [ResolvedRow], config: &TableConfig) {
    let wrap_width = config.effective_wrap_width();
    for row in rows.iter_mut() {
        for cell in &mut row.cells {
            cell.wrapped = wrap::wrap_text(&cell.text, wrap_width);
        }
        row.height = row.cells.iter().map(|c| c.wrapped.len()).max().unwrap_or(0);
    }
}

/// Width of each slot from the unspanned cells placed on it.
fn base_widths(rows: &[ResolvedRow], columns: usize) -> Vec<usize> {
    let mut widths = vec![0; columns];
    for cell in rows.iter().flat_map(|r| &r.cells) {
        if cell.span == 1
            && let Some(width) = widths.get_mut(cell.slot)
        {
            *width = (*width).max(max_line_width(&cell.wrapped));
        }
    }
    widths
}

/// Widen slots until every spanned cell fits across the slots it covers.
///
/// Narrower spans are settled first so that wider spans see their result.
/// Each missing column goes to the narrowest covered slot, leftmost first.
fn grow_for_spans(rows: &[ResolvedRow], widths: &mut [usize], padding: usize) {
    let mut jobs: Vec<(usize, usize, usize)> = rows
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.span > 1)
                .map(move |(c, cell)| (cell.span, r, c))
        })
        .collect();
    jobs.sort_unstable();

    for (span, r, c) in jobs {
        let cell = &rows[r].cells[c];
        let required = max_line_width(&cell.wrapped);
        let range = cell.slots();
        let mut available: usize =
            widths[range.clone()].iter().sum::<usize>() + span_gap(span, padding);
        if available >= required {
            continue;
        }

        log::trace!(
            "span of {span} at row {r} slot {} needs {} more columns",
            cell.slot,
            required - available
        );
        while available < required {
            let mut narrowest = range.start;
            for slot in range.clone() {
                if widths[slot] < widths[narrowest] {
                    narrowest = slot;
                }
            }
            widths[narrowest] += 1;
            available += 1;
        }
    }
}

/// Share `extra` columns among slots in proportion to their widths.
///
/// Each slot weighs `max(width, 1)`. Shares are floored; the columns lost to
/// rounding go one at a time to slots from the left.
pub fn fill_widths(widths: &mut [usize], extra: usize) {
    if widths.is_empty() || extra == 0 {
        return;
    }

    let weights: Vec<usize> = widths.iter().map(|&w| w.max(1)).collect();
    let total_weight: usize = weights.iter().sum();

    let mut distributed = 0;
    for (width, &weight) in widths.iter_mut().zip(&weights) {
        let share = (Ratio::new(weight, total_weight) * extra).floor().to_integer();
        *width += share;
        distributed += share;
    }

    let remainder = extra - distributed;
    log::trace!("fill: {extra} extra columns, {remainder} handed out by position");
    let count = widths.len();
    for i in 0..remainder {
        widths[i % count] += 1;
    }
}
