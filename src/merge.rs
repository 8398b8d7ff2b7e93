//! Vertical auto-merge of identical cells.
//!
//! A cell merges into the one directly above when both belong to the same
//! section, that section has merging enabled, both cover exactly the same
//! slots, and their rendered lines (text, alignment and row height) are
//! identical and not blank. A run of such
//! cells forms a block that is drawn as one tall cell: the dividers between
//! its rows are left open and only one row prints the text.

use crate::config::{TableConfig, VerticalAlign};
use crate::grid::{ResolvedCell, ResolvedRow};

/// Set `merge_above` and `show_content` on every cell of `rows`.
pub fn detect(rows: &mut [ResolvedRow], config: &TableConfig) {
    for r in 1..rows.len() {
        let (before, after) = rows.split_at_mut(r);
        let above = &before[r - 1];
        let row = &mut after[0];
        if row.role != above.role || !config.merges(row.role) {
            continue;
        }
        for cell in &mut row.cells {
            cell.merge_above = above
                .cell_at(cell.slot)
                .is_some_and(|upper| continues(upper, cell));
        }
    }

    place_content(rows, config);
}

fn continues(upper: &ResolvedCell, lower: &ResolvedCell) -> bool {
    if upper.slot != lower.slot || upper.span != lower.span {
        return false;
    }
    let key = lower.merge_key();
    !key.trim().is_empty() && key == upper.merge_key()
}

/// Choose the row of each merged block that prints the text.
fn place_content(rows: &mut [ResolvedRow], config: &TableConfig) {
    for r in 0..rows.len() {
        let valign = config.vertical_align_for(rows[r].role);
        for c in 0..rows[r].cells.len() {
            let cell = &rows[r].cells[c];
            if cell.merge_above {
                continue;
            }
            let slot = cell.slot;

            let mut length = 1;
            while rows
                .get(r + length)
                .and_then(|below| below.cell_at(slot))
                .is_some_and(|below| below.slot == slot && below.merge_above)
            {
                length += 1;
            }
            if length == 1 {
                continue;
            }

            let shown = match valign {
                VerticalAlign::Top => 0,
                VerticalAlign::Middle => (length - 1) / 2,
                VerticalAlign::Bottom => length - 1,
            };
            log::trace!(
                "merged block at row {r} slot {slot}: {length} rows, text in row {}",
                r + shown
            );
            for offset in 0..length {
                let row = &mut rows[r + offset];
                if let Some(index) = row.spans.cell_at(slot) {
                    row.cells[index].show_content = offset == shown;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Alignment;
    use crate::grid::{LogicalRow, RowRole, Spans, build_rows};
    use crate::layout;

    fn merged(rows: &[LogicalRow], config: &TableConfig) -> Vec<ResolvedRow> {
        let refs: Vec<&LogicalRow> = rows.iter().collect();
        let mut resolved = build_rows(&refs, config);
        layout::format(&mut resolved, config);
        detect(&mut resolved, config);
        resolved
    }

    fn flags(rows: &[ResolvedRow]) -> Vec<Vec<bool>> {
        rows.iter()
            .map(|r| r.cells.iter().map(|c| c.merge_above).collect())
            .collect()
    }

    fn merging() -> TableConfig {
        TableConfig {
            auto_merge: true,
            ..TableConfig::default()
        }
    }

    #[test]
    fn test_content_merge() {
        let rows = vec![
            LogicalRow::new(RowRole::Header, ["A", "B", "3"]),
            LogicalRow::new(RowRole::Content, ["", "2", "3"]),
            LogicalRow::new(RowRole::Content, ["", "2", "6"]),
            LogicalRow::new(RowRole::Content, ["1", "2", "6"]),
        ];
        let resolved = merged(&rows, &merging());
        assert_eq!(
            flags(&resolved),
            vec![
                vec![false, false, false],
                vec![false, false, false],
                vec![false, true, false],
                vec![false, true, true],
            ]
        );
        assert!(resolved[1].cells[1].show_content);
        assert!(!resolved[2].cells[1].show_content);
    }

    #[test]
    fn test_disabled_by_default() {
        let rows = vec![
            LogicalRow::new(RowRole::Content, ["x"]),
            LogicalRow::new(RowRole::Content, ["x"]),
        ];
        let resolved = merged(&rows, &TableConfig::default());
        assert!(!resolved[1].cells[0].merge_above);
    }

    #[test]
    fn test_never_crosses_sections() {
        let rows = vec![
            LogicalRow::new(RowRole::Header, ["x"]),
            LogicalRow::new(RowRole::Content, ["x"]),
            LogicalRow::new(RowRole::Content, ["x"]),
            LogicalRow::new(RowRole::Footer, ["x"]),
            LogicalRow::new(RowRole::Footer, ["x"]),
        ];
        let config = TableConfig {
            auto_merge: true,
            auto_merge_headers: true,
            ..TableConfig::default()
        };
        let resolved = merged(&rows, &config);
        assert_eq!(
            flags(&resolved),
            vec![vec![false], vec![false], vec![true], vec![false], vec![false]]
        );
    }

    #[test]
    fn test_blank_cells_do_not_merge() {
        let rows = vec![
            LogicalRow::new(RowRole::Content, ["  "]),
            LogicalRow::new(RowRole::Content, ["  "]),
        ];
        let resolved = merged(&rows, &merging());
        assert!(!resolved[1].cells[0].merge_above);
    }

    #[test]
    fn test_different_spans_do_not_merge() {
        let mut wide = LogicalRow::new(RowRole::Content, ["x"]);
        wide.spans = Spans::from_slice(&[2]);
        let rows = vec![wide, LogicalRow::new(RowRole::Content, ["x", "y"])];
        let resolved = merged(&rows, &merging());
        assert!(!resolved[1].cells[0].merge_above);
    }

    #[test]
    fn test_taller_row_does_not_merge() {
        let rows = vec![
            LogicalRow::new(RowRole::Content, ["x", "a"]),
            LogicalRow::new(RowRole::Content, ["x", "b\nc"]),
        ];
        let resolved = merged(&rows, &merging());
        assert_eq!(resolved[1].height, 2);
        assert!(!resolved[1].cells[0].merge_above);
    }

    #[test]
    fn test_different_alignment_does_not_merge() {
        let mut spanned = LogicalRow::new(RowRole::Content, ["ab", "x"]);
        spanned.spans = Spans::from_slice(&[2, 1]);
        let rows = vec![
            spanned,
            LogicalRow::new(RowRole::Content, ["a", "b", "x"]),
            LogicalRow::new(RowRole::Content, ["1", "2", "wide"]),
        ];
        let config = TableConfig {
            alignment: vec![Alignment::Left, Alignment::Right, Alignment::Left],
            ..merging()
        };
        let resolved = merged(&rows, &config);
        // Slot 2 holds "x" right-aligned above and left-aligned below.
        assert_eq!(resolved[0].cells[1].lines, ["   x"]);
        assert_eq!(resolved[1].cells[2].lines, ["x   "]);
        assert!(!resolved[1].cells[2].merge_above);
    }

    #[test]
    fn test_header_block_text_row_follows_valign() {
        let mut top = LogicalRow::new(RowRole::Header, ["Name", "Scores"]);
        top.spans = Spans::from_slice(&[1, 2]);
        let middle = LogicalRow::new(RowRole::Header, ["Name", "Low", "High"]);
        let bottom = LogicalRow::new(RowRole::Header, ["Name", "a", "b"]);
        let rows = vec![top, middle, bottom];

        for (valign, shown) in [
            (VerticalAlign::Top, 0),
            (VerticalAlign::Middle, 1),
            (VerticalAlign::Bottom, 2),
        ] {
            let config = TableConfig {
                auto_merge_headers: true,
                header_vertical_align: valign,
                ..TableConfig::default()
            };
            let resolved = merged(&rows, &config);
            let visible: Vec<bool> = resolved.iter().map(|r| r.cells[0].show_content).collect();
            let expected: Vec<bool> = (0..3).map(|i| i == shown).collect();
            assert_eq!(visible, expected, "{valign:?}");
            // Spanned header never merges with the unspanned cells below.
            assert!(!resolved[1].cells[1].merge_above);
        }
    }
}
