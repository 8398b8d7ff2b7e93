//! Golden file (snapshot) tests for visual regression detection.
//!
//! These tests capture the rendered output of representative tables and
//! detect regressions by comparing against the stored snapshots.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all golden tests
//! cargo test --test golden_test
//!
//! # Update snapshots when intentional changes are made
//! cargo insta test --accept
//!
//! # Review pending snapshots interactively
//! cargo insta review
//! ```
//!
//! ## Environment Variables
//!
//! - `INSTA_UPDATE=always` - Auto-accept new snapshots
//! - `INSTA_UPDATE=unseen` - Only update new snapshots, fail on changed
//! - `INSTA_UPDATE=no` - Never update, fail on any difference

mod common;

use boxtable::ansi;
use boxtable::prelude::*;
use common::{init_test_logging, rendered};

/// Render `table` and drop any SGR escapes.
fn plain(table: Table<Vec<u8>>) -> String {
    ansi::strip(&rendered(table)).into_owned()
}

#[test]
fn golden_table_inventory() {
    init_test_logging();
    let mut table = Table::new(Vec::new());
    table.set_headers(["Item", "Qty", "Price"]);
    table.add_row(["Apple", "14", "0.50"]);
    table.add_row(["Banana", "88041", "0.25"]);
    table.set_footers(["Total", "88055", ""]);
    table.set_alignment([Alignment::Left, Alignment::Right, Alignment::Right]);

    insta::assert_snapshot!("table_inventory", plain(table));
}

#[test]
fn golden_table_grouped_merge() {
    init_test_logging();
    let mut table = Table::new(Vec::new());
    table.set_auto_merge(true);
    table.set_headers(["Region", "City"]);
    table.add_row(["North", "Oslo"]);
    table.add_row(["North", "Bergen"]);
    table.add_row(["South", "Rome"]);

    insta::assert_snapshot!("table_grouped_merge", plain(table));
}

#[test]
fn golden_table_ascii_no_row_lines() {
    init_test_logging();
    let mut table = Table::new(Vec::new());
    table.set_dividers(ASCII);
    table.set_row_lines(false);
    table.set_headers(["A", "B"]);
    table.add_row(["x", "y"]);
    table.add_row(["z", "w"]);

    insta::assert_snapshot!("table_ascii_no_row_lines", plain(table));
}

#[test]
fn golden_table_wrapped_padding() {
    init_test_logging();
    let mut table = Table::new(Vec::new());
    table.set_wrap_width(10);
    table.set_padding(2);
    table.set_headers(["Key", "Notes"]);
    table.add_row(["a", "short words wrap around nicely"]);

    insta::assert_snapshot!("table_wrapped_padding", plain(table));
}

#[test]
fn golden_table_double_spanned() {
    init_test_logging();
    let mut table = Table::new(Vec::new());
    table.set_dividers(UNICODE_DOUBLE);
    table.add_row_with_spans(["Summary"], [3]);
    table.add_row(["a", "b", "c"]);

    insta::assert_snapshot!("table_double_spanned", plain(table));
}

#[test]
fn golden_table_styled_plain() {
    init_test_logging();
    let mut table = Table::new(Vec::new());
    table.set_line_style(Style::BrightBlack);
    table.set_header_style(Style::Bold);
    table.set_headers(["Item", "Qty", "Price"]);
    table.add_row(["Apple", "14", "0.50"]);
    table.add_row(["Banana", "88041", "0.25"]);
    table.set_footers(["Total", "88055", ""]);
    table.set_alignment([Alignment::Left, Alignment::Right, Alignment::Right]);

    // Styling must not move a single visible cell.
    insta::assert_snapshot!("table_inventory", plain(table));
}
