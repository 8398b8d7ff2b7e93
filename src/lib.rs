//! # boxtable
//!
//! Box-drawn tables for the terminal.
//!
//! A [`Table`] collects header, content and footer rows and draws them with
//! Unicode or ASCII box-drawing characters. Cell text is wrapped to a
//! configurable width, may carry ANSI colour escapes, may span several
//! columns, and identical cells in consecutive rows can be merged into one.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxtable::prelude::*;
//!
//! let mut table = Table::new(std::io::stdout());
//! table.set_headers(["ID", "Fruit", "Stock"]);
//! table.add_row(["1", "Apple", "14"]);
//! table.add_row(["2", "Banana", "88,041"]);
//! table.set_alignment([Alignment::Left, Alignment::Left, Alignment::Right]);
//! table.render();
//! ```
//!
//! ## Pipeline
//!
//! Every render runs the same passes over the rows:
//!
//! 1. [`grid`]: rows are padded so each covers the same number of grid slots.
//! 2. [`layout`]: text is wrapped ([`wrap`]), slot widths are computed, and
//!    every line is aligned to its cell's width.
//! 3. [`merge`]: identical cells in consecutive rows are flagged for merging.
//! 4. [`render`]: divider and content lines are drawn.
//!
//! All width calculations go through [`ansi::visible_width`], which ignores
//! SGR escape sequences and counts wide characters as two cells.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod ansi;
pub mod r#box;
pub mod cells;
pub mod config;
pub mod grid;
pub mod ingest;
pub mod layout;
pub mod merge;
pub mod render;
pub mod style;
pub mod sync;
pub mod table;
pub mod terminal;
pub mod wrap;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::r#box::{
        ASCII, Dividers, UNICODE, UNICODE_DOUBLE, UNICODE_HEAVY, UNICODE_ROUNDED, get_dividers,
    };
    pub use crate::config::{Alignment, Borders, TableConfig, VerticalAlign};
    pub use crate::ingest::IngestError;
    pub use crate::style::Style;
    pub use crate::table::Table;
}

// Re-export key types at crate root
pub use r#box::{DividerError, Dividers};
pub use config::{Alignment, Borders, TableConfig, VerticalAlign};
pub use grid::{ResolvedGrid, RowRole};
pub use ingest::IngestError;
pub use style::{Style, StyleParseError};
pub use table::Table;
