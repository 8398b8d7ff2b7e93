//! Display width of plain text in terminal cells.
//!
//! Wide glyphs (CJK, most emoji) take two cells, combining marks and control
//! characters none. Escape sequences are not recognised here; styled text is
//! measured through [`crate::ansi`].

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use unicode_width::UnicodeWidthChar;

use crate::sync::lock_recover;

/// Strings shorter than this many bytes are measured directly.
const CACHE_MIN_LEN: usize = 8;

const CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(1024).unwrap();

/// Widths of recently measured cell texts. The same strings are measured
/// several times per render (wrap, column sizing, alignment).
static WIDTH_CACHE: LazyLock<Mutex<LruCache<String, usize>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(CACHE_CAPACITY)));

/// Cells occupied by `c`: 0, 1 or 2.
#[must_use]
pub fn get_character_cell_size(c: char) -> usize {
    c.width().unwrap_or(0)
}

fn measure(text: &str) -> usize {
    text.chars().map(get_character_cell_size).sum()
}

/// Total cells occupied by `text`.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    if text.len() < CACHE_MIN_LEN {
        return measure(text);
    }

    if let Some(&width) = lock_recover(&WIDTH_CACHE).get(text) {
        return width;
    }

    let width = measure(text);
    lock_recover(&WIDTH_CACHE).put(text.to_owned(), width);
    width
}

/// Split `text` so the left part fills at most `max_cells` cells.
///
/// Zero-width characters right after the limit stay on the left; a wide
/// character that would cross the limit goes right.
#[must_use]
pub fn chop_cells(text: &str, max_cells: usize) -> (&str, &str) {
    let mut width = 0;
    let mut end = 0;

    for (i, c) in text.char_indices() {
        width += get_character_cell_size(c);
        if width > max_cells {
            break;
        }
        end = i + c.len_utf8();
    }

    text.split_at(end)
}
