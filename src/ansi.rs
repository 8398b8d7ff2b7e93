//! Measurement of text carrying ANSI SGR escape sequences.
//!
//! Cell text may arrive pre-styled (`"\x1b[32mok\x1b[0m"`). Escapes occupy no
//! columns on screen, so every width decision in the table goes through
//! [`visible_width`]. Only sequences of the form `ESC [ <digits and ;> m` are
//! recognised; anything else, including a dangling `ESC`, is ordinary text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::cells;

static SGR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("invalid regex"));

/// A run of a styled string: either an escape sequence or plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A complete SGR escape sequence.
    Escape(&'a str),
    /// Text between escape sequences.
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// The underlying slice.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Escape(s) | Self::Text(s) => s,
        }
    }
}

/// Iterator over the [`Token`]s of a string, in order.
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    matches: regex::Matches<'static, 'a>,
    pending: Option<regex::Match<'a>>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_none() {
            self.pending = self.matches.next();
        }
        match self.pending {
            Some(m) if m.start() == self.pos => {
                self.pending = None;
                self.pos = m.end();
                Some(Token::Escape(m.as_str()))
            }
            Some(m) => {
                let text = &self.text[self.pos..m.start()];
                self.pos = m.start();
                Some(Token::Text(text))
            }
            None if self.pos < self.text.len() => {
                let text = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Token::Text(text))
            }
            None => None,
        }
    }
}

/// Split a string into escape and text runs.
#[must_use]
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        pos: 0,
        matches: SGR_PATTERN.find_iter(text),
        pending: None,
    }
}

/// Remove every SGR escape sequence.
#[must_use]
pub fn strip(text: &str) -> Cow<'_, str> {
    SGR_PATTERN.replace_all(text, "")
}

/// Visible width of `text` in terminal cells, ignoring escape sequences.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    if text.contains('\x1b') {
        cells::cell_len(&strip(text))
    } else {
        cells::cell_len(text)
    }
}

/// Whether `text` has any visible glyphs once escapes are removed.
#[must_use]
pub fn has_visible_text(text: &str) -> bool {
    visible_width(text) > 0
}

/// Split styled text after at most `max_cells` visible cells.
///
/// Escape sequences directly at the split point travel with the right-hand
/// side, where they style the text that follows. If the right-hand side would
/// contain nothing visible, the whole input is returned on the left.
#[must_use]
pub fn split_at_cells(text: &str, max_cells: usize) -> (&str, &str) {
    let mut width = 0;
    let mut split = 0;
    let mut offset = 0;

    'scan: for token in tokens(text) {
        match token {
            Token::Escape(seq) => offset += seq.len(),
            Token::Text(run) => {
                let (head, tail) = cells::chop_cells(run, max_cells - width);
                if !head.is_empty() {
                    width += cells::cell_len(head);
                    split = offset + head.len();
                }
                if !tail.is_empty() {
                    break 'scan;
                }
                offset += run.len();
            }
        }
    }

    let (left, right) = text.split_at(split);
    if has_visible_text(right) {
        (left, right)
    } else {
        (text, "")
    }
}
