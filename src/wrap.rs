//! Escape-aware word wrapping for cell content.
//!
//! Lines are filled greedily with whitespace-separated words. A word wider
//! than the target is hard-broken, each piece ending in [`CONTINUATION`].
//! Widths are always visible widths, so styled and unstyled text break at
//! the same places.

use crate::ansi;
use crate::cells;

/// Marker appended to each piece of a hard-broken word.
pub const CONTINUATION: char = '-';

/// Wrap `text` so that no line is wider than `width` visible cells.
///
/// Newlines in the input always start a new line. An input line that already
/// fits is returned untouched, whitespace included. The result is never
/// empty: `""` wraps to `[""]`.
///
/// A `width` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use boxtable::wrap::wrap_text;
///
/// assert_eq!(wrap_text("hello world!", 10), vec!["hello", "world!"]);
/// assert_eq!(
///     wrap_text("hello world, antidisestablishmentarianism!", 16),
///     vec!["hello world,", "antidisestablis-", "hmentarianism!"],
/// );
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for line in text.split('\n') {
        wrap_line(line, width, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if ansi::visible_width(line) <= width {
        out.push(line.to_string());
        return;
    }

    let first = out.len();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = ansi::visible_width(word);

        // Zero-width words (bare escapes) stick to their neighbour.
        if word_width == 0 || current_width == 0 {
            current.push_str(word);
            current_width += word_width;
            if current_width <= width {
                continue;
            }
            let overflow = std::mem::take(&mut current);
            current = break_word(&overflow, width, out);
            current_width = ansi::visible_width(&current);
            continue;
        }

        if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        out.push(std::mem::take(&mut current));
        current = break_word(word, width, out);
        current_width = ansi::visible_width(&current);
    }

    if current_width == 0 && out.len() > first {
        // Only escapes left over; keep them with the text they trail.
        if let Some(last) = out.last_mut() {
            last.push_str(&current);
        }
    } else {
        out.push(current);
    }
}

/// Emit full-width pieces of `word` into `out`, returning the remainder.
fn break_word(word: &str, width: usize, out: &mut Vec<String>) -> String {
    let mut rest = word;
    while ansi::visible_width(rest) > width {
        let (head, tail) = if width > 1 {
            let (head, tail) = ansi::split_at_cells(rest, width - 1);
            if ansi::has_visible_text(head) {
                let mut piece = head.to_string();
                piece.push(CONTINUATION);
                (piece, tail)
            } else {
                let (head, tail) = split_progress(rest, width);
                (head.to_string(), tail)
            }
        } else {
            let (head, tail) = split_progress(rest, width);
            (head.to_string(), tail)
        };
        log::trace!("hard break at {width} cells: {head:?}");
        out.push(head);
        rest = tail;
    }
    rest.to_string()
}

/// Split without a marker, always consuming at least one visible glyph.
fn split_progress(text: &str, width: usize) -> (&str, &str) {
    let (head, tail) = ansi::split_at_cells(text, width);
    if ansi::has_visible_text(head) {
        return (head, tail);
    }

    let mut offset = 0;
    for token in ansi::tokens(text) {
        match token {
            ansi::Token::Escape(seq) => offset += seq.len(),
            ansi::Token::Text(run) => {
                for (i, c) in run.char_indices() {
                    if cells::get_character_cell_size(c) > 0 {
                        return text.split_at(offset + i + c.len_utf8());
                    }
                }
                offset += run.len();
            }
        }
    }
    (text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str, width: usize, want: &[&str]) {
        assert_eq!(wrap_text(input, width), want, "wrapping {input:?} at {width}");
    }

    #[test]
    fn test_no_wrap_required() {
        check("hello world!", 100, &["hello world!"]);
    }

    #[test]
    fn test_basic_wrap() {
        check("hello world!", 10, &["hello", "world!"]);
    }

    #[test]
    fn test_exact_length_word() {
        check("hello incredible world!", 10, &["hello", "incredible", "world!"]);
    }

    #[test]
    fn test_exact_total_fit() {
        check("it fit gud hooray", 10, &["it fit gud", "hooray"]);
    }

    #[test]
    fn test_break_word() {
        check(
            "hello world, antidisestablishmentarianism!",
            16,
            &["hello world,", "antidisestablis-", "hmentarianism!"],
        );
    }

    #[test]
    fn test_break_word_multiple_pieces() {
        check("abcdefghij", 4, &["abc-", "def-", "ghij"]);
    }

    #[test]
    fn test_new_lines() {
        check(
            "hello world\nthis is a\nlong sentence.",
            10,
            &["hello", "world", "this is a", "long", "sentence."],
        );
    }

    #[test]
    fn test_empty_string() {
        check("", 10, &[""]);
    }

    #[test]
    fn test_blank_line_between() {
        check("a\n\nb", 10, &["a", "", "b"]);
    }

    #[test]
    fn test_multiple_whitespace() {
        check("hello          world!", 10, &["hello", "world!"]);
    }

    #[test]
    fn test_whitespace_only_overflow() {
        check("            ", 4, &[""]);
    }

    #[test]
    fn test_ansi_codes() {
        check(
            "\x1b[37mhello this should be\x1b[38mover 4 lines!",
            10,
            &["\x1b[37mhello this", "should", "be\x1b[38mover 4", "lines!"],
        );
    }

    #[test]
    fn test_bare_escape_between_words() {
        check("aaaa \x1b[0m bbbb cc", 9, &["aaaa\x1b[0m bbbb", "cc"]);
    }

    #[test]
    fn test_wide_chars_break() {
        // 2 cells each; width-1 = 3 cells fits one glyph plus the marker.
        check("日本語テスト", 4, &["日-", "本-", "語-", "テ-", "スト"]);
    }

    #[test]
    fn test_width_one_makes_progress() {
        check("abc", 1, &["a", "b", "c"]);
        check("日本", 1, &["日", "本"]);
    }

    #[test]
    fn test_zero_width_treated_as_one() {
        check("ab", 0, &["a", "b"]);
    }
}
