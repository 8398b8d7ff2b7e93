//! Terminal width detection.
//!
//! Used by [`crate::Table::set_available_width_from_terminal`] to size a
//! table to the terminal it is printed in.

/// Get the terminal size (width, height) in cells.
///
/// Returns `None` if the terminal size cannot be determined.
#[must_use]
pub fn get_terminal_size() -> Option<(usize, usize)> {
    crossterm::terminal::size()
        .ok()
        .filter(|&(w, h)| w > 0 && h > 0)
        .map(|(w, h)| (usize::from(w), usize::from(h)))
}

/// Width available for output, in cells.
///
/// Asks the terminal first and falls back to the `COLUMNS` environment
/// variable. Returns `None` when neither is usable.
#[must_use]
pub fn get_terminal_width() -> Option<usize> {
    get_terminal_size()
        .map(|(w, _)| w)
        .or_else(|| parse_columns(std::env::var("COLUMNS").ok().as_deref()))
}

fn parse_columns(columns: Option<&str>) -> Option<usize> {
    columns?.trim().parse::<usize>().ok().filter(|&w| w > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_terminal_size() {
        // Result depends on the test environment; only check consistency.
        if let Some((w, h)) = get_terminal_size() {
            assert!(w > 0 && h > 0);
        }
    }

    #[test]
    fn test_parse_columns() {
        assert_eq!(parse_columns(Some("120")), Some(120));
        assert_eq!(parse_columns(Some(" 80 ")), Some(80));
        assert_eq!(parse_columns(Some("0")), None);
        assert_eq!(parse_columns(Some("wide")), None);
        assert_eq!(parse_columns(None), None);
    }
}
