//! Box drawing characters for tables.
//!
//! A [`Dividers`] set names one glyph per junction role. Roles are spelled as
//! the compass arms the glyph connects: `nes` joins north, east and south
//! (`├`), `ew` is a plain horizontal run (`─`), `all` is the full cross.
//! The renderer works out which arms meet at a point and asks
//! [`Dividers::junction`] for the glyph.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// The arms meeting at a junction point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Arms: u8 {
        /// A vertical line continues upward.
        const NORTH = 1 << 0;
        /// A horizontal run continues to the right.
        const EAST = 1 << 1;
        /// A vertical line continues downward.
        const SOUTH = 1 << 2;
        /// A horizontal run continues to the left.
        const WEST = 1 << 3;
    }
}

/// Names of the eleven junction roles, in [`Dividers::from_strs`] order.
pub const ROLES: [&str; 11] = [
    "NES", "ESW", "NSW", "NEW", "ES", "SW", "NE", "NW", "ALL", "EW", "NS",
];

/// Box drawing character set.
///
/// Each field is the glyph for one junction role:
///
/// ```text
/// es ─ esw ─ sw        ┌─┬─┐
/// nes ─ all ─ nsw      ├─┼─┤
/// ne ─ new ─ nw        └─┴─┘
/// ```
///
/// `ns` is the vertical divider between and around cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dividers {
    pub nes: char,
    pub esw: char,
    pub nsw: char,
    pub new: char,
    pub es: char,
    pub sw: char,
    pub ne: char,
    pub nw: char,
    pub all: char,
    pub ew: char,
    pub ns: char,
}

/// Error returned when building a [`Dividers`] set from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DividerError {
    /// The glyph for `role` was an empty string.
    Empty { role: &'static str },
    /// The glyph for `role` was more than one character.
    MultiGlyph { role: &'static str, value: String },
}

impl fmt::Display for DividerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { role } => write!(f, "Divider {role} is empty"),
            Self::MultiGlyph { role, value } => {
                write!(f, "Divider {role} must be a single character, got {value:?}")
            }
        }
    }
}

impl std::error::Error for DividerError {}

impl Dividers {
    /// Create a divider set from one character per role.
    #[must_use]
    #[expect(
        clippy::too_many_arguments,
        reason = "struct constructor needs all fields"
    )]
    pub const fn new(
        nes: char,
        esw: char,
        nsw: char,
        new: char,
        es: char,
        sw: char,
        ne: char,
        nw: char,
        all: char,
        ew: char,
        ns: char,
    ) -> Self {
        Self {
            nes,
            esw,
            nsw,
            new,
            es,
            sw,
            ne,
            nw,
            all,
            ew,
            ns,
        }
    }

    /// Create a divider set from strings, in [`ROLES`] order.
    ///
    /// # Errors
    ///
    /// Returns [`DividerError`] naming the first role whose value is not
    /// exactly one character.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxtable::r#box::Dividers;
    ///
    /// let stars = Dividers::from_strs(["*"; 11]).unwrap();
    /// assert_eq!(stars.all, '*');
    /// assert!(Dividers::from_strs(["**"; 11]).is_err());
    /// ```
    pub fn from_strs(glyphs: [&str; 11]) -> Result<Self, DividerError> {
        let mut chars = [' '; 11];
        for ((slot, value), role) in chars.iter_mut().zip(glyphs).zip(ROLES) {
            let mut it = value.chars();
            match (it.next(), it.next()) {
                (None, _) => return Err(DividerError::Empty { role }),
                (Some(c), None) => *slot = c,
                (Some(_), Some(_)) => {
                    return Err(DividerError::MultiGlyph {
                        role,
                        value: value.to_string(),
                    });
                }
            }
        }
        let [nes, esw, nsw, new, es, sw, ne, nw, all, ew, ns] = chars;
        Ok(Self::new(nes, esw, nsw, new, es, sw, ne, nw, all, ew, ns))
    }

    /// The glyph joining `arms`, or `None` when no arm is present.
    ///
    /// A lone vertical arm draws as `ns` and a lone horizontal arm as `ew`.
    #[must_use]
    pub const fn junction(&self, arms: Arms) -> Option<char> {
        const N: u8 = Arms::NORTH.bits();
        const E: u8 = Arms::EAST.bits();
        const S: u8 = Arms::SOUTH.bits();
        const W: u8 = Arms::WEST.bits();

        let glyph = match arms.bits() {
            0 => return None,
            b if b == N | E | S | W => self.all,
            b if b == N | E | S => self.nes,
            b if b == E | S | W => self.esw,
            b if b == N | S | W => self.nsw,
            b if b == N | E | W => self.new,
            b if b == E | S => self.es,
            b if b == S | W => self.sw,
            b if b == N | E => self.ne,
            b if b == N | W => self.nw,
            b if b & (E | W) != 0 && b & (N | S) == 0 => self.ew,
            _ => self.ns,
        };
        Some(glyph)
    }
}

impl Default for Dividers {
    fn default() -> Self {
        UNICODE
    }
}

impl fmt::Display for Dividers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A sample 2x2 box
        let ew = self.ew;
        writeln!(f, "{}{ew}{}{ew}{}", self.es, self.esw, self.sw)?;
        writeln!(f, "{0} {0} {0}", self.ns)?;
        writeln!(f, "{}{ew}{}{ew}{}", self.nes, self.all, self.nsw)?;
        writeln!(f, "{0} {0} {0}", self.ns)?;
        write!(f, "{}{ew}{}{ew}{}", self.ne, self.new, self.nw)
    }
}

// ============================================================================
// Built-in Divider Sets
// ============================================================================

/// Unicode single-line box (the default).
pub const UNICODE: Dividers = Dividers::new(
    '\u{251C}', // ├
    '\u{252C}', // ┬
    '\u{2524}', // ┤
    '\u{2534}', // ┴
    '\u{250C}', // ┌
    '\u{2510}', // ┐
    '\u{2514}', // └
    '\u{2518}', // ┘
    '\u{253C}', // ┼
    '\u{2500}', // ─
    '\u{2502}', // │
);

/// Unicode single-line box with rounded corners.
pub const UNICODE_ROUNDED: Dividers = Dividers::new(
    '\u{251C}', // ├
    '\u{252C}', // ┬
    '\u{2524}', // ┤
    '\u{2534}', // ┴
    '\u{256D}', // ╭
    '\u{256E}', // ╮
    '\u{2570}', // ╰
    '\u{256F}', // ╯
    '\u{253C}', // ┼
    '\u{2500}', // ─
    '\u{2502}', // │
);

/// ASCII box (safe for all terminals).
pub const ASCII: Dividers = Dividers::new('+', '+', '+', '+', '+', '+', '+', '+', '+', '-', '|');

/// Heavy (thick) line box.
pub const UNICODE_HEAVY: Dividers = Dividers::new(
    '\u{2523}', // ┣
    '\u{2533}', // ┳
    '\u{252B}', // ┫
    '\u{253B}', // ┻
    '\u{250F}', // ┏
    '\u{2513}', // ┓
    '\u{2517}', // ┗
    '\u{251B}', // ┛
    '\u{254B}', // ╋
    '\u{2501}', // ━
    '\u{2503}', // ┃
);

/// Unicode double line box.
pub const UNICODE_DOUBLE: Dividers = Dividers::new(
    '\u{2560}', // ╠
    '\u{2566}', // ╦
    '\u{2563}', // ╣
    '\u{2569}', // ╩
    '\u{2554}', // ╔
    '\u{2557}', // ╗
    '\u{255A}', // ╚
    '\u{255D}', // ╝
    '\u{256C}', // ╬
    '\u{2550}', // ═
    '\u{2551}', // ║
);

/// Get a built-in divider set by name.
///
/// Accepts `unicode`, `rounded`, `ascii`, `heavy` and `double`, optionally
/// prefixed with `unicode_`, case-insensitively.
#[must_use]
pub fn get_dividers(name: &str) -> Option<&'static Dividers> {
    let lower = name.to_lowercase();
    match lower.strip_prefix("unicode_").unwrap_or(&lower) {
        "unicode" => Some(&UNICODE),
        "rounded" => Some(&UNICODE_ROUNDED),
        "ascii" => Some(&ASCII),
        "heavy" => Some(&UNICODE_HEAVY),
        "double" => Some(&UNICODE_DOUBLE),
        _ => None,
    }
}
