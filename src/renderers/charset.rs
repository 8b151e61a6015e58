//! Glyph sets for boxes, lines and arrowheads, plus junction merging.

use crate::syntax::types::Direction;

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to use for box-drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode {
            CharSet::Unicode
        } else {
            CharSet::Ascii
        }
    }
}

// ─── BoxChars ────────────────────────────────────────────────────────────────

/// The glyphs a charset provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub tee_right: char, // ├
    pub tee_left: char,  // ┤
    pub tee_down: char,  // ┬
    pub tee_up: char,    // ┴
    pub cross: char,
    pub arrow_right: char,
    pub arrow_left: char,
    pub arrow_down: char,
    pub arrow_up: char,
}

impl BoxChars {
    pub const UNICODE: BoxChars = BoxChars {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        tee_right: '├',
        tee_left: '┤',
        tee_down: '┬',
        tee_up: '┴',
        cross: '┼',
        arrow_right: '►',
        arrow_left: '◄',
        arrow_down: '▼',
        arrow_up: '▲',
    };

    pub const ASCII: BoxChars = BoxChars {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
        tee_right: '+',
        tee_left: '+',
        tee_down: '+',
        tee_up: '+',
        cross: '+',
        arrow_right: '>',
        arrow_left: '<',
        arrow_down: 'v',
        arrow_up: '^',
    };

    pub fn for_charset(cs: CharSet) -> &'static BoxChars {
        match cs {
            CharSet::Unicode => &Self::UNICODE,
            CharSet::Ascii => &Self::ASCII,
        }
    }

    /// Arrowhead pointing along the flow direction.
    pub fn arrow_for(&self, direction: Direction) -> char {
        match direction {
            Direction::LR => self.arrow_right,
            Direction::RL => self.arrow_left,
            Direction::TB => self.arrow_down,
            Direction::BT => self.arrow_up,
        }
    }

    pub fn is_arrow(&self, c: char) -> bool {
        [self.arrow_right, self.arrow_left, self.arrow_down, self.arrow_up].contains(&c)
    }
}

// ─── Arms ────────────────────────────────────────────────────────────────────

/// Which arms of a line cell are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arms {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Arms {
    pub const HORIZONTAL: Arms = Arms::new(false, false, true, true);
    pub const VERTICAL: Arms = Arms::new(true, true, false, false);

    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// The single arm pointing from `(x0, y0)` to an orthogonal neighbour.
    pub fn toward(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self::new(y1 < y0, y1 > y0, x1 < x0, x1 > x0)
    }

    /// Decode a line glyph into its arms. Returns None for anything else,
    /// including arrowheads and label text.
    pub fn from_char(c: char) -> Option<Self> {
        let arms = match c {
            '─' | '-' => Self::HORIZONTAL,
            '│' | '|' => Self::VERTICAL,
            '┌' => Self::new(false, true, false, true),
            '┐' => Self::new(false, true, true, false),
            '└' => Self::new(true, false, false, true),
            '┘' => Self::new(true, false, true, false),
            '├' => Self::new(true, true, false, true),
            '┤' => Self::new(true, true, true, false),
            '┬' => Self::new(false, true, true, true),
            '┴' => Self::new(true, false, true, true),
            '┼' | '+' => Self::new(true, true, true, true),
            _ => return None,
        };
        Some(arms)
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    /// Glyph for this arm combination. A lone arm draws as a full line.
    pub fn to_char(self, cs: CharSet) -> char {
        let bc = BoxChars::for_charset(cs);
        match (self.up, self.down, self.left, self.right) {
            (false, false, false, false) => ' ',
            (_, _, false, false) => bc.vertical,
            (false, false, _, _) => bc.horizontal,
            (false, true, false, true) => bc.top_left,
            (false, true, true, false) => bc.top_right,
            (true, false, false, true) => bc.bottom_left,
            (true, false, true, false) => bc.bottom_right,
            (true, true, false, true) => bc.tee_right,
            (true, true, true, false) => bc.tee_left,
            (false, true, true, true) => bc.tee_down,
            (true, false, true, true) => bc.tee_up,
            (true, true, true, true) => bc.cross,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
