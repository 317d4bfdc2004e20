//! The [`Cell`] type: the state of a single maze square.

use std::fmt;

/// State of a maze square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

impl Cell {
    /// Whether the square can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    /// Whether the square is a wall.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// Map a character from a textual maze to a cell.
    ///
    /// `#` and `1` are walls; `.`, `0` and space are open. Anything else is
    /// rejected.
    pub const fn from_char(ch: char) -> Option<Cell> {
        match ch {
            '#' | '1' => Some(Cell::Wall),
            '.' | '0' | ' ' => Some(Cell::Open),
            _ => None,
        }
    }

    /// Canonical character used when rendering.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Wall => '#',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mapping() {
        assert_eq!(Cell::from_char('#'), Some(Cell::Wall));
        assert_eq!(Cell::from_char('1'), Some(Cell::Wall));
        assert_eq!(Cell::from_char('.'), Some(Cell::Open));
        assert_eq!(Cell::from_char('0'), Some(Cell::Open));
        assert_eq!(Cell::from_char(' '), Some(Cell::Open));
        assert_eq!(Cell::from_char('x'), None);
        assert_eq!(Cell::Wall.to_char(), '#');
        assert!(Cell::default().is_open());
    }
}
