//! Spreadsheet-style cell references.
//!
//! Columns are written as letters (`A`..`Z`, `AA`, `AB`, ...) and rows as
//! 1-based numbers, so `A1` is `Pos::new(0, 0)` and `C10` is
//! `Pos::new(9, 2)`.

use crate::error::InvalidMazeError;
use crate::geom::Pos;

/// Convert a zero-based column index to its letter form (`0` -> `A`,
/// `26` -> `AA`).
pub fn to_column_letters(col: u32) -> String {
    let mut n = col as u64 + 1;
    let mut chars = Vec::new();
    while n > 0 {
        let r = ((n - 1) % 26) as u8;
        chars.push((b'A' + r) as char);
        n = (n - 1) / 26;
    }
    chars.iter().rev().collect()
}

/// Convert column letters back to a zero-based index.
///
/// Returns `None` for an empty string, non-uppercase characters, or
/// values that do not fit a column index.
pub fn from_column_letters(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    let mut n: u64 = 0;
    for b in s.bytes() {
        if !b.is_ascii_uppercase() {
            return None;
        }
        n = n * 26 + (b - b'A') as u64 + 1;
        if n > i32::MAX as u64 {
            return None;
        }
    }
    Some((n - 1) as u32)
}

impl Pos {
    /// Parse a reference such as `B7`.
    ///
    /// The row part must be a positive integer without leading zeros.
    pub fn parse_cell_ref(s: &str) -> Result<Pos, InvalidMazeError> {
        let invalid = || InvalidMazeError::InvalidCoordinate(s.to_string());
        let split = s
            .find(|c: char| !c.is_ascii_uppercase())
            .ok_or_else(invalid)?;
        let (letters, digits) = s.split_at(split);
        let col = from_column_letters(letters).ok_or_else(invalid)?;
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let row: i32 = digits.parse().map_err(|_| invalid())?;
        Ok(Pos::new(row - 1, col as i32))
    }

    /// Format this position as a reference such as `B7`.
    ///
    /// Returns `None` for negative coordinates.
    pub fn cell_ref(self) -> Option<String> {
        if self.row < 0 || self.col < 0 {
            return None;
        }
        Some(format!("{}{}", to_column_letters(self.col as u32), self.row + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_both_ways() {
        assert_eq!(to_column_letters(0), "A");
        assert_eq!(to_column_letters(25), "Z");
        assert_eq!(to_column_letters(26), "AA");
        assert_eq!(to_column_letters(27), "AB");
        assert_eq!(to_column_letters(701), "ZZ");
        assert_eq!(to_column_letters(702), "AAA");
        for i in [0, 1, 25, 26, 51, 52, 700, 701, 702, 18277] {
            assert_eq!(from_column_letters(&to_column_letters(i)), Some(i));
        }
    }

    #[test]
    fn bad_letters() {
        assert_eq!(from_column_letters(""), None);
        assert_eq!(from_column_letters("a"), None);
        assert_eq!(from_column_letters("A1"), None);
    }

    #[test]
    fn parse_refs() {
        assert_eq!(Pos::parse_cell_ref("A1").unwrap(), Pos::new(0, 0));
        assert_eq!(Pos::parse_cell_ref("C10").unwrap(), Pos::new(9, 2));
        assert_eq!(Pos::parse_cell_ref("AA3").unwrap(), Pos::new(2, 26));
    }

    #[test]
    fn reject_bad_refs() {
        for s in ["", "A", "1", "A0", "A01", "a1", "A1B", "A-1", "1A"] {
            let err = Pos::parse_cell_ref(s).unwrap_err();
            assert_eq!(err.code(), "INVALID_COORDINATE", "{s}");
        }
    }

    #[test]
    fn format_refs() {
        assert_eq!(Pos::new(0, 0).cell_ref().as_deref(), Some("A1"));
        assert_eq!(Pos::new(7, 27).cell_ref().as_deref(), Some("AB8"));
        assert_eq!(Pos::new(-1, 0).cell_ref(), None);
    }
}
