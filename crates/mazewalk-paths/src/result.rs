//! Search outputs and failures.

use std::fmt;
use std::str::FromStr;

use mazewalk_core::{InvalidMazeError, Pos};

/// Which traversal to compute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Fewest steps from the entrance to the exit row.
    #[cfg_attr(feature = "serde", serde(rename = "min"))]
    Shortest,
    /// Most steps along a simple path from the entrance to the exit row.
    #[cfg_attr(feature = "serde", serde(rename = "max"))]
    Longest,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Shortest => f.write_str("min"),
            Mode::Longest => f.write_str("max"),
        }
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Mode::Shortest),
            "max" => Ok(Mode::Longest),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// A mode name other than `min` or `max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode \u{201c}{}\u{201d}, expected min or max", self.0)
    }
}

impl std::error::Error for UnknownMode {}

// ---------------------------------------------------------------------------
// PathResult
// ---------------------------------------------------------------------------

/// A finished traversal: the cells from entrance to exit, its step count and
/// the mode that produced it.
///
/// Deserializing ignores any stored `length` and recounts it from `path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PathResultData"))]
pub struct PathResult {
    path: Vec<Pos>,
    length: usize,
    mode: Mode,
}

impl PathResult {
    /// Wrap a path. Its length is the number of steps (cells − 1).
    pub fn new(path: Vec<Pos>, mode: Mode) -> Self {
        let length = path.len().saturating_sub(1);
        Self { path, length, mode }
    }

    /// A result holding no path.
    pub fn empty(mode: Mode) -> Self {
        Self::new(Vec::new(), mode)
    }

    /// Cells from entrance to exit.
    #[inline]
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// Number of steps. `0` for a one-cell or empty path.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// The mode that produced this result.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether no path is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The reached exit cell.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.path.last().copied()
    }

    /// The path as spreadsheet references (`["A1", "A2", ...]`).
    pub fn cell_refs(&self) -> Vec<String> {
        self.path.iter().filter_map(|p| p.cell_ref()).collect()
    }

    /// Take the path out.
    pub fn into_path(self) -> Vec<Pos> {
        self.path
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathResultData {
    path: Vec<Pos>,
    mode: Mode,
}

#[cfg(feature = "serde")]
impl From<PathResultData> for PathResult {
    fn from(data: PathResultData) -> Self {
        PathResult::new(data.path, data.mode)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} path, {} steps:", self.mode, self.length)?;
        for (i, p) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " ->")?;
            }
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// How a search ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The search space was exhausted; the result is exact.
    Complete(PathResult),
    /// The search was stopped early. The result is the best path found so
    /// far and may be empty.
    Cancelled(PathResult),
}

impl Outcome {
    /// The carried result.
    pub fn result(&self) -> &PathResult {
        match self {
            Outcome::Complete(r) | Outcome::Cancelled(r) => r,
        }
    }

    /// Take the carried result.
    pub fn into_result(self) -> PathResult {
        match self {
            Outcome::Complete(r) | Outcome::Cancelled(r) => r,
        }
    }

    /// Whether the search stopped before exhausting its space.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled(_))
    }
}

// ---------------------------------------------------------------------------
// SearchError
// ---------------------------------------------------------------------------

/// Why a search produced no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The input could not be turned into a grid.
    InvalidMaze(InvalidMazeError),
    /// The entrance cannot reach any cell of the exit row.
    NoPathFound,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidMaze(e) => write!(f, "{e}"),
            SearchError::NoPathFound => write!(f, "no path from the entrance to the exit row"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidMaze(e) => Some(e),
            SearchError::NoPathFound => None,
        }
    }
}

impl From<InvalidMazeError> for SearchError {
    fn from(e: InvalidMazeError) -> Self {
        SearchError::InvalidMaze(e)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_json_shape() {
        let r = PathResult::new(vec![Pos::new(0, 0), Pos::new(1, 0)], Mode::Longest);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["length"], 1);
        assert_eq!(json["mode"], "max");
        assert_eq!(json["path"][1]["row"], 1);
        let back: PathResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn stored_length_is_recounted() {
        let json = r#"{"path":[{"row":0,"col":0},{"row":1,"col":0}],"length":99,"mode":"min"}"#;
        let r: PathResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.length(), 1);
        assert_eq!(r, PathResult::new(vec![Pos::new(0, 0), Pos::new(1, 0)], Mode::Shortest));

        let json = r#"{"path":[],"mode":"max"}"#;
        let r: PathResult = serde_json::from_str(json).unwrap();
        assert_eq!(r, PathResult::empty(Mode::Longest));
    }
}
