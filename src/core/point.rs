//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell on the logical board grid, addressed as `(row, col)`.
///
/// The reference board is a 15×15 grid; rows grow downwards and columns grow
/// to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// One cell from `self` towards `target`, moving along a single axis.
    ///
    /// Returns `None` when the two points are equal or not axis-aligned.
    #[must_use]
    pub fn step_towards(self, target: Point) -> Option<Point> {
        if self == target {
            return None;
        }
        if self.row == target.row {
            Some(Point::new(self.row, self.col + (target.col - self.col).signum()))
        } else if self.col == target.col {
            Some(Point::new(self.row + (target.row - self.row).signum(), self.col))
        } else {
            None
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
