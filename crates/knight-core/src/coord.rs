//! Grid coordinates, cell values, and the two step tables of the walk.

use std::fmt;
use std::ops::Add;

/// The number the spiral assigns to a cell.
pub type CellValue = u32;

/// Sentinel for a cell the spiral never reached.
pub const UNNUMBERED: CellValue = 0;

/// A `(row, col)` grid coordinate.
///
/// Components are signed: applying a knight offset next to the edge
/// yields a negative row or column, which bounds checks then reject.
/// Rows grow downward, columns grow to the right. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from its components.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Componentwise addition that returns `None` instead of overflowing.
    #[inline]
    pub fn checked_add(self, rhs: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.row.checked_add(rhs.row)?,
            self.col.checked_add(rhs.col)?,
        ))
    }
}

/// Component-wise sum. Overflows like `i32` addition, so it panics in
/// debug builds; use [`Coord::checked_add`] for untrusted coordinates.
impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight knight offsets, in the order candidates are generated.
pub const KNIGHT_OFFSETS: [Coord; 8] = [
    Coord::new(2, 1),
    Coord::new(1, 2),
    Coord::new(-1, 2),
    Coord::new(-2, 1),
    Coord::new(-2, -1),
    Coord::new(-1, -2),
    Coord::new(1, -2),
    Coord::new(2, -1),
];

/// Heading of one spiral leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// One column right (col + 1).
    Right = 0,
    /// One row up (row - 1).
    Up = 1,
    /// One column left (col - 1).
    Left = 2,
    /// One row down (row + 1).
    Down = 3,
}

/// The cyclic order in which the spiral turns.
pub const SPIRAL_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
];

impl Direction {
    /// Unit step for this direction.
    pub const fn offset(self) -> Coord {
        match self {
            Direction::Right => Coord::new(0, 1),
            Direction::Up => Coord::new(-1, 0),
            Direction::Left => Coord::new(0, -1),
            Direction::Down => Coord::new(1, 0),
        }
    }

    /// The direction of the following leg (a quarter turn counter-clockwise).
    pub const fn turn(self) -> Direction {
        SPIRAL_ORDER[(self as usize + 1) % 4]
    }
}
