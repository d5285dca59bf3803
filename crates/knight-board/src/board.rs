//! The numbered board: an immutable, bounds-checked square of cell values.

use crate::spiral;
use indexmap::IndexMap;
use knight_core::{BoundsError, CellValue, ConfigError, Coord, UNNUMBERED};
use log::debug;
use std::fmt;

/// A square grid of cell values spanning indices `[0, size] x [0, size]`.
///
/// Built once, never mutated. Cells the spiral did not reach hold
/// [`UNNUMBERED`]. Besides the row-major values, the board keeps a
/// reverse index from value to cell so that [`position_of`](Self::position_of)
/// is O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpiralBoard {
    size: u32,
    cells: Vec<CellValue>,
    max_value: CellValue,
    index: ValueIndex,
}

/// Value to row-major cell index.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ValueIndex {
    /// The numbered values are exactly `1..=len`; slot `v - 1` holds the
    /// cell of `v`. Every built board takes this form.
    Dense(Vec<u32>),
    /// Gaps or repeats in a hand-supplied board. First cell wins.
    Sparse(IndexMap<CellValue, u32>),
}

impl ValueIndex {
    fn new(cells: &[CellValue]) -> Self {
        Self::dense(cells).unwrap_or_else(|| {
            let mut positions = IndexMap::new();
            for (i, &value) in cells.iter().enumerate() {
                if value != UNNUMBERED {
                    positions.entry(value).or_insert(i as u32);
                }
            }
            Self::Sparse(positions)
        })
    }

    /// `None` unless the numbered values are a permutation of `1..=n`.
    fn dense(cells: &[CellValue]) -> Option<Self> {
        let numbered = cells.iter().filter(|&&v| v != UNNUMBERED).count();
        let mut slots = vec![u32::MAX; numbered];
        for (i, &value) in cells.iter().enumerate() {
            if value == UNNUMBERED {
                continue;
            }
            let slot = slots.get_mut(value as usize - 1)?;
            if *slot != u32::MAX {
                return None;
            }
            *slot = i as u32;
        }
        Some(Self::Dense(slots))
    }

    fn get(&self, value: CellValue) -> Option<usize> {
        match self {
            Self::Dense(slots) => {
                let slot = (value as usize).checked_sub(1)?;
                slots.get(slot).map(|&i| i as usize)
            }
            Self::Sparse(positions) => positions.get(&value).map(|&i| i as usize),
        }
    }
}

impl SpiralBoard {
    /// Largest accepted `size`. Keeps `(size + 1)^2` cells addressable
    /// and every coordinate inside `i32`.
    pub const MAX_SIZE: u32 = 8_192;

    /// Check that `size` can seed a spiral board.
    ///
    /// The size must be positive and even so that the center `size / 2`
    /// is exact, and no larger than [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn validate_size(size: u32) -> Result<(), ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if size % 2 != 0 {
            return Err(ConfigError::OddSize { size });
        }
        if size > Self::MAX_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(())
    }

    /// Number a `(size + 1) x (size + 1)` board along an outward square
    /// spiral starting with `1` at `(size / 2, size / 2)`.
    ///
    /// A small `size` is valid and simply yields few numbered cells.
    pub fn build(size: u32) -> Result<Self, ConfigError> {
        Self::validate_size(size)?;
        let board = Self::from_cells(size, spiral::number_cells(size));
        debug!(
            "built spiral board: size={size}, highest value={}",
            board.max_value()
        );
        Ok(board)
    }

    /// Wrap explicit values, one inner `Vec` per row.
    ///
    /// Only the shape is validated: the rows must form a non-empty square.
    /// Any values are accepted, so the board need not be a spiral and its
    /// side may be even. When a value repeats, [`position_of`](Self::position_of)
    /// reports its first cell in row-major order.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Result<Self, ConfigError> {
        let side = rows.len();
        if side == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let size = side - 1;
        if size > Self::MAX_SIZE as usize {
            return Err(ConfigError::SizeTooLarge {
                size: u32::try_from(size).unwrap_or(u32::MAX),
                max: Self::MAX_SIZE,
            });
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(ConfigError::NotSquare {
                row,
                len: r.len(),
                expected: side,
            });
        }
        Ok(Self::from_cells(size as u32, rows.concat()))
    }

    fn from_cells(size: u32, cells: Vec<CellValue>) -> Self {
        let max_value = cells.iter().copied().max().unwrap_or(UNNUMBERED);
        let index = ValueIndex::new(&cells);
        Self {
            size,
            cells,
            max_value,
            index,
        }
    }

    fn coord_at(&self, index: usize) -> Coord {
        let side = self.side();
        Coord::new((index / side) as i32, (index % side) as i32)
    }

    /// Largest valid index on either axis.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Cells per side, `size + 1`.
    pub fn side(&self) -> usize {
        self.size as usize + 1
    }

    /// Total number of cells, numbered or not.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The center cell `(size / 2, size / 2)`.
    pub fn center(&self) -> Coord {
        let half = (self.size / 2) as i32;
        Coord::new(half, half)
    }

    /// Whether `coord` lies on the board.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        let last = self.size as i32;
        (0..=last).contains(&coord.row) && (0..=last).contains(&coord.col)
    }

    /// Check that `coord` is on the board and return its row-major index.
    pub fn check_bounds(&self, coord: Coord) -> Result<usize, BoundsError> {
        if !self.contains(coord) {
            return Err(BoundsError {
                coord,
                size: self.size,
            });
        }
        Ok(coord.row as usize * self.side() + coord.col as usize)
    }

    /// Value at `coord`, or `None` off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<CellValue> {
        self.check_bounds(coord).ok().map(|i| self.cells[i])
    }

    /// Value at `coord`, or a [`BoundsError`] off the board.
    pub fn value(&self, coord: Coord) -> Result<CellValue, BoundsError> {
        self.check_bounds(coord).map(|i| self.cells[i])
    }

    /// Highest value on the board, [`UNNUMBERED`] if nothing is numbered.
    pub fn max_value(&self) -> CellValue {
        self.max_value
    }

    /// Number of cells holding a value other than [`UNNUMBERED`].
    pub fn numbered_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != UNNUMBERED).count()
    }

    /// The cell holding `value`.
    pub fn position_of(&self, value: CellValue) -> Option<Coord> {
        self.index.get(value).map(|i| self.coord_at(i))
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.cells.chunks(self.side())
    }

    /// Every numbered cell as `(value, coord)`, in increasing value order.
    pub fn numbered_cells(&self) -> Vec<(CellValue, Coord)> {
        match &self.index {
            ValueIndex::Dense(slots) => slots
                .iter()
                .zip(1..)
                .map(|(&i, value)| (value, self.coord_at(i as usize)))
                .collect(),
            ValueIndex::Sparse(positions) => {
                let mut out: Vec<(CellValue, Coord)> = positions
                    .iter()
                    .map(|(&v, &i)| (v, self.coord_at(i as usize)))
                    .collect();
                out.sort_unstable_by_key(|&(v, _)| v);
                out
            }
        }
    }
}

impl fmt::Display for SpiralBoard {
    /// Right-aligned columns, one line per row, unnumbered cells as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_value().to_string().len();
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == UNNUMBERED {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
