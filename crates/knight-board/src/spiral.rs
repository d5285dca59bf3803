//! The outward square spiral: leg schedule and numbering.

use knight_core::{CellValue, Coord, Direction, UNNUMBERED};

/// Infinite iterator over spiral legs as `(direction, steps)`.
///
/// Leg `k` (0-indexed) heads in `SPIRAL_ORDER[k % 4]` for
/// `ceil((k + 1) / 2)` steps, giving step counts `1, 1, 2, 2, 3, 3, ...`.
#[derive(Clone, Debug)]
pub struct SpiralLegs {
    leg: u32,
    direction: Direction,
}

/// Start a fresh leg schedule.
pub fn spiral_legs() -> SpiralLegs {
    SpiralLegs {
        leg: 0,
        direction: Direction::Right,
    }
}

impl Iterator for SpiralLegs {
    type Item = (Direction, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let steps = self.leg / 2 + 1;
        let item = (self.direction, steps);
        self.leg = self.leg.checked_add(1)?;
        self.direction = self.direction.turn();
        Some(item)
    }
}

/// Fill a row-major `(size + 1)^2` buffer with spiral numbers.
///
/// Legs run whole. Once a completed leg leaves the walker on the border,
/// the next leg would exit the grid and numbering stops there. The
/// per-step bounds check only fires if that invariant were broken.
pub(crate) fn number_cells(size: u32) -> Vec<CellValue> {
    let side = size as usize + 1;
    let last = size as i32;
    let mut cells = vec![UNNUMBERED; side * side];
    let index = |at: Coord| -> Option<usize> {
        let inside = (0..=last).contains(&at.row) && (0..=last).contains(&at.col);
        inside.then(|| at.row as usize * side + at.col as usize)
    };
    let on_border = |at: Coord| at.row == 0 || at.col == 0 || at.row == last || at.col == last;

    let half = (size / 2) as i32;
    let mut at = Coord::new(half, half);
    let mut next: CellValue = 1;
    if let Some(i) = index(at) {
        cells[i] = next;
        next += 1;
    }

    'legs: for (direction, steps) in spiral_legs() {
        if on_border(at) {
            break;
        }
        for _ in 0..steps {
            let Some(step) = at.checked_add(direction.offset()) else {
                break 'legs;
            };
            let Some(i) = index(step) else {
                break 'legs;
            };
            at = step;
            cells[i] = next;
            next += 1;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn leg_lengths_pair_up() {
        let steps: Vec<u32> = spiral_legs().take(10).map(|(_, s)| s).collect();
        assert_eq!(steps, vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
    }

    #[test]
    fn leg_directions_cycle() {
        let dirs: Vec<Direction> = spiral_legs().take(6).map(|(d, _)| d).collect();
        assert_eq!(
            dirs,
            vec![
                Direction::Right,
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Right,
                Direction::Up,
            ]
        );
    }

    #[test]
    fn size_two_numbers_center_and_one_step() {
        let cells = number_cells(2);
        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0,
            0, 1, 2,
            0, 0, 0,
        ];
        assert_eq!(cells, expected);
    }

    #[test]
    fn size_four_stops_after_fifth_leg() {
        let cells = number_cells(4);
        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 0, 0,
            0, 5, 4, 3, 0,
            0, 6, 1, 2, 0,
            0, 7, 8, 9, 10,
            0, 0, 0, 0, 0,
        ];
        assert_eq!(cells, expected);
    }

    proptest! {
        #[test]
        fn first_n_legs_sum_to_triangular_pairs(n in 1usize..200) {
            // Two legs of each length: total of the first 2m legs is m(m + 1).
            let total: u64 = spiral_legs().take(2 * n).map(|(_, s)| s as u64).sum();
            prop_assert_eq!(total, (n as u64) * (n as u64 + 1));
        }

        #[test]
        fn highest_number_is_inner_square_plus_one(half in 1u32..40) {
            let size = half * 2;
            let cells = number_cells(size);
            let max = cells.iter().copied().max().unwrap_or(0);
            prop_assert_eq!(max, (size - 1) * (size - 1) + 1);
        }
    }
}
