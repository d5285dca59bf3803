use knight_board::{knight_moves, spiral_legs, SpiralBoard};
use knight_core::{ConfigError, Coord, Direction, UNNUMBERED};

#[test]
fn reference_board_odd_squares_lie_on_the_down_right_diagonal() {
    let b = SpiralBoard::build(100).unwrap();
    // (2k + 1)^2 closes ring k at (50 + k, 50 + k).
    for k in 0..50u32 {
        let at = Coord::new(50 + k as i32, 50 + k as i32);
        assert_eq!(b.get(at), Some((2 * k + 1) * (2 * k + 1)), "ring {k}");
    }
}

#[test]
fn reference_board_last_value_steps_onto_the_border() {
    let b = SpiralBoard::build(100).unwrap();
    assert_eq!(b.max_value(), 9802);
    assert_eq!(b.position_of(9802), Some(Coord::new(99, 100)));
    assert_eq!(b.get(Coord::new(0, 0)), Some(UNNUMBERED));
    assert_eq!(b.get(Coord::new(100, 100)), Some(UNNUMBERED));
    assert_eq!(b.numbered_count(), 9802);
}

#[test]
fn size_six_board_layout() {
    let b = SpiralBoard::build(6).unwrap();
    let rows: Vec<Vec<u32>> = b.rows().map(|r| r.to_vec()).collect();
    assert_eq!(
        rows,
        vec![
            vec![0, 0, 0, 0, 0, 0, 0],
            vec![0, 17, 16, 15, 14, 13, 0],
            vec![0, 18, 5, 4, 3, 12, 0],
            vec![0, 19, 6, 1, 2, 11, 0],
            vec![0, 20, 7, 8, 9, 10, 0],
            vec![0, 21, 22, 23, 24, 25, 26],
            vec![0, 0, 0, 0, 0, 0, 0],
        ]
    );
}

#[test]
fn leg_schedule_reproduces_board_walk() {
    // Replaying the first legs from the center must land on 2, 3, 4, ...
    let b = SpiralBoard::build(20).unwrap();
    let mut at = b.center();
    let mut expected = 2;
    for (direction, steps) in spiral_legs().take(12) {
        for _ in 0..steps {
            at = at + direction.offset();
            assert_eq!(b.get(at), Some(expected), "{direction:?} leg");
            expected += 1;
        }
    }
    assert_eq!(Direction::Right.offset(), Coord::new(0, 1));
}

#[test]
fn config_errors_surface_through_public_api() {
    assert!(matches!(
        SpiralBoard::build(3),
        Err(ConfigError::OddSize { size: 3 })
    ));
    assert!(SpiralBoard::validate_size(100).is_ok());
    assert!(matches!(
        SpiralBoard::validate_size(0),
        Err(ConfigError::ZeroSize)
    ));
}

#[test]
fn center_of_every_valid_board_has_knight_moves_from_size_four() {
    for size in (4..=20).step_by(2) {
        let b = SpiralBoard::build(size).unwrap();
        assert_eq!(knight_moves(&b, b.center()).len(), 8, "size {size}");
    }
}
