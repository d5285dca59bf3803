//! Many independent walks over one shared board.
//!
//! Walks never interact: each owns its visited set and the board is
//! immutable, so a survey fans the start squares out to a scoped worker
//! pool over a crossbeam job channel and puts the results back in input
//! order.

use crossbeam_channel::unbounded;
use knight_board::SpiralBoard;
use knight_core::{Coord, WalkError};
use knight_walk::{walk, Path};
use log::{debug, trace};
use std::thread;

/// Walk from every square in `starts` on `workers` threads.
///
/// The result at index `i` is the walk from `starts[i]`, whatever the
/// worker count. `workers` is clamped to `[1, starts.len()]`. An
/// off-board start yields an `Err` in its slot and does not affect the
/// others.
pub fn survey(
    board: &SpiralBoard,
    starts: &[Coord],
    workers: usize,
) -> Vec<Result<Path, WalkError>> {
    if starts.is_empty() {
        return Vec::new();
    }
    let workers = workers.clamp(1, starts.len());
    debug!("surveying {} starts on {workers} workers", starts.len());

    let (job_tx, job_rx) = unbounded::<(usize, Coord)>();
    let (result_tx, result_rx) = unbounded::<(usize, Result<Path, WalkError>)>();
    for job in starts.iter().copied().enumerate() {
        job_tx
            .send(job)
            .expect("job receiver is held until the workers finish");
    }
    drop(job_tx);

    thread::scope(|scope| {
        for worker in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                let mut done = 0usize;
                while let Ok((index, start)) = job_rx.recv() {
                    if result_tx.send((index, walk(board, start))).is_err() {
                        break;
                    }
                    done += 1;
                }
                trace!("survey worker {worker} walked {done} starts");
            });
        }
    });
    drop(result_tx);

    let mut results: Vec<(usize, Result<Path, WalkError>)> = result_rx.iter().collect();
    results.sort_unstable_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_core::BoundsError;
    use proptest::prelude::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn empty_survey_is_empty() {
        let b = SpiralBoard::build(4).unwrap();
        assert!(survey(&b, &[], 4).is_empty());
    }

    #[test]
    fn bad_start_only_fails_its_slot() {
        let b = SpiralBoard::build(4).unwrap();
        let results = survey(&b, &[c(2, 2), c(7, 7), c(0, 0)], 2);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().map(Path::len), Ok(9));
        assert_eq!(
            results[1],
            Err(WalkError::StartOutOfBounds(BoundsError {
                coord: c(7, 7),
                size: 4
            }))
        );
        assert!(results[2].is_ok());
    }

    #[test]
    fn zero_workers_still_runs() {
        let b = SpiralBoard::build(4).unwrap();
        let results = survey(&b, &[c(2, 2)], 0);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_ok());
    }

    proptest! {
        #[test]
        fn results_match_sequential_walks(workers in 1usize..6, half in 2u32..8) {
            let b = SpiralBoard::build(half * 2).unwrap();
            let starts: Vec<Coord> = b.numbered_cells().into_iter().map(|(_, at)| at).collect();
            let parallel = survey(&b, &starts, workers);
            prop_assert_eq!(parallel.len(), starts.len());
            for (start, result) in starts.iter().zip(parallel) {
                prop_assert_eq!(result, walk(&b, *start));
            }
        }
    }
}
