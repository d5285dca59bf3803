//! Text and CSV renderings of walks and surveys.

use std::io::{self, Write};

use knight::prelude::*;

/// Write every square of `path`, the start as index 0.
pub fn write_moves<W: Write>(
    out: &mut W,
    board: &SpiralBoard,
    path: &Path,
    csv: bool,
) -> io::Result<()> {
    if csv {
        writeln!(out, "index,row,col,value")?;
    }
    let squares = std::iter::once(path.start()).chain(path.moves().iter().copied());
    for (index, at) in squares.enumerate() {
        let value = board.get(at).unwrap_or(UNNUMBERED);
        if csv {
            writeln!(out, "{index},{},{},{value}", at.row, at.col)?;
        } else {
            writeln!(out, "{index:>6} {:>5} {:>5} {value:>8}", at.row, at.col)?;
        }
    }
    Ok(())
}

/// Write one survey line per start square.
pub fn write_survey<W: Write>(
    out: &mut W,
    summaries: &[WalkSummary],
    csv: bool,
) -> io::Result<()> {
    if csv {
        writeln!(out, "start,row,col,moves,trapped_value")?;
    } else {
        writeln!(out, "{:>8} {:>7} {:>8}", "start", "moves", "trapped")?;
    }
    for s in summaries {
        if csv {
            writeln!(
                out,
                "{},{},{},{},{}",
                s.start_value, s.start.row, s.start.col, s.moves, s.trapped_value
            )?;
        } else {
            writeln!(
                out,
                "{:>8} {:>7} {:>8}",
                s.start_value, s.moves, s.trapped_value
            )?;
        }
    }
    Ok(())
}
