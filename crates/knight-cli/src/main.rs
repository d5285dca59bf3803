//! `trapped-knight`: number a spiral board, walk the knight, report where
//! it gets stuck.

mod output;

use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use knight::prelude::*;
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, LevelPadding, TermLogger, TerminalMode};

#[derive(Debug, Parser)]
#[clap(name = "trapped-knight", version, about, long_about = None)]
struct Args {
    /// Largest board index; the board is SIZE + 1 cells per side
    #[clap(long, default_value_t = 100)]
    size: u32,

    /// Start square as ROW,COL (default: the center, square 1)
    #[clap(long, value_name = "ROW,COL", conflicts_with = "survey")]
    start: Option<StartArg>,

    /// List every square of the walk
    #[clap(long)]
    path: bool,

    /// Write listings as CSV
    #[clap(long)]
    csv: bool,

    /// Print the numbered board first
    #[clap(long)]
    board: bool,

    /// Walk from each of squares 1..=K and report where each is trapped
    #[clap(long, value_name = "K")]
    survey: Option<u32>,

    /// Worker threads for --survey
    #[clap(long, default_value_t = 4)]
    workers: usize,

    /// off, error, warn, info, debug or trace
    #[clap(long, default_value = "warn")]
    log_level: LevelFilter,
}

/// `ROW,COL` on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StartArg(Coord);

impl FromStr for StartArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|e| format!("bad coordinate '{}': {e}", part.trim()))
        };
        Ok(Self(Coord::new(parse(row)?, parse(col)?)))
    }
}

fn init_log(level: LevelFilter) {
    let config = ConfigBuilder::default()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_level_padding(LevelPadding::Right)
        .build();
    match TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto) {
        Ok(()) => debug!("logging at {level}"),
        Err(e) => eprintln!("logging disabled: {e}"),
    }
}

fn run_tour<W: Write>(args: &Args, config: &TourConfig, out: &mut W) -> Result<()> {
    let tour = knight::run(config)
        .with_context(|| anyhow!("walk on a size {} board failed", config.size))?;
    let summary = tour.summary();
    info!("{summary}");

    if args.board {
        writeln!(out, "{}", tour.board)?;
    }
    if args.path || args.csv {
        output::write_moves(out, &tour.board, &tour.path, args.csv)?;
    } else {
        writeln!(out, "{summary}")?;
    }
    Ok(())
}

fn run_survey<W: Write>(args: &Args, config: &TourConfig, count: u32, out: &mut W) -> Result<()> {
    let board = SpiralBoard::build(config.size)
        .with_context(|| anyhow!("cannot build a size {} board", config.size))?;
    if args.board {
        writeln!(out, "{board}")?;
    }
    let starts = (1..=count)
        .map(|value| {
            board.position_of(value).ok_or_else(|| {
                anyhow!(
                    "square {value} is not on a size {} board (largest is {})",
                    config.size,
                    board.max_value()
                )
            })
        })
        .collect::<Result<Vec<Coord>>>()?;
    info!("surveying {} starts on {} workers", starts.len(), args.workers);

    let mut summaries = Vec::with_capacity(starts.len());
    for (start, result) in starts.iter().zip(knight::survey(&board, &starts, args.workers)) {
        let path = result.with_context(|| anyhow!("walk from {start} failed"))?;
        summaries.push(WalkSummary::of(&board, &path));
    }
    output::write_survey(out, &summaries, args.csv)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_log(args.log_level);

    let config = TourConfig {
        size: args.size,
        start: args.start.map(|StartArg(at)| at),
    };
    config.validate().context("invalid --size")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.survey {
        Some(count) => run_survey(&args, &config, count, &mut out)?,
        None => run_tour(&args, &config, &mut out)?,
    }
    out.flush().context("failed to write output")?;
    Ok(())
}
