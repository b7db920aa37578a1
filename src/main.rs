// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: solve one board and print it.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use std::time::Instant;

use nqueens_search::{
    BacktrackingSolver, Board, HeuristicOptions, HeuristicSolver, Solver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Backtracking,
    Heuristic,
}

#[derive(Debug, Parser)]
#[command(name = "nqueens", version, about = "Place N non-attacking queens on an N×N board")]
struct Args {
    /// Board size (number of queens)
    board_size: usize,

    /// Also forbid three queens on any straight line
    #[arg(short = 'l', long)]
    line_check: bool,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Backtracking)]
    solver: Strategy,

    /// Seed for the heuristic solver's shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the heuristic solver after this many restarts
    #[arg(long)]
    max_restarts: Option<usize>,

    /// Print search counters after solving
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut solver: Box<dyn Solver> = match args.solver {
        Strategy::Backtracking => Box::new(BacktrackingSolver::new(args.board_size, args.line_check)?),
        Strategy::Heuristic => {
            let options = HeuristicOptions {
                seed: args.seed,
                max_restarts: args.max_restarts,
            };
            Box::new(HeuristicSolver::with_options(args.board_size, args.line_check, options)?)
        }
    };

    let start = Instant::now();
    let placement = solver.solve();
    info!("{} search took {:?}", solver.name(), start.elapsed());

    if placement.is_empty() {
        println!("No solution found for N={}", args.board_size);
    } else {
        println!("{:?}", placement);
        print!("{}", Board::new(&placement, args.board_size));
    }

    if args.stats {
        print!("{}", solver.statistics());
    }

    Ok(())
}
