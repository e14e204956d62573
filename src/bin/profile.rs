use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mazegen::{Generator, Maze, Solver};

/// Time every generator and solver on a large maze
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Number of runs per algorithm
    #[arg(default_value_t = 10)]
    num_iters: usize,

    /// Cell rows and columns of the maze
    #[arg(long, default_value_t = 255)]
    size: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let mut maze = Maze::new(Some(args.seed));
    let last = args.size.saturating_sub(1);
    let end = Some((last, last));

    for generator in Generator::ALL {
        let mut generating = Duration::ZERO;
        let mut solving = [Duration::ZERO; Solver::ALL.len()];

        for _ in 0..args.num_iters {
            let started = Instant::now();
            maze.create(args.size, args.size, generator)?;
            generating += started.elapsed();

            for (total, solver) in solving.iter_mut().zip(Solver::ALL) {
                let started = Instant::now();
                maze.solve(Some((0, 0)), end, solver)?;
                *total += started.elapsed();
            }
        }

        let runs = args.num_iters.max(1) as u32;
        tracing::info!("{}: generate {:?}", generator, generating / runs);
        for (total, solver) in solving.iter().zip(Solver::ALL) {
            tracing::info!("{} / {}: solve {:?}", generator, solver, *total / runs);
        }
    }
    Ok(())
}
