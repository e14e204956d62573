use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use mazegen::{
    Coord, Generator, Maze, Solver,
    render::{Canvas, to_ascii},
};

/// Generate a perfect maze and find the route through it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell rows
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of cell columns
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// backtracking, hunt, eller, sidewinder, prim or kruskal
    #[arg(short, long, default_value = "backtracking")]
    generator: Generator,

    /// depth or breadth
    #[arg(short, long, default_value = "depth")]
    solver: Solver,

    /// Start cell as `row,col` [default: 0,0]
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,

    /// End cell as `row,col` [default: bottom-right cell]
    #[arg(long, value_parser = parse_coord)]
    end: Option<Coord>,

    /// Random seed; generation is reproducible when given
    #[arg(long)]
    seed: Option<u64>,

    /// Print plain ASCII instead of coloured blocks
    #[arg(long)]
    ascii: bool,

    /// Skip drawing the maze
    #[arg(long)]
    no_render: bool,

    /// Check the perfect-maze property before solving
    #[arg(long)]
    verify: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad row `{row}`: {e}"))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad column `{col}`: {e}"))?;
    Ok((row, col))
}

/// Sets up logging filtered by `RUST_LOG` (default `info`).
/// The returned guard must live until exit so buffered file logs get flushed.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log file {} has no file name", path.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_file.as_deref())?;

    let mut maze = Maze::new(args.seed);

    let started = Instant::now();
    maze.create(args.rows, args.cols, args.generator)
        .context("maze generation failed")?;
    tracing::info!(
        "Generated a {}x{} maze with {} in {:?}",
        args.rows,
        args.cols,
        args.generator,
        started.elapsed()
    );

    if args.verify {
        let grid = maze.grid().context("no maze after generation")?;
        anyhow::ensure!(grid.is_perfect(), "generated maze is not perfect");
        tracing::info!("Maze is perfect: {} open walls", grid.open_edges());
    }

    let started = Instant::now();
    let path = maze
        .solve(args.start, args.end, args.solver)
        .context("solving failed")?
        .clone();
    tracing::info!(
        "Solved with {} in {:?}, path has {} cells",
        args.solver,
        started.elapsed(),
        path.len()
    );

    if !args.no_render {
        let grid = maze.grid().context("no maze to render")?;
        if args.ascii {
            print!("{}", to_ascii(grid, Some(&path)));
        } else {
            print!("{}", Canvas::new(grid).with_path(&path));
        }
    }
    println!("{:?}", path.cells());
    Ok(())
}
