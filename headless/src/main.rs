use clap::Parser;
use life_sim_core::config::DEFAULT_SEED;
use life_sim_core::report::{ConsoleSink, FileSink, GridSink};
use life_sim_core::{InitPattern, LifeError, LifeSimulation, SimulationConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Toroidal Game of Life benchmark
#[derive(Parser, Debug)]
#[command(name = "life-headless")]
#[command(about = "Runs Conway's Game of Life on a wrap-around grid", long_about = None)]
struct Args {
    /// Grid height in cells
    height: usize,

    /// Grid width in cells
    width: usize,

    /// Number of generations to simulate
    turns: u64,

    /// Seed for the random initial fill
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Worker threads (0 = one per hardware thread)
    #[arg(short = 'j', long, default_value_t = 0)]
    threads: usize,

    /// Initial pattern (random, glider, empty)
    #[arg(short, long, default_value_t = InitPattern::Random)]
    pattern: InitPattern,

    /// Output file for the final grid
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Also print the final grid to the console
    #[arg(long)]
    print: bool,

    /// Print every generation to the console (debugging, small grids only)
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let total_start = Instant::now();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => {
            println!("Total time: {} us", total_start.elapsed().as_micros());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), LifeError> {
    let config = SimulationConfig::new(args.height, args.width)
        .with_seed(args.seed)
        .with_threads(args.threads);

    let seeder = args.pattern.seeder(config.seed);
    let mut sim = LifeSimulation::new(config, seeder.as_ref())?;

    let stats = if args.trace {
        let mut console = ConsoleSink::stdout();
        console.emit(sim.grid(), None)?;
        sim.run_with_observer(args.turns, |generation, grid| {
            console.emit(grid, Some(generation))
        })?
    } else {
        sim.run(args.turns)
    };
    println!("Model run time: {} us", stats.elapsed.as_micros());

    if args.print {
        ConsoleSink::stdout().emit(sim.grid(), None)?;
    }
    FileSink::new(&args.output).emit(sim.grid(), None)?;

    Ok(())
}
