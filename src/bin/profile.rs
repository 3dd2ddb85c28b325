use std::time::{Duration, Instant};

use clap::Parser;

use mazegraph::{
    CycleLevel, Generator, MazeSettings, ProviderKind, Solver, rng_from_seed, solve_maze,
};

/// Time maze generation and solving over many iterations.
#[derive(Parser)]
#[command(name = "profile")]
#[command(about, long_about = None)]
struct Args {
    /// Number of generate-and-solve iterations
    #[arg(short = 'n', long, default_value_t = 20)]
    iterations: usize,

    #[arg(long, default_value_t = 255)]
    height: usize,

    #[arg(long, default_value_t = 255)]
    width: usize,

    #[arg(short, long, default_value = "prim")]
    generator: Generator,

    #[arg(short, long, default_value = "dijkstra")]
    solver: Solver,

    #[arg(short, long, default_value = "advanced")]
    provider: ProviderKind,

    #[arg(short, long)]
    cycles: Option<CycleLevel>,

    /// Seed of the first iteration; later iterations use the following seeds
    #[arg(long)]
    seed: Option<u64>,

    /// File the timings are logged to
    #[arg(long, default_value = "profile.log")]
    log_file: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let file_appender = tracing_appender::rolling::never(".", &args.log_file);
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let settings = MazeSettings {
        height: args.height,
        width: args.width,
        generator: args.generator,
        provider: args.provider,
        cycles: args.cycles,
    };
    let provider = settings.type_provider();

    let mut generate_total = Duration::ZERO;
    let mut solve_total = Duration::ZERO;
    for iteration in 0..args.iterations {
        let mut rng = rng_from_seed(args.seed.map(|seed| seed.wrapping_add(iteration as u64)));

        let started = Instant::now();
        let maze = settings.build(&mut rng)?;
        let generated = started.elapsed();

        let start = maze
            .random_open_cell_in_row(0, &provider, &mut rng)
            .unwrap_or_default();
        let end = maze
            .random_open_cell_in_row(settings.height - 1, &provider, &mut rng)
            .unwrap_or_default();

        let started = Instant::now();
        let path = solve_maze(&maze, args.solver, start, end, &provider);
        let solved = started.elapsed();

        tracing::info!(
            "[profile] iteration {}: generate {:?}, solve {:?}, cost {}, {} cells",
            iteration,
            generated,
            solved,
            path.total_cost(),
            path.len()
        );
        generate_total += generated;
        solve_total += solved;
    }

    let runs = u32::try_from(args.iterations.max(1)).unwrap_or(u32::MAX);
    tracing::info!(
        "[profile] {} with {} on {}x{}: mean generate {:?}, mean solve {:?}",
        settings.generator,
        args.solver,
        settings.height,
        settings.width,
        generate_total / runs,
        solve_total / runs
    );
    println!(
        "{} iterations, mean generate {:?}, mean solve {:?} (details in {})",
        args.iterations,
        generate_total / runs,
        solve_total / runs,
        args.log_file
    );

    Ok(())
}
