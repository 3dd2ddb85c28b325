use clap::Parser;

use mazegraph::{
    Coordinate, CycleLevel, Generator, MazeSettings, ProviderKind, Solver, rng_from_seed,
    solve_all, solve_maze,
};

/// Generate a weighted maze and compare what each solver pays to cross it.
#[derive(Parser)]
#[command(name = "mazegraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of rows
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Number of columns
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Generation algorithm (kruskal, prim, growing-tree, growing-tree-newest,
    /// growing-tree-oldest, hunt-and-kill, recursive-division)
    #[arg(short, long, default_value = "kruskal")]
    generator: Generator,

    /// Cell and edge palette (simple, advanced)
    #[arg(short, long, default_value = "simple")]
    provider: ProviderKind,

    /// Add loops after generation (low, medium, high)
    #[arg(short, long)]
    cycles: Option<CycleLevel>,

    /// Solver to run (bfs, dfs, dijkstra, a-star, bidirectional). Runs all of them if unset
    #[arg(short, long)]
    solver: Option<Solver>,

    /// Seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell as `row,col`. Defaults to a random open cell on the top row
    #[arg(long, value_parser = parse_coordinate)]
    start: Option<Coordinate>,

    /// End cell as `row,col`. Defaults to a random open cell on the bottom row
    #[arg(long, value_parser = parse_coordinate)]
    end: Option<Coordinate>,

    /// Enable verbose debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{}`", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid coordinate `{}`: {}", s, e))
    };
    Ok(Coordinate::new(parse(row)?, parse(col)?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let settings = MazeSettings {
        height: cli.height,
        width: cli.width,
        generator: cli.generator,
        provider: cli.provider,
        cycles: cli.cycles,
    };
    let provider = settings.type_provider();
    let mut rng = rng_from_seed(cli.seed);
    let maze = settings.build(&mut rng)?;
    println!(
        "{}x{} maze by {} ({} passages)",
        settings.height,
        settings.width,
        settings.generator,
        maze.passage_count(&provider)
    );

    let start = cli
        .start
        .or_else(|| maze.random_open_cell_in_row(0, &provider, &mut rng))
        .unwrap_or_default();
    let end = cli
        .end
        .or_else(|| maze.random_open_cell_in_row(settings.height - 1, &provider, &mut rng))
        .unwrap_or(Coordinate::new(settings.height - 1, settings.width - 1));
    println!("Solving from {} to {}", start, end);

    let results = match cli.solver {
        Some(solver) => vec![(solver, solve_maze(&maze, solver, start, end, &provider))],
        None => solve_all(&maze, start, end, &provider),
    };
    for (solver, path) in results {
        if path.is_empty() {
            println!("{:<28} no path", solver.to_string());
        } else {
            println!(
                "{:<28} cost {:>5}, {:>4} cells",
                solver.to_string(),
                path.total_cost(),
                path.len()
            );
        }
    }

    Ok(())
}
