//! Graph-based mazes: cells joined by typed, weighted edges, a handful of generators that
//! carve spanning trees, a cycle injector, and solvers that report what a route costs.

pub mod cycles;
pub mod error;
pub mod generators;
pub mod maze;
pub mod settings;
pub mod solvers;

use rand::{SeedableRng, rngs::StdRng};

pub use cycles::{CycleLevel, add_cycles};
pub use error::{MazeError, Result};
pub use generators::{Generator, Selection, generate_maze};
pub use maze::{Cell, CellType, Coordinate, Edge, EdgeType, Maze, ProviderKind, TypeProvider};
pub use settings::MazeSettings;
pub use solvers::{Path, Solver, path_cost, solve_all, solve_maze};

/// Seeded RNG for reproducible runs, or one seeded from the OS otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
