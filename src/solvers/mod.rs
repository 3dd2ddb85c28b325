mod bidirectional;
mod path;
mod priority;
mod traversal;

pub use path::{Path, path_cost};

use crate::{
    error::MazeError,
    maze::{Coordinate, Maze, TypeProvider},
};
use bidirectional::solve_bidirectional;
use priority::{solve_a_star, solve_dijkstra};
use traversal::{solve_bfs, solve_dfs};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Bfs,
    Dfs,
    #[default]
    Dijkstra,
    AStar,
    Bidirectional,
}

impl Solver {
    pub const ALL: [Solver; 5] = [
        Solver::Bfs,
        Solver::Dfs,
        Solver::Dijkstra,
        Solver::AStar,
        Solver::Bidirectional,
    ];

    /// Whether the solver always returns the cheapest route.
    pub const fn is_cost_optimal(self) -> bool {
        matches!(self, Solver::Dijkstra | Solver::AStar)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
            Solver::Bidirectional => write!(f, "Bidirectional Search"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Solver::Bfs),
            "dfs" => Ok(Solver::Dfs),
            "dijkstra" => Ok(Solver::Dijkstra),
            "a-star" | "astar" | "a*" => Ok(Solver::AStar),
            "bidirectional" => Ok(Solver::Bidirectional),
            _ => Err(MazeError::UnknownSolver(s.to_string())),
        }
    }
}

/// Finds a route from `start` to `end` that only crosses passages.
///
/// Never fails: a missing endpoint or an unreachable end gives an empty path, and
/// `start == end` gives the single start cell at that cell's cost. The maze is only read.
pub fn solve_maze(
    maze: &Maze,
    solver: Solver,
    start: Coordinate,
    end: Coordinate,
    provider: &TypeProvider,
) -> Path {
    let Some(start_cell) = maze.cell(start).filter(|_| maze.contains(end)) else {
        tracing::debug!(
            "[{}] Endpoint {} or {} is not in the maze",
            solver,
            start,
            end
        );
        return Path::empty();
    };
    if start == end {
        return Path::single(start, start_cell.movement_cost());
    }

    let path = match solver {
        Solver::Bfs => solve_bfs(maze, start_cell, end, provider),
        Solver::Dfs => solve_dfs(maze, start_cell, end, provider),
        Solver::Dijkstra => solve_dijkstra(maze, start_cell, end, provider),
        Solver::AStar => solve_a_star(maze, start_cell, end, provider),
        Solver::Bidirectional => solve_bidirectional(maze, start, end, provider),
    };
    tracing::debug!(
        "[{}] {} -> {}: {} cells, cost {}",
        solver,
        start,
        end,
        path.len(),
        path.total_cost()
    );
    path
}

/// Runs every solver in [`Solver::ALL`] on its own thread against the same maze.
/// Results come back in [`Solver::ALL`] order.
pub fn solve_all(
    maze: &Maze,
    start: Coordinate,
    end: Coordinate,
    provider: &TypeProvider,
) -> Vec<(Solver, Path)> {
    let results: Vec<(Solver, Path)> = std::thread::scope(|scope| {
        let handles = Solver::ALL.map(|solver| {
            scope.spawn(move || (solver, solve_maze(maze, solver, start, end, provider)))
        });
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    });

    for (solver, path) in &results {
        tracing::info!("[solve all] {}: {}", solver, path);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{CellType, EdgeType};

    fn square() -> Maze {
        let mut maze = Maze::new();
        let c = Coordinate::new;
        maze.add_cell(c(0, 0), CellType::BadSurface);
        maze.add_cell(c(0, 1), CellType::Passage);
        maze.add_cell(c(1, 0), CellType::GoodSurface);
        maze.add_cell(c(1, 1), CellType::Passage);
        maze.add_edge(c(0, 0), c(0, 1), EdgeType::Transition);
        maze.add_edge(c(0, 0), c(1, 0), EdgeType::GoodTransition);
        maze.add_edge(c(1, 0), c(1, 1), EdgeType::GoodTransition);
        maze.add_edge(c(0, 1), c(1, 1), EdgeType::Wall);
        maze
    }

    #[test]
    fn test_solver_parsing() {
        assert_eq!("A*".parse::<Solver>(), Ok(Solver::AStar));
        assert_eq!(" BFS ".parse::<Solver>(), Ok(Solver::Bfs));
        assert_eq!(
            "greedy".parse::<Solver>(),
            Err(MazeError::UnknownSolver("greedy".to_string()))
        );
    }

    #[test]
    fn test_start_is_end() {
        let maze = square();
        let start = Coordinate::new(0, 0);
        for solver in Solver::ALL {
            let path = solve_maze(&maze, solver, start, start, &TypeProvider::simple());
            assert_eq!(path, Path::single(start, 2), "{}", solver);
        }
    }

    #[test]
    fn test_missing_endpoints() {
        let maze = square();
        let inside = Coordinate::new(1, 1);
        let outside = Coordinate::new(7, 7);
        for solver in Solver::ALL {
            let provider = TypeProvider::simple();
            assert!(solve_maze(&maze, solver, outside, inside, &provider).is_empty());
            assert!(solve_maze(&maze, solver, inside, outside, &provider).is_empty());
            assert!(solve_maze(&maze, solver, outside, outside, &provider).is_empty());
        }
    }

    #[test]
    fn test_walls_are_never_crossed() {
        let maze = square();
        let provider = TypeProvider::advanced();
        for solver in Solver::ALL {
            let path = solve_maze(
                &maze,
                solver,
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
                &provider,
            );
            // The wall forces the long way around
            assert_eq!(path.len(), 4, "{}", solver);
            assert_eq!(
                path_cost(&maze, path.coordinates(), &provider),
                Some(path.total_cost())
            );
        }
    }

    #[test]
    fn test_provider_decides_what_is_a_passage() {
        let maze = square();
        let (start, end) = (Coordinate::new(0, 0), Coordinate::new(1, 1));
        for solver in Solver::ALL {
            // Only plain transitions are passages in the simple palette
            let path = solve_maze(&maze, solver, start, end, &TypeProvider::simple());
            assert!(path.is_empty(), "{}", solver);
            let path = solve_maze(&maze, solver, start, end, &TypeProvider::advanced());
            assert_eq!(path.len(), 3, "{}", solver);
        }
    }

    #[test]
    fn test_solve_all_keeps_order() {
        let maze = square();
        let results = solve_all(
            &maze,
            Coordinate::new(0, 0),
            Coordinate::new(1, 1),
            &TypeProvider::advanced(),
        );
        let solvers: Vec<_> = results.iter().map(|(solver, _)| *solver).collect();
        assert_eq!(solvers, Solver::ALL);
        for (_, path) in results {
            // 2 for the bad start, then 1 + 0 and 1 + 1
            assert_eq!(path.total_cost(), 5);
        }
    }
}
