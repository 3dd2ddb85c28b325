use rand::Rng;

mod growing_tree;
mod hunt_and_kill;
mod kruskal;
mod prim;
mod recur_div;
mod union_find;

pub use growing_tree::Selection;

use crate::{
    error::{MazeError, Result},
    maze::{Coordinate, Edge, Maze, TypeProvider},
};
use growing_tree::growing_tree;
use hunt_and_kill::hunt_and_kill;
use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_div::recursive_division;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    #[default]
    Kruskal,
    Prim,
    GrowingTree(Selection),
    HuntAndKill,
    RecurDiv,
}

impl Generator {
    /// Every generator, with Growing Tree using its default selection.
    pub const ALL: [Generator; 5] = [
        Generator::Kruskal,
        Generator::Prim,
        Generator::GrowingTree(Selection::Random),
        Generator::HuntAndKill,
        Generator::RecurDiv,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::GrowingTree(selection) => write!(f, "Growing Tree ({})", selection),
            Generator::HuntAndKill => write!(f, "Hunt and Kill"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Generator::Kruskal),
            "prim" => Ok(Generator::Prim),
            "growing-tree" | "growing-tree-random" => Ok(Generator::GrowingTree(Selection::Random)),
            "growing-tree-newest" | "backtracker" => Ok(Generator::GrowingTree(Selection::Newest)),
            "growing-tree-oldest" => Ok(Generator::GrowingTree(Selection::Oldest)),
            "hunt-and-kill" => Ok(Generator::HuntAndKill),
            "recursive-division" => Ok(Generator::RecurDiv),
            _ => Err(MazeError::UnknownGenerator(s.to_string())),
        }
    }
}

/// Builds a new `height` x `width` maze in which every cell can reach every other cell.
pub fn generate_maze<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    generator: Generator,
    provider: &TypeProvider,
    rng: &mut R,
) -> Result<Maze> {
    let maze = match generator {
        Generator::Kruskal => randomized_kruskal(height, width, provider, rng),
        Generator::Prim => randomized_prim(height, width, provider, rng),
        Generator::GrowingTree(selection) => growing_tree(height, width, selection, provider, rng),
        Generator::HuntAndKill => hunt_and_kill(height, width, provider, rng),
        Generator::RecurDiv => recursive_division(height, width, provider, rng),
    }?;
    tracing::debug!(
        "[generate] {} built a {}x{} maze with {} passages",
        generator,
        height,
        width,
        maze.passage_count(provider)
    );
    Ok(maze)
}

/// Turns the connection between two neighbors into a passage.
fn open_passage<R: Rng + ?Sized>(
    maze: &mut Maze,
    a: Coordinate,
    b: Coordinate,
    provider: &TypeProvider,
    rng: &mut R,
) {
    let edge_type = provider.passable_edge_type(rng);
    maze.set_edge_type(a, b, edge_type);
}

/// Outgoing edges of `coord` whose far cell has the requested visited state.
/// `visited` is indexed row-major over a lattice `width` cells wide.
fn edges_by_visited(
    maze: &Maze,
    coord: Coordinate,
    visited: &[bool],
    width: usize,
    wanted: bool,
) -> Vec<Edge> {
    maze.edges(coord)
        .iter()
        .filter(|edge| visited[edge.to.ravel_index(width)] == wanted)
        .copied()
        .collect()
}

/// A uniformly random starting cell.
fn random_cell<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Coordinate {
    Coordinate::new(rng.random_range(0..height), rng.random_range(0..width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generator_parsing() {
        assert_eq!("kruskal".parse::<Generator>(), Ok(Generator::Kruskal));
        assert_eq!(
            "Growing-Tree-Oldest".parse::<Generator>(),
            Ok(Generator::GrowingTree(Selection::Oldest))
        );
        assert_eq!(
            "recursive-division".parse::<Generator>(),
            Ok(Generator::RecurDiv)
        );
        assert_eq!(
            "eller".parse::<Generator>(),
            Err(MazeError::UnknownGenerator("eller".to_string()))
        );
    }

    #[test]
    fn test_every_generator_rejects_empty_dimensions() {
        let provider = TypeProvider::simple();
        let mut rng = StdRng::seed_from_u64(1);
        for generator in Generator::ALL {
            assert!(matches!(
                generate_maze(0, 4, generator, &provider, &mut rng),
                Err(MazeError::InvalidDimension { .. })
            ));
            assert!(matches!(
                generate_maze(4, 0, generator, &provider, &mut rng),
                Err(MazeError::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn test_every_generator_handles_single_cell() {
        let provider = TypeProvider::simple();
        let mut rng = StdRng::seed_from_u64(1);
        for generator in Generator::ALL {
            let maze = generate_maze(1, 1, generator, &provider, &mut rng).unwrap();
            assert_eq!(maze.len(), 1);
            assert_eq!(maze.passage_count(&provider), 0);
        }
    }
}
