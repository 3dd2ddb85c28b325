use rand::Rng;

use super::{edges_by_visited, open_passage, random_cell};
use crate::{
    error::Result,
    maze::{GridFill, Maze, TypeProvider},
};

/// Randomized Prim's algorithm over walls: grows a single tree by opening a random
/// frontier wall whose far side is not yet part of the maze.
pub fn randomized_prim<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    provider: &TypeProvider,
    rng: &mut R,
) -> Result<Maze> {
    let mut maze = Maze::lattice(height, width, GridFill::Walls, provider, rng)?;

    // Initialize the starting point
    let start = random_cell(height, width, rng);
    let mut in_maze = vec![false; height * width];
    in_maze[start.ravel_index(width)] = true;

    // Frontier walls lead from the maze to a cell outside of it, at least when they were added
    let mut frontiers = maze.edges(start).to_vec();

    while !frontiers.is_empty() {
        // Randomly select a wall from the frontiers
        let idx = rng.random_range(0..frontiers.len());
        let edge = frontiers.swap_remove(idx);

        let far = edge.to.ravel_index(width);
        if in_maze[far] {
            // Another wall already brought this cell into the maze
            continue;
        }

        open_passage(&mut maze, edge.from, edge.to, provider, rng);
        in_maze[far] = true;

        // Add the walls of the new cell leading outside the maze to the frontiers
        frontiers.extend(edges_by_visited(&maze, edge.to, &in_maze, width, false));
    }

    Ok(maze)
}
