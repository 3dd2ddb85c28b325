use rand::Rng;

use super::{edges_by_visited, open_passage, random_cell};
use crate::{
    error::Result,
    maze::{Coordinate, GridFill, Maze, TypeProvider},
};

/// Random walk until stuck ("kill"), then scan row by row for an unvisited cell next to
/// the visited region and resume the walk from there ("hunt").
pub fn hunt_and_kill<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    provider: &TypeProvider,
    rng: &mut R,
) -> Result<Maze> {
    let mut maze = Maze::lattice(height, width, GridFill::Walls, provider, rng)?;

    let mut visited = vec![false; height * width];
    let mut current = random_cell(height, width, rng);
    visited[current.ravel_index(width)] = true;

    let mut hunts = 0usize;
    loop {
        let unvisited = edges_by_visited(&maze, current, &visited, width, false);
        if !unvisited.is_empty() {
            let edge = unvisited[rng.random_range(0..unvisited.len())];
            open_passage(&mut maze, edge.from, edge.to, provider, rng);
            visited[edge.to.ravel_index(width)] = true;
            current = edge.to;
            continue;
        }

        match hunt(&maze, height, width, &visited) {
            Some(cell) => {
                let visited_neighbors = edges_by_visited(&maze, cell, &visited, width, true);
                let edge = visited_neighbors[rng.random_range(0..visited_neighbors.len())];
                open_passage(&mut maze, edge.from, edge.to, provider, rng);
                visited[cell.ravel_index(width)] = true;
                current = cell;
                hunts += 1;
            }
            None => break,
        }
    }
    tracing::debug!("[hunt-and-kill] Finished after {} hunts", hunts);

    Ok(maze)
}

/// First unvisited cell in row-major order that borders a visited cell.
fn hunt(maze: &Maze, height: usize, width: usize, visited: &[bool]) -> Option<Coordinate> {
    (0..height)
        .flat_map(|row| (0..width).map(move |col| Coordinate::new(row, col)))
        .filter(|cell| !visited[cell.ravel_index(width)])
        .find(|&cell| {
            maze.edges(cell)
                .iter()
                .any(|edge| visited[edge.to.ravel_index(width)])
        })
}
