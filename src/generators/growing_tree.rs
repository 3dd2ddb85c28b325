use std::collections::VecDeque;

use rand::Rng;

use super::{edges_by_visited, open_passage, random_cell};
use crate::{
    error::Result,
    maze::{GridFill, Maze, TypeProvider},
};

/// Which active cell the Growing Tree algorithm extends next.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Any active cell, uniformly. Branches like Prim's algorithm.
    #[default]
    Random,
    /// The most recently added cell. Behaves as a recursive backtracker (long corridors).
    Newest,
    /// The least recently added cell. Expands breadth-first.
    Oldest,
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Random => write!(f, "random cell"),
            Selection::Newest => write!(f, "newest cell"),
            Selection::Oldest => write!(f, "oldest cell"),
        }
    }
}

impl Selection {
    fn pick<R: Rng + ?Sized>(self, len: usize, rng: &mut R) -> usize {
        match self {
            Selection::Random => rng.random_range(0..len),
            Selection::Newest => len - 1,
            Selection::Oldest => 0,
        }
    }
}

pub fn growing_tree<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    selection: Selection,
    provider: &TypeProvider,
    rng: &mut R,
) -> Result<Maze> {
    let mut maze = Maze::lattice(height, width, GridFill::Walls, provider, rng)?;

    let start = random_cell(height, width, rng);
    let mut visited = vec![false; height * width];
    visited[start.ravel_index(width)] = true;

    // Cells that may still have unvisited neighbors, oldest first
    let mut active = VecDeque::from([start]);

    while !active.is_empty() {
        let idx = selection.pick(active.len(), rng);
        let cell = active[idx];

        let unvisited = edges_by_visited(&maze, cell, &visited, width, false);
        if unvisited.is_empty() {
            // Dead end, the cell is done
            active.remove(idx);
            continue;
        }

        let edge = unvisited[rng.random_range(0..unvisited.len())];
        open_passage(&mut maze, edge.from, edge.to, provider, rng);
        visited[edge.to.ravel_index(width)] = true;
        active.push_back(edge.to);
    }

    Ok(maze)
}
