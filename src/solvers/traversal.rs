use std::collections::{HashMap, HashSet, VecDeque};

use super::path::{Path, reconstruct};
use crate::maze::{Cell, Coordinate, Maze, TypeProvider};

/// Order in which discovered cells are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Discipline {
    /// Queue: breadth-first, finds a route with the fewest steps.
    Fifo,
    /// Stack: depth-first, finds some route.
    Lifo,
}

impl Discipline {
    fn take(self, pending: &mut VecDeque<Coordinate>) -> Option<Coordinate> {
        match self {
            Discipline::Fifo => pending.pop_front(),
            Discipline::Lifo => pending.pop_back(),
        }
    }
}

/// Unweighted search from `start` to `end`. The cost of the route found is tracked along
/// the way but never influences which cell is explored next.
pub(crate) fn traverse(
    maze: &Maze,
    start: Cell,
    end: Coordinate,
    provider: &TypeProvider,
    discipline: Discipline,
) -> Path {
    let mut pending = VecDeque::from([start.coordinate]);
    // Cells are marked when discovered, so each one enters `pending` at most once
    let mut visited = HashSet::from([start.coordinate]);
    let mut predecessors = HashMap::new();
    let mut costs = HashMap::from([(start.coordinate, start.movement_cost())]);

    while let Some(current) = discipline.take(&mut pending) {
        let current_cost = costs.get(&current).copied().unwrap_or_default();
        if current == end {
            return reconstruct(&predecessors, end, current_cost);
        }

        for edge in maze.edges(current) {
            if !provider.is_passage(edge.edge_type) || !visited.insert(edge.to) {
                continue;
            }
            let entered = maze.cell(edge.to).map_or(0, |cell| cell.movement_cost());
            costs.insert(
                edge.to,
                current_cost + edge.edge_type.movement_cost() + entered,
            );
            predecessors.insert(edge.to, current);
            pending.push_back(edge.to);
        }
    }

    Path::empty()
}

pub(crate) fn solve_bfs(maze: &Maze, start: Cell, end: Coordinate, provider: &TypeProvider) -> Path {
    traverse(maze, start, end, provider, Discipline::Fifo)
}

pub(crate) fn solve_dfs(maze: &Maze, start: Cell, end: Coordinate, provider: &TypeProvider) -> Path {
    traverse(maze, start, end, provider, Discipline::Lifo)
}
