use std::collections::{HashMap, HashSet, VecDeque};

use super::path::{Path, path_cost};
use crate::maze::{Coordinate, Maze, TypeProvider};

/// One side of the search: a breadth-first frontier grown from `origin`.
struct Frontier {
    pending: VecDeque<Coordinate>,
    visited: HashSet<Coordinate>,
    /// Points each discovered cell one step back toward the origin
    predecessors: HashMap<Coordinate, Coordinate>,
}

impl Frontier {
    fn new(origin: Coordinate) -> Self {
        Frontier {
            pending: VecDeque::from([origin]),
            visited: HashSet::from([origin]),
            predecessors: HashMap::new(),
        }
    }

    /// Expands the oldest pending cell. Returns the first newly discovered cell that the
    /// other side has already visited.
    fn expand(&mut self, maze: &Maze, provider: &TypeProvider, other: &Frontier) -> Option<Coordinate> {
        let current = self.pending.pop_front()?;
        for edge in maze.edges(current) {
            if !provider.is_passage(edge.edge_type) || !self.visited.insert(edge.to) {
                continue;
            }
            self.predecessors.insert(edge.to, current);
            if other.visited.contains(&edge.to) {
                return Some(edge.to);
            }
            self.pending.push_back(edge.to);
        }
        None
    }

    /// Cells from `from` back to this frontier's origin.
    fn chain(&self, from: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        std::iter::successors(Some(from), |coord| self.predecessors.get(coord).copied())
    }
}

/// Grows one frontier from each end, one expansion per side in turn, and stops as soon as
/// they touch. The route is the fewest-steps route through the meeting cell; its cost is
/// summed afterwards and is not necessarily the cheapest.
pub(crate) fn solve_bidirectional(
    maze: &Maze,
    start: Coordinate,
    end: Coordinate,
    provider: &TypeProvider,
) -> Path {
    let mut forward = Frontier::new(start);
    let mut backward = Frontier::new(end);

    let meeting = loop {
        // Once either side runs dry its whole component has been seen without a meeting
        if forward.pending.is_empty() || backward.pending.is_empty() {
            return Path::empty();
        }
        if let Some(meeting) = forward.expand(maze, provider, &backward) {
            break meeting;
        }
        if let Some(meeting) = backward.expand(maze, provider, &forward) {
            break meeting;
        }
    };

    let mut route: Vec<Coordinate> = forward.chain(meeting).collect();
    route.reverse();
    route.extend(backward.chain(meeting).skip(1));
    tracing::trace!(
        "[bidirectional] Frontiers met at {} after visiting {} cells",
        meeting,
        forward.visited.len() + backward.visited.len()
    );

    match path_cost(maze, &route, provider) {
        Some(cost) => Path::new(route, cost),
        None => Path::empty(),
    }
}
