use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use super::path::{Path, reconstruct};
use crate::maze::{Cell, Coordinate, Maze, TypeProvider};

/// How a discovered cell is ranked in the open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ranking {
    /// Cost so far (Dijkstra).
    Cost,
    /// Cost so far plus Manhattan distance to the goal (A*).
    CostPlusManhattan,
}

impl Ranking {
    fn priority(self, cost: i32, coord: Coordinate, goal: Coordinate) -> i32 {
        match self {
            Ranking::Cost => cost,
            Ranking::CostPlusManhattan => {
                cost.saturating_add(i32::try_from(coord.manhattan(goal)).unwrap_or(i32::MAX))
            }
        }
    }
}

/// Entry in the open set. Ordered by priority first, the coordinate only breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TrackedCell {
    priority: i32,
    coord: Coordinate,
}

/// Best-first search over passages. A cell is final once it is popped, and only then are
/// its neighbors relaxed. Stale heap entries for already final cells are skipped.
pub(crate) fn best_first(
    maze: &Maze,
    start: Cell,
    end: Coordinate,
    provider: &TypeProvider,
    ranking: Ranking,
) -> Path {
    // Using Reverse to turn the max-heap into a min-heap
    let mut open = BinaryHeap::new();
    let mut closed = HashSet::new();
    let mut predecessors = HashMap::new();
    let mut costs = HashMap::from([(start.coordinate, start.movement_cost())]);

    open.push(Reverse(TrackedCell {
        priority: ranking.priority(start.movement_cost(), start.coordinate, end),
        coord: start.coordinate,
    }));

    while let Some(Reverse(TrackedCell { coord: current, .. })) = open.pop() {
        if !closed.insert(current) {
            continue;
        }
        let current_cost = costs.get(&current).copied().unwrap_or_default();
        if current == end {
            return reconstruct(&predecessors, end, current_cost);
        }

        for edge in maze.edges(current) {
            if !provider.is_passage(edge.edge_type) || closed.contains(&edge.to) {
                continue;
            }
            let entered = maze.cell(edge.to).map_or(0, |cell| cell.movement_cost());
            let tentative = current_cost + edge.edge_type.movement_cost() + entered;
            // Only keep neighbors that we can reach with a lower cost
            if costs.get(&edge.to).is_none_or(|&known| tentative < known) {
                costs.insert(edge.to, tentative);
                predecessors.insert(edge.to, current);
                open.push(Reverse(TrackedCell {
                    priority: ranking.priority(tentative, edge.to, end),
                    coord: edge.to,
                }));
            }
        }
    }

    Path::empty()
}

pub(crate) fn solve_dijkstra(
    maze: &Maze,
    start: Cell,
    end: Coordinate,
    provider: &TypeProvider,
) -> Path {
    best_first(maze, start, end, provider, Ranking::Cost)
}

pub(crate) fn solve_a_star(
    maze: &Maze,
    start: Cell,
    end: Coordinate,
    provider: &TypeProvider,
) -> Path {
    best_first(maze, start, end, provider, Ranking::CostPlusManhattan)
}
