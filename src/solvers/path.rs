use std::collections::HashMap;

use crate::maze::{Coordinate, Maze, TypeProvider};

/// A route through the maze and what it costs to walk it.
///
/// The cost counts the start cell's surface, then for every step the edge crossed and the
/// surface of the cell entered. An empty path means no route was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    coordinates: Vec<Coordinate>,
    total_cost: i32,
}

impl Path {
    pub fn new(coordinates: Vec<Coordinate>, total_cost: i32) -> Self {
        Path {
            coordinates,
            total_cost,
        }
    }

    /// The "no route" result: no coordinates, zero cost.
    pub fn empty() -> Self {
        Path::default()
    }

    /// A path that starts and ends on the same cell.
    pub fn single(coordinate: Coordinate, cost: i32) -> Self {
        Path::new(vec![coordinate], cost)
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn total_cost(&self) -> i32 {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "no path");
        }
        write!(f, "cost {}:", self.total_cost)?;
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, " ->")?;
            }
            write!(f, " {}", coordinate)?;
        }
        Ok(())
    }
}

/// Follows `predecessors` back from `end` to the cell with no predecessor, and returns
/// the route in walking order with the already known cost attached.
pub(crate) fn reconstruct(
    predecessors: &HashMap<Coordinate, Coordinate>,
    end: Coordinate,
    total_cost: i32,
) -> Path {
    let mut coordinates = vec![end];
    let mut current = end;
    while let Some(&previous) = predecessors.get(&current) {
        coordinates.push(previous);
        current = previous;
    }
    coordinates.reverse();
    Path::new(coordinates, total_cost)
}

/// Cost of walking `coordinates` in order. `None` if a cell is missing or a step does not
/// cross a passage. An empty sequence costs nothing.
pub fn path_cost(maze: &Maze, coordinates: &[Coordinate], provider: &TypeProvider) -> Option<i32> {
    let Some(&first) = coordinates.first() else {
        return Some(0);
    };
    let mut total = maze.cell(first)?.movement_cost();
    for step in coordinates.windows(2) {
        let edge_type = maze.edge_type(step[0], step[1])?;
        if !provider.is_passage(edge_type) {
            return None;
        }
        total += edge_type.movement_cost() + maze.cell(step[1])?.movement_cost();
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{CellType, EdgeType};

    #[test]
    fn test_reconstruct_walks_back_to_start() {
        let (a, b, c) = (
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
        );
        let predecessors = HashMap::from([(b, a), (c, b)]);
        let path = reconstruct(&predecessors, c, 7);
        assert_eq!(path.coordinates(), &[a, b, c]);
        assert_eq!(path.total_cost(), 7);
    }

    #[test]
    fn test_path_cost() {
        let mut maze = Maze::new();
        let (a, b, c) = (
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(0, 2),
        );
        maze.add_cell(a, CellType::Passage);
        maze.add_cell(b, CellType::BadSurface);
        maze.add_cell(c, CellType::GoodSurface);
        maze.add_edge(a, b, EdgeType::Transition);
        maze.add_edge(b, c, EdgeType::Wall);
        let provider = TypeProvider::simple();

        assert_eq!(path_cost(&maze, &[a], &provider), Some(1));
        assert_eq!(path_cost(&maze, &[a, b], &provider), Some(1 + 2 + 2));
        // Walls cannot be walked through
        assert_eq!(path_cost(&maze, &[a, b, c], &provider), None);
        // Neither can cells that are not adjacent
        assert_eq!(path_cost(&maze, &[a, c], &provider), None);
        assert_eq!(path_cost(&maze, &[], &provider), Some(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Path::empty().to_string(), "no path");
        let path = Path::new(vec![Coordinate::new(0, 0), Coordinate::new(1, 0)], 3);
        assert_eq!(path.to_string(), "cost 3: (0, 0) -> (1, 0)");
    }
}
