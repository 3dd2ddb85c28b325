use std::fmt;

/// Position of a cell in the maze. Ordered row-major (row first, then column).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// Number of unit steps between two coordinates when moving only along rows and columns.
    pub fn manhattan(self, other: Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Row-major index of the coordinate in a lattice `width` cells wide.
    pub(crate) fn ravel_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    /// Cells one step away in the cardinal directions (up, down, left, right),
    /// restricted to a `height` x `width` lattice.
    pub(crate) fn lattice_neighbors(
        self,
        height: usize,
        width: usize,
    ) -> impl Iterator<Item = Coordinate> {
        let Coordinate { row, col } = self;
        [
            // NOTE: wrapping_sub turns an underflow into usize::MAX and saturating_add caps at
            // usize::MAX, both of which the bounds filter below discards.
            (row.wrapping_sub(1), col),
            (row.saturating_add(1), col),
            (row, col.wrapping_sub(1)),
            (row, col.saturating_add(1)),
        ]
        .into_iter()
        .filter(move |&(r, c)| r < height && c < width)
        .map(|(r, c)| Coordinate::new(r, c))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Surface of a cell. Entering a cell costs its movement cost.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Cheapest surface, entering it is free.
    GoodSurface,
    /// Plain floor.
    #[default]
    Passage,
    /// Slow surface.
    BadSurface,
}

impl CellType {
    pub const ALL: [CellType; 3] = [
        CellType::GoodSurface,
        CellType::Passage,
        CellType::BadSurface,
    ];

    pub const fn movement_cost(self) -> i32 {
        match self {
            CellType::GoodSurface => 0,
            CellType::Passage => 1,
            CellType::BadSurface => 2,
        }
    }
}

/// A cell of the maze. Two cells are the same cell when they share a coordinate,
/// whatever their surfaces.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub coordinate: Coordinate,
    pub cell_type: CellType,
}

impl Cell {
    pub const fn new(coordinate: Coordinate, cell_type: CellType) -> Self {
        Cell {
            coordinate,
            cell_type,
        }
    }

    pub const fn movement_cost(&self) -> i32 {
        self.cell_type.movement_cost()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl Eq for Cell {}

impl std::hash::Hash for Cell {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_ordering_is_row_major() {
        let mut coords = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 2),
            Coordinate::new(0, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_lattice_neighbors() {
        let neighbors = Coordinate::new(1, 1).lattice_neighbors(3, 3).collect::<Vec<_>>();
        assert_eq!(
            neighbors,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(2, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2)
            ]
        );
        // Corner cells only see two neighbors
        assert_eq!(Coordinate::new(0, 0).lattice_neighbors(3, 3).count(), 2);
        // Single cell lattice has none
        assert_eq!(Coordinate::new(0, 0).lattice_neighbors(1, 1).count(), 0);
    }

    #[test]
    fn test_cell_equality_ignores_surface() {
        let a = Cell::new(Coordinate::new(2, 3), CellType::GoodSurface);
        let b = Cell::new(Coordinate::new(2, 3), CellType::BadSurface);
        assert_eq!(a, b);
        assert_eq!(a.movement_cost(), 0);
        assert_eq!(b.movement_cost(), 2);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coordinate::new(0, 0).manhattan(Coordinate::new(4, 4)), 8);
        assert_eq!(Coordinate::new(3, 1).manhattan(Coordinate::new(1, 3)), 4);
    }
}
