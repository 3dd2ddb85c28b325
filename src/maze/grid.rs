use rand::Rng;

use super::{CellType, Coordinate, EdgeType, Maze, TypeProvider};
use crate::error::{MazeError, Result};

/// Initial state of every connection in a freshly built lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFill {
    /// Every neighbor pair starts walled off; generators carve passages.
    Walls,
    /// Every neighbor pair starts open; generators place walls.
    Passages,
}

impl Maze {
    /// Builds a `height` x `width` lattice where each cell is connected to its
    /// four neighbors (fewer on the border).
    ///
    /// Cell surfaces come from the provider. Each connection receives a single type drawn
    /// once for both of its directions.
    pub fn lattice<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        fill: GridFill,
        provider: &TypeProvider,
        rng: &mut R,
    ) -> Result<Maze> {
        if height == 0 || width == 0 {
            tracing::warn!("[grid] Rejecting maze dimensions {}x{}", height, width);
            return Err(MazeError::InvalidDimension { height, width });
        }

        let mut maze = Maze::new();
        (0..height).for_each(|row| {
            (0..width).for_each(|col| {
                let cell_type: CellType = provider.cell_type(rng);
                maze.add_cell(Coordinate::new(row, col), cell_type);
            })
        });

        for row in 0..height {
            for col in 0..width {
                let coord = Coordinate::new(row, col);
                // Only look forward so each pair is connected once
                for neighbor in coord
                    .lattice_neighbors(height, width)
                    .filter(|&n| n > coord)
                {
                    let edge_type: EdgeType = match fill {
                        GridFill::Walls => provider.impassable_edge_type(rng),
                        GridFill::Passages => provider.passable_edge_type(rng),
                    };
                    maze.add_edge(coord, neighbor, edge_type);
                }
            }
        }

        Ok(maze)
    }
}
