use rand::Rng;

use crate::{
    error::Result,
    maze::{Coordinate, GridFill, Maze, TypeProvider},
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Orientation {
    /// A wall between two rows
    Horizontal,
    /// A wall between two columns
    Vertical,
}

pub fn recursive_division<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    provider: &TypeProvider,
    rng: &mut R,
) -> Result<Maze> {
    // Start from a fully open grid and build walls in
    let mut maze = Maze::lattice(height, width, GridFill::Passages, provider, rng)?;

    /// Splits the region with one wall that has a single gap, then splits both halves.
    /// A region one cell wide or high is a corridor and is left open.
    fn divide<R: Rng + ?Sized>(
        maze: &mut Maze,
        top_left: (usize, usize),
        width: usize,
        height: usize,
        provider: &TypeProvider,
        rng: &mut R,
    ) {
        if width < 2 || height < 2 {
            return;
        }

        let (row, col) = top_left;

        let orientation = if width < height {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };

        match orientation {
            Orientation::Horizontal => {
                // Randomly choose the row the wall goes under
                let diff = rng.random_range(0..height - 1);
                let row_wall = row + diff;

                // Randomly choose a position for the hole in the wall
                let col_hole = col + rng.random_range(0..width);

                (col..col + width)
                    .filter(|&c| c != col_hole)
                    .for_each(|c| {
                        let wall = provider.impassable_edge_type(rng);
                        maze.set_edge_type(
                            Coordinate::new(row_wall, c),
                            Coordinate::new(row_wall + 1, c),
                            wall,
                        );
                    });

                let upper_height = diff + 1;
                let lower_height = height - upper_height;

                // Recursively divide the regions above and below the wall
                divide(maze, (row, col), width, upper_height, provider, rng);
                divide(maze, (row_wall + 1, col), width, lower_height, provider, rng);
            }
            Orientation::Vertical => {
                // Choose the column the wall goes after
                let diff = rng.random_range(0..width - 1);
                let col_wall = col + diff;

                // Randomly choose a position for the hole in the wall
                let row_hole = row + rng.random_range(0..height);

                (row..row + height)
                    .filter(|&r| r != row_hole)
                    .for_each(|r| {
                        let wall = provider.impassable_edge_type(rng);
                        maze.set_edge_type(
                            Coordinate::new(r, col_wall),
                            Coordinate::new(r, col_wall + 1),
                            wall,
                        );
                    });

                let left_width = diff + 1;
                let right_width = width - left_width;

                // Recursively divide the regions left and right of the wall
                divide(maze, (row, col), left_width, height, provider, rng);
                divide(maze, (row, col_wall + 1), right_width, height, provider, rng);
            }
        }
    }

    // Start the recursive division
    divide(&mut maze, (0, 0), width, height, provider, rng);

    Ok(maze)
}
