#![allow(dead_code)]

use mazegraph::{CellType, Coordinate, EdgeType, Maze};

pub const SIZE: usize = 5;
pub const START: Coordinate = Coordinate::new(0, 0);
pub const END: Coordinate = Coordinate::new(4, 4);

/// Cheapest route through [`weighted_routes`]: good edges down the left column and
/// along the bottom row.
pub const CHEAPEST_COST: i32 = 10;
/// Most expensive route: bad edges along the top row and down the right column.
pub const PRICIEST_COST: i32 = 40;
/// The diagonal shortcut.
pub const SHORTCUT_COST: i32 = 17;

fn passage_grid() -> Maze {
    let mut maze = Maze::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            maze.add_cell(Coordinate::new(row, col), CellType::Passage);
        }
    }
    maze
}

fn connect(maze: &mut Maze, route: &[(usize, usize)], edge_types: &[EdgeType]) {
    for (step, edge_type) in route.windows(2).zip(edge_types) {
        maze.add_edge(step[0].into(), step[1].into(), *edge_type);
    }
}

/// A 5x5 maze with exactly three routes between the corners (0, 0) and (4, 4):
///
/// - along the top row and down the right column, over bad edges and bad surfaces
/// - down the left column and along the bottom row, over good edges and good surfaces
/// - a diagonal shortcut of four steps through bad surfaces
pub fn weighted_routes() -> Maze {
    let mut maze = passage_grid();

    let top_right = [
        (0, 0),
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 4),
        (2, 4),
        (3, 4),
        (4, 4),
    ];
    let left_bottom = [
        (0, 0),
        (1, 0),
        (2, 0),
        (3, 0),
        (4, 0),
        (4, 1),
        (4, 2),
        (4, 3),
        (4, 4),
    ];
    let diagonal = [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)];

    // The shared corners stay plain passages
    for &coord in &top_right[1..8] {
        maze.set_cell_type(coord.into(), CellType::BadSurface);
    }
    for &coord in &left_bottom[1..8] {
        maze.set_cell_type(coord.into(), CellType::GoodSurface);
    }
    for &coord in &diagonal[1..4] {
        maze.set_cell_type(coord.into(), CellType::BadSurface);
    }

    connect(&mut maze, &top_right, &[EdgeType::BadTransition; 8]);
    connect(&mut maze, &left_bottom, &[EdgeType::GoodTransition; 8]);
    connect(
        &mut maze,
        &diagonal,
        &[
            EdgeType::Transition,
            EdgeType::BadTransition,
            EdgeType::Transition,
            EdgeType::Transition,
        ],
    );
    maze
}

/// A 5x5 lattice where every connection is a wall.
pub fn all_walls() -> Maze {
    let mut maze = passage_grid();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let here = Coordinate::new(row, col);
            if row + 1 < SIZE {
                maze.add_edge(here, Coordinate::new(row + 1, col), EdgeType::Wall);
            }
            if col + 1 < SIZE {
                maze.add_edge(here, Coordinate::new(row, col + 1), EdgeType::Wall);
            }
        }
    }
    maze
}
