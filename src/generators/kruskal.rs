use rand::{Rng, seq::SliceRandom};

use super::{open_passage, union_find::UnionFind};
use crate::{
    error::Result,
    maze::{Edge, GridFill, Maze, TypeProvider},
};

pub fn randomized_kruskal<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    provider: &TypeProvider,
    rng: &mut R,
) -> Result<Maze> {
    let mut maze = Maze::lattice(height, width, GridFill::Walls, provider, rng)?;

    // Initialize Union-Find for all cells
    let mut uf = UnionFind::new(height * width);

    // Collect every wall once, in its row-major direction
    let mut walls: Vec<Edge> = maze
        .undirected_edges()
        .filter(|edge| provider.is_wall(edge.edge_type))
        .collect();

    // Shuffle walls randomly
    walls.shuffle(rng);

    let mut opened = 0usize;
    for edge in walls {
        let idx1 = edge.from.ravel_index(width);
        let idx2 = edge.to.ravel_index(width);

        // If cells are not yet connected, remove the wall between them
        if uf.unite(idx1, idx2) {
            open_passage(&mut maze, edge.from, edge.to, provider, rng);
            opened += 1;
        }
    }
    tracing::debug!("[kruskal] Opened {} walls", opened);

    Ok(maze)
}
