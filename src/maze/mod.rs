pub mod cell;
pub mod edge;
mod grid;
pub mod types;

use std::collections::BTreeMap;

use rand::Rng;

pub use cell::{Cell, CellType, Coordinate};
pub use edge::{Edge, EdgeType};
pub use grid::GridFill;
pub use types::{ProviderKind, TypeProvider};

#[derive(Debug, Clone, Default)]
struct Node {
    cell_type: CellType,
    /// Outgoing edges, in insertion order.
    edges: Vec<Edge>,
}

/// A maze stored as an adjacency map from each cell to its outgoing edges.
///
/// Every connection is kept as two directed edges that always share the same type.
/// The only ways to change an edge ([`Maze::add_edge`], [`Maze::upsert_edge`],
/// [`Maze::set_edge_type`], [`Maze::remove_edge`]) act on both directions at once.
#[derive(Debug, Clone, Default)]
pub struct Maze {
    nodes: BTreeMap<Coordinate, Node>,
}

impl Maze {
    /// Creates an empty maze with no cells.
    pub fn new() -> Self {
        Maze::default()
    }

    /// Number of cells in the maze.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a cell. Returns `false` and leaves the maze untouched if the cell already exists.
    pub fn add_cell(&mut self, coordinate: Coordinate, cell_type: CellType) -> bool {
        if self.nodes.contains_key(&coordinate) {
            return false;
        }
        self.nodes.insert(
            coordinate,
            Node {
                cell_type,
                edges: Vec::new(),
            },
        );
        true
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.nodes.contains_key(&coordinate)
    }

    pub fn cell(&self, coordinate: Coordinate) -> Option<Cell> {
        self.nodes
            .get(&coordinate)
            .map(|node| Cell::new(coordinate, node.cell_type))
    }

    /// Changes the surface of a cell. Returns `false` if there is no such cell.
    pub fn set_cell_type(&mut self, coordinate: Coordinate, cell_type: CellType) -> bool {
        match self.nodes.get_mut(&coordinate) {
            Some(node) => {
                node.cell_type = cell_type;
                true
            }
            None => false,
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.nodes
            .iter()
            .map(|(&coordinate, node)| Cell::new(coordinate, node.cell_type))
    }

    /// Outgoing edges of a cell. Unknown cells have none.
    pub fn edges(&self, coordinate: Coordinate) -> &[Edge] {
        self.nodes
            .get(&coordinate)
            .map(|node| node.edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn edge(&self, from: Coordinate, to: Coordinate) -> Option<Edge> {
        self.edges(from).iter().find(|edge| edge.to == to).copied()
    }

    pub fn edge_type(&self, from: Coordinate, to: Coordinate) -> Option<EdgeType> {
        self.edge(from, to).map(|edge| edge.edge_type)
    }

    /// Connects two existing, distinct cells in both directions.
    /// Returns `false` if either cell is missing or they are already connected.
    pub fn add_edge(&mut self, a: Coordinate, b: Coordinate, edge_type: EdgeType) -> bool {
        if a == b || !self.contains(a) || !self.contains(b) || self.edge(a, b).is_some() {
            return false;
        }
        let edge = Edge::new(a, b, edge_type);
        if let Some(node) = self.nodes.get_mut(&a) {
            node.edges.push(edge);
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            node.edges.push(edge.reversed());
        }
        true
    }

    /// Sets the type of the connection between `a` and `b`, creating it if needed.
    /// Returns `false` only when the connection cannot exist (missing or identical cells).
    pub fn upsert_edge(&mut self, a: Coordinate, b: Coordinate, edge_type: EdgeType) -> bool {
        self.set_edge_type(a, b, edge_type) || self.add_edge(a, b, edge_type)
    }

    /// Changes the type of an existing connection in both directions.
    /// Returns `false` if `a` and `b` are not connected.
    pub fn set_edge_type(&mut self, a: Coordinate, b: Coordinate, edge_type: EdgeType) -> bool {
        if self.edge(a, b).is_none() {
            return false;
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some(edge) = self.edge_mut(from, to) {
                edge.edge_type = edge_type;
            }
        }
        true
    }

    /// Disconnects `a` and `b` in both directions. Returns `false` if they were not connected.
    pub fn remove_edge(&mut self, a: Coordinate, b: Coordinate) -> bool {
        let mut removed = false;
        for (from, to) in [(a, b), (b, a)] {
            if let Some(node) = self.nodes.get_mut(&from) {
                let before = node.edges.len();
                node.edges.retain(|edge| edge.to != to);
                removed |= node.edges.len() != before;
            }
        }
        removed
    }

    fn edge_mut(&mut self, from: Coordinate, to: Coordinate) -> Option<&mut Edge> {
        self.nodes
            .get_mut(&from)?
            .edges
            .iter_mut()
            .find(|edge| edge.to == to)
    }

    /// Neighbors reachable from `coordinate` through an edge the provider classifies as a passage.
    pub fn passable_neighbors<'a>(
        &'a self,
        coordinate: Coordinate,
        provider: &'a TypeProvider,
    ) -> impl Iterator<Item = Coordinate> + 'a {
        self.edges(coordinate)
            .iter()
            .filter(move |edge| provider.is_passage(edge.edge_type))
            .map(|edge| edge.to)
    }

    /// Every connection once, in its canonical (row-major) direction.
    pub fn undirected_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes
            .values()
            .flat_map(|node| node.edges.iter())
            .filter(|edge| edge.is_canonical())
            .copied()
    }

    /// Number of connections the provider classifies as passages.
    pub fn passage_count(&self, provider: &TypeProvider) -> usize {
        self.undirected_edges()
            .filter(|edge| provider.is_passage(edge.edge_type))
            .count()
    }

    /// Picks a random cell of `row` that has at least one passage, e.g. as an entrance on the
    /// top row or an exit on the bottom row.
    pub fn random_open_cell_in_row<R: Rng + ?Sized>(
        &self,
        row: usize,
        provider: &TypeProvider,
        rng: &mut R,
    ) -> Option<Coordinate> {
        let candidates = self
            .nodes
            .range(Coordinate::new(row, 0)..=Coordinate::new(row, usize::MAX))
            .map(|(&coordinate, _)| coordinate)
            .filter(|&coordinate| self.passable_neighbors(coordinate, provider).next().is_some())
            .collect::<Vec<_>>();
        match candidates.len() {
            0 => None,
            n => Some(candidates[rng.random_range(0..n)]),
        }
    }
}
