use rand::Rng;

use super::{cell::CellType, edge::EdgeType};
use crate::error::MazeError;

/// Decides which surfaces and connection kinds a maze is built from,
/// and which edge kinds count as walls or passages.
///
/// A palette with a single entry always yields that entry without touching the RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeProvider {
    cell_types: &'static [CellType],
    passages: &'static [EdgeType],
    walls: &'static [EdgeType],
}

impl TypeProvider {
    /// Uniform mazes: every cell is a plain passage and every opening a plain transition.
    pub const fn simple() -> Self {
        TypeProvider {
            cell_types: &[CellType::Passage],
            passages: &[EdgeType::Transition],
            walls: &[EdgeType::Wall],
        }
    }

    /// Weighted mazes: surfaces and openings are drawn at random from every variant.
    pub const fn advanced() -> Self {
        TypeProvider {
            cell_types: &CellType::ALL,
            passages: &EdgeType::PASSAGES,
            walls: &[EdgeType::Wall],
        }
    }

    /// Custom palette. Returns `None` if any palette is empty, or if a kind is listed
    /// both as a wall and as a passage.
    pub fn new(
        cell_types: &'static [CellType],
        passages: &'static [EdgeType],
        walls: &'static [EdgeType],
    ) -> Option<Self> {
        if cell_types.is_empty() || passages.is_empty() || walls.is_empty() {
            return None;
        }
        if passages.iter().any(|p| walls.contains(p)) {
            return None;
        }
        Some(TypeProvider {
            cell_types,
            passages,
            walls,
        })
    }

    pub fn cell_type<R: Rng + ?Sized>(&self, rng: &mut R) -> CellType {
        pick(self.cell_types, rng)
    }

    pub fn passable_edge_type<R: Rng + ?Sized>(&self, rng: &mut R) -> EdgeType {
        pick(self.passages, rng)
    }

    pub fn impassable_edge_type<R: Rng + ?Sized>(&self, rng: &mut R) -> EdgeType {
        pick(self.walls, rng)
    }

    pub fn is_wall(&self, edge_type: EdgeType) -> bool {
        self.walls.contains(&edge_type)
    }

    pub fn is_passage(&self, edge_type: EdgeType) -> bool {
        self.passages.contains(&edge_type)
    }
}

impl Default for TypeProvider {
    fn default() -> Self {
        TypeProvider::simple()
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(palette: &[T], rng: &mut R) -> T {
    match palette {
        [only] => *only,
        _ => palette[rng.random_range(0..palette.len())],
    }
}

/// Named type providers selectable at runtime.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    Simple,
    Advanced,
}

impl ProviderKind {
    pub const fn provider(self) -> TypeProvider {
        match self {
            ProviderKind::Simple => TypeProvider::simple(),
            ProviderKind::Advanced => TypeProvider::advanced(),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Simple => write!(f, "Simple cells, without surface costs"),
            ProviderKind::Advanced => write!(f, "Advanced cells with varied surface costs"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(ProviderKind::Simple),
            "advanced" => Ok(ProviderKind::Advanced),
            _ => Err(MazeError::UnknownProvider(s.to_string())),
        }
    }
}
