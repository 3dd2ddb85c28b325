use rand::Rng;

use crate::{
    error::MazeError,
    maze::{Edge, Maze, TypeProvider},
};

/// How many walls the cycle injector knocks down, as a percentage chance per wall.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl CycleLevel {
    pub const ALL: [CycleLevel; 3] = [CycleLevel::Low, CycleLevel::Medium, CycleLevel::High];

    pub const fn percent(self) -> u32 {
        match self {
            CycleLevel::Low => 10,
            CycleLevel::Medium => 20,
            CycleLevel::High => 30,
        }
    }
}

impl std::fmt::Display for CycleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleLevel::Low => write!(f, "Low ({}%)", self.percent()),
            CycleLevel::Medium => write!(f, "Medium ({}%)", self.percent()),
            CycleLevel::High => write!(f, "High ({}%)", self.percent()),
        }
    }
}

impl std::str::FromStr for CycleLevel {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(CycleLevel::Low),
            "medium" => Ok(CycleLevel::Medium),
            "high" => Ok(CycleLevel::High),
            _ => Err(MazeError::UnknownCycleLevel(s.to_string())),
        }
    }
}

/// Opens extra passages in an already connected maze, creating loops.
///
/// Each wall is considered once and becomes a passage with the level's probability.
/// Existing passages are never touched. Returns the number of walls opened.
pub fn add_cycles<R: Rng + ?Sized>(
    maze: &mut Maze,
    provider: &TypeProvider,
    level: CycleLevel,
    rng: &mut R,
) -> usize {
    let walls: Vec<Edge> = maze
        .undirected_edges()
        .filter(|edge| !provider.is_passage(edge.edge_type))
        .collect();

    let mut opened = 0;
    for edge in walls {
        if rng.random_range(0..100) < level.percent() {
            let passage = provider.passable_edge_type(rng);
            maze.set_edge_type(edge.from, edge.to, passage);
            opened += 1;
        }
    }
    tracing::debug!("[cycles] Opened {} extra passages at level {}", opened, level);
    opened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_add_cycles_only_adds_passages() {
        let provider = TypeProvider::simple();
        let mut rng = StdRng::seed_from_u64(21);
        let mut maze = generate_maze(12, 12, Generator::Kruskal, &provider, &mut rng).unwrap();
        let before = maze.passage_count(&provider);
        let passages_before = maze
            .undirected_edges()
            .filter(|edge| provider.is_passage(edge.edge_type))
            .collect::<Vec<_>>();

        let opened = add_cycles(&mut maze, &provider, CycleLevel::High, &mut rng);

        assert_eq!(maze.passage_count(&provider), before + opened);
        assert!(opened > 0);
        for edge in passages_before {
            assert!(provider.is_passage(maze.edge_type(edge.from, edge.to).unwrap()));
        }
    }

    #[test]
    fn test_levels_scale_roughly() {
        // 20x20 tree has 760 - 399 = 361 walls left
        let provider = TypeProvider::simple();
        let opened = |level| {
            let mut rng = StdRng::seed_from_u64(5);
            let mut maze =
                generate_maze(20, 20, Generator::Prim, &provider, &mut rng).unwrap();
            add_cycles(&mut maze, &provider, level, &mut rng)
        };
        let counts = CycleLevel::ALL.map(opened);
        assert!(
            counts[0] < counts[2],
            "low={} high={}",
            counts[0],
            counts[2]
        );
        assert!(counts.iter().all(|&count| count < 361 / 2));
    }

    #[test]
    fn test_cycle_level_parsing() {
        assert_eq!("HIGH".parse::<CycleLevel>(), Ok(CycleLevel::High));
        assert!("extreme".parse::<CycleLevel>().is_err());
        assert_eq!(CycleLevel::Medium.percent(), 20);
    }
}
