use rand::Rng;

use crate::{
    cycles::{CycleLevel, add_cycles},
    error::Result,
    generators::{Generator, generate_maze},
    maze::{Maze, ProviderKind, TypeProvider},
};

/// Everything needed to build a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeSettings {
    pub height: usize,
    pub width: usize,
    pub generator: Generator,
    pub provider: ProviderKind,
    /// Extra passages knocked through after generation, if any.
    pub cycles: Option<CycleLevel>,
}

impl Default for MazeSettings {
    fn default() -> Self {
        MazeSettings {
            height: 10,
            width: 10,
            generator: Generator::default(),
            provider: ProviderKind::default(),
            cycles: None,
        }
    }
}

impl MazeSettings {
    pub fn type_provider(&self) -> TypeProvider {
        self.provider.provider()
    }

    /// Generates the maze, then adds cycles when asked to.
    ///
    /// Recursive Division never gets cycles added.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Maze> {
        let provider = self.type_provider();
        let mut maze = generate_maze(self.height, self.width, self.generator, &provider, rng)?;

        match self.cycles {
            Some(_) if self.generator == Generator::RecurDiv => {
                tracing::info!("[settings] Skipping cycles for {}", self.generator);
            }
            Some(level) => {
                add_cycles(&mut maze, &provider, level, rng);
            }
            None => {}
        }
        Ok(maze)
    }
}
