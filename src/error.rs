use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A maze needs at least one row and one column.
    #[error("maze dimensions must be positive, got {height}x{width}")]
    InvalidDimension { height: usize, width: usize },

    #[error("unknown generator `{0}`")]
    UnknownGenerator(String),

    #[error("unknown solver `{0}`")]
    UnknownSolver(String),

    #[error("unknown cycle level `{0}`")]
    UnknownCycleLevel(String),

    #[error("unknown type provider `{0}`")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;
