use thiserror::Error;

use crate::{CellCount, Resource};

/// Why a [`GameConfig`](crate::GameConfig) cannot produce a board.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{requested} clusters do not fit on a board of {capacity} tiles")]
    TooManyClusters {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Board needs at least one column and one row")]
    EmptyBoard,
    #[error("Cluster range {min}..={max} is inverted")]
    ClusterRangeInverted { min: CellCount, max: CellCount },
    #[error("Resource range {min}..={max} is inverted")]
    ResourceRangeInverted { min: Resource, max: Resource },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Ran out of available tiles while placing cluster cores")]
    InsufficientTiles,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game has already ended")]
    AlreadyEnded,
    #[error("There are no Scans left to use")]
    NoScansLeft,
    #[error("There are no Extractions left to use")]
    NoExtractionsLeft,
    #[error("Action does not apply to the current mode")]
    InapplicableMode,
}

pub type Result<T> = core::result::Result<T, GameError>;
