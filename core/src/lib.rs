#![no_std]

extern crate alloc;

use core::fmt;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use store::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod session;
mod store;
mod tile;
mod types;

/// Bounds of the per-tile resource roll, inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRange {
    pub min: Resource,
    pub max: Resource,
}

impl ResourceRange {
    pub const fn new(min: Resource, max: Resource) -> Self {
        Self { min, max }
    }

    /// Half-open range the session-wide minimal value is drawn from.
    pub const fn floor_range(&self) -> (Resource, Resource) {
        (self.max / 16, self.max / 8)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(ConfigError::ResourceRangeInverted {
                min: self.min,
                max: self.max,
            }
            .into());
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: Coord2,
    /// Inclusive range the number of clusters is drawn from
    pub clusters: (CellCount, CellCount),
    pub resources: ResourceRange,
    pub max_scans: Uses,
    pub max_extractions: Uses,
}

impl GameConfig {
    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn validate(&self) -> Result<()> {
        let (size_x, size_y) = self.size;
        if size_x == 0 || size_y == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }

        let (min, max) = self.clusters;
        if min > max {
            return Err(ConfigError::ClusterRangeInverted { min, max }.into());
        }
        if max > self.total_cells() {
            return Err(ConfigError::TooManyClusters {
                requested: max,
                capacity: self.total_cells(),
            }
            .into());
        }

        self.resources.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: (16, 16),
            clusters: (6, 8),
            resources: ResourceRange::new(2000, 5000),
            max_scans: 6,
            max_extractions: 3,
        }
    }
}

/// What the primary action does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionMode {
    #[default]
    Scan,
    Extract,
}

impl ActionMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Scan => Self::Extract,
            Self::Extract => Self::Scan,
        }
    }
}

impl fmt::Display for ActionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan => f.write_str("Scan"),
            Self::Extract => f.write_str("Extract"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_cluster_range_larger_than_board() {
        let config = GameConfig {
            size: (2, 2),
            clusters: (1, 5),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyClusters {
                requested: 5,
                capacity: 4,
            }))
        );
    }

    #[test]
    fn validate_rejects_inverted_ranges() {
        let clusters = GameConfig {
            clusters: (4, 2),
            ..Default::default()
        };
        let resources = GameConfig {
            resources: ResourceRange::new(10, 5),
            ..Default::default()
        };

        assert_eq!(
            clusters.validate(),
            Err(GameError::InvalidConfiguration(
                ConfigError::ClusterRangeInverted { min: 4, max: 2 }
            ))
        );
        assert_eq!(
            resources.validate(),
            Err(GameError::InvalidConfiguration(
                ConfigError::ResourceRangeInverted { min: 10, max: 5 }
            ))
        );
    }

    #[test]
    fn validate_rejects_empty_board() {
        let config = GameConfig {
            size: (0, 4),
            clusters: (0, 0),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfiguration(ConfigError::EmptyBoard))
        );
    }

    #[test]
    fn mode_toggles_back_and_forth() {
        assert_eq!(ActionMode::Scan.toggled(), ActionMode::Extract);
        assert_eq!(ActionMode::Extract.toggled(), ActionMode::Scan);
    }
}
