use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Radius of the quarter ring around each core.
pub const QUARTER_RING_RADIUS: Coord = 2;

/// Radius of the half ring around each core.
pub const HALF_RING_RADIUS: Coord = 1;

pub trait ClusterGenerator {
    fn generate(self, size: Coord2, cluster_count: CellCount) -> Result<ClusterLayout>;
}

/// Tier of every cell before any resource value is rolled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterLayout {
    kinds: Array2<TileType>,
    cores: Vec<Coord2>,
}

impl ClusterLayout {
    /// Stamps clusters around `cores`, which are expected to be distinct.
    ///
    /// All quarter rings are stamped first, then all half rings, then the cores themselves, so
    /// where clusters overlap the later pass (and within a pass the later core) wins.
    pub fn from_cores(size: Coord2, cores: &[Coord2]) -> Result<Self> {
        let topology = Topology::new(size);
        check_capacity(topology, cores.len())?;
        for &core in cores {
            topology.validate_coords(core)?;
        }

        let mut kinds = Array2::from_elem(size.to_nd_index(), TileType::MinResource);

        for &core in cores {
            for pos in topology.iter_window(core, QUARTER_RING_RADIUS) {
                // inner 3x3 is left to the half pass
                if chebyshev(pos, core) > HALF_RING_RADIUS {
                    kinds[pos.to_nd_index()] = TileType::QuarterResource;
                }
            }
        }

        for &core in cores {
            for pos in topology.iter_window(core, HALF_RING_RADIUS) {
                if pos != core {
                    kinds[pos.to_nd_index()] = TileType::HalfResource;
                }
            }
        }

        for &core in cores {
            kinds[core.to_nd_index()] = TileType::MaxResource;
        }

        Ok(Self {
            kinds,
            cores: cores.to_vec(),
        })
    }

    pub fn size(&self) -> Coord2 {
        self.topology().size()
    }

    pub fn topology(&self) -> Topology {
        self.kinds.topology()
    }

    pub fn cores(&self) -> &[Coord2] {
        &self.cores
    }

    pub fn count_of(&self, kind: TileType) -> usize {
        self.kinds.iter().filter(|&&cell| cell == kind).count()
    }
}

impl Index<Coord2> for ClusterLayout {
    type Output = TileType;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.kinds[coords.to_nd_index()]
    }
}

pub(crate) fn check_capacity(topology: Topology, requested: usize) -> Result<()> {
    let capacity = topology.total_cells();
    if requested > usize::from(capacity) {
        log::warn!(
            "Cannot place {} clusters on a board of {} tiles",
            requested,
            capacity
        );
        return Err(ConfigError::TooManyClusters {
            requested: requested.try_into().unwrap_or(CellCount::MAX),
            capacity,
        }
        .into());
    }
    Ok(())
}
