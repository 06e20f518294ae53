use super::*;

/// Uses a predetermined set of cores, for hand-made boards and reproducible tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedClusterGenerator {
    cores: Vec<Coord2>,
}

impl FixedClusterGenerator {
    pub fn new(cores: &[Coord2]) -> Self {
        Self {
            cores: cores.to_vec(),
        }
    }
}

impl ClusterGenerator for FixedClusterGenerator {
    fn generate(self, size: Coord2, cluster_count: CellCount) -> Result<ClusterLayout> {
        if self.cores.len() != usize::from(cluster_count) {
            log::warn!(
                "Fixed layout has {} cores, requested {}, using the fixed cores",
                self.cores.len(),
                cluster_count
            );
        }
        ClusterLayout::from_cores(size, &self.cores)
    }
}
