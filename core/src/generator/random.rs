use super::*;

/// Picks cluster cores uniformly among all tiles without replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomClusterGenerator {
    seed: u64,
}

impl RandomClusterGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ClusterGenerator for RandomClusterGenerator {
    fn generate(self, size: Coord2, cluster_count: CellCount) -> Result<ClusterLayout> {
        use rand::prelude::*;

        let topology = Topology::new(size);
        check_capacity(topology, cluster_count.into())?;

        // drawing from a shrinking pool never picks the same core twice
        let mut available: Vec<Coord2> = topology.iter_cells().collect();
        let mut cores = Vec::with_capacity(cluster_count.into());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..cluster_count {
            if available.is_empty() {
                log::error!(
                    "No available tiles left after placing {} of {} cluster cores",
                    cores.len(),
                    cluster_count
                );
                return Err(GameError::InsufficientTiles);
            }
            let pick = rng.random_range(0..available.len());
            cores.push(available.swap_remove(pick));
        }

        log::debug!("Cluster cores: {:?}", cores);
        ClusterLayout::from_cores(size, &cores)
    }
}
