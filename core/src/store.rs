use core::ops::Index;
use ndarray::Array2;
use rand::Rng;

use crate::*;

/// Owns every tile of a board together with the session-wide floor value.
#[derive(Clone, Debug, PartialEq)]
pub struct TileStore {
    tiles: Array2<Tile>,
    min_resource_value: Resource,
}

impl TileStore {
    /// Rolls concrete resource values for every cell of `layout`.
    ///
    /// The minimal value is drawn once and shared by every minimal tile of the session. All other
    /// tiers roll their own maximum per tile, so a lower tier can end up richer than a higher one.
    pub fn materialize<R: Rng + ?Sized>(
        layout: &ClusterLayout,
        resources: ResourceRange,
        rng: &mut R,
    ) -> Result<Self> {
        resources.validate()?;

        let (floor_low, floor_high) = resources.floor_range();
        let min_resource_value = if floor_low < floor_high {
            rng.random_range(floor_low..floor_high)
        } else {
            floor_low
        };
        log::debug!("Minimal resource value: {}", min_resource_value);

        let tiles = Array2::from_shape_fn(layout.size().to_nd_index(), |(x, y)| {
            let position = (x as Coord, y as Coord);
            // rolled for every cell, minimal tiles simply ignore it
            let roll_max = rng.random_range(resources.min..=resources.max);
            let kind = layout[position];
            let value = match kind {
                TileType::Unset => 0,
                TileType::MinResource => min_resource_value,
                TileType::QuarterResource => roll_max / 4,
                TileType::HalfResource => roll_max / 2,
                TileType::MaxResource => roll_max,
            };
            Tile::new(position, kind, value)
        });

        Ok(Self {
            tiles,
            min_resource_value,
        })
    }

    pub fn size(&self) -> Coord2 {
        self.topology().size()
    }

    pub fn topology(&self) -> Topology {
        self.tiles.topology()
    }

    pub fn min_resource_value(&self) -> Resource {
        self.min_resource_value
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.tiles[coords.to_nd_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub(crate) fn discover(&mut self, coords: Coord2) -> Tile {
        let tile = &mut self.tiles[coords.to_nd_index()];
        tile.discovered = true;
        *tile
    }

    /// Drops a tile straight to the floor tier.
    pub(crate) fn reset_to_floor(&mut self, coords: Coord2) -> Tile {
        let floor = self.min_resource_value;
        let tile = &mut self.tiles[coords.to_nd_index()];
        tile.kind = TileType::MinResource;
        tile.value = floor;
        *tile
    }

    /// Lowers a tile one tier, `None` when it already sits on the floor.
    pub(crate) fn degrade(&mut self, coords: Coord2) -> Option<Tile> {
        let floor = self.min_resource_value;
        let tile = &mut self.tiles[coords.to_nd_index()];

        let value = match tile.kind {
            TileType::Unset | TileType::MinResource => return None,
            TileType::QuarterResource => floor,
            TileType::HalfResource | TileType::MaxResource => tile.value / 2,
        };
        tile.kind = tile.kind.degraded();
        tile.value = value;
        log::trace!("Degraded tile at {:?} to {} ({})", coords, tile.kind, value);

        Some(*tile)
    }
}

impl Index<Coord2> for TileStore {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use TileType::*;

    fn store(size: Coord2, cores: &[Coord2], resources: ResourceRange) -> TileStore {
        let layout = ClusterLayout::from_cores(size, cores).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        TileStore::materialize(&layout, resources, &mut rng).unwrap()
    }

    #[test]
    fn fixed_roll_gives_exact_tier_values() {
        let store = store((4, 4), &[(1, 1)], ResourceRange::new(100, 100));

        assert_eq!(store[(1, 1)].kind(), MaxResource);
        assert_eq!(store[(1, 1)].value(), 100);
        assert_eq!(store[(0, 0)].kind(), HalfResource);
        assert_eq!(store[(0, 0)].value(), 50);
        assert_eq!(store[(3, 3)].kind(), QuarterResource);
        assert_eq!(store[(3, 3)].value(), 25);
    }

    #[test]
    fn minimal_value_is_shared_and_within_range() {
        let resources = ResourceRange::new(2000, 5000);
        let store = store((16, 16), &[(3, 3), (12, 10)], resources);
        let floor = store.min_resource_value();

        assert!((5000 / 16..5000 / 8).contains(&floor));
        assert!(
            store
                .iter()
                .filter(|tile| tile.kind() == MinResource)
                .all(|tile| tile.value() == floor)
        );
    }

    #[test]
    fn cluster_values_stay_within_roll_bounds() {
        let store = store((16, 16), &[(8, 8)], ResourceRange::new(2000, 5000));

        for tile in store.iter() {
            let (low, high) = match tile.kind() {
                MaxResource => (2000, 5000),
                HalfResource => (1000, 2500),
                QuarterResource => (500, 1250),
                _ => continue,
            };
            assert!((low..=high).contains(&tile.value()), "{:?}", tile);
        }
    }

    #[test]
    fn tiny_maximum_uses_lower_floor_bound() {
        let store = store((2, 2), &[], ResourceRange::new(1, 7));

        assert_eq!(store.min_resource_value(), 0);
    }

    #[test]
    fn every_tile_starts_hidden_at_its_position() {
        let store = store((5, 3), &[(2, 1)], ResourceRange::new(10, 20));

        for x in 0..5 {
            for y in 0..3 {
                assert_eq!(store[(x, y)].position(), (x, y));
                assert!(!store[(x, y)].is_discovered());
            }
        }
    }

    #[test]
    fn degrade_halves_current_value() {
        let mut store = store((4, 4), &[(1, 1)], ResourceRange::new(100, 100));

        let first = store.degrade((1, 1)).unwrap();
        assert_eq!((first.kind(), first.value()), (HalfResource, 50));

        let second = store.degrade((1, 1)).unwrap();
        assert_eq!((second.kind(), second.value()), (QuarterResource, 25));

        let third = store.degrade((1, 1)).unwrap();
        assert_eq!(third.kind(), MinResource);
        assert_eq!(third.value(), store.min_resource_value());

        assert_eq!(store.degrade((1, 1)), None);
    }

    #[test]
    fn inverted_resource_range_is_rejected() {
        let layout = ClusterLayout::from_cores((2, 2), &[]).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);

        let result = TileStore::materialize(&layout, ResourceRange::new(9, 3), &mut rng);

        assert_eq!(
            result,
            Err(GameError::InvalidConfiguration(
                ConfigError::ResourceRangeInverted { min: 9, max: 3 }
            ))
        );
    }
}
