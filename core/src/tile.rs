use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Resource quantity held by a tile.
pub type Resource = u32;

/// Resource tier of a tile, ordered from poorest to richest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// Not assigned yet, never produced by generation
    #[default]
    Unset,
    MinResource,
    QuarterResource,
    HalfResource,
    MaxResource,
}

impl TileType {
    /// One tier down, floor tiers stay where they are
    pub const fn degraded(self) -> Self {
        use TileType::*;
        match self {
            Unset => Unset,
            MinResource => MinResource,
            QuarterResource => MinResource,
            HalfResource => QuarterResource,
            MaxResource => HalfResource,
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unset => "unset",
            Self::MinResource => "minimal",
            Self::QuarterResource => "quarter",
            Self::HalfResource => "half",
            Self::MaxResource => "max",
        };
        f.write_str(label)
    }
}

/// State of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    position: Coord2,
    pub(crate) kind: TileType,
    pub(crate) value: Resource,
    pub(crate) discovered: bool,
}

impl Tile {
    pub const fn new(position: Coord2, kind: TileType, value: Resource) -> Self {
        Self {
            position,
            kind,
            value,
            discovered: false,
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub const fn kind(&self) -> TileType {
        self.kind
    }

    pub const fn value(&self) -> Resource {
        self.value
    }

    pub const fn is_discovered(&self) -> bool {
        self.discovered
    }

    pub const fn change(&self) -> TileChange {
        TileChange {
            position: self.position,
            kind: self.kind,
            discovered: self.discovered,
        }
    }
}

/// A visible change to a tile, forwarded to the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileChange {
    pub position: Coord2,
    pub kind: TileType,
    pub discovered: bool,
}
