use core::num::Saturating;
use smallvec::SmallVec;

use crate::*;

/// Radius of the area revealed by a scan.
pub const SCAN_RADIUS: Coord = 1;

/// Radius of the area degraded around an extracted tile.
pub const DEGRADE_RADIUS: Coord = 2;

/// Tile changes produced by a single action, at most one per cell of a 5x5 window.
pub type TileChanges = SmallVec<[TileChange; 25]>;

#[derive(Clone, Debug, PartialEq)]
pub struct ScanOutcome {
    pub changes: TileChanges,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExtractOutcome {
    /// Resources gained from the target tile
    pub extracted: Resource,
    /// Only tiles the player has discovered
    pub changes: TileChanges,
    /// Set by the extraction that used up the last extraction
    pub finished: bool,
}

/// Scan and extract rules over one board.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractionEngine {
    store: TileStore,
    resource_counter: Saturating<Resource>,
    scans_left: Uses,
    extractions_left: Uses,
}

impl ExtractionEngine {
    pub fn new(store: TileStore, max_scans: Uses, max_extractions: Uses) -> Self {
        Self {
            store,
            resource_counter: Saturating(0),
            scans_left: max_scans,
            extractions_left: max_extractions,
        }
    }

    pub fn store(&self) -> &TileStore {
        &self.store
    }

    pub fn size(&self) -> Coord2 {
        self.store.size()
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.store.tile_at(coords)
    }

    pub fn resource_counter(&self) -> Resource {
        self.resource_counter.0
    }

    pub fn scans_left(&self) -> Uses {
        self.scans_left
    }

    pub fn extractions_left(&self) -> Uses {
        self.extractions_left
    }

    /// No extractions left, the score is final
    pub fn is_finished(&self) -> bool {
        self.extractions_left == 0
    }

    /// Reveals the 3x3 area around `coords` without touching any tile's tier or value.
    pub fn scan(&mut self, mode: ActionMode, coords: Coord2) -> Result<ScanOutcome> {
        check_mode(mode, ActionMode::Scan)?;
        if self.is_finished() {
            return Err(GameError::AlreadyEnded);
        }
        if self.scans_left == 0 {
            return Err(GameError::NoScansLeft);
        }
        let coords = self.store.topology().validate_coords(coords)?;

        self.scans_left -= 1;

        let changes = self
            .store
            .topology()
            .iter_window(coords, SCAN_RADIUS)
            .map(|pos| self.store.discover(pos).change())
            .collect();
        log::debug!("Scanned around {:?}, {} scans left", coords, self.scans_left);

        Ok(ScanOutcome { changes })
    }

    /// Harvests the tile at `coords` and degrades the 5x5 area around it.
    pub fn extract(&mut self, mode: ActionMode, coords: Coord2) -> Result<ExtractOutcome> {
        check_mode(mode, ActionMode::Extract)?;
        if self.extractions_left == 0 {
            return Err(GameError::NoExtractionsLeft);
        }
        let coords = self.store.topology().validate_coords(coords)?;

        self.extractions_left -= 1;

        let extracted = self.store.tile_at(coords).value();
        self.resource_counter += extracted;

        let mut changes = TileChanges::new();

        let target = self.store.reset_to_floor(coords);
        if target.is_discovered() {
            changes.push(target.change());
        }

        for pos in self.store.topology().iter_window(coords, DEGRADE_RADIUS) {
            if pos == coords {
                continue;
            }
            // undiscovered tiles degrade silently
            if let Some(tile) = self.store.degrade(pos).filter(Tile::is_discovered) {
                changes.push(tile.change());
            }
        }

        let finished = self.is_finished();
        log::debug!(
            "Extracted {} at {:?}, total {}, {} extractions left",
            extracted,
            coords,
            self.resource_counter,
            self.extractions_left
        );
        if finished {
            log::debug!("Out of extractions, final score {}", self.resource_counter);
        }

        Ok(ExtractOutcome {
            extracted,
            changes,
            finished,
        })
    }
}

fn check_mode(current: ActionMode, required: ActionMode) -> Result<()> {
    if current == required {
        Ok(())
    } else {
        Err(GameError::InapplicableMode)
    }
}
