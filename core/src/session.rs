use alloc::format;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Receives every visible tile change, owns the mapping from tile type to visuals.
pub trait Renderer {
    fn on_tile_changed(&mut self, x: Coord, y: Coord, kind: TileType, discovered: bool);

    /// A new board replaced the previous one, every tile is hidden again.
    fn on_board_reset(&mut self, _size: Coord2) {}
}

/// Receives status lines and stat updates.
pub trait StatusDisplay {
    /// Append-only feed, any line limit is up to the display
    fn on_log(&mut self, message: &str);

    /// Replaces the current stats wholesale
    fn on_stats(&mut self, resource_counter: Resource, scans_left: Uses, extractions_left: Uses);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub resource_counter: Resource,
    pub scans_left: Uses,
    pub extractions_left: Uses,
    pub mode: ActionMode,
}

/// Outcome of a primary action
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    NoChange,
    Scanned,
    Extracted { amount: Resource },
    GameOver { score: Resource },
    OutOfScans,
    OutOfExtractions,
}

impl ActionOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use ActionOutcome::*;
        match self {
            NoChange => false,
            Scanned => true,
            Extracted { .. } => true,
            GameOver { .. } => true,
            OutOfScans => false,
            OutOfExtractions => false,
        }
    }
}

/// Represents a play session from one new game to the next
pub struct GameSession<R, D> {
    config: GameConfig,
    rng: SmallRng,
    engine: ExtractionEngine,
    mode: ActionMode,
    renderer: R,
    display: D,
}

impl<R: Renderer, D: StatusDisplay> GameSession<R, D> {
    /// Creates a session and starts its first game.
    pub fn new(config: GameConfig, seed: u64, renderer: R, display: D) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let generator = RandomClusterGenerator::new(rng.random());
        let engine = build_engine(&config, &mut rng, generator)?;

        let mut session = Self {
            config,
            rng,
            engine,
            mode: ActionMode::Scan,
            renderer,
            display,
        };
        session.announce_new_game();
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Configuration for the next game, the current board is left alone
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        log::debug!("Reconfigured: {:?}", config);
        self.config = config;
        Ok(())
    }

    pub fn mode(&self) -> ActionMode {
        self.mode
    }

    pub fn size(&self) -> Coord2 {
        self.engine.size()
    }

    pub fn engine(&self) -> &ExtractionEngine {
        &self.engine
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<Tile> {
        let topology = self.engine.store().topology();
        topology.contains(coords).then(|| self.engine.tile_at(coords))
    }

    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            resource_counter: self.engine.resource_counter(),
            scans_left: self.engine.scans_left(),
            extractions_left: self.engine.extractions_left(),
            mode: self.mode,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Throws away the current board and starts over with a random layout.
    pub fn new_game(&mut self) -> Result<()> {
        let generator = RandomClusterGenerator::new(self.rng.random());
        self.new_game_with(generator)
    }

    /// Starts over with the clusters placed by `generator`.
    ///
    /// On error the current game is kept as it was.
    pub fn new_game_with<G: ClusterGenerator>(&mut self, generator: G) -> Result<()> {
        let engine = build_engine(&self.config, &mut self.rng, generator).inspect_err(|err| {
            log::warn!("New game aborted: {}", err);
        })?;

        self.engine = engine;
        self.mode = ActionMode::Scan;
        self.announce_new_game();
        Ok(())
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        log::debug!("Mode: {}", self.mode);
        self.display.on_log(&format!("Switched to {} Mode.", self.mode));
    }

    /// Scans or extracts at `(x, y)` depending on the current mode.
    pub fn primary_action(&mut self, x: i32, y: i32) -> ActionOutcome {
        let topology = self.engine.store().topology();
        let Some(coords) = topology.checked_coords(x, y) else {
            log::warn!("Ignoring action outside the board at ({}, {})", x, y);
            return ActionOutcome::NoChange;
        };

        match self.mode {
            ActionMode::Scan => self.scan(coords),
            ActionMode::Extract => self.extract(coords),
        }
    }

    fn scan(&mut self, coords: Coord2) -> ActionOutcome {
        match self.engine.scan(self.mode, coords) {
            Ok(outcome) => {
                self.forward_changes(&outcome.changes);
                self.display.on_log("You have scanned an area.");
                self.push_stats();
                ActionOutcome::Scanned
            }
            Err(GameError::NoScansLeft) => {
                self.display.on_log(
                    "There are no Scans left to use. Switch to Extract Mode to keep playing.",
                );
                ActionOutcome::OutOfScans
            }
            Err(err) => ignored(err),
        }
    }

    fn extract(&mut self, coords: Coord2) -> ActionOutcome {
        match self.engine.extract(self.mode, coords) {
            Ok(outcome) => {
                self.forward_changes(&outcome.changes);
                self.display.on_log(&format!(
                    "You have extracted {} resources!",
                    outcome.extracted
                ));
                self.push_stats();

                if outcome.finished {
                    let score = self.engine.resource_counter();
                    self.display.on_log(&format!(
                        "There are no Extractions left to use. Your final score is {}!",
                        score
                    ));
                    self.display.on_log("Start a new game to try again.");
                    ActionOutcome::GameOver { score }
                } else {
                    ActionOutcome::Extracted {
                        amount: outcome.extracted,
                    }
                }
            }
            Err(GameError::NoExtractionsLeft) => {
                self.display.on_log("There are no Extractions left to use.");
                ActionOutcome::OutOfExtractions
            }
            Err(err) => ignored(err),
        }
    }

    fn forward_changes(&mut self, changes: &[TileChange]) {
        for change in changes {
            let (x, y) = change.position;
            self.renderer.on_tile_changed(x, y, change.kind, change.discovered);
        }
    }

    fn push_stats(&mut self) {
        self.display.on_stats(
            self.engine.resource_counter(),
            self.engine.scans_left(),
            self.engine.extractions_left(),
        );
    }

    fn announce_new_game(&mut self) {
        let (size_x, size_y) = self.engine.size();
        log::debug!(
            "New game on a {}x{} board, {} scans, {} extractions",
            size_x,
            size_y,
            self.engine.scans_left(),
            self.engine.extractions_left()
        );

        self.renderer.on_board_reset(self.engine.size());
        self.push_stats();

        self.display.on_log("New Game Started. How to play:");
        self.display.on_log("    - Try to extract as much resources as you can!");
        self.display.on_log("    - Toggle between Scan and Extract Mode at any time.");
        self.display.on_log("    - Use the primary action on a tile to activate either mode.");
        self.display.on_log(&format!(
            "    - Use Scan Mode to reveal a 3x3 area. Max usage: {}",
            self.config.max_scans
        ));
        self.display.on_log(&format!(
            "    - Use Extract Mode to extract resources from a tile. Max usage: {}",
            self.config.max_extractions
        ));
    }
}

fn ignored(err: GameError) -> ActionOutcome {
    log::debug!("Action ignored: {}", err);
    ActionOutcome::NoChange
}

/// Builds a complete board off to the side so a failure never leaves a half-made game behind.
fn build_engine<G: ClusterGenerator>(
    config: &GameConfig,
    rng: &mut SmallRng,
    generator: G,
) -> Result<ExtractionEngine> {
    config.validate()?;

    let (min_clusters, max_clusters) = config.clusters;
    let cluster_count = rng.random_range(min_clusters..=max_clusters);
    let layout = generator.generate(config.size, cluster_count)?;
    let store = TileStore::materialize(&layout, config.resources, rng)?;

    Ok(ExtractionEngine::new(
        store,
        config.max_scans,
        config.max_extractions,
    ))
}
