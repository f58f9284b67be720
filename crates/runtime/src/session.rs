//! The playing session: one running game, its clock, and its save slot.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thornvale_content::loaders::{DialogLoader, ScenarioLoader};
use thornvale_content::save::{load_game, save_game};
use thornvale_core::combat::{CombatText, SctKind};
use thornvale_core::engine::physics;
use thornvale_core::{
    GameConfig, GameRng, InputState, Overlay, Point, Scenario, SimulationState, advance,
};

use crate::RuntimeError;
use crate::input::Button;

/// Screen position for save and load announcements.
fn announce_at() -> Point {
    Point::new(
        GameConfig::ZONE_WIDTH / 2 - 100,
        GameConfig::ZONE_HEIGHT / 2,
    )
}

/// A running game.
///
/// Owns the simulation state, the world definition, the dice, and the
/// held-button snapshot. Embedders forward raw button edges through
/// [`Session::key_down`] and [`Session::key_up`], call [`Session::tick`]
/// on their frame timer, and draw from [`Session::state`].
pub struct Session {
    state: SimulationState,
    scenario: Scenario,
    rng: GameRng,
    held: InputState,
    last_tick: Instant,
    save_path: PathBuf,
}

impl Session {
    /// Starts a session on an already-built scenario, seeding the dice
    /// from the wall clock.
    pub fn new(scenario: Scenario, save_path: PathBuf) -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(scenario, save_path, seed)
    }

    pub fn with_seed(scenario: Scenario, save_path: PathBuf, seed: u64) -> Self {
        tracing::info!(seed, "session started");
        Self {
            state: SimulationState::new(&scenario),
            scenario,
            rng: GameRng::new(seed),
            held: InputState::default(),
            last_tick: Instant::now(),
            save_path,
        }
    }

    /// Starts a session from content files on disk.
    pub fn from_files(
        scenario_path: &Path,
        dialog_path: &Path,
        save_path: PathBuf,
    ) -> Result<Self, RuntimeError> {
        let dialogs = DialogLoader::load(dialog_path)?;
        let scenario = ScenarioLoader::load(scenario_path, &dialogs)?;
        Ok(Self::new(scenario, save_path))
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    // ------------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------------

    /// Advances the game by the wall time since the previous tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(self.last_tick).as_secs_f32() * 1000.0;
        self.last_tick = now;
        self.step(elapsed_ms);
    }

    /// Advances the game by an explicit amount of time.
    pub fn step(&mut self, elapsed_ms: f32) {
        let zone = self.state.zone;
        advance(
            &mut self.state,
            &self.scenario,
            &self.held,
            elapsed_ms,
            &mut self.rng,
        );
        if self.state.zone != zone {
            tracing::debug!(from = ?zone, to = ?self.state.zone, "zone change");
        }
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    /// Handles a button press.
    ///
    /// Confirm drives the overlay and the character sheet. While the
    /// sheet is open the directions move its cursor and the action
    /// button uses the selected item; otherwise buttons latch into the
    /// held snapshot the next tick samples.
    pub fn key_down(&mut self, button: Button) {
        if button == Button::Confirm {
            self.confirm();
            return;
        }

        if self.state.inventory.open {
            let player = &mut self.state.player;
            match button {
                Button::Left => self.state.inventory.cursor_left(),
                Button::Right => self.state.inventory.cursor_right(),
                Button::Up => self.state.inventory.cursor_up(),
                Button::Down => self.state.inventory.cursor_down(),
                Button::Action => self
                    .state
                    .inventory
                    .use_selected(&mut player.stats, &mut player.health),
                Button::Confirm => {}
            }
            return;
        }

        match button {
            Button::Up => self.held.up = true,
            Button::Down => self.held.down = true,
            Button::Left => self.held.left = true,
            Button::Right => self.held.right = true,
            Button::Action => self.held.attack = true,
            Button::Confirm => {}
        }
    }

    pub fn key_up(&mut self, button: Button) {
        match button {
            Button::Up => self.held.up = false,
            Button::Down => self.held.down = false,
            Button::Left => self.held.left = false,
            Button::Right => self.held.right = false,
            Button::Action => self.held.attack = false,
            Button::Confirm => {}
        }
    }

    /// The confirm button: dismisses the title, restarts after the end
    /// screens, and otherwise toggles the character sheet, pausing
    /// while it is open.
    fn confirm(&mut self) {
        match self.state.overlay {
            Some(Overlay::Start) => {
                self.state.overlay = None;
                self.state.paused = false;
            }
            Some(Overlay::Finish) | Some(Overlay::Dead) => self.new_game(),
            None => {
                let open = !self.state.inventory.open;
                self.state.inventory.open = open;
                self.state.paused = open;
            }
        }
    }

    // ------------------------------------------------------------------------
    // Menu commands
    // ------------------------------------------------------------------------

    /// Throws the current game away and starts over behind the title
    /// screen.
    pub fn new_game(&mut self) {
        tracing::info!("new game");
        self.state = SimulationState::new(&self.scenario);
    }

    pub fn toggle_debug(&mut self) {
        self.state.debug = !self.state.debug;
    }

    /// Writes the game to the save slot and announces it on screen.
    pub fn save(&mut self) {
        match save_game(&self.state, &self.save_path) {
            Ok(()) => {
                tracing::info!(path = %self.save_path.display(), "game saved");
                self.state
                    .combat_texts
                    .push(CombatText::new(announce_at(), "Game Saved", SctKind::Critical));
            }
            Err(e) => tracing::error!(error = %e, "save failed"),
        }
    }

    /// Replaces the game with the save slot's contents.
    ///
    /// A settling physics pass runs right away so nothing restored
    /// inside a wall stays there. An empty slot is announced in-game
    /// rather than treated as a fault.
    pub fn load(&mut self) {
        match load_game(&self.save_path, &self.scenario) {
            Ok(state) => {
                self.state = state;
                physics::run(
                    &mut self.state,
                    &InputState::default(),
                    &self.scenario,
                    &mut self.rng,
                );
                tracing::info!(path = %self.save_path.display(), "game loaded");
                self.state.combat_texts.push(CombatText::new(
                    announce_at(),
                    "Game Loaded",
                    SctKind::Critical,
                ));
            }
            Err(e) if e.is_not_found() => {
                self.state.combat_texts.push(CombatText::new(
                    announce_at(),
                    "No game saved...",
                    SctKind::Critical,
                ));
            }
            Err(e) => tracing::error!(error = %e, "load failed"),
        }
    }
}
