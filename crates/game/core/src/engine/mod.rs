//! The tick pipeline.
//!
//! Each tick runs the same fixed sequence of phases over the
//! simulation state:
//!
//! 1. input: latch the player's attack, set their movement, steer
//!    every enemy;
//! 2. logic: scoring, deaths, movement, attack resolution, zone
//!    transitions;
//! 3. animation: advance sprite tracks and combat texts;
//! 4. physics: collisions, pickups, teleports, dialogs.
//!
//! Input and steering run even while paused so menus stay responsive
//! and enemies resume with a fresh heading; the rest only runs
//! unpaused. Rendering is not a phase: embedders pull
//! [`SimulationState::render_queue`] whenever they draw.

pub mod ai;
pub mod input;
pub mod logic;
pub mod physics;

use crate::config::GameConfig;
use crate::engine::input::InputState;
use crate::rng::Dice;
use crate::state::SimulationState;
use crate::state::zone::Scenario;

/// Advances the simulation by one tick of `elapsed_ms` wall time.
///
/// Movement scales with the elapsed time so the world advances at the
/// same rate regardless of tick cadence.
pub fn advance(
    state: &mut SimulationState,
    scenario: &Scenario,
    input: &InputState,
    elapsed_ms: f32,
    rng: &mut dyn Dice,
) {
    let game_speed = (GameConfig::GAME_SPEED_SCALE * (elapsed_ms / 1000.0)) as i32;

    // --- Input and steering ---

    if input.attack && state.attack_released {
        state.player.attacking = true;
    }
    state.attack_released = !input.attack;
    state.player.moving = input.move_direction();

    for enemy in state.enemies.iter_mut() {
        ai::determine_direction(enemy, &state.player);
    }

    if state.paused {
        return;
    }

    // --- Logic, animation, physics ---

    logic::run(state, scenario, rng, game_speed, elapsed_ms);

    state.player.animate(game_speed);
    for enemy in state.enemies.iter_mut() {
        enemy.animate(game_speed);
    }
    for text in state.combat_texts.iter_mut() {
        text.animate(elapsed_ms);
    }

    physics::run(state, input, scenario, rng);
}
