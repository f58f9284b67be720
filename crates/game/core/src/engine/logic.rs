//! Per-tick game logic: scoring, deaths, movement, and attack
//! resolution.

use crate::combat::{attackable, resolve_attack};
use crate::config::GameConfig;
use crate::rng::Dice;
use crate::state::item::Item;
use crate::state::zone::Scenario;
use crate::state::{Overlay, SimulationState};

/// Runs the logic phase for one tick.
///
/// The player acts before the enemies: their death check, movement,
/// swings, and any zone transition come first. A zone transition ends
/// the phase early since the enemy roster was just replaced and the
/// newcomers have not been steered yet.
pub fn run(
    state: &mut SimulationState,
    scenario: &Scenario,
    rng: &mut dyn Dice,
    game_speed: i32,
    elapsed_ms: f32,
) {
    state.score += elapsed_ms / 1000.0;
    state.invulnerable_ms = (state.invulnerable_ms - elapsed_ms).max(0.0);
    state.combat_texts.retain(|t| !t.faded());

    // --- Player ---

    if state.player.is_dead() {
        state.paused = true;
        state.overlay = Some(Overlay::Dead);
    }

    state.player.integrate(game_speed);

    if state.player.attack_ready && state.player.attacking {
        let player = &state.player;
        let mut texts = Vec::new();
        for enemy in state.enemies.iter_mut() {
            if attackable(player, enemy.position) {
                texts.push(resolve_attack(player, enemy, rng));
            }
        }
        state.combat_texts.extend(texts);
    }

    if change_zone(state) {
        state.load_zone(scenario);
        return;
    }

    // --- Enemies ---

    let mut i = 0;
    while i < state.enemies.len() {
        if state.enemies[i].is_dead() {
            let corpse = state.enemies.remove(i);
            state.items.push(Item::random_drop(corpse.position, rng));
            continue;
        }

        state.enemies[i].integrate(game_speed);

        // A swing lands on the tick it starts, and only if the player's
        // immunity window has run out.
        if state.enemies[i].attack_ready
            && state.enemies[i].attacking
            && state.invulnerable_ms <= 0.0
        {
            let text = resolve_attack(&state.enemies[i], &mut state.player, rng);
            state.combat_texts.push(text);
            state.invulnerable_ms = GameConfig::INVULNERABLE_MS;
        }

        i += 1;
    }
}

/// Moves to the neighboring zone when the player crosses an edge,
/// wrapping them to the opposite side. At the world border the player
/// is pinned to the edge instead. Returns whether the zone changed.
fn change_zone(state: &mut SimulationState) -> bool {
    let w = GameConfig::ZONE_WIDTH;
    let h = GameConfig::ZONE_HEIGHT;
    let p = &mut state.player.position;
    let mut changed = false;

    if p.x < 0 {
        if state.zone.x != 0 {
            p.x = w;
            state.zone.x -= 1;
            changed = true;
        } else {
            p.x = 0;
        }
    } else if p.x > w {
        if state.zone.x != GameConfig::ZONES_X - 1 {
            p.x = 0;
            state.zone.x += 1;
            changed = true;
        } else {
            p.x = w;
        }
    } else if p.y < 0 {
        if state.zone.y != 0 {
            p.y = h;
            state.zone.y -= 1;
            changed = true;
        } else {
            p.y = 0;
        }
    } else if p.y > h {
        if state.zone.y != GameConfig::ZONES_Y - 1 {
            p.y = 0;
            state.zone.y += 1;
            changed = true;
        } else {
            p.y = h;
        }
    }

    changed
}
