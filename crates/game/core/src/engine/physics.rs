//! Collision detection and response.
//!
//! The player is pushed back out of solid obstacles and triggers item
//! pickups, teleports, and dialogs on contact. Enemies are never
//! displaced; their collisions are recorded as blocked sides for the
//! steering pass, and an enemy whose whole hitbox is swallowed by
//! another collider is crushed out of the world.

use crate::combat::{CombatText, SctKind};
use crate::direction::Direction;
use crate::engine::input::InputState;
use crate::geom::{Point, Rect};
use crate::rng::Dice;
use crate::state::SimulationState;
use crate::state::actor::Behavior;
use crate::state::item::{Item, ItemKind};
use crate::state::obstacle::ObstacleKind;
use crate::state::zone::Scenario;
use crate::state::Overlay;

/// Classifies which side of `me` the overlap `col` sits on.
///
/// A full-height overlap is a plain left/right hit and a full-width
/// one a plain top/bottom hit; anything else is a corner. Ties on the
/// overlap's proportions lean left/right.
pub fn classify(col: Rect, me: Rect) -> Direction {
    if col.width <= col.height || col.height == me.height {
        if col.x <= me.x {
            if col.height != me.height {
                if col.y <= me.y {
                    Direction::LeftUp
                } else {
                    Direction::LeftDown
                }
            } else {
                Direction::Left
            }
        } else if col.height != me.height {
            if col.y <= me.y {
                Direction::RightUp
            } else {
                Direction::RightDown
            }
        } else {
            Direction::Right
        }
    } else if col.y <= me.y {
        if col.width != me.width {
            if col.x <= me.x {
                Direction::LeftUp
            } else {
                Direction::RightUp
            }
        } else {
            Direction::Up
        }
    } else if col.width != me.width {
        if col.x <= me.x {
            Direction::LeftDown
        } else {
            Direction::RightDown
        }
    } else {
        Direction::Down
    }
}

/// Moves `position` out of an overlap classified as `side`. Corner
/// hits push along whichever axis has less to undo.
pub fn displace(position: &mut Point, side: Direction, col: Rect) {
    match side {
        Direction::Left => position.x += col.width,
        Direction::Right => position.x -= col.width,
        Direction::Up => position.y += col.height,
        Direction::Down => position.y -= col.height,
        Direction::LeftUp => {
            if col.width > col.height {
                position.y += col.height;
            } else {
                position.x += col.width;
            }
        }
        Direction::LeftDown => {
            if col.width > col.height {
                position.y -= col.height;
            } else {
                position.x += col.width;
            }
        }
        Direction::RightUp => {
            if col.width > col.height {
                position.y += col.height;
            } else {
                position.x -= col.width;
            }
        }
        Direction::RightDown => {
            if col.width > col.height {
                position.y -= col.height;
            } else {
                position.x -= col.width;
            }
        }
        Direction::None => {}
    }
}

/// Runs the collision pass for one tick: player interactions first,
/// then enemy side recording, then the stale-dialog check.
pub fn run(
    state: &mut SimulationState,
    input: &InputState,
    scenario: &Scenario,
    rng: &mut dyn Dice,
) {
    player_pass(state, input, scenario, rng);
    enemy_pass(state);

    // A dialog ends the moment the two stop touching.
    if let Some(idx) = state.dialog_partner {
        let touching = state
            .obstacles
            .get(idx)
            .is_some_and(|o| state.player.hitbox().intersect(&o.rect).is_some());
        if !touching {
            state.dialog_partner = None;
        }
    }
}

/// Stores `item` in the inventory, announcing the outcome as combat
/// text. Returns the item back when the inventory is full.
fn acquire(state: &mut SimulationState, item: Item) -> Result<(), Item> {
    let pos = item.position;
    match state.inventory.loot(item) {
        Ok(()) => {
            state
                .combat_texts
                .push(CombatText::new(pos, "item looted", SctKind::Normal));
            Ok(())
        }
        Err(item) => {
            state.push_text_once(CombatText::new(pos, "inventory full", SctKind::Block));
            Err(item)
        }
    }
}

fn player_pass(
    state: &mut SimulationState,
    input: &InputState,
    scenario: &Scenario,
    rng: &mut dyn Dice,
) {
    // Item pickups. A full inventory leaves the item in the world.
    let mut i = 0;
    while i < state.items.len() {
        if state
            .player
            .hitbox()
            .intersect(&state.items[i].hitbox())
            .is_none()
        {
            i += 1;
            continue;
        }

        let item = state.items.remove(i);
        if let Err(item) = acquire(state, item) {
            state.items.insert(i, item);
            i += 1;
        }
    }

    // Obstacles. The hitbox is recomputed per obstacle so an earlier
    // displacement feeds into later checks.
    for idx in 0..state.obstacles.len() {
        let Some(col) = state.player.hitbox().intersect(&state.obstacles[idx].rect) else {
            continue;
        };

        match state.obstacles[idx].kind.clone() {
            ObstacleKind::Teleport {
                destination,
                relocation,
            } => {
                state.player.position = Point::new(relocation.0, relocation.1);
                state.zone = destination;
                state.load_zone(scenario);
                // The obstacle list was just replaced.
                break;
            }
            ObstacleKind::Dialog { tag, .. } => {
                if state.dialog_partner.is_none() && input.attack {
                    match tag.as_str() {
                        "vendor" => {
                            let cake = Item::fixed(state.player.position, ItemKind::HealthCake);
                            let _ = acquire(state, cake);
                        }
                        "guards" => {
                            if ItemKind::QUEST_KINDS
                                .iter()
                                .all(|&kind| state.inventory.contains_kind(kind))
                            {
                                state.paused = true;
                                state.overlay = Some(Overlay::Finish);
                            }
                        }
                        _ => {}
                    }

                    state.obstacles[idx].randomize_response(rng);
                    state.dialog_partner = Some(idx);
                }
            }
            ObstacleKind::Collision => {
                let side = classify(col, state.player.hitbox());
                displace(&mut state.player.position, side, col);
            }
        }
    }
}

fn enemy_pass(state: &mut SimulationState) {
    // Snapshot taken up front: an enemy crushed mid-pass still blocks
    // the enemies processed after it this tick.
    let hitboxes: Vec<Rect> = state.enemies.iter().map(|e| e.hitbox()).collect();
    let mut crushed: Vec<usize> = Vec::new();

    for i in 0..state.enemies.len() {
        let me = hitboxes[i];
        let mut sides: Vec<Direction> = Vec::new();
        let mut crush = false;

        for (j, other) in hitboxes.iter().enumerate() {
            if j == i {
                continue;
            }
            if let Some(col) = me.intersect(other) {
                if col == me {
                    crush = true;
                } else {
                    sides.push(classify(col, me));
                }
            }
        }

        // Enemies treat every obstacle as solid, doors and talkers
        // included.
        for obstacle in &state.obstacles {
            if let Some(col) = me.intersect(&obstacle.rect) {
                if col == me {
                    crush = true;
                } else {
                    sides.push(classify(col, me));
                }
            }
        }

        if crush {
            crushed.push(i);
        }
        if let Behavior::Enemy(mind) = &mut state.enemies[i].behavior {
            mind.colliding_sides = sides;
        }
    }

    for &i in crushed.iter().rev() {
        state.enemies.remove(i);
    }
}
