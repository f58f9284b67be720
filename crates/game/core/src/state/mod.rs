//! Mutable simulation state and its zone-loading rules.

pub mod actor;
pub mod inventory;
pub mod item;
pub mod obstacle;
pub mod zone;

use strum::{Display, EnumString};

use crate::combat::CombatText;
use crate::config::GameConfig;
use crate::geom::Point;
use crate::state::actor::ActorState;
use crate::state::inventory::Inventory;
use crate::state::item::Item;
use crate::state::obstacle::Obstacle;
use crate::state::zone::{Scenario, SpawnKind, ZoneId};

/// Full-screen overlay currently shown, if any. The simulation pauses
/// whenever one is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum Overlay {
    /// Title screen shown on a fresh game.
    Start,
    /// Quest complete.
    Finish,
    /// Player died.
    Dead,
}

/// One entry of the draw-ordered world snapshot.
#[derive(Debug)]
pub enum RenderEntity<'a> {
    Item(&'a Item),
    Actor(&'a ActorState),
}

/// Everything that changes over the course of a game.
///
/// The engine's phase functions take this by `&mut` and nothing here
/// touches a clock, a file, or a screen, so any sequence of ticks can
/// be replayed in a test.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub zone: ZoneId,
    pub score: f32,
    pub paused: bool,
    pub overlay: Option<Overlay>,
    /// Draw hitboxes and steering choices.
    pub debug: bool,

    pub player: ActorState,
    pub inventory: Inventory,
    pub enemies: Vec<ActorState>,
    /// Items lying in the current zone.
    pub items: Vec<Item>,
    /// Furniture of the current zone, cloned from the scenario on load.
    pub obstacles: Vec<Obstacle>,
    pub combat_texts: Vec<CombatText>,

    /// Damage immunity remaining after the player was last hit.
    pub invulnerable_ms: f32,
    /// Index into `obstacles` of the dialog the player is in, cleared
    /// by the physics pass once the two no longer touch.
    pub dialog_partner: Option<usize>,
    /// The attack button has been released since the last swing, so
    /// the next press starts a new one.
    pub attack_released: bool,
}

impl SimulationState {
    /// A fresh game at the start zone, paused behind the title screen.
    pub fn new(scenario: &Scenario) -> Self {
        let (px, py) = GameConfig::PLAYER_START;
        let mut state = Self {
            zone: ZoneId::start(),
            score: 0.0,
            paused: true,
            overlay: Some(Overlay::Start),
            debug: false,
            player: ActorState::new_player(Point::new(px, py)),
            inventory: Inventory::new(),
            enemies: Vec::new(),
            items: Vec::new(),
            obstacles: Vec::new(),
            combat_texts: Vec::new(),
            invulnerable_ms: 0.0,
            dialog_partner: None,
            attack_released: true,
        };
        state.load_zone(scenario);
        state
    }

    /// Swaps in the current zone's content.
    ///
    /// Everything transient goes: enemies respawn fresh from their
    /// spawn points, dropped loot vanishes, combat texts clear, and any
    /// open dialog ends. Quest items the player already carries do not
    /// respawn.
    pub fn load_zone(&mut self, scenario: &Scenario) {
        self.enemies.clear();
        self.items.clear();
        self.combat_texts.clear();
        self.dialog_partner = None;

        let def = scenario.zone(self.zone);
        self.obstacles = def.obstacles.clone();

        for spawn in &def.spawns {
            match spawn.kind {
                SpawnKind::Enemy => self.enemies.push(ActorState::new_enemy(spawn.position)),
                SpawnKind::Item(kind) => {
                    if !self.inventory.contains_kind(kind) {
                        self.items.push(Item::fixed(spawn.position, kind));
                    }
                }
            }
        }
    }

    /// Adds a combat text unless one with the same wording is already
    /// on screen. Used for warnings that collisions would otherwise
    /// spam every tick.
    pub fn push_text_once(&mut self, text: CombatText) {
        if !self.combat_texts.iter().any(|t| t.text == text.text) {
            self.combat_texts.push(text);
        }
    }

    /// World entities in draw order: items below everything, then
    /// actors bottom-up by their Y coordinate so nearer actors paint
    /// over farther ones.
    pub fn render_queue(&self) -> Vec<RenderEntity<'_>> {
        let mut queue: Vec<RenderEntity<'_>> = Vec::new();
        queue.extend(self.items.iter().map(RenderEntity::Item));

        let mut actors: Vec<&ActorState> = Vec::with_capacity(1 + self.enemies.len());
        actors.push(&self.player);
        actors.extend(self.enemies.iter());
        actors.sort_by_key(|a| a.position.y);

        queue.extend(actors.into_iter().map(RenderEntity::Actor));
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;
    use crate::state::item::ItemKind;
    use crate::state::obstacle::ObstacleKind;
    use crate::state::zone::{Spawn, ZoneDef};

    fn scenario_with_start_zone(def: ZoneDef) -> Scenario {
        let mut scenario = Scenario::empty();
        scenario.set_zone(ZoneId::start(), def);
        scenario
    }

    #[test]
    fn fresh_game_is_paused_behind_the_title() {
        let state = SimulationState::new(&Scenario::empty());
        assert!(state.paused);
        assert_eq!(state.overlay, Some(Overlay::Start));
        assert_eq!(state.player.position, Point::new(246, 419));
        assert_eq!(state.zone, ZoneId::new(0, 3));
    }

    #[test]
    fn zone_load_spawns_enemies_and_items() {
        let def = ZoneDef {
            obstacles: vec![Obstacle::new(
                Rect::new(0, 0, 20, 20),
                ObstacleKind::Collision,
            )],
            spawns: vec![
                Spawn {
                    position: Point::new(100, 100),
                    kind: SpawnKind::Enemy,
                },
                Spawn {
                    position: Point::new(200, 200),
                    kind: SpawnKind::Item(ItemKind::QuestItemKey),
                },
            ],
        };
        let state = SimulationState::new(&scenario_with_start_zone(def));

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn carried_quest_items_do_not_respawn() {
        let def = ZoneDef {
            obstacles: Vec::new(),
            spawns: vec![Spawn {
                position: Point::new(200, 200),
                kind: SpawnKind::Item(ItemKind::QuestItemKey),
            }],
        };
        let scenario = scenario_with_start_zone(def);
        let mut state = SimulationState::new(&scenario);
        assert_eq!(state.items.len(), 1);

        let key = state.items.remove(0);
        state.inventory.loot(key).unwrap();
        state.load_zone(&scenario);
        assert!(state.items.is_empty());
    }

    #[test]
    fn render_queue_draws_items_first_then_actors_by_depth() {
        let mut state = SimulationState::new(&Scenario::empty());
        state.player.position = Point::new(0, 300);
        state
            .enemies
            .push(ActorState::new_enemy(Point::new(0, 100)));
        state
            .enemies
            .push(ActorState::new_enemy(Point::new(0, 500)));
        state
            .items
            .push(Item::fixed(Point::new(0, 999), ItemKind::HealthCake));

        let queue = state.render_queue();
        assert!(matches!(queue[0], RenderEntity::Item(_)));
        let ys: Vec<i32> = queue[1..]
            .iter()
            .map(|e| match e {
                RenderEntity::Actor(a) => a.position.y,
                RenderEntity::Item(_) => panic!("item after actors"),
            })
            .collect();
        assert_eq!(ys, vec![100, 300, 500]);
    }

    #[test]
    fn duplicate_warning_texts_collapse() {
        let mut state = SimulationState::new(&Scenario::empty());
        state.push_text_once(CombatText::new(
            Point::ORIGIN,
            "inventory full",
            crate::combat::SctKind::Block,
        ));
        state.push_text_once(CombatText::new(
            Point::ORIGIN,
            "inventory full",
            crate::combat::SctKind::Block,
        ));
        assert_eq!(state.combat_texts.len(), 1);
    }
}
