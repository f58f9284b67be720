//! Deterministic simulation core for the Thornvale action game.
//!
//! `thornvale-core` holds the canonical rules: the actor model, the
//! collision and steering passes, combat resolution, items and the
//! inventory grid, and the tick pipeline that strings them together.
//! Nothing in here touches a clock, a file, or a screen; the runtime
//! feeds in sampled input and elapsed time, and a seeded [`rng::Dice`]
//! makes whole sessions replayable.
pub mod combat;
pub mod config;
pub mod direction;
pub mod engine;
pub mod geom;
pub mod rng;
pub mod state;

pub use combat::{CombatStats, CombatText, SctKind, attackable, resolve_attack};
pub use config::GameConfig;
pub use direction::{Direction, SpriteBucket};
pub use engine::{advance, input::InputState};
pub use geom::{Point, Rect, Size};
pub use rng::{Dice, GameRng};
pub use state::{
    Overlay, RenderEntity, SimulationState,
    actor::{ActorState, AnimTrack, Behavior, EnemyMind, SpriteFrame},
    inventory::Inventory,
    item::{Item, ItemKind, ItemQuality, ItemState},
    obstacle::{Obstacle, ObstacleKind},
    zone::{Scenario, Spawn, SpawnKind, ZoneDef, ZoneId},
};
