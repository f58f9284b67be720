//! Attack resolution and floating combat text.

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::geom::Point;
use crate::rng::Dice;
use crate::state::actor::{ActorState, Behavior};

// ============================================================================
// Stats
// ============================================================================

/// Offensive and defensive stats an actor carries. Equipment bonuses are
/// added to and removed from these directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    /// Upper bound of the damage roll.
    pub damage: i32,
    /// Chance to block an incoming attack, percent.
    pub block: i32,
    /// Chance to land a critical hit, percent.
    pub crit: i32,
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            damage: GameConfig::BASE_DAMAGE,
            block: GameConfig::BASE_BLOCK,
            crit: GameConfig::BASE_CRIT,
        }
    }
}

// ============================================================================
// Combat Text
// ============================================================================

/// Visual class of a floating combat text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum SctKind {
    #[default]
    Normal,
    Critical,
    Block,
}

/// A short-lived text floating up from a combat event.
///
/// Holds full opacity for a fixed delay, then loses alpha every tick.
/// Non-critical texts also drift upward while alive.
#[derive(Clone, Debug)]
pub struct CombatText {
    pub position: Point,
    pub text: String,
    pub kind: SctKind,
    alpha: i32,
    fade_delay_ms: f32,
}

impl CombatText {
    pub fn new(anchor: Point, text: impl Into<String>, kind: SctKind) -> Self {
        let mut position = Point::new(anchor.x - 10, anchor.y - 45);
        match kind {
            SctKind::Normal => {}
            SctKind::Critical => position.x -= 5,
            SctKind::Block => position.x -= 15,
        }

        Self {
            position,
            text: text.into(),
            kind,
            alpha: 255,
            fade_delay_ms: GameConfig::TEXT_FADE_DELAY_MS,
        }
    }

    pub fn alpha(&self) -> i32 {
        self.alpha
    }

    /// True once the text is transparent enough to prune.
    pub fn faded(&self) -> bool {
        self.alpha <= GameConfig::TEXT_PRUNE_ALPHA
    }

    /// Advances drift and fade by one tick of `elapsed_ms`.
    pub fn animate(&mut self, elapsed_ms: f32) {
        self.fade_delay_ms -= elapsed_ms;
        if self.fade_delay_ms <= 0.0 && self.alpha >= GameConfig::TEXT_PRUNE_ALPHA {
            self.alpha -= GameConfig::TEXT_FADE_STEP;
        }

        if self.kind != SctKind::Critical {
            self.position.y -= GameConfig::TEXT_RISE;
        }
    }
}

// ============================================================================
// Attack Resolution
// ============================================================================

/// Rolls one melee attack from `attacker` against `victim`, applies the
/// damage, and returns the combat text describing the outcome.
///
/// The player rolls `[damage/3, damage)`; everyone else rolls
/// `[1, damage)`. The victim's block check runs before the attacker's
/// crit check, and a blocked hit deals nothing. Criticals triple the
/// rolled damage. Health never drops below zero.
pub fn resolve_attack(
    attacker: &ActorState,
    victim: &mut ActorState,
    rng: &mut dyn Dice,
) -> CombatText {
    let mut dmg = if attacker.is_player() {
        debug_assert!(
            attacker.stats.damage >= 3,
            "player damage below the roll's minimum spread"
        );
        rng.roll(attacker.stats.damage / 3, attacker.stats.damage)
    } else {
        rng.roll(1, attacker.stats.damage)
    };

    if rng.roll(0, 101) <= victim.stats.block {
        return CombatText::new(victim.position, "Block", SctKind::Block);
    }

    let kind = if rng.roll(0, 101) <= attacker.stats.crit {
        dmg *= 3;
        SctKind::Critical
    } else {
        SctKind::Normal
    };

    victim.health = (victim.health - dmg).max(0);
    CombatText::new(victim.position, dmg.to_string(), kind)
}

/// Whether a target at `target` is inside the player's melee arc.
///
/// The plane around the player splits into eight octants; a target is
/// attackable when it sits within reach inside an octant and the player
/// faces one of that octant's two adjacent cardinals.
pub fn attackable(player: &ActorState, target: Point) -> bool {
    let off = target - player.position;
    let reach = GameConfig::PLAYER_REACH;
    let facing = player.facing;

    if off.x <= 0 && off.y <= 0 && off.x.abs() >= off.y.abs() && off.x >= -reach {
        facing == Direction::Left || facing == Direction::Up
    } else if off.x <= 0 && off.y >= 0 && off.x.abs() >= off.y.abs() && off.x >= -reach {
        facing == Direction::Left || facing == Direction::Down
    } else if off.x >= 0 && off.y >= 0 && off.x.abs() >= off.y.abs() && off.x <= reach {
        facing == Direction::Right || facing == Direction::Down
    } else if off.x >= 0 && off.y <= 0 && off.x.abs() >= off.y.abs() && off.x <= reach {
        facing == Direction::Right || facing == Direction::Up
    } else if off.x >= 0 && off.y <= 0 && off.x.abs() <= off.y.abs() && off.y >= -reach {
        facing == Direction::Up || facing == Direction::Right
    } else if off.x <= 0 && off.y <= 0 && off.x.abs() <= off.y.abs() && off.y >= -reach {
        facing == Direction::Up || facing == Direction::Left
    } else if off.x >= 0 && off.y >= 0 && off.x.abs() <= off.y.abs() && off.y <= reach {
        facing == Direction::Down || facing == Direction::Right
    } else if off.x <= 0 && off.y >= 0 && off.x.abs() <= off.y.abs() && off.y <= reach {
        facing == Direction::Down || facing == Direction::Left
    } else {
        false
    }
}
