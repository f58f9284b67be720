//! Actors: the player and the enemies chasing them.
//!
//! One state type covers both; what differs is carried in [`Behavior`]
//! rather than in parallel type hierarchies.

use crate::combat::CombatStats;
use crate::config::GameConfig;
use crate::direction::{Direction, SpriteBucket};
use crate::geom::{Point, Rect};

// ============================================================================
// Behavior
// ============================================================================

/// What drives an actor each tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Driven by sampled input.
    Player,
    /// Driven by the pathing pass.
    Enemy(EnemyMind),
}

/// Per-enemy pathing scratch state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnemyMind {
    /// Sides this enemy collided on during the last physics pass.
    /// Order and multiplicity matter: the steering consensus counts
    /// duplicate entries, so this is a multiset, not a flag set.
    pub colliding_sides: Vec<Direction>,
}

// ============================================================================
// Sprite Selection
// ============================================================================

/// Animation track an actor is currently playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimTrack {
    #[default]
    Run,
    Attack,
}

/// Which sprite a renderer should draw for an actor right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpriteFrame {
    pub bucket: SpriteBucket,
    pub track: AnimTrack,
    pub index: usize,
}

// ============================================================================
// Actor State
// ============================================================================

/// Full per-actor simulation state.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    pub position: Point,
    /// Direction the actor is rendered facing. Never `None`; only
    /// updated from a non-idle `moving`.
    pub facing: Direction,
    /// Direction the actor wants to move this tick.
    pub moving: Direction,
    pub health: i32,
    pub stats: CombatStats,
    /// An attack animation is in progress.
    pub attacking: bool,
    /// The attack animation has finished (or never started) and a new
    /// swing may land. Damage is dealt on the tick where both this and
    /// `attacking` are set, i.e. at the start of a swing.
    pub attack_ready: bool,
    pub behavior: Behavior,
    /// Fractional cursor into the current animation track.
    frame: f32,
    /// Sprite chosen by the last animation pass.
    sprite: SpriteFrame,
}

impl ActorState {
    fn new(position: Point, behavior: Behavior) -> Self {
        Self {
            position,
            facing: Direction::Down,
            moving: Direction::Down,
            health: GameConfig::MAX_HEALTH,
            stats: CombatStats::default(),
            attacking: false,
            attack_ready: true,
            behavior,
            frame: 0.0,
            sprite: SpriteFrame {
                bucket: SpriteBucket::Down,
                ..SpriteFrame::default()
            },
        }
    }

    pub fn new_player(position: Point) -> Self {
        Self::new(position, Behavior::Player)
    }

    pub fn new_enemy(position: Point) -> Self {
        Self::new(position, Behavior::Enemy(EnemyMind::default()))
    }

    pub fn is_player(&self) -> bool {
        self.behavior == Behavior::Player
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.behavior, Behavior::Enemy(_))
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn sprite(&self) -> SpriteFrame {
        self.sprite
    }

    /// Foot hitbox used for all collision checks. Anchored below the
    /// position so actors overlap scenery with their upper body.
    pub fn hitbox(&self) -> Rect {
        let (dx, dy, w, h) = GameConfig::HITBOX;
        Rect::new(self.position.x + dx, self.position.y + dy, w, h)
    }

    /// Advances the animation state by one tick.
    ///
    /// Facing only follows movement while no swing is in progress, so
    /// an attack keeps its original direction to the end. Completing
    /// the attack track clears `attacking` and re-arms `attack_ready`.
    pub fn animate(&mut self, game_speed: i32) {
        if self.moving != Direction::None && self.attack_ready {
            self.facing = self.moving;
        }
        let bucket = self.facing.bucket();

        if self.attacking {
            if self.attack_ready {
                self.frame = 0.0;
            }
            self.attack_ready = false;

            self.sprite = SpriteFrame {
                bucket,
                track: AnimTrack::Attack,
                index: self.frame as usize,
            };

            self.frame += GameConfig::ATTACK_FRAME_STEP * game_speed as f32;
            if self.frame >= GameConfig::ATTACK_TRACK_LEN || self.frame < 0.0 {
                self.frame = 0.0;
                self.attacking = false;
                self.attack_ready = true;
            }
        } else {
            if self.frame >= GameConfig::RUN_TRACK_LEN
                || self.moving == Direction::None
                || self.frame < 0.0
            {
                self.frame = 0.0;
            }

            self.sprite = SpriteFrame {
                bucket,
                track: AnimTrack::Run,
                index: self.frame as usize,
            };

            self.frame += GameConfig::RUN_FRAME_STEP * game_speed as f32;
        }
    }

    /// Applies this tick's movement. The player gets a 1.5x speed edge
    /// over enemies (integer arithmetic). No movement during a swing.
    pub fn integrate(&mut self, game_speed: i32) {
        let speed = if self.is_player() {
            game_speed + game_speed / 2
        } else {
            game_speed
        };

        if self.attacking {
            return;
        }

        let (dx, dy) = self.moving.delta();
        self.position.x += dx * speed;
        self.position.y += dy * speed;
    }
}
