//! Simulation constants.
//!
//! Everything tunable about the world lives here as associated constants
//! so the numbers have one home and call sites stay searchable.

/// Fixed parameters of the game world.
pub struct GameConfig;

impl GameConfig {
    // ------------------------------------------------------------------------
    // World grid
    // ------------------------------------------------------------------------

    /// Zone columns in the overworld grid.
    pub const ZONES_X: usize = 5;
    /// Zone rows in the overworld grid.
    pub const ZONES_Y: usize = 4;
    /// Playable width of one zone, in pixels.
    pub const ZONE_WIDTH: i32 = 700;
    /// Playable height of one zone, in pixels.
    pub const ZONE_HEIGHT: i32 = 700;
    /// Zone the player wakes up in.
    pub const START_ZONE: (usize, usize) = (0, 3);
    /// Player spawn position inside the start zone.
    pub const PLAYER_START: (i32, i32) = (246, 419);

    // ------------------------------------------------------------------------
    // Actors
    // ------------------------------------------------------------------------

    /// Foot hitbox, relative to the actor anchor: x offset, y offset,
    /// width, height. Deliberately covers only the feet so actors can
    /// overlap scenery with their upper body.
    pub const HITBOX: (i32, i32, i32, i32) = (-16, 10, 32, 12);

    /// Baseline attack damage for a fresh actor.
    pub const BASE_DAMAGE: i32 = 10;
    /// Baseline block chance, percent.
    pub const BASE_BLOCK: i32 = 5;
    /// Baseline critical chance, percent.
    pub const BASE_CRIT: i32 = 2;
    /// Starting and maximum health.
    pub const MAX_HEALTH: i32 = 100;

    /// Milliseconds of damage immunity after the player is hit.
    pub const INVULNERABLE_MS: f32 = 1000.0;

    // ------------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------------

    /// Attack track advance per game-speed unit.
    pub const ATTACK_FRAME_STEP: f32 = 0.3;
    /// Run track advance per game-speed unit.
    pub const RUN_FRAME_STEP: f32 = 0.2;
    /// Frames in an attack animation track.
    pub const ATTACK_TRACK_LEN: f32 = 10.0;
    /// Frames in a run animation track.
    pub const RUN_TRACK_LEN: f32 = 8.0;

    // ------------------------------------------------------------------------
    // Combat and AI
    // ------------------------------------------------------------------------

    /// Dead-band half-width for enemy steering, in pixels.
    pub const STEER_THRESHOLD: i32 = 10;
    /// Horizontal engagement range for enemy melee (5x the steering band).
    pub const ENGAGE_X: i32 = 5 * Self::STEER_THRESHOLD;
    /// Vertical engagement range for enemy melee (4x the steering band).
    pub const ENGAGE_Y: i32 = 4 * Self::STEER_THRESHOLD;
    /// Player melee reach, in pixels from the player anchor.
    pub const PLAYER_REACH: i32 = 55;

    /// Health restored by a consumable.
    pub const HEAL_AMOUNT: i32 = 20;

    // ------------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------------

    /// Square hitbox side for an item lying in the world.
    pub const ITEM_SIZE: i32 = 16;
    /// Drop-position jitter range, half-open, applied to both axes.
    pub const DROP_JITTER: (i32, i32) = (5, 21);

    // ------------------------------------------------------------------------
    // Combat text
    // ------------------------------------------------------------------------

    /// Milliseconds a combat text holds full opacity before fading.
    pub const TEXT_FADE_DELAY_MS: f32 = 1000.0;
    /// Alpha lost per tick once fading.
    pub const TEXT_FADE_STEP: i32 = 50;
    /// Alpha at or below which a text is pruned.
    pub const TEXT_PRUNE_ALPHA: i32 = 5;
    /// Pixels a non-critical text rises per tick.
    pub const TEXT_RISE: i32 = 2;

    // ------------------------------------------------------------------------
    // Loop
    // ------------------------------------------------------------------------

    /// Game-speed units per second of wall time. One tick at 60 FPS is
    /// roughly speed 1.
    pub const GAME_SPEED_SCALE: f32 = 100.0;

    // ------------------------------------------------------------------------
    // Inventory
    // ------------------------------------------------------------------------

    /// Inventory grid rows.
    pub const INV_ROWS: usize = 3;
    /// Inventory grid columns (equipment mannequin plus storage).
    pub const INV_COLS: usize = 6;
    /// First storage column; columns to the left form the mannequin.
    pub const INV_STORAGE_COL: usize = 3;
}
