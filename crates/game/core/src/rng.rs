//! Deterministic random rolls.
//!
//! The core never touches OS entropy. Everything random (damage spreads,
//! drop tables, dialog lines) draws from a [`Dice`] handle threaded in by
//! the caller, so a fixed seed replays a whole session tick for tick.

// ============================================================================
// Dice Trait
// ============================================================================

/// Source of random rolls for the simulation.
///
/// Tests substitute scripted implementations to force or forbid specific
/// outcomes (a guaranteed block, a guaranteed crit).
pub trait Dice {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform roll in the half-open range `[lo, hi)`.
    ///
    /// Returns `lo` when the range is empty or inverted.
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        if lo >= hi {
            return lo;
        }
        let span = (hi - lo) as u32;
        lo + (self.next_u32() % span) as i32
    }

    /// Uniform index into a slice of length `len`. Returns 0 for empty
    /// slices; callers check emptiness first.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32() as usize) % len
    }
}

// ============================================================================
// PCG-XSH-RR Generator
// ============================================================================

const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

/// Permuted congruential generator (PCG-XSH-RR variant).
///
/// Small, fast, and statistically solid for game rolls. One instance is
/// owned by the session and advanced across its lifetime.
#[derive(Clone, Debug)]
pub struct GameRng {
    state: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        // Standard PCG seeding: one step, add seed, one step.
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
    }
}

impl Dice for GameRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}
