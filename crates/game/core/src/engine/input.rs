//! Input snapshot consumed by a tick.

use crate::direction::Direction;

/// The button states sampled for one tick. How they map to physical
/// keys is the embedder's business.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Attack / interact button, held.
    pub attack: bool,
}

impl InputState {
    /// Movement direction the held buttons add up to.
    ///
    /// Horizontal keys resolve first and vertical keys override them
    /// into a diagonal, so holding all four ends up vertical-diagonal
    /// rather than cancelled out.
    pub fn move_direction(&self) -> Direction {
        let mut dir = Direction::None;
        if self.left {
            dir = Direction::Left;
        }
        if self.right {
            dir = Direction::Right;
        }

        if self.up {
            dir = Direction::Up;
            if self.right {
                dir = Direction::RightUp;
            }
            if self.left {
                dir = Direction::LeftUp;
            }
        }

        if self.down {
            dir = Direction::Down;
            if self.right {
                dir = Direction::RightDown;
            }
            if self.left {
                dir = Direction::LeftDown;
            }
        }

        dir
    }
}
