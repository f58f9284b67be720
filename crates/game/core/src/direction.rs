//! Movement and facing directions.
//!
//! The declaration order below is load-bearing: enemy pathing resolves
//! contested directions by sorting candidate lists and counting runs of
//! equal values, so `Ord` (derived from declaration order) is part of the
//! simulation contract, not a cosmetic detail.

use strum::{Display, EnumIter, EnumString};

/// One of eight movement directions, or `None` when standing still.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    LeftUp,
    LeftDown,
    Right,
    RightUp,
    RightDown,
    Up,
    #[default]
    Down,
    None,
}

/// Sprite row an actor is drawn from. Diagonals fold into a cardinal
/// bucket: the left/right diagonals bias toward up/down rather than
/// toward left/right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpriteBucket {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step on each axis. Diagonals step both axes at full
    /// magnitude, so diagonal movement is faster than cardinal movement.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::LeftUp => (-1, -1),
            Self::LeftDown => (-1, 1),
            Self::Right => (1, 0),
            Self::RightUp => (1, -1),
            Self::RightDown => (1, 1),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::None => (0, 0),
        }
    }

    /// Sprite row for this direction.
    pub fn bucket(self) -> SpriteBucket {
        match self {
            Self::Left => SpriteBucket::Left,
            Self::Right => SpriteBucket::Right,
            Self::LeftUp | Self::RightUp | Self::Up | Self::None => SpriteBucket::Up,
            Self::LeftDown | Self::RightDown | Self::Down => SpriteBucket::Down,
        }
    }

    /// Direction from `self`'s owner toward a target at `offset`
    /// (target minus owner), with a dead band of `threshold` pixels on
    /// each axis. Axes inside the dead band leave `current` untouched,
    /// so a stationary target keeps the previous heading.
    pub fn toward(offset: (i32, i32), threshold: i32, current: Direction) -> Direction {
        let (dx, dy) = offset;
        let mut dir = current;

        if dx < -threshold {
            dir = Self::Left;
        }
        if dx > threshold {
            dir = Self::Right;
        }
        if dy < -threshold {
            dir = Self::Up;
            if dx > threshold {
                dir = Self::RightUp;
            }
            if dx < -threshold {
                dir = Self::LeftUp;
            }
        }
        if dy > threshold {
            dir = Self::Down;
            if dx > threshold {
                dir = Self::RightDown;
            }
            if dx < -threshold {
                dir = Self::LeftDown;
            }
        }

        dir
    }

    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::LeftUp | Self::LeftDown | Self::RightUp | Self::RightDown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ord_follows_declaration_order() {
        let declared = [
            Direction::Left,
            Direction::LeftUp,
            Direction::LeftDown,
            Direction::Right,
            Direction::RightUp,
            Direction::RightDown,
            Direction::Up,
            Direction::Down,
            Direction::None,
        ];
        let mut sorted = declared;
        sorted.sort();
        assert_eq!(sorted, declared);
    }

    #[test]
    fn diagonals_fold_vertically() {
        assert_eq!(Direction::LeftUp.bucket(), SpriteBucket::Up);
        assert_eq!(Direction::RightUp.bucket(), SpriteBucket::Up);
        assert_eq!(Direction::LeftDown.bucket(), SpriteBucket::Down);
        assert_eq!(Direction::RightDown.bucket(), SpriteBucket::Down);
        assert_eq!(Direction::Left.bucket(), SpriteBucket::Left);
        assert_eq!(Direction::Right.bucket(), SpriteBucket::Right);
    }

    #[test]
    fn toward_prefers_diagonals_outside_both_bands() {
        assert_eq!(
            Direction::toward((40, -40), 10, Direction::None),
            Direction::RightUp
        );
        assert_eq!(
            Direction::toward((-40, 40), 10, Direction::None),
            Direction::LeftDown
        );
    }

    #[test]
    fn toward_keeps_current_inside_dead_band() {
        for current in Direction::iter() {
            assert_eq!(Direction::toward((3, -7), 10, current), current);
        }
    }

    #[test]
    fn toward_vertical_overrides_horizontal() {
        // Y branch runs after X, so a target far below and slightly left
        // still resolves to Down, not Left.
        assert_eq!(
            Direction::toward((-5, 90), 10, Direction::None),
            Direction::Down
        );
    }

    #[test]
    fn delta_diagonals_step_both_axes() {
        assert_eq!(Direction::RightDown.delta(), (1, 1));
        assert_eq!(Direction::LeftUp.delta(), (-1, -1));
        assert_eq!(Direction::None.delta(), (0, 0));
    }
}
