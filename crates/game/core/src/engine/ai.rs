//! Enemy steering: chase the player, slide along whatever is in the
//! way.

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::state::actor::{ActorState, Behavior};

/// Directions that stay open when a given side is blocked: everything
/// not pointing back into the blocked side.
fn permitted(side: Direction) -> &'static [Direction] {
    use Direction::*;
    match side {
        Left => &[Up, Down, Right, RightUp, RightDown],
        LeftUp => &[RightUp, Right, RightDown, Down, LeftDown],
        LeftDown => &[LeftUp, Up, RightUp, Right, RightDown],
        Right => &[Up, Down, Left, LeftUp, LeftDown],
        RightUp => &[LeftUp, RightDown, Down, LeftDown, Left],
        RightDown => &[Up, RightUp, LeftDown, Left, LeftUp],
        Up => &[Left, Right, Down, RightDown, LeftDown],
        Down => &[Left, Right, Up, RightUp, LeftUp],
        None => &[],
    }
}

/// Detour candidates for a blocked diagonal, in preference order: the
/// mirrored diagonals first, then the component cardinals. Blocked
/// cardinals get no detour and the enemy stands still.
fn detours(raw: Direction) -> &'static [Direction] {
    use Direction::*;
    match raw {
        LeftUp => &[RightUp, LeftDown, Left, Up],
        LeftDown => &[LeftUp, RightDown, Left, Down],
        RightUp => &[RightDown, LeftUp, Right, Up],
        RightDown => &[RightUp, LeftDown, Right, Down],
        _ => &[],
    }
}

/// Directions compatible with every recorded collision.
///
/// One collision allows its whole permitted list. With several, the
/// lists are concatenated and sorted, and a direction survives only if
/// its run is at least as long as the number of collisions, i.e. every
/// collision voted for it.
fn consensus(sides: &[Direction]) -> Vec<Direction> {
    match sides {
        [] => Vec::new(),
        [side] => permitted(*side).to_vec(),
        _ => {
            let mut votes: Vec<Direction> = sides
                .iter()
                .flat_map(|side| permitted(*side).iter().copied())
                .collect();
            votes.sort();

            let mut valid = Vec::new();
            let mut i = 0;
            while i < votes.len() {
                let mut j = i;
                while j < votes.len() && votes[j] == votes[i] {
                    j += 1;
                }
                if j - i >= sides.len() {
                    valid.push(votes[i]);
                }
                i = j;
            }
            valid
        }
    }
}

/// Picks this tick's movement (and attack intent) for one enemy.
///
/// A dead player stops the chase outright. Otherwise the enemy heads
/// toward the player with a dead band per axis, latches its attack
/// when the player is inside engagement range, and reroutes around
/// recorded collisions when the desired heading points into one.
pub fn determine_direction(enemy: &mut ActorState, player: &ActorState) {
    let sides = match &enemy.behavior {
        Behavior::Enemy(mind) => mind.colliding_sides.clone(),
        Behavior::Player => return,
    };

    if player.is_dead() {
        enemy.attacking = false;
        enemy.moving = Direction::None;
        return;
    }

    let valid = consensus(&sides);
    let offset = player.position - enemy.position;

    enemy.moving = Direction::toward(
        (offset.x, offset.y),
        GameConfig::STEER_THRESHOLD,
        enemy.moving,
    );

    if offset.x.abs() <= GameConfig::ENGAGE_X && offset.y.abs() <= GameConfig::ENGAGE_Y {
        enemy.attacking = true;
    }

    if !sides.is_empty() && !valid.contains(&enemy.moving) {
        let raw = enemy.moving;
        enemy.moving = detours(raw)
            .iter()
            .copied()
            .find(|d| valid.contains(d))
            .unwrap_or(Direction::None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::state::actor::EnemyMind;

    fn enemy_with_sides(position: Point, sides: &[Direction]) -> ActorState {
        let mut enemy = ActorState::new_enemy(position);
        enemy.behavior = Behavior::Enemy(EnemyMind {
            colliding_sides: sides.to_vec(),
        });
        enemy
    }

    #[test]
    fn dead_player_halts_the_chase() {
        let mut player = ActorState::new_player(Point::new(500, 500));
        player.health = 0;
        let mut enemy = ActorState::new_enemy(Point::new(100, 100));
        enemy.attacking = true;
        enemy.moving = Direction::Right;

        determine_direction(&mut enemy, &player);
        assert_eq!(enemy.moving, Direction::None);
        assert!(!enemy.attacking);

        // And it stays that way on repeat.
        determine_direction(&mut enemy, &player);
        assert_eq!(enemy.moving, Direction::None);
    }

    #[test]
    fn chases_toward_the_player() {
        let player = ActorState::new_player(Point::new(300, 100));
        let mut enemy = ActorState::new_enemy(Point::new(100, 100));

        determine_direction(&mut enemy, &player);
        assert_eq!(enemy.moving, Direction::Right);
    }

    #[test]
    fn attack_latches_inside_engagement_range() {
        let player = ActorState::new_player(Point::new(130, 120));
        let mut enemy = ActorState::new_enemy(Point::new(100, 100));

        determine_direction(&mut enemy, &player);
        assert!(enemy.attacking);

        // Latched: moving the player out of range does not clear it.
        let far = ActorState::new_player(Point::new(600, 600));
        determine_direction(&mut enemy, &far);
        assert!(enemy.attacking);
    }

    #[test]
    fn single_collision_permits_everything_off_that_side() {
        let valid = consensus(&[Direction::Left]);
        assert_eq!(
            valid,
            vec![
                Direction::Up,
                Direction::Down,
                Direction::Right,
                Direction::RightUp,
                Direction::RightDown
            ]
        );
    }

    #[test]
    fn multiple_collisions_intersect_their_lists() {
        // Left permits {Up, Down, Right, RightUp, RightDown};
        // Up permits {Left, Right, Down, RightDown, LeftDown}.
        let mut valid = consensus(&[Direction::Left, Direction::Up]);
        valid.sort();
        let mut expected = vec![Direction::Right, Direction::RightDown, Direction::Down];
        expected.sort();
        assert_eq!(valid, expected);
    }

    #[test]
    fn duplicate_sides_still_agree_with_themselves() {
        // Two hits on the same side must not disqualify its own list.
        let valid = consensus(&[Direction::Left, Direction::Left]);
        assert_eq!(valid.len(), 5);
        assert!(valid.contains(&Direction::Right));
    }

    #[test]
    fn blocked_diagonal_takes_the_preferred_detour() {
        // Enemy below-right of the player wants LeftUp, but its left
        // side is blocked. LeftUp is not in Left's permitted list; the
        // first detour candidate present is RightUp.
        let player = ActorState::new_player(Point::new(100, 100));
        let mut enemy = enemy_with_sides(Point::new(200, 200), &[Direction::Left]);

        determine_direction(&mut enemy, &player);
        assert_eq!(enemy.moving, Direction::RightUp);
    }

    #[test]
    fn blocked_cardinal_stops_dead() {
        // Wants Right, right side blocked, cardinals get no detour.
        let player = ActorState::new_player(Point::new(300, 100));
        let mut enemy = enemy_with_sides(Point::new(100, 100), &[Direction::Right]);

        determine_direction(&mut enemy, &player);
        assert_eq!(enemy.moving, Direction::None);
    }

    #[test]
    fn valid_heading_is_kept_even_while_colliding() {
        // Wants Right and only the left side is blocked: no reroute.
        let player = ActorState::new_player(Point::new(300, 100));
        let mut enemy = enemy_with_sides(Point::new(100, 100), &[Direction::Left]);

        determine_direction(&mut enemy, &player);
        assert_eq!(enemy.moving, Direction::Right);
    }
}
