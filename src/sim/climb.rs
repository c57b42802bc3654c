//! Ladder climbing state machine
//!
//! Resolved last in the tick, after platform collisions. While on a
//! ladder the player counts as grounded (suppressing gravity) and the
//! climb-exit buffer is re-armed every tick so landing checks stay
//! suppressed for a few frames after stepping off.

use super::collision::standing_on_platform;
use super::entity::{Ladder, Platform, Player};
use super::tick::TickInput;
use crate::consts::CLIMB_SPEED;

/// Advance the player's climbing state for one tick
pub fn resolve_climbing(
    player: &mut Player,
    input: &TickInput,
    ladders: &[Ladder],
    platforms: &[Platform],
) {
    // On a ladder: climb, descend, or hang in place.
    for ladder in ladders {
        if player.body.rect().intersects(&ladder.rect) {
            if input.up {
                player.body.pos.y -= CLIMB_SPEED;
                player.set_climbing(true);
                player.set_grounded(true);
            } else if input.down {
                if let Some(blocker) = descent_blocker(player, ladder, platforms) {
                    // A platform the ladder does not pass through stops
                    // the descent: step off onto it instead.
                    let top = blocker.top();
                    player.body.snap_bottom_to(top);
                    player.set_climbing(false);
                    player.set_grounded(true);
                } else {
                    player.body.pos.y += CLIMB_SPEED;
                    player.set_climbing(true);
                    player.set_grounded(true);
                }
            } else {
                player.set_climbing(true);
                player.set_grounded(true);
            }
            return;
        }
    }

    // Standing on a platform just above a ladder top: DOWN mounts it.
    if input.down {
        for ladder in ladders {
            if player.is_above_ladder(ladder) && on_platform_above_ladder(player, ladder, platforms)
            {
                player.set_climbing(true);
                player.body.pos.y += CLIMB_SPEED;
                player.set_grounded(true);
                return;
            }
        }
    }

    player.set_climbing(false);
    let standing = standing_on_platform(&player.body.rect(), platforms);
    player.set_grounded(standing);
}

/// Find a platform that blocks descending past it: the player would end
/// the move inside its depth and the ladder does not span its full
/// thickness (so it is not a legitimate descent target).
fn descent_blocker<'a>(
    player: &Player,
    ladder: &Ladder,
    platforms: &'a [Platform],
) -> Option<&'a Platform> {
    platforms.iter().find(|p| {
        let horizontal_overlap = player.body.rect().overlaps_horizontally(&p.rect);

        let within_depth = player.body.bottom() >= p.top()
            && player.body.top() + CLIMB_SPEED + player.body.size.y <= p.bottom();

        let ladder_covers_platform =
            ladder.rect.top() <= p.top() && ladder.rect.bottom() >= p.bottom();

        horizontal_overlap && within_depth && !ladder_covers_platform
    })
}

/// Whether the player stands (within ground tolerance) on a platform
/// that horizontally overlaps both the player and the ladder
fn on_platform_above_ladder(player: &Player, ladder: &Ladder, platforms: &[Platform]) -> bool {
    let rect = player.body.rect();
    platforms.iter().any(|p| {
        let close_to_top = (rect.bottom() - p.top()).abs() <= crate::consts::GROUND_TOLERANCE;
        close_to_top
            && rect.overlaps_horizontally(&p.rect)
            && rect.overlaps_horizontally(&ladder.rect)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{LADDER_SIZE, PLATFORM_SIZE, PLAYER_SIZE};
    use glam::Vec2;

    fn platform_with_top(x_center: f32, top: f32) -> Platform {
        Platform::new(Vec2::new(x_center, top + PLATFORM_SIZE.y / 2.0))
    }

    /// Ladder with its bottom resting on the given platform top
    fn ladder_above(x_center: f32, platform_top: f32) -> Ladder {
        let mut ladder = Ladder::new(Vec2::new(x_center, 0.0));
        ladder.rect.pos.y = platform_top - LADDER_SIZE.y;
        ladder
    }

    fn player_on_ladder(ladder: &Ladder) -> Player {
        let mut player = Player::new(Vec2::new(
            ladder.rect.center_x() - PLAYER_SIZE.x / 2.0,
            ladder.rect.top() + 10.0,
        ));
        player.set_grounded(true);
        player
    }

    #[test]
    fn test_climb_up_moves_by_climb_speed() {
        let platform = platform_with_top(100.0, 600.0);
        let ladder = ladder_above(100.0, 600.0);
        let mut player = player_on_ladder(&ladder);
        let start_y = player.body.pos.y;

        let input = TickInput {
            up: true,
            ..Default::default()
        };
        for n in 1..=5 {
            resolve_climbing(&mut player, &input, &[ladder], &[platform]);
            assert_eq!(player.body.pos.y, start_y - CLIMB_SPEED * n as f32);
            assert!(player.climbing);
            assert!(player.grounded);
        }
    }

    #[test]
    fn test_hanging_on_ladder_without_input() {
        let platform = platform_with_top(100.0, 600.0);
        let ladder = ladder_above(100.0, 600.0);
        let mut player = player_on_ladder(&ladder);
        let start_y = player.body.pos.y;

        resolve_climbing(&mut player, &TickInput::default(), &[ladder], &[platform]);
        assert_eq!(player.body.pos.y, start_y);
        assert!(player.climbing);
        assert!(player.grounded);
    }

    #[test]
    fn test_descent_blocked_by_uncovered_platform() {
        // Ladder bottom rests on the platform top, so the ladder does
        // NOT span the platform's depth: descending past it is blocked.
        let platform = platform_with_top(100.0, 600.0);
        let ladder = ladder_above(100.0, 600.0);

        // Player overlapping the ladder, bottom just past the platform top
        let mut player = Player::new(Vec2::new(
            ladder.rect.center_x() - PLAYER_SIZE.x / 2.0,
            600.0 - PLAYER_SIZE.y + 1.0,
        ));
        player.set_climbing(true);

        let input = TickInput {
            down: true,
            ..Default::default()
        };
        resolve_climbing(&mut player, &input, &[ladder], &[platform]);

        assert_eq!(player.body.bottom(), 600.0);
        assert!(!player.climbing);
        assert!(player.grounded);
    }

    #[test]
    fn test_descent_through_covered_platform() {
        // Ladder spanning well past the platform's depth: descending
        // through is legitimate.
        let platform = platform_with_top(100.0, 600.0);
        let mut ladder = Ladder::new(Vec2::new(100.0, 0.0));
        ladder.rect.pos.y = 600.0 - 20.0; // top above platform top
        ladder.rect.size.y = 200.0; // bottom far below platform bottom

        let mut player = Player::new(Vec2::new(
            ladder.rect.center_x() - PLAYER_SIZE.x / 2.0,
            600.0 - PLAYER_SIZE.y + 1.0,
        ));
        player.set_climbing(true);
        let start_y = player.body.pos.y;

        let input = TickInput {
            down: true,
            ..Default::default()
        };
        resolve_climbing(&mut player, &input, &[ladder], &[platform]);

        assert_eq!(player.body.pos.y, start_y + CLIMB_SPEED);
        assert!(player.climbing);
    }

    #[test]
    fn test_mount_ladder_from_platform_above() {
        // Ladder hangs below the platform the player stands on.
        let platform = platform_with_top(100.0, 600.0);
        let mut ladder = Ladder::new(Vec2::new(100.0, 0.0));
        ladder.rect.pos.y = 605.0; // top just below the platform top

        let mut player = Player::new(Vec2::new(
            100.0 - PLAYER_SIZE.x / 2.0,
            600.0 - PLAYER_SIZE.y,
        ));
        player.set_grounded(true);

        let input = TickInput {
            down: true,
            ..Default::default()
        };
        resolve_climbing(&mut player, &input, &[ladder], &[platform]);

        assert!(player.climbing);
        assert!(player.grounded);
        assert_eq!(player.body.bottom(), 600.0 + CLIMB_SPEED);
    }

    #[test]
    fn test_off_ladder_recomputes_grounded() {
        let platform = platform_with_top(100.0, 600.0);
        let mut player = Player::new(Vec2::new(100.0, 600.0 - PLAYER_SIZE.y));
        player.set_climbing(true);

        resolve_climbing(&mut player, &TickInput::default(), &[], &[platform]);
        assert!(!player.climbing);
        assert!(player.grounded);

        // Airborne player off any platform
        let mut player = Player::new(Vec2::new(100.0, 300.0));
        resolve_climbing(&mut player, &TickInput::default(), &[], &[platform]);
        assert!(!player.climbing);
        assert!(!player.grounded);
    }
}
