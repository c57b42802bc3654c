//! Platform collision resolution
//!
//! Landing is projective: a falling entity lands this tick if its
//! next-frame bottom edge would reach or pass a platform top it is
//! currently above (within a small snap tolerance). The first platform
//! in list order wins; multiple simultaneous candidates should not
//! occur at valid level geometry, but the tie-break must stay
//! deterministic for reproducibility.

use super::entity::{Body, Platform};
use super::geometry::Rect;
use crate::consts::{GROUND_TOLERANCE, PLATFORM_SNAP_TOLERANCE};

/// Whether `body` is falling onto `platform` this tick
fn is_falling_onto(body: &Body, platform: &Platform) -> bool {
    let horizontal_overlap = body.rect().overlaps_horizontally(&platform.rect);

    let current_bottom = body.bottom();
    let future_bottom = body.pos.y + body.vel_y + body.size.y;

    horizontal_overlap
        && current_bottom <= platform.top() + PLATFORM_SNAP_TOLERANCE
        && future_bottom >= platform.top()
        && body.vel_y > 0.0
}

/// Land the entity on the first matching platform, if any
///
/// On a hit the bottom edge is snapped exactly to the platform top and
/// vertical velocity is zeroed. Returns whether a landing occurred so
/// the caller can set player-specific state (grounded).
///
/// Must not be called for the player while its climb-exit buffer is
/// active; the one-frame geometry mismatch when leaving a ladder would
/// otherwise read as a landing.
pub fn resolve_landing(body: &mut Body, platforms: &[Platform]) -> bool {
    for platform in platforms {
        if is_falling_onto(body, platform) {
            body.snap_bottom_to(platform.top());
            body.stop_falling();
            return true;
        }
    }
    false
}

/// Whether a rect is resting on any platform: horizontal overlap with
/// the top edge within the ground tolerance of the rect's bottom.
pub fn standing_on_platform(rect: &Rect, platforms: &[Platform]) -> bool {
    platforms.iter().any(|p| {
        rect.overlaps_horizontally(&p.rect) && (rect.bottom() - p.top()).abs() <= GROUND_TOLERANCE
    })
}

/// Whether a platform occludes the vertical gap between the player's
/// bottom edge and a barrel's top edge, disqualifying a jump-over score
pub fn jump_over_occluded(player: &Rect, barrel_top: f32, platforms: &[Platform]) -> bool {
    platforms.iter().any(|p| {
        p.rect.overlaps_horizontally(player) && p.top() < barrel_top && p.top() > player.bottom()
    })
}
