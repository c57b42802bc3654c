//! Per-frame round controller
//!
//! One `tick` call advances the whole simulation by a single frame at
//! the fixed 60 Hz rate. Step order matters and mirrors the round
//! contract: input and gravity first, then scoring and hazard
//! interactions, then win/lose evaluation, then platform and ladder
//! resolution.

use serde::{Deserialize, Serialize};

use super::climb::resolve_climbing;
use super::collision::{jump_over_occluded, resolve_landing};
use super::state::{GameState, Outcome};
use crate::consts::{SCORE_BARREL_DESTROYED, SCORE_JUMP_OVER};

/// Input state for a single tick
///
/// Directions are held flags; `jump` is the edge-triggered "pressed
/// this tick" signal, not the held key state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
}

/// Final numbers handed to the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub won: bool,
    pub score: u32,
    /// Whole seconds that were left on the clock
    pub time_left: u32,
}

/// What the caller should do after this tick
///
/// Navigation is an explicit return value rather than shared mutable
/// "next page" state: the driver decides what a `RoundOver` means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    RoundOver(RoundResult),
}

/// Advance the round by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickResult {
    state.player.tick_climb_buffer();

    if state.outcome != Outcome::InProgress {
        return TickResult::RoundOver(RoundResult {
            won: state.outcome == Outcome::Won,
            score: state.score,
            time_left: state.time_left(),
        });
    }

    state.frame += 1;

    let screen_width = state.screen_width();
    state.player.apply_input(input, screen_width);
    state.player.apply_gravity_if_airborne();
    state.boss.body.apply_gravity();

    update_jump_over_score(state);
    update_barrels(state);
    resolve_hammer_pickup(state);
    evaluate_outcome(state);

    if !state.player.is_climbing_buffered()
        && resolve_landing(&mut state.player.body, &state.platforms)
    {
        state.player.set_grounded(true);
    }
    resolve_landing(&mut state.boss.body, &state.platforms);
    for barrel in &mut state.barrels {
        resolve_landing(&mut barrel.body, &state.platforms);
    }

    resolve_climbing(&mut state.player, input, &state.ladders, &state.platforms);

    TickResult::Continue
}

/// Award jump-over points and maintain the per-jump scored set
///
/// A barrel scores at most once per unbroken jump: horizontal spans
/// overlap, the player's bottom edge is strictly above the barrel's
/// top, and no platform occludes the gap. The set clears on the
/// airborne-to-grounded rising edge, checked every tick so a landing
/// always re-arms every barrel.
fn update_jump_over_score(state: &mut GameState) {
    if state.player.jumping {
        let player_rect = state.player.body.rect();
        for barrel in &state.barrels {
            if state.scored_this_jump.contains(&barrel.id) {
                continue;
            }

            let aligned = player_rect.right() >= barrel.body.left()
                && player_rect.left() <= barrel.body.right();
            let above = player_rect.bottom() < barrel.body.top();

            if aligned
                && above
                && !jump_over_occluded(&player_rect, barrel.body.top(), &state.platforms)
            {
                state.score += SCORE_JUMP_OVER;
                state.scored_this_jump.push(barrel.id);
            }
        }
    }

    let landed = state.player.grounded && !state.was_grounded;
    if landed {
        state.scored_this_jump.clear();
    }
    state.was_grounded = state.player.grounded;
}

/// Barrel physics plus player collision, with removal-safe traversal
fn update_barrels(state: &mut GameState) {
    let player_rect = state.player.body.rect();
    let has_hammer = state.player.has_hammer;

    let mut destroyed = 0u32;
    let mut fatal = false;
    state.barrels.retain_mut(|barrel| {
        barrel.body.apply_gravity();
        if player_rect.intersects(&barrel.body.rect()) {
            if has_hammer {
                destroyed += 1;
                return false;
            }
            fatal = true;
        }
        true
    });

    state.score += destroyed * SCORE_BARREL_DESTROYED;
    if fatal {
        state.outcome = Outcome::Lost;
    }
}

/// One-shot hammer pickup
fn resolve_hammer_pickup(state: &mut GameState) {
    if !state.hammer.collected
        && state
            .player
            .body
            .rect()
            .intersects(&state.hammer.body.rect())
    {
        state.hammer.collected = true;
        state.player.collect_hammer();
        log::debug!("hammer collected on frame {}", state.frame);
    }
}

/// Boss contact and frame budget; never overwrites a decided outcome
fn evaluate_outcome(state: &mut GameState) {
    if state.outcome == Outcome::InProgress
        && state
            .player
            .body
            .rect()
            .intersects(&state.boss.body.rect())
    {
        state.outcome = if state.player.has_hammer {
            Outcome::Won
        } else {
            Outcome::Lost
        };
    }

    if state.outcome == Outcome::InProgress && state.frame >= state.max_frames() {
        state.outcome = Outcome::Lost;
    }
}
