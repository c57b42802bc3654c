//! Entity types and vertical kinematics
//!
//! One `Body` struct carries the shared physical state (position,
//! bounding box, gravity integration); each entity variant wraps a
//! `Body` and adds its own behavior instead of an inheritance chain.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::tick::TickInput;
use crate::clamp_to_screen;
use crate::consts::*;

/// Shared physical state for every movable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    /// Fixed sprite extents
    pub size: Vec2,
    /// Vertical velocity (units/tick, +y is down)
    pub vel_y: f32,
    /// Maximum fall speed
    pub terminal_velocity: f32,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel_y: 0.0,
            terminal_velocity: TERMINAL_VELOCITY,
        }
    }

    pub fn with_terminal_velocity(pos: Vec2, size: Vec2, terminal_velocity: f32) -> Self {
        Self {
            pos,
            size,
            vel_y: 0.0,
            terminal_velocity,
        }
    }

    /// Integrate gravity for one tick, clamped to terminal velocity
    pub fn apply_gravity(&mut self) {
        self.vel_y = (self.vel_y + GRAVITY).min(self.terminal_velocity);
        self.pos.y += self.vel_y;
    }

    /// Zero the vertical velocity
    pub fn stop_falling(&mut self) {
        self.vel_y = 0.0;
    }

    /// Move so the bottom edge sits exactly at `y`
    pub fn snap_bottom_to(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Horizontal facing, used only for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The controllable player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub facing: Facing,
    /// Resting on a platform (or treated as such while on a ladder)
    pub grounded: bool,
    /// In an unbroken jump; gates jump-over scoring
    pub jumping: bool,
    /// Ladder movement replaces gravity while set
    pub climbing: bool,
    /// Ticks remaining of landing-check suppression after leaving a ladder
    climb_exit_buffer: u8,
    pub has_hammer: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, PLAYER_SIZE),
            facing: Facing::default(),
            grounded: false,
            jumping: false,
            climbing: false,
            climb_exit_buffer: 0,
            has_hammer: false,
        }
    }

    /// Horizontal movement and jump start for one tick
    ///
    /// LEFT wins when both directions are held. A jump starts only from
    /// solid ground (grounded, not climbing) on the edge-triggered jump
    /// signal.
    pub fn apply_input(&mut self, input: &TickInput, screen_width: f32) {
        if input.left {
            self.body.pos.x -= MOVE_SPEED;
            self.facing = Facing::Left;
        } else if input.right {
            self.body.pos.x += MOVE_SPEED;
            self.facing = Facing::Right;
        }

        if self.grounded && !self.climbing && input.jump {
            self.body.vel_y = JUMP_VELOCITY;
            self.jumping = true;
            self.grounded = false;
        }

        self.body.pos.x = clamp_to_screen(self.body.pos.x, self.body.size.x, screen_width);
    }

    /// Gravity applies only while airborne and off ladders
    pub fn apply_gravity_if_airborne(&mut self) {
        if !self.grounded && !self.climbing {
            self.body.apply_gravity();
        }
    }

    /// Landing (or ladder support) ends the jump and zeroes velocity
    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
        if grounded {
            self.jumping = false;
            self.body.stop_falling();
        }
    }

    /// Entering climbing re-arms the exit buffer every tick on the ladder
    pub fn set_climbing(&mut self, climbing: bool) {
        self.climbing = climbing;
        if climbing {
            self.climb_exit_buffer = CLIMB_EXIT_BUFFER_TICKS;
        }
    }

    /// Climbing, or within the grace window after leaving a ladder.
    /// While buffered the platform landing resolver skips the player.
    pub fn is_climbing_buffered(&self) -> bool {
        self.climbing || self.climb_exit_buffer > 0
    }

    /// Decrement the exit buffer; called once at the start of every tick
    pub fn tick_climb_buffer(&mut self) {
        if self.climb_exit_buffer > 0 {
            self.climb_exit_buffer -= 1;
        }
    }

    pub fn collect_hammer(&mut self) {
        self.has_hammer = true;
    }

    /// Standing just above a ladder top: center-x within the ladder's
    /// span and bottom edge within the mount tolerance of its top.
    pub fn is_above_ladder(&self, ladder: &Ladder) -> bool {
        let rect = self.body.rect();
        let aligned = rect.center_x() >= ladder.rect.left() && rect.center_x() <= ladder.rect.right();
        let standing_above = (self.body.bottom() - ladder.rect.top()).abs() <= LADDER_MOUNT_TOLERANCE;
        aligned && standing_above
    }
}

/// A rolling barrel hazard, passive under gravity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barrel {
    pub id: u32,
    pub body: Body,
}

impl Barrel {
    /// Created centered at the configured coordinates
    pub fn new(id: u32, center: Vec2) -> Self {
        Self {
            id,
            body: Body::new(crate::center_to_top_left(center, BARREL_SIZE), BARREL_SIZE),
        }
    }
}

/// The goal character at the top of the structure
///
/// Stationary apart from gravity; reaching it with the hammer wins the
/// round, reaching it without loses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub body: Body,
}

impl Boss {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::with_terminal_velocity(pos, BOSS_SIZE, BOSS_TERMINAL_VELOCITY),
        }
    }
}

/// The one-shot hammer power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hammer {
    pub body: Body,
    /// Permanently uncollectable and undrawn once taken
    pub collected: bool,
}

impl Hammer {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, HAMMER_SIZE),
            collected: false,
        }
    }
}

/// Static platform geometry, centered at configured coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(center: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center, PLATFORM_SIZE),
        }
    }

    pub fn top(&self) -> f32 {
        self.rect.top()
    }

    pub fn bottom(&self) -> f32 {
        self.rect.bottom()
    }
}

/// Static ladder geometry
///
/// Snapped once at level load so the bottom rests on the first
/// overlapping platform's top, never moved again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ladder {
    pub rect: Rect,
}

impl Ladder {
    pub fn new(center: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center, LADDER_SIZE),
        }
    }

    pub fn overlaps_platform(&self, platform: &Platform) -> bool {
        self.rect.intersects(&platform.rect)
    }

    /// One-time load adjustment: bottom edge onto the platform top
    pub fn snap_above_platform(&mut self, platform: &Platform) {
        self.rect.pos.y = platform.top() - self.rect.size.y;
    }
}

/// Entity discriminant for the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Boss,
    Barrel,
    Hammer,
    Platform,
    Ladder,
}

/// Read-only view of one live entity, handed to the presentation layer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub rect: Rect,
    /// Set for the player only
    pub facing: Option<Facing>,
}
