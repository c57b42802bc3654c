//! Girder Climb - a single-screen platform climbing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Properties-file level configuration
//!
//! The simulation runs one step per rendered frame at a fixed 60 Hz tick
//! with no sub-stepping. All gameplay constants live in [`consts`].

pub mod config;
pub mod sim;

pub use config::{ConfigError, LevelConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Gravity acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.2;
    /// Default terminal fall speed (units/tick)
    pub const TERMINAL_VELOCITY: f32 = 10.0;
    /// The boss falls slower than everything else
    pub const BOSS_TERMINAL_VELOCITY: f32 = 5.0;

    /// Player horizontal speed (units/tick)
    pub const MOVE_SPEED: f32 = 3.5;
    /// Initial vertical velocity of a jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -5.0;
    /// Ladder climb speed, both directions (units/tick)
    pub const CLIMB_SPEED: f32 = 2.0;

    /// A falling entity within this distance above a platform top may snap to it
    pub const PLATFORM_SNAP_TOLERANCE: f32 = 5.0;
    /// "Standing on" a platform means the bottom edge is within this of its top
    pub const GROUND_TOLERANCE: f32 = 2.0;
    /// Vertical window for mounting a ladder from the platform above it
    pub const LADDER_MOUNT_TOLERANCE: f32 = 10.0;
    /// Ticks after leaving a ladder during which landing checks are suppressed
    pub const CLIMB_EXIT_BUFFER_TICKS: u8 = 4;

    /// Points for clearing a barrel while airborne
    pub const SCORE_JUMP_OVER: u32 = 30;
    /// Points for destroying a barrel with the hammer
    pub const SCORE_BARREL_DESTROYED: u32 = 100;

    /// Sprite extents (width, height) - fixed, no asset loading in the core
    pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);
    pub const BOSS_SIZE: Vec2 = Vec2::new(80.0, 100.0);
    pub const BARREL_SIZE: Vec2 = Vec2::new(32.0, 26.0);
    pub const HAMMER_SIZE: Vec2 = Vec2::new(26.0, 26.0);
    pub const LADDER_SIZE: Vec2 = Vec2::new(30.0, 96.0);
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(160.0, 20.0);
}

/// Clamp an x coordinate so a sprite of the given width stays on screen
#[inline]
pub fn clamp_to_screen(x: f32, width: f32, screen_width: f32) -> f32 {
    x.clamp(0.0, screen_width - width)
}

/// Convert a sprite center to its top-left corner
#[inline]
pub fn center_to_top_left(center: Vec2, size: Vec2) -> Vec2 {
    center - size / 2.0
}
