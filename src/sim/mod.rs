//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Stable iteration order (config/list order everywhere)
//! - No rendering or platform dependencies

pub mod climb;
pub mod collision;
pub mod entity;
pub mod geometry;
pub mod state;
pub mod tick;

pub use entity::{Barrel, Body, Boss, EntityKind, EntityView, Facing, Hammer, Ladder, Platform, Player};
pub use geometry::Rect;
pub use state::{GameState, Outcome};
pub use tick::{RoundResult, TickInput, TickResult, tick};
