//! Game state and round bookkeeping
//!
//! The round controller owns every entity plus score, frame counter and
//! outcome. All mutation happens inside [`super::tick::tick`]; nothing
//! here is shared across threads.

use serde::{Deserialize, Serialize};

use super::entity::{
    Barrel, Boss, EntityKind, EntityView, Hammer, Ladder, Platform, Player,
};
use crate::config::LevelConfig;
use crate::consts::TICKS_PER_SECOND;

/// Round outcome; terminal once Won or Lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Complete round state (deterministic given identical input sequences)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub boss: Boss,
    pub hammer: Hammer,
    pub barrels: Vec<Barrel>,
    pub platforms: Vec<Platform>,
    pub ladders: Vec<Ladder>,

    /// Monotonically non-decreasing score accumulator
    pub score: u32,
    /// Simulation frame counter
    pub frame: u32,
    pub outcome: Outcome,

    /// Barrel ids already scored during the current unbroken jump
    pub(super) scored_this_jump: Vec<u32>,
    /// Previous tick's grounded flag, for the airborne-to-grounded edge
    pub(super) was_grounded: bool,

    pub(super) screen_width: f32,
    pub(super) max_frames: u32,
}

impl GameState {
    /// Build the level from configuration.
    ///
    /// Ladders and barrels are snapped once onto the first platform
    /// whose bounding box they overlap (list order), then never moved
    /// again except by their own physics.
    pub fn new(config: &LevelConfig) -> Self {
        let platforms: Vec<Platform> = config.platforms.iter().map(|&c| Platform::new(c)).collect();

        let mut ladders = Vec::with_capacity(config.ladders.len());
        for &center in &config.ladders {
            let mut ladder = Ladder::new(center);
            if let Some(platform) = platforms.iter().find(|p| ladder.overlaps_platform(p)) {
                ladder.snap_above_platform(platform);
            }
            ladders.push(ladder);
        }

        let mut barrels = Vec::with_capacity(config.barrels.len());
        for (i, &center) in config.barrels.iter().enumerate() {
            let mut barrel = Barrel::new(i as u32 + 1, center);
            if let Some(platform) = platforms
                .iter()
                .find(|p| barrel.body.rect().intersects(&p.rect))
            {
                barrel.body.snap_bottom_to(platform.top());
            }
            barrels.push(barrel);
        }

        log::debug!(
            "level loaded: {} platforms, {} ladders, {} barrels",
            platforms.len(),
            ladders.len(),
            barrels.len()
        );

        Self {
            player: Player::new(config.player_start),
            boss: Boss::new(config.boss_start),
            hammer: Hammer::new(config.hammer_start),
            barrels,
            platforms,
            ladders,
            score: 0,
            frame: 0,
            outcome: Outcome::InProgress,
            scored_this_jump: Vec::new(),
            was_grounded: true,
            screen_width: config.screen_width as f32,
            max_frames: config.max_frames,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whole seconds remaining before the frame budget runs out
    pub fn time_left(&self) -> u32 {
        self.max_frames.saturating_sub(self.frame) / TICKS_PER_SECOND
    }

    pub(super) fn screen_width(&self) -> f32 {
        self.screen_width
    }

    pub(super) fn max_frames(&self) -> u32 {
        self.max_frames
    }

    /// Read-only snapshot of every live entity for the presentation
    /// layer, in draw order (static geometry first).
    pub fn entities(&self) -> Vec<EntityView> {
        let mut views = Vec::with_capacity(
            self.platforms.len() + self.ladders.len() + self.barrels.len() + 3,
        );

        for platform in &self.platforms {
            views.push(EntityView {
                kind: EntityKind::Platform,
                rect: platform.rect,
                facing: None,
            });
        }
        for ladder in &self.ladders {
            views.push(EntityView {
                kind: EntityKind::Ladder,
                rect: ladder.rect,
                facing: None,
            });
        }
        views.push(EntityView {
            kind: EntityKind::Boss,
            rect: self.boss.body.rect(),
            facing: None,
        });
        views.push(EntityView {
            kind: EntityKind::Player,
            rect: self.player.body.rect(),
            facing: Some(self.player.facing),
        });
        if !self.hammer.collected {
            views.push(EntityView {
                kind: EntityKind::Hammer,
                rect: self.hammer.body.rect(),
                facing: None,
            });
        }
        for barrel in &self.barrels {
            views.push(EntityView {
                kind: EntityKind::Barrel,
                rect: barrel.body.rect(),
                facing: None,
            });
        }

        views
    }
}
