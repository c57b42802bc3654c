//! Level configuration
//!
//! Levels are flat `key = value` properties files. Window geometry, the
//! frame budget and the three actor spawn points are required and fail
//! the load when missing or malformed. The indexed `ladder.<n>` and
//! `barrel.<n>` groups are tolerant: any defect in a group degrades
//! that group to zero entities with a warning, so a bad level file
//! still produces a playable (if empty) round.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing required key `{0}`")]
    MissingKey(String),
    #[error("invalid value for `{key}`: {value:?}")]
    Invalid { key: String, value: String },
}

/// Everything needed to build the initial [`crate::sim::GameState`]
///
/// Coordinates are in screen space (+y down). Actor spawn points are
/// top-left corners; platform, ladder and barrel coordinates are
/// center points.
#[derive(Debug, Clone)]
pub struct LevelConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Frame budget for the round, at 60 frames per second
    pub max_frames: u32,
    pub player_start: Vec2,
    pub boss_start: Vec2,
    pub hammer_start: Vec2,
    pub platforms: Vec<Vec2>,
    pub ladders: Vec<Vec2>,
    pub barrels: Vec<Vec2>,
}

impl LevelConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        let props = parse_properties(text);

        Ok(Self {
            screen_width: required_u32(&props, "window.width")?,
            screen_height: required_u32(&props, "window.height")?,
            max_frames: required_u32(&props, "round.maxFrames")?,
            player_start: required_point(&props, "player.start")?,
            boss_start: required_point(&props, "boss.start")?,
            hammer_start: required_point(&props, "hammer.start")?,
            platforms: required_points(&props, "platforms")?,
            ladders: indexed_points(&props, "ladder"),
            barrels: indexed_points(&props, "barrel"),
        })
    }
}

/// Minimal properties syntax: `key = value` lines, `#` and `!` comments
fn parse_properties(text: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            props.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    props
}

fn required<'a>(props: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ConfigError> {
    props
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn required_u32(props: &HashMap<String, String>, key: &str) -> Result<u32, ConfigError> {
    let raw = required(props, key)?;
    raw.parse().map_err(|_| invalid(key, raw))
}

/// `x,y` pair
fn parse_point(raw: &str) -> Option<Vec2> {
    let (x, y) = raw.split_once(',')?;
    Some(Vec2::new(
        x.trim().parse().ok()?,
        y.trim().parse().ok()?,
    ))
}

fn required_point(props: &HashMap<String, String>, key: &str) -> Result<Vec2, ConfigError> {
    let raw = required(props, key)?;
    parse_point(raw).ok_or_else(|| invalid(key, raw))
}

/// Semicolon-separated list of `x,y` pairs
fn required_points(props: &HashMap<String, String>, key: &str) -> Result<Vec<Vec2>, ConfigError> {
    let raw = required(props, key)?;
    raw.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_point(part).ok_or_else(|| invalid(key, raw)))
        .collect()
}

/// `<group>.count` plus `<group>.1` .. `<group>.<count>`
///
/// An absent group means zero entities. Any defect inside a present
/// group (bad count, missing index, bad pair) also degrades to zero
/// entities, logged rather than fatal.
fn indexed_points(props: &HashMap<String, String>, group: &str) -> Vec<Vec2> {
    let count_key = format!("{group}.count");
    let Some(raw_count) = props.get(&count_key) else {
        return Vec::new();
    };

    let parsed = (|| {
        let count: usize = raw_count.parse().ok()?;
        let mut points = Vec::with_capacity(count);
        for i in 1..=count {
            points.push(parse_point(props.get(&format!("{group}.{i}"))?)?);
        }
        Some(points)
    })();

    parsed.unwrap_or_else(|| {
        log::warn!("malformed `{group}.*` entries in level file, starting with none");
        Vec::new()
    })
}
