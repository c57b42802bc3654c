//! Headless round driver
//!
//! Loads a level, runs the simulation at the fixed tick rate with no
//! player input until the round resolves, and prints the result as
//! JSON. Useful for smoke-testing level files; a presentation layer
//! would drive [`girder_climb::sim::tick`] the same way with real
//! input.

use std::process::ExitCode;

use girder_climb::LevelConfig;
use girder_climb::sim::{GameState, TickInput, TickResult, tick};

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "res/level.properties".to_string());

    let config = match LevelConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("cannot load level `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut state = GameState::new(&config);
    log::info!(
        "running `{path}` for up to {} frames",
        config.max_frames
    );

    let input = TickInput::default();
    loop {
        if let TickResult::RoundOver(result) = tick(&mut state, &input) {
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    log::error!("cannot serialize round result: {err}");
                    return ExitCode::FAILURE;
                }
            }
            return ExitCode::SUCCESS;
        }
    }
}
