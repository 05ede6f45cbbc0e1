//! Hopcross - a road-and-river crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `driver`: Outer session loop and the event-source/render-sink seams
//! - `highscores`: Session leaderboard
//! - `config`: Driver configuration

pub mod config;
pub mod driver;
pub mod highscores;
pub mod sim;

pub use config::Config;
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Movement grid; one hop covers exactly one row or column
    pub const GRID_STEP: f32 = 50.0;

    /// Player spawn (top-left corner) and body size
    pub const PLAYER_START_X: f32 = 280.0;
    pub const PLAYER_START_Y: f32 = 540.0;
    pub const PLAYER_SIZE: f32 = 40.0;

    /// River band; standing water without a support underneath is lethal
    pub const RIVER_TOP: f32 = 50.0;
    pub const RIVER_BOTTOM: f32 = 250.0;

    /// Goal row and the five goal columns along it
    pub const GOAL_ROW_Y: f32 = 40.0;
    pub const GOAL_XS: [f32; 5] = [30.0, 155.0, 280.0, 405.0, 530.0];
    pub const GOAL_SIZE: f32 = 50.0;

    /// Off-field parking spot for retired zones, unfilled markers and the fly
    pub const PARK_X: f32 = -100.0;
    pub const PARK_Y: f32 = -100.0;

    /// Scoring
    pub const GOAL_BONUS: u64 = 100;
    pub const FLY_BONUS: u64 = 200;
    pub const STEP_BONUS: u64 = 10;
    /// Forward hops only score once the player is deeper into the field than this
    pub const STEP_SCORE_MIN_Y: f32 = 100.0;

    /// Session bookkeeping
    pub const START_LIVES: u32 = 3;
    pub const BASE_MULTIPLIER: f32 = 0.5;
    pub const MULTIPLIER_STEP: f32 = 0.1;

    /// The fly relocates to a random goal column every this many ticks
    pub const FLY_RESPAWN_PERIOD: u64 = 500;

    /// Driver tick cadence in milliseconds
    pub const TICK_PERIOD_MS: u64 = 10;
}

/// Wrap a horizontal coordinate around the field edges, making the field a
/// horizontal cylinder. Coordinates already inside the field pass through.
#[inline]
pub fn wrap_x(x: f32) -> f32 {
    use consts::FIELD_WIDTH;
    if x <= 0.0 {
        x + FIELD_WIDTH
    } else if x >= FIELD_WIDTH {
        x - FIELD_WIDTH
    } else {
        x
    }
}

/// Push a vertical coordinate one row back inside the field instead of
/// letting it exit. Lane entities never reach the bounds, so in practice this
/// only ever acts on the player.
#[inline]
pub fn clamp_y(y: f32) -> f32 {
    use consts::{FIELD_HEIGHT, GRID_STEP};
    if y <= 0.0 {
        y + GRID_STEP
    } else if y >= FIELD_HEIGHT {
        y - GRID_STEP
    } else {
        y
    }
}
