//! Event dispatch for the simulation
//!
//! `next` turns one input event into exactly one successor state. The outer
//! loop owns repetition; nothing in here loops or performs I/O.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::*;

/// Input events, the closed set the reducer dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Periodic clock advance carrying the total elapsed tick count
    Tick { elapsed: u64 },
    /// Direct player displacement; `scoring` marks the forward direction
    Move { dx: f32, dy: f32, scoring: bool },
    /// Raise the game-over flag so the outer loop reseeds the session
    Restart,
}

/// Advance the game by exactly one event
pub fn next(state: GameState, event: &GameEvent) -> GameState {
    match *event {
        GameEvent::Tick { elapsed } => {
            let mut state = super::motion::advance_all(state);
            if elapsed > 0 && elapsed.is_multiple_of(FLY_RESPAWN_PERIOD) {
                let column = state.rng.at_tick(elapsed).random_range(0..GOAL_XS.len());
                state.fly = state.fly.at(Vec2::new(GOAL_XS[column] + 5.0, GOAL_ROW_Y));
                log::debug!("fly respawned over goal column {column}");
            }
            state.tick = elapsed;
            super::collision::resolve(state)
        }
        GameEvent::Move { dx, dy, scoring } => {
            // Moves land immediately and unchecked; the next tick settles
            // any collision they caused.
            let mut state = state;
            let from_y = state.player.pos.y;
            let pos = state.player.pos + Vec2::new(dx, dy);
            state.player = state.player.at(pos);
            if scoring && from_y > STEP_SCORE_MIN_Y {
                state.move_score += STEP_BONUS;
                state.total_score = state.goal_score + state.fly_score + state.move_score;
                state.high_score = state.high_score.max(state.total_score);
            }
            state
        }
        GameEvent::Restart => GameState {
            game_over: true,
            ..state
        },
    }
}

/// Rebuild the state once a terminal flag is up
///
/// Called by the outer loop, never by `next`. A passed level carries scores,
/// lives and the raised speed into a fresh layout; a finished run starts the
/// session over and keeps only the high score. Non-terminal states pass
/// through untouched.
pub fn regenerate(state: GameState) -> GameState {
    if state.game_over {
        log::info!(
            "session reset: final score {}, high score {}",
            state.total_score,
            state.high_score
        );
        let mut fresh = GameState::new(state.rng.seed);
        fresh.high_score = state.high_score;
        fresh
    } else if state.level_passed {
        let mut next = GameState {
            tick: 0,
            level: state.level + 1,
            multiplier: state.multiplier + MULTIPLIER_STEP,
            reached_goals: 0,
            last_goal: None,
            level_passed: false,
            ..state
        };
        super::layout::spawn_level(&mut next);
        log::info!("entering level {} at x{:.1} speed", next.level, next.multiplier);
        next
    } else {
        state
    }
}
