//! Per-tick advancement of every moving body

use glam::Vec2;

use super::state::{Body, GameState};
use crate::{clamp_y, wrap_x};

/// Advance one body by its velocity scaled with the level multiplier
///
/// Horizontal motion wraps around the field; vertical motion only ever
/// corrects a body that strayed past the top or bottom row.
pub fn advance(body: &Body, multiplier: f32) -> Body {
    let x = wrap_x(body.pos.x + body.vel_x * multiplier);
    let y = clamp_y(body.pos.y);
    body.at(Vec2::new(x, y))
}

/// Advance every lane entity and the player by one tick
///
/// The player normally sits still here (zero velocity) and is carried only
/// while it holds a support's velocity from the previous resolution.
pub fn advance_all(mut state: GameState) -> GameState {
    let m = state.multiplier;
    for lane in state.car_lanes.iter_mut() {
        for car in lane.iter_mut() {
            *car = advance(car, m);
        }
    }
    for lane in state.plank_lanes.iter_mut() {
        for plank in lane.iter_mut() {
            *plank = advance(plank, m);
        }
    }
    for body in state.croc_bodies.iter_mut() {
        *body = advance(body, m);
    }
    for head in state.croc_heads.iter_mut() {
        *head = advance(head, m);
    }
    state.player = advance(&state.player, m);
    state
}
