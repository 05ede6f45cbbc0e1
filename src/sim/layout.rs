//! Fixed starting layout for a fresh level
//!
//! Cardinalities set here hold for the whole level: lane entities are only
//! ever repositioned by wrap-around, never created or destroyed mid-level.

use glam::Vec2;

use super::state::{Body, BodyKind, GameState};
use crate::consts::*;

/// Height of every lane entity; lanes are one grid row tall
const LANE_HEIGHT: f32 = 50.0;
/// Crocodile body length
const CROC_BODY_LEN: f32 = 100.0;
/// Crocodile head length
const CROC_HEAD_LEN: f32 = 50.0;

struct LaneSpec {
    y: f32,
    count: usize,
    width: f32,
    vel: f32,
    offset: f32,
}

const CAR_LANES: [LaneSpec; 4] = [
    LaneSpec { y: 440.0, count: 3, width: 50.0, vel: -1.0, offset: 0.0 },
    LaneSpec { y: 390.0, count: 3, width: 50.0, vel: 1.5, offset: 60.0 },
    LaneSpec { y: 340.0, count: 2, width: 100.0, vel: -0.75, offset: 120.0 },
    LaneSpec { y: 290.0, count: 3, width: 50.0, vel: 1.25, offset: 30.0 },
];

const PLANK_LANES: [LaneSpec; 3] = [
    LaneSpec { y: 240.0, count: 3, width: 150.0, vel: 1.0, offset: 0.0 },
    LaneSpec { y: 190.0, count: 3, width: 100.0, vel: -1.5, offset: 70.0 },
    LaneSpec { y: 140.0, count: 3, width: 150.0, vel: 0.75, offset: 140.0 },
];

/// Crocodiles swim the row just below the goals, head first
const CROC_ROW_Y: f32 = 90.0;
const CROC_COUNT: usize = 2;
const CROC_VEL: f32 = 1.25;

fn lane_bodies(spec: &LaneSpec, kind: BodyKind, prefix: &str, lane: usize, now: u64) -> Vec<Body> {
    let spacing = FIELD_WIDTH / spec.count as f32;
    (0..spec.count)
        .map(|slot| {
            Body::new(
                format!("{prefix}-{lane}-{slot}"),
                kind,
                Vec2::new(spec.offset + slot as f32 * spacing, spec.y),
                Vec2::new(spec.width, LANE_HEIGHT),
                spec.vel,
                now,
            )
        })
        .collect()
}

pub(super) fn player_at_start(now: u64) -> Body {
    Body::new(
        "player",
        BodyKind::Player,
        Vec2::new(PLAYER_START_X, PLAYER_START_Y),
        Vec2::new(PLAYER_SIZE, PLAYER_SIZE),
        0.0,
        now,
    )
}

pub(super) fn parked_fly(now: u64) -> Body {
    Body::new(
        "fly",
        BodyKind::Fly,
        Vec2::new(PARK_X, PARK_Y),
        Vec2::new(PLAYER_SIZE, PLAYER_SIZE),
        0.0,
        now,
    )
}

/// Build the entity set for a fresh level in place
///
/// Scores, lives, level number and multiplier are left untouched; callers
/// decide what carries over.
pub fn spawn_level(state: &mut GameState) {
    let now = state.tick;

    state.player = player_at_start(now);
    state.fly = parked_fly(now);

    for (lane, spec) in CAR_LANES.iter().enumerate() {
        state.car_lanes[lane] = lane_bodies(spec, BodyKind::Car, "car", lane, now);
    }
    for (lane, spec) in PLANK_LANES.iter().enumerate() {
        state.plank_lanes[lane] = lane_bodies(spec, BodyKind::Plank, "plank", lane, now);
    }

    state.croc_bodies = (0..CROC_COUNT)
        .map(|i| {
            Body::new(
                format!("croc-body-{i}"),
                BodyKind::CrocBody,
                Vec2::new(40.0 + i as f32 * 300.0, CROC_ROW_Y),
                Vec2::new(CROC_BODY_LEN, LANE_HEIGHT),
                CROC_VEL,
                now,
            )
        })
        .collect();
    state.croc_heads = state
        .croc_bodies
        .iter()
        .enumerate()
        .map(|(i, body)| {
            Body::new(
                format!("croc-head-{i}"),
                BodyKind::CrocHead,
                Vec2::new(body.right(), CROC_ROW_Y),
                Vec2::new(CROC_HEAD_LEN, LANE_HEIGHT),
                CROC_VEL,
                now,
            )
        })
        .collect();

    state.goals = GOAL_XS
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            Body::new(
                format!("goal-{i}"),
                BodyKind::Goal,
                Vec2::new(x, GOAL_ROW_Y),
                Vec2::new(GOAL_SIZE, GOAL_SIZE),
                0.0,
                now,
            )
        })
        .collect();
    state.filled = GOAL_XS
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            Body::new(
                format!("fill-{i}"),
                BodyKind::FilledGoal,
                Vec2::new(x, PARK_Y),
                Vec2::new(GOAL_SIZE, GOAL_SIZE),
                0.0,
                now,
            )
        })
        .collect();

    log::info!(
        "level {} layout: {} cars, {} planks, {} crocs, {} goals (x{:.1} speed)",
        state.level,
        state.cars().count(),
        state.plank_lanes.iter().flatten().count(),
        state.croc_bodies.len(),
        state.goals.len(),
        state.multiplier,
    );
}
