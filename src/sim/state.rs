//! Game state and core simulation types
//!
//! All state that must be carried from one transition to the next lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Entity class tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Player,
    /// Road hazard; touching one is lethal
    Car,
    /// River support the player can stand on
    Plank,
    /// River support, the walkable part of a crocodile
    CrocBody,
    /// The snapping part of a crocodile; touching it is lethal
    CrocHead,
    /// Target zone on the top row
    Goal,
    /// Marker occupying a goal slot once it has been reached
    FilledGoal,
    /// Collectible bonus
    Fly,
}

/// An axis-aligned rectangular entity
///
/// Bodies are plain values; every change constructs a new body. The id is
/// stable for the life of the entity within a level and is what the render
/// sink uses to match visual elements across ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: String,
    pub kind: BodyKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity in field units per tick, before the level multiplier
    pub vel_x: f32,
    /// Tick the body was created on
    pub created_at: u64,
}

impl Body {
    pub fn new(
        id: impl Into<String>,
        kind: BodyKind,
        pos: Vec2,
        size: Vec2,
        vel_x: f32,
        created_at: u64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            pos,
            size,
            vel_x,
            created_at,
        }
    }

    /// The same body at a new position
    pub fn at(&self, pos: Vec2) -> Self {
        Self {
            pos,
            ..self.clone()
        }
    }

    /// The same body with a new horizontal velocity
    pub fn with_vel(&self, vel_x: f32) -> Self {
        Self {
            vel_x,
            ..self.clone()
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// RNG seed wrapper
///
/// The fly respawn draw derives a fresh generator from this seed and the tick
/// counter, so identical seeds replay identically and no generator state needs
/// to be threaded through transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator for the draw happening at the given tick
    pub fn at_tick(&self, tick: u64) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed ^ tick.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Tick counter, as reported by the most recent clock event
    pub tick: u64,
    /// RNG seed for the fly respawn draw
    pub rng: RngState,
    /// The player body
    pub player: Body,
    /// Road lanes, each with a fixed number of hazards for the whole level
    pub car_lanes: [Vec<Body>; 4],
    /// River lanes of walkable planks
    pub plank_lanes: [Vec<Body>; 3],
    /// Walkable crocodile bodies
    pub croc_bodies: Vec<Body>,
    /// Lethal crocodile heads, one per body, leading it
    pub croc_heads: Vec<Body>,
    /// Goal zones still open on the top row
    pub goals: Vec<Body>,
    /// Markers, parked off-field until their goal is reached
    pub filled: Vec<Body>,
    /// The collectible, parked off-field between respawns
    pub fly: Body,
    /// Id of the most recently reached goal zone
    pub last_goal: Option<String>,
    /// Goals reached this level
    pub reached_goals: u32,
    pub goal_score: u64,
    pub fly_score: u64,
    pub move_score: u64,
    /// Always the sum of the three accumulators above
    pub total_score: u64,
    /// Best total seen so far, survives session resets
    pub high_score: u64,
    /// Current level, starting at 1
    pub level: u32,
    /// Raised when every goal zone has been reached
    pub level_passed: bool,
    /// Lane speed scale for this level
    pub multiplier: f32,
    /// Raised when the run has ended; the outer loop reseeds on it
    pub game_over: bool,
    pub lives: u32,
}

impl GameState {
    /// Fresh session at level 1 with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            tick: 0,
            rng: RngState::new(seed),
            player: super::layout::player_at_start(0),
            car_lanes: Default::default(),
            plank_lanes: Default::default(),
            croc_bodies: Vec::new(),
            croc_heads: Vec::new(),
            goals: Vec::new(),
            filled: Vec::new(),
            fly: super::layout::parked_fly(0),
            last_goal: None,
            reached_goals: 0,
            goal_score: 0,
            fly_score: 0,
            move_score: 0,
            total_score: 0,
            high_score: 0,
            level: 1,
            level_passed: false,
            multiplier: BASE_MULTIPLIER,
            game_over: false,
            lives: START_LIVES,
        };
        super::layout::spawn_level(&mut state);
        state
    }

    /// Every support the player can stand on, planks first then crocodile
    /// bodies. Resolution takes the first match, so this order is load-bearing.
    pub fn supports(&self) -> impl Iterator<Item = &Body> {
        self.plank_lanes.iter().flatten().chain(self.croc_bodies.iter())
    }

    /// Every road hazard, lane by lane
    pub fn cars(&self) -> impl Iterator<Item = &Body> {
        self.car_lanes.iter().flatten()
    }
}
