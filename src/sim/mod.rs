//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One event in, one state out; transitions never overlap
//! - Seeded RNG only
//! - Stable iteration order (lane by lane, slot by slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{overlapping, resolve};
pub use state::{Body, BodyKind, GameState, RngState};
pub use tick::{GameEvent, next, regenerate};
