//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (one `Pcg32` stream owned by the session)
//! - Per-frame-callback update semantics (no wall-clock reads)
//! - No rendering or platform dependencies

pub mod asteroids;
pub mod collision;
pub mod motion;
pub mod starfield;
pub mod state;
pub mod tick;

pub use state::{Asteroid, Ball, GameSession, OutlinePoint, Star};
pub use tick::{FrameOutcome, advance};

use rand::Rng;

/// Uniform float in the half-open range [min, max)
#[inline]
pub fn uniform(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    rng.random_range(min..max)
}
