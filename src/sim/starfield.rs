//! Procedural star field
//!
//! Pure decoration: stars never interact with gameplay. The field is sized
//! to the viewport and regenerated wholesale on resize.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameSession, Star};
use super::uniform;
use crate::config::Settings;
use crate::consts::{STAR_BLUE, STAR_WHITE};

/// Generate a star field sized to the viewport
///
/// Produces `floor(width * height / star_density)` stars. Degenerate
/// viewports yield an empty field.
pub fn create(rng: &mut Pcg32, width: f32, height: f32, settings: &Settings) -> Vec<Star> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let count = (width * height / settings.star_density).floor() as usize;
    (0..count)
        .map(|_| Star {
            pos: glam::Vec2::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height)),
            size: uniform(rng, 1.0, 3.0),
            alpha: uniform(rng, 0.5, 1.0),
            color: STAR_WHITE,
        })
        .collect()
}

/// Per-frame twinkle pass
///
/// Each star independently blinks with `blink_chance`: a fair coin picks
/// white or light blue and the alpha is redrawn. No stars are added or
/// removed.
pub fn twinkle(session: &mut GameSession) {
    let GameSession {
        rng,
        stars,
        settings,
        ..
    } = session;

    for star in stars.iter_mut() {
        if rng.random::<f64>() < settings.blink_chance {
            star.color = if rng.random_bool(0.5) {
                STAR_BLUE
            } else {
                STAR_WHITE
            };
            star.alpha = uniform(rng, 0.5, 1.0);
        }
    }
}
