//! Procedural asteroid field
//!
//! A fixed count of collectible asteroids scattered over the viewport. Each
//! carries a jagged polar outline for the detailed render mode; collision
//! always uses the plain `size` circle.

use std::f32::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Asteroid, OutlinePoint};
use super::uniform;
use crate::config::Settings;
use crate::consts::ASTEROID_GRAY;

/// Generate an asteroid field sized to the viewport
///
/// Degenerate viewports yield an empty field.
pub fn create(rng: &mut Pcg32, width: f32, height: f32, settings: &Settings) -> Vec<Asteroid> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    (0..settings.asteroid_count)
        .map(|_| {
            let size = uniform(rng, 10.0, 20.0);
            let vertex_count = uniform(rng, 5.0, 9.0).floor() as usize;
            let outline = (0..vertex_count)
                .map(|j| OutlinePoint {
                    angle: j as f32 / vertex_count as f32 * TAU,
                    radius: size * (0.7 + rng.random::<f32>() * 0.3),
                })
                .collect();

            Asteroid {
                pos: glam::Vec2::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height)),
                size,
                color: ASTEROID_GRAY,
                outline,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn field_has_configured_count() {
        let mut rng = Pcg32::seed_from_u64(1);
        let field = create(&mut rng, 800.0, 600.0, &Settings::default());
        assert_eq!(field.len(), 30);

        let field = create(
            &mut rng,
            800.0,
            600.0,
            &Settings {
                asteroid_count: 5,
                ..Settings::default()
            },
        );
        assert_eq!(field.len(), 5);
    }

    #[test]
    fn asteroids_spawn_within_viewport_with_valid_sizes() {
        let mut rng = Pcg32::seed_from_u64(2);
        for asteroid in create(&mut rng, 800.0, 600.0, &Settings::default()) {
            assert!(asteroid.pos.x >= 0.0 && asteroid.pos.x < 800.0);
            assert!(asteroid.pos.y >= 0.0 && asteroid.pos.y < 600.0);
            assert!(asteroid.size >= 10.0 && asteroid.size < 20.0);
            assert_eq!(asteroid.color, ASTEROID_GRAY);
        }
    }

    #[test]
    fn outlines_have_5_to_8_points_hugging_the_size() {
        let mut rng = Pcg32::seed_from_u64(3);
        for asteroid in create(&mut rng, 800.0, 600.0, &Settings::default()) {
            let n = asteroid.outline.len();
            assert!((5..=8).contains(&n), "vertex count {n}");
            for (j, point) in asteroid.outline.iter().enumerate() {
                let expected_angle = j as f32 / n as f32 * TAU;
                assert!((point.angle - expected_angle).abs() < 1e-5);
                assert!(point.radius >= asteroid.size * 0.7);
                assert!(point.radius <= asteroid.size);
            }
        }
    }

    #[test]
    fn degenerate_viewport_yields_no_asteroids() {
        let mut rng = Pcg32::seed_from_u64(4);
        assert!(create(&mut rng, 0.0, 600.0, &Settings::default()).is_empty());
        assert!(create(&mut rng, 800.0, -1.0, &Settings::default()).is_empty());
    }
}
