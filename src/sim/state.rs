//! Session state and core simulation types
//!
//! The session is the single aggregate root: every per-frame step takes it
//! by `&mut` instead of mutating shared closure state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{asteroids, starfield};
use crate::config::Settings;

/// A background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Draw radius
    pub size: f32,
    /// Opacity in [0.5, 1)
    pub alpha: f32,
    pub color: [u8; 3],
}

/// One point of an asteroid's jagged outline, polar around its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePoint {
    pub angle: f32,
    pub radius: f32,
}

/// A collectible asteroid
///
/// `size` drives both the default circle rendering and collision. The
/// outline feeds the optional detailed render mode only and never affects
/// collision shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub size: f32,
    pub color: [u8; 3],
    pub outline: Vec<OutlinePoint>,
}

/// The player-controlled ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Constant for the lifetime of a session
    pub radius: f32,
    pub vel: Vec2,
}

/// Complete state of one mounted game view
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Current viewport size in CSS pixels
    pub width: f32,
    pub height: f32,
    pub stars: Vec<Star>,
    pub asteroids: Vec<Asteroid>,
    /// Absent only if a host tears the entity down; steps skip in that case
    pub ball: Option<Ball>,
    /// True while the ball is seeking its target
    pub moving: bool,
    /// Current seek destination
    pub target: Vec2,
    /// Cumulative asteroids collected; never decreases within a session
    pub collected: u32,
    pub settings: Settings,
}

impl GameSession {
    /// Create a session sized to the viewport, fields generated and the
    /// ball resting at the center.
    pub fn new(seed: u64, width: f32, height: f32, settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = starfield::create(&mut rng, width, height, &settings);
        let asteroids = asteroids::create(&mut rng, width, height, &settings);

        let center = Vec2::new(width / 2.0, height / 2.0);
        let ball = Ball {
            pos: center,
            radius: settings.ball_radius_for(width),
            vel: Vec2::ZERO,
        };

        Self {
            seed,
            rng,
            width,
            height,
            stars,
            asteroids,
            ball: Some(ball),
            moving: false,
            target: center,
            collected: 0,
            settings,
        }
    }

    /// Adopt new viewport dimensions: regenerate both fields and clamp the
    /// ball and target back into bounds. The score is preserved.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.stars = starfield::create(&mut self.rng, width, height, &self.settings);
        self.asteroids = asteroids::create(&mut self.rng, width, height, &self.settings);

        if let Some(ball) = self.ball.as_mut() {
            ball.pos.x = ball.pos.x.clamp(ball.radius, (width - ball.radius).max(ball.radius));
            ball.pos.y = ball.pos.y.clamp(ball.radius, (height - ball.radius).max(ball.radius));
        }
        self.target.x = self.target.x.clamp(0.0, width.max(0.0));
        self.target.y = self.target.y.clamp(0.0, height.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_places_ball_at_center() {
        let session = GameSession::new(1, 800.0, 600.0, Settings::default());
        let ball = session.ball.expect("ball initialized");
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(session.target, ball.pos);
        assert!(!session.moving);
        assert_eq!(session.collected, 0);
    }

    #[test]
    fn mobile_viewport_gets_smaller_ball() {
        let settings = Settings::default();
        let desktop = GameSession::new(1, 1024.0, 768.0, settings.clone());
        let mobile = GameSession::new(1, 400.0, 700.0, settings.clone());
        assert_eq!(desktop.ball.unwrap().radius, settings.ball_radius);
        assert_eq!(mobile.ball.unwrap().radius, settings.mobile_ball_radius);
    }

    #[test]
    fn same_seed_reproduces_fields() {
        let a = GameSession::new(99, 640.0, 480.0, Settings::default());
        let b = GameSession::new(99, 640.0, 480.0, Settings::default());
        assert_eq!(a.stars, b.stars);
        assert_eq!(a.asteroids, b.asteroids);
    }

    #[test]
    fn resize_regenerates_fields_within_new_bounds() {
        let mut session = GameSession::new(5, 1200.0, 900.0, Settings::default());
        session.collected = 7;
        session.resize(400.0, 300.0);

        assert_eq!(session.collected, 7);
        for star in &session.stars {
            assert!(star.pos.x >= 0.0 && star.pos.x < 400.0);
            assert!(star.pos.y >= 0.0 && star.pos.y < 300.0);
        }
        for asteroid in &session.asteroids {
            assert!(asteroid.pos.x >= 0.0 && asteroid.pos.x < 400.0);
            assert!(asteroid.pos.y >= 0.0 && asteroid.pos.y < 300.0);
        }
    }

    #[test]
    fn resize_reclamps_ball_and_target() {
        let mut session = GameSession::new(5, 1200.0, 900.0, Settings::default());
        if let Some(ball) = session.ball.as_mut() {
            ball.pos = Vec2::new(1100.0, 850.0);
        }
        session.target = Vec2::new(1190.0, 890.0);
        session.resize(500.0, 400.0);

        let ball = session.ball.unwrap();
        assert!(ball.pos.x >= ball.radius && ball.pos.x <= 500.0 - ball.radius);
        assert!(ball.pos.y >= ball.radius && ball.pos.y <= 400.0 - ball.radius);
        assert!(session.target.x <= 500.0 && session.target.y <= 400.0);
    }
}
