//! Collision resolution between the ball and the asteroid field
//!
//! Overlap is circle-vs-circle on asteroid `size`; the jagged outline is
//! presentation only. Everything overlapping in a frame is collected in the
//! same pass, so resolution has no ordering dependency.

use super::state::GameSession;

/// Collect every asteroid overlapping the ball
///
/// An asteroid is collected iff the center distance is strictly less than
/// `ball.radius + asteroid.size`. Survivors keep their relative order. The
/// per-frame increment is returned and folded into `session.collected`,
/// which never decreases. Without a ball the field is left untouched.
pub fn resolve(session: &mut GameSession) -> u32 {
    let Some(ball) = session.ball.as_ref() else {
        return 0;
    };
    let (pos, radius) = (ball.pos, ball.radius);

    let before = session.asteroids.len();
    session
        .asteroids
        .retain(|asteroid| pos.distance(asteroid.pos) >= radius + asteroid.size);

    let collected = (before - session.asteroids.len()) as u32;
    session.collected += collected;
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::sim::state::{Asteroid, Ball};
    use glam::Vec2;

    fn asteroid(x: f32, y: f32, size: f32) -> Asteroid {
        Asteroid {
            pos: Vec2::new(x, y),
            size,
            color: crate::consts::ASTEROID_GRAY,
            outline: Vec::new(),
        }
    }

    fn bare_session(ball: Option<Ball>, asteroids: Vec<Asteroid>) -> GameSession {
        let mut session = GameSession::new(0, 800.0, 600.0, Settings::default());
        session.ball = ball;
        session.asteroids = asteroids;
        session
    }

    fn ball_at_origin() -> Ball {
        Ball {
            pos: Vec2::ZERO,
            radius: 10.0,
            vel: Vec2::ZERO,
        }
    }

    #[test]
    fn overlapping_asteroid_is_collected() {
        // distance 5 < 10 + 4
        let mut s = bare_session(Some(ball_at_origin()), vec![asteroid(5.0, 0.0, 4.0)]);
        assert_eq!(resolve(&mut s), 1);
        assert!(s.asteroids.is_empty());
        assert_eq!(s.collected, 1);
    }

    #[test]
    fn distant_asteroid_survives() {
        // distance 20 >= 10 + 4
        let mut s = bare_session(Some(ball_at_origin()), vec![asteroid(20.0, 0.0, 4.0)]);
        assert_eq!(resolve(&mut s), 0);
        assert_eq!(s.asteroids.len(), 1);
        assert_eq!(s.collected, 0);
    }

    #[test]
    fn touching_exactly_is_not_a_collection() {
        // distance 14 == 10 + 4, comparison is strict
        let mut s = bare_session(Some(ball_at_origin()), vec![asteroid(14.0, 0.0, 4.0)]);
        assert_eq!(resolve(&mut s), 0);
        assert_eq!(s.asteroids.len(), 1);
    }

    #[test]
    fn all_overlaps_collect_in_one_frame() {
        let mut s = bare_session(
            Some(ball_at_origin()),
            vec![
                asteroid(5.0, 0.0, 4.0),
                asteroid(0.0, 6.0, 4.0),
                asteroid(50.0, 0.0, 4.0),
                asteroid(-3.0, -3.0, 4.0),
            ],
        );
        assert_eq!(resolve(&mut s), 3);
        assert_eq!(s.asteroids.len(), 1);
        assert_eq!(s.asteroids[0].pos, Vec2::new(50.0, 0.0));
        assert_eq!(s.collected, 3);
    }

    #[test]
    fn collected_accumulates_across_frames() {
        let mut s = bare_session(
            Some(ball_at_origin()),
            vec![asteroid(5.0, 0.0, 4.0), asteroid(100.0, 0.0, 4.0)],
        );
        assert_eq!(resolve(&mut s), 1);
        assert_eq!(s.collected, 1);

        // Move onto the second asteroid
        s.ball.as_mut().unwrap().pos = Vec2::new(100.0, 0.0);
        assert_eq!(resolve(&mut s), 1);
        assert_eq!(s.collected, 2);

        // Nothing left; the count stays put
        assert_eq!(resolve(&mut s), 0);
        assert_eq!(s.collected, 2);
    }

    #[test]
    fn missing_ball_skips_resolution() {
        let mut s = bare_session(None, vec![asteroid(0.0, 0.0, 4.0)]);
        assert_eq!(resolve(&mut s), 0);
        assert_eq!(s.asteroids.len(), 1);
        assert_eq!(s.collected, 0);
    }
}
