//! Seek-and-stop motion for the ball
//!
//! Two states, encoded by `session.moving`: Idle and Seeking. A pointer
//! event starts a seek; the ball advances along a fixed direction with a
//! distance-based speed factor, snaps onto the target inside a one-pixel
//! tolerance, and is halted by any wall it touches.
//!
//! Updates are expressed per frame callback, not per elapsed time, so the
//! effective speed follows the host's frame cadence.

use glam::Vec2;

use super::state::GameSession;
use crate::consts::{SNAP_DISTANCE, STOP_RADIUS_FACTOR};

/// Idle -> Seeking transition
///
/// Aims the ball at `point` with speed `settings.ball_speed`. A missing
/// ball or a zero-length offset leaves the session untouched; returns
/// whether the transition happened.
pub fn begin_seek(session: &mut GameSession, point: Vec2) -> bool {
    let Some(ball) = session.ball.as_mut() else {
        return false;
    };

    let delta = point - ball.pos;
    let distance = delta.length();
    if distance == 0.0 {
        return false;
    }

    ball.vel = delta / distance * session.settings.ball_speed;
    session.target = point;
    session.moving = true;
    true
}

/// Per-frame seek update; no-op while Idle
///
/// The speed factor stretches with distance far from the target
/// (`d / 2·stop` beyond twice the stop radius), runs flat in between, and
/// eases across the stop band (`1 - d/stop` inside it). Within
/// `SNAP_DISTANCE` of the target the ball lands exactly and goes Idle.
pub fn seek_step(session: &mut GameSession) {
    if !session.moving {
        return;
    }
    let Some(ball) = session.ball.as_mut() else {
        return;
    };

    let distance = (session.target - ball.pos).length();
    let stop = ball.radius * STOP_RADIUS_FACTOR;

    let mut factor = 1.0;
    if distance > stop * 2.0 {
        factor = distance / (stop * 2.0);
    } else if distance <= stop {
        factor = 1.0 - distance / stop;
    }

    if distance < SNAP_DISTANCE {
        ball.pos = session.target;
        ball.vel = Vec2::ZERO;
        session.moving = false;
    } else {
        ball.pos += ball.vel * factor;
    }
}

/// Wall clamping, applied every frame regardless of state
///
/// A ball crossing an edge is pinned at it, loses that axis of velocity,
/// and goes Idle even mid-seek.
pub fn apply_bounds(session: &mut GameSession) {
    let (width, height) = (session.width, session.height);
    let Some(ball) = session.ball.as_mut() else {
        return;
    };

    if ball.pos.x + ball.radius >= width {
        ball.pos.x = width - ball.radius;
        ball.vel.x = 0.0;
        session.moving = false;
    }
    if ball.pos.x - ball.radius <= 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = 0.0;
        session.moving = false;
    }
    if ball.pos.y + ball.radius >= height {
        ball.pos.y = height - ball.radius;
        ball.vel.y = 0.0;
        session.moving = false;
    }
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = 0.0;
        session.moving = false;
    }
}
