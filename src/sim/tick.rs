//! Per-frame simulation step
//!
//! The frame driver interleaves these mutations with draw calls; `advance`
//! runs the same sequence without a renderer for the native binary and
//! tests. Mutation order per frame: star twinkle, collision resolution,
//! seek update, boundary clamp.

use super::state::GameSession;
use super::{collision, motion, starfield};

/// What one frame step produced
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameOutcome {
    /// Asteroids collected during this frame
    pub collected: u32,
}

/// Advance the session by one frame without rendering
pub fn advance(session: &mut GameSession) -> FrameOutcome {
    starfield::twinkle(session);
    let collected = collision::resolve(session);
    motion::seek_step(session);
    motion::apply_bounds(session);
    FrameOutcome { collected }
}
