//! Astro Sweeper - collect-the-asteroids canvas mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (field generation, motion, collisions)
//! - `render`: Canvas 2D rendering (wasm only)
//! - `app`: Browser session lifecycle - mount, input, frame loop, unmount (wasm only)
//! - `config`: Data-driven game balance, persisted to LocalStorage

pub mod config;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use config::Settings;
pub use sim::GameSession;

/// Game configuration constants
pub mod consts {
    /// One star per this many square pixels of viewport
    pub const STAR_DENSITY: f32 = 2000.0;
    /// Per-frame chance that a star re-rolls its color and alpha
    pub const BLINK_CHANCE: f64 = 0.01;
    /// Asteroids spawned per field
    pub const ASTEROID_COUNT: usize = 30;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const MOBILE_BALL_RADIUS: f32 = 15.0;
    /// Seek speed in pixels per frame callback
    pub const BALL_SPEED: f32 = 5.0;

    /// Viewports narrower than this get the mobile ball and HUD sizing
    pub const MOBILE_BREAKPOINT: f32 = 768.0;

    /// Distance to target below which the ball snaps and stops
    pub const SNAP_DISTANCE: f32 = 1.0;
    /// The ease band extends this many ball radii from the target
    pub const STOP_RADIUS_FACTOR: f32 = 3.0;

    /// Palette
    pub const STAR_WHITE: [u8; 3] = [255, 255, 255];
    pub const STAR_BLUE: [u8; 3] = [173, 216, 230];
    pub const ASTEROID_GRAY: [u8; 3] = [128, 128, 128];
}
