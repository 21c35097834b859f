//! Game balance settings
//!
//! Persisted separately from any game state in LocalStorage. Defaults come
//! from `crate::consts`; a stored override only needs the keys it changes.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable balance and presentation knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// One star per this many square pixels
    pub star_density: f32,
    /// Per-frame blink probability per star
    pub blink_chance: f64,
    /// Asteroids per field
    pub asteroid_count: usize,
    /// Ball seek speed (pixels per frame callback)
    pub ball_speed: f32,
    /// Ball radius on desktop viewports
    pub ball_radius: f32,
    /// Ball radius under the mobile breakpoint
    pub mobile_ball_radius: f32,
    /// Viewport width below which mobile sizing applies
    pub mobile_breakpoint: f32,
    /// Draw asteroids with their jagged outlines instead of plain circles
    pub detailed_asteroids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            star_density: STAR_DENSITY,
            blink_chance: BLINK_CHANCE,
            asteroid_count: ASTEROID_COUNT,
            ball_speed: BALL_SPEED,
            ball_radius: BALL_RADIUS,
            mobile_ball_radius: MOBILE_BALL_RADIUS,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            detailed_asteroids: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "astro_sweeper_settings";

    /// Ball radius for a given viewport width
    pub fn ball_radius_for(&self, viewport_width: f32) -> f32 {
        if viewport_width < self.mobile_breakpoint {
            self.mobile_ball_radius
        } else {
            self.ball_radius
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.asteroid_count, 30);
        assert_eq!(settings.star_density, 2000.0);
        assert!(!settings.detailed_asteroids);
    }

    #[test]
    fn ball_radius_respects_breakpoint() {
        let settings = Settings::default();
        assert_eq!(settings.ball_radius_for(1024.0), settings.ball_radius);
        assert_eq!(settings.ball_radius_for(400.0), settings.mobile_ball_radius);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"asteroid_count": 12}"#).unwrap();
        assert_eq!(settings.asteroid_count, 12);
        assert_eq!(settings.ball_speed, BALL_SPEED);
    }
}
