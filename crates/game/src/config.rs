//! Game configuration. Loaded from config.ron at startup.

use engine_core::WorldBounds;
use procgen::TerrainConfig;
use renderer::Viewport;
use serde::{Deserialize, Serialize};

/// Tunable game settings. Loaded from `config.ron` in the current directory;
/// any missing field falls back to its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// View window width in pixels.
    pub view_width: i32,
    /// View window height in pixels (control panel sits below).
    pub view_height: i32,
    /// Control panel height in pixels.
    pub panel_height: i32,
    /// World width in pixels (X axis).
    pub world_width: i32,
    /// World length in pixels (Z axis).
    pub world_length: i32,
    /// Simulation updates per second.
    pub ticks_per_second: u32,
    /// World pixels per foot.
    pub pixels_per_foot: f32,
    /// Base acceleration of gravity (ft/s^2, negative = downward).
    pub gravity: f32,
    /// Base retro thruster acceleration (ft/s^2).
    pub retro_thrust: f32,
    /// Lateral thruster acceleration (ft/s per tick of burn).
    pub lateral_thrust: f32,
    /// Retro thruster fuel consumption per tick.
    pub retro_burn: f32,
    /// Lateral thruster fuel consumption per tick.
    pub lateral_burn: f32,
    /// Full tank of fuel.
    pub full_tank: f32,
    /// Maximum speed magnitude, vertical or lateral (ft/s).
    pub max_velocity: f32,
    /// Maximum descent rate that still counts as a landing (ft/s).
    pub safe_vertical_speed: f32,
    /// Maximum lateral speed that still counts as a landing (ft/s).
    pub safe_lateral_speed: f32,
    /// How far from the pad center a landing still scores, per axis (px).
    pub pad_tolerance: i32,
    /// Gravity/retro multiplier applied after each on-pad landing.
    pub difficulty_ratio: f32,
    /// Perspective focal distance.
    pub focal_length: f32,
    /// Terrain tile edge length in pixels.
    pub edge_length: i32,
    /// Maximum terrain ridge height in pixels.
    pub max_terrain_height: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            view_width: 400,
            view_height: 180,
            panel_height: 60,
            world_width: 20000,
            world_length: 20000,
            ticks_per_second: 4,
            pixels_per_foot: 6.0,
            gravity: -5.31,
            retro_thrust: 35.0,
            lateral_thrust: 5.0,
            retro_burn: 1.6,
            lateral_burn: 0.4,
            full_tank: 320.0,
            max_velocity: 640.0,
            safe_vertical_speed: 30.0,
            safe_lateral_speed: 30.0,
            pad_tolerance: 250,
            difficulty_ratio: 1.618034,
            focal_length: 200.0,
            edge_length: 1000,
            max_terrain_height: 2500,
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns the defaults.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }

    /// Total screen height: view window plus control panel.
    pub fn screen_height(&self) -> i32 {
        self.view_height + self.panel_height
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.view_width, self.view_height)
    }

    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::centered(self.world_width, self.world_length)
    }

    pub fn terrain_config(&self, seed: u64) -> TerrainConfig {
        TerrainConfig {
            world_width: self.world_width,
            world_length: self.world_length,
            edge_length: self.edge_length,
            max_height: self.max_terrain_height,
            seed,
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}
