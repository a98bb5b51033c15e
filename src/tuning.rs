//! Data-driven game balance
//!
//! Every gameplay knob lives here so a balance pass is a JSON edit,
//! not a recompile. Defaults mirror `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle (playfield coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Full-width band covering the bottom quarter of the playfield
    pub fn bottom_quarter(playfield_w: f32, playfield_h: f32) -> Self {
        Self::new(
            0.0,
            playfield_h - playfield_h / 4.0,
            playfield_w,
            playfield_h / 4.0,
        )
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield dimensions (logical units)
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Marked no-spawn band along the bottom of the playfield.
    /// Declared configuration: reserved for future collision rules,
    /// currently it only shapes enemy spawn positions and rendering.
    pub hazard_zone: Rect,

    /// Player rotation per tick (radians)
    pub player_rotation_speed: f32,
    /// Bullet displacement per tick
    pub bullet_speed: f32,
    /// Enemy displacement per tick at session start
    pub enemy_base_speed: f32,

    /// Milliseconds between enemy spawns
    pub enemy_spawn_interval_ms: f32,
    /// Milliseconds between bomb spawns
    pub bomb_spawn_interval_ms: f32,
    /// Bomb lifetime before it fizzles out
    pub bomb_lifetime_ms: f32,

    /// Ammo at session start
    pub start_ammo: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            hazard_zone: Rect::bottom_quarter(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            player_rotation_speed: PLAYER_ROTATION_SPEED,
            bullet_speed: BULLET_SPEED,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            bomb_spawn_interval_ms: BOMB_SPAWN_INTERVAL_MS,
            bomb_lifetime_ms: BOMB_LIFETIME_MS,
            start_ammo: START_AMMO,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write tuning as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_zone_is_bottom_quarter() {
        let t = Tuning::default();
        assert_eq!(t.hazard_zone.y, 450.0);
        assert_eq!(t.hazard_zone.height, 150.0);
        assert_eq!(t.hazard_zone.width, 800.0);
        assert!(t.hazard_zone.contains(400.0, 500.0));
        assert!(!t.hazard_zone.contains(400.0, 449.0));
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let t = Tuning::load(Path::new("/nonexistent/tuning.json"));
        assert_eq!(t, Tuning::default());
    }
}
