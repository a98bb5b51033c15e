//! Turret Rush - a rotate-and-shoot survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, tick)
//! - `session`: Game session controller (lifecycle, input, score, ammo)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Persistent high-score store
//! - `display`: Terminal rendering adapter

pub mod display;
pub mod highscores;
pub mod session;
pub mod sim;
pub mod tuning;

pub use highscores::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use session::Session;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults - fixed turret near the bottom of the playfield
    pub const PLAYER_START_X: f32 = PLAYFIELD_WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = PLAYFIELD_HEIGHT - PLAYFIELD_HEIGHT / 8.0;
    pub const PLAYER_SIZE: f32 = 25.0;
    /// Starting heading: straight up
    pub const PLAYER_START_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;
    /// Rotation per tick while a rotate key is held (radians)
    pub const PLAYER_ROTATION_SPEED: f32 = 0.06;

    /// Bullet defaults (speed is a fixed per-tick displacement)
    pub const BULLET_SIZE: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 7.0;

    /// Enemy defaults (speed is a fixed per-tick displacement)
    pub const ENEMY_SIZE: f32 = 25.0;
    pub const ENEMY_BASE_SPEED: f32 = 1.2;
    pub const ENEMY_SPAWN_INTERVAL_MS: f32 = 2000.0;
    /// Side spawns stay this far above the hazard zone
    pub const EDGE_SPAWN_MARGIN: f32 = 10.0;

    /// Bomb defaults
    pub const BOMB_SIZE: f32 = 18.0;
    pub const BOMB_SPAWN_INTERVAL_MS: f32 = 9000.0;
    pub const BOMB_LIFETIME_MS: f32 = 5000.0;
    /// Age at which a bomb starts blinking
    pub const BOMB_BLINK_START_MS: f32 = 3500.0;
    /// Half-period of the blink (on 150ms, off 150ms)
    pub const BOMB_BLINK_PERIOD_MS: f32 = 150.0;
    /// Bomb spawn cluster around the playfield center
    pub const BOMB_SPREAD_X: f32 = 125.0;
    pub const BOMB_SPREAD_Y: f32 = 60.0;

    /// Ammo at session start (regenerates via salvage, see `sim::tick`)
    pub const START_AMMO: u32 = 5;
}

/// Unit vector for a heading angle
#[inline]
pub fn heading_vec(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of the line from `from` to `to` (radians)
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// True if a point lies inside the playfield rectangle [0,w] x [0,h]
#[inline]
pub fn in_playfield(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x >= 0.0 && pos.x <= width && pos.y >= 0.0 && pos.y <= height
}
