//! Game state and core simulation types
//!
//! Plain data records for every entity plus the session-wide `GameState`.
//! No behavior beyond small derived accessors; all mutation happens in
//! `tick` and `Spawner`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading_vec;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    Running,
    /// Session ended (player hit, or a bullet touched a bomb)
    Over,
}

/// The player's turret. One per session, never destroyed while running.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Collision size basis; effective radius is `size / 2`
    pub size: f32,
    /// Heading angle (radians, unclamped - wraps naturally through trig)
    pub angle: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: PLAYER_SIZE,
            angle: PLAYER_START_ANGLE,
        }
    }
}

impl Player {
    /// Radius used for enemy contact tests
    pub fn hit_radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// A fired projectile. Direction is fixed at fire time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Unit direction vector (player heading when fired)
    pub dir: Vec2,
    /// Displacement per tick
    pub speed: f32,
    pub size: f32,
}

impl Bullet {
    /// Spawn a bullet at the player's position along its heading
    pub fn fired_from(player: &Player, speed: f32) -> Self {
        Self {
            pos: player.pos,
            dir: heading_vec(player.angle),
            speed,
            size: BULLET_SIZE,
        }
    }

    /// Radius used for collision tests. Full size, not half:
    /// bullets punch above their visual weight.
    pub fn hit_radius(&self) -> f32 {
        self.size
    }
}

/// An inbound pursuer. Spawned at a playfield edge, steers toward the
/// player fresh every tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Collision size basis; effective radius is `size / 2`
    pub size: f32,
    /// Displacement per tick, copied from the session difficulty at spawn
    pub speed: f32,
}

impl Enemy {
    pub fn hit_radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// A timed trap clustered near the playfield center. Shooting one ends
/// the session; left alone it blinks, then fizzles out harmlessly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: Vec2,
    pub size: f32,
    /// Session-elapsed milliseconds at creation
    pub spawned_at_ms: f64,
}

impl Bomb {
    /// Age in milliseconds at the given session time
    pub fn age_ms(&self, now_ms: f64) -> f32 {
        (now_ms - self.spawned_at_ms) as f32
    }

    /// Past its lifetime - removed on the next tick's bomb pass
    pub fn expired(&self, now_ms: f64, lifetime_ms: f32) -> bool {
        self.age_ms(now_ms) > lifetime_ms
    }

    /// Blink state for rendering: solid until `BOMB_BLINK_START_MS`,
    /// then on/off every `BOMB_BLINK_PERIOD_MS`. Collision is live
    /// either way.
    pub fn is_visible(&self, now_ms: f64) -> bool {
        let age = self.age_ms(now_ms);
        if age <= BOMB_BLINK_START_MS {
            return true;
        }
        ((age - BOMB_BLINK_START_MS) / BOMB_BLINK_PERIOD_MS).floor() as i64 % 2 == 0
    }

    /// Radius used for bullet contact tests (full size)
    pub fn hit_radius(&self) -> f32 {
        self.size
    }
}

/// Complete session state advanced by `tick`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub bombs: Vec<Bomb>,

    /// Remaining shots; regenerates when bullets are salvaged
    pub ammo: u32,
    /// Elapsed session time in seconds (the score)
    pub score: f64,
    /// Accumulated tick deltas; the clock for bomb age and spawning
    pub elapsed_ms: f64,
    /// Session difficulty knob, copied into each spawned enemy
    pub enemy_speed: f32,
    pub phase: SessionPhase,

    pub tuning: Tuning,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            bombs: Vec::new(),
            ammo: tuning.start_ammo,
            score: 0.0,
            elapsed_ms: 0.0,
            enemy_speed: tuning.enemy_base_speed,
            phase: SessionPhase::Running,
            tuning,
        }
    }

    /// Reset to a fresh running session, keeping the tuning
    pub fn reset(&mut self) {
        let tuning = self.tuning.clone();
        *self = Self::new(tuning);
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_matches_start_conditions() {
        let state = GameState::new(Tuning::default());
        assert_eq!(state.player.pos, Vec2::new(400.0, 525.0));
        assert_eq!(state.ammo, 5);
        assert_eq!(state.score, 0.0);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert!(state.bombs.is_empty());
        assert_eq!(state.phase, SessionPhase::Running);
    }

    #[test]
    fn bullet_fired_along_heading() {
        let player = Player::default(); // facing up
        let b = Bullet::fired_from(&player, 7.0);
        assert_eq!(b.pos, player.pos);
        assert!(b.dir.x.abs() < 1e-6);
        assert!((b.dir.y - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn bomb_blink_schedule() {
        let bomb = Bomb {
            pos: Vec2::new(400.0, 300.0),
            size: BOMB_SIZE,
            spawned_at_ms: 0.0,
        };
        // Solid while young
        assert!(bomb.is_visible(0.0));
        assert!(bomb.is_visible(3500.0));
        // First off-window starts one period in
        assert!(bomb.is_visible(3500.0 + 10.0));
        assert!(!bomb.is_visible(3500.0 + 160.0));
        assert!(bomb.is_visible(3500.0 + 310.0));
        // Expiry is strictly-greater-than lifetime
        assert!(!bomb.expired(5000.0, BOMB_LIFETIME_MS));
        assert!(bomb.expired(5001.0, BOMB_LIFETIME_MS));
    }
}
