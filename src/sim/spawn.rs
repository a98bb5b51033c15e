//! Time-driven entity spawning
//!
//! Enemies and bombs arrive on independent wall-clock cadences. The
//! spawner owns the only RNG in the simulation, so a seed plus an input
//! trace fully determines a session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Bomb, Enemy, GameState};
use crate::consts::*;

/// Interval-gated spawner for enemies and bombs
#[derive(Debug, Clone)]
pub struct Spawner {
    seed: u64,
    rng: Pcg32,
    enemy_timer_ms: f32,
    bomb_timer_ms: f32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            enemy_timer_ms: 0.0,
            bomb_timer_ms: 0.0,
        }
    }

    /// Re-arm both cadences and the RNG for a fresh session
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.enemy_timer_ms = 0.0;
        self.bomb_timer_ms = 0.0;
    }

    /// Accumulate elapsed time and emit any due entities.
    /// Spawning never fails; it is only gated by the intervals.
    pub fn tick(&mut self, state: &mut GameState, dt_ms: f32) {
        self.enemy_timer_ms += dt_ms;
        while self.enemy_timer_ms >= state.tuning.enemy_spawn_interval_ms {
            self.enemy_timer_ms -= state.tuning.enemy_spawn_interval_ms;
            self.spawn_enemy(state);
        }

        self.bomb_timer_ms += dt_ms;
        while self.bomb_timer_ms >= state.tuning.bomb_spawn_interval_ms {
            self.bomb_timer_ms -= state.tuning.bomb_spawn_interval_ms;
            self.spawn_bomb(state);
        }
    }

    /// Pick an edge and drop an enemy there.
    ///
    /// The side roll is 0..4 with two arms mapping to the top edge, so
    /// the distribution is 2-top / 1-right / 1-left. The bias is
    /// intentional; keep it.
    fn spawn_enemy(&mut self, state: &mut GameState) {
        let w = state.tuning.playfield_width;
        // Side spawns land above the hazard zone; floor at 1.0 so a
        // pathological tuning cannot produce an empty sample range
        let side_y_max = (state.tuning.hazard_zone.y - EDGE_SPAWN_MARGIN).max(1.0);

        let side: u32 = self.rng.random_range(0..4);
        let pos = match side {
            0 => Vec2::new(self.rng.random_range(0.0..w), 0.0),
            1 => Vec2::new(w, self.rng.random_range(0.0..side_y_max)),
            2 => Vec2::new(self.rng.random_range(0.0..w), 0.0),
            _ => Vec2::new(0.0, self.rng.random_range(0.0..side_y_max)),
        };

        state.enemies.push(Enemy {
            pos,
            size: ENEMY_SIZE,
            speed: state.enemy_speed,
        });
    }

    /// Drop a bomb somewhere in the cluster zone around the center
    fn spawn_bomb(&mut self, state: &mut GameState) {
        let cx = state.tuning.playfield_width / 2.0;
        let cy = state.tuning.playfield_height / 2.0;
        let pos = Vec2::new(
            cx + self.rng.random_range(-BOMB_SPREAD_X..BOMB_SPREAD_X),
            cy + self.rng.random_range(-BOMB_SPREAD_Y..BOMB_SPREAD_Y),
        );

        state.bombs.push(Bomb {
            pos,
            size: BOMB_SIZE,
            spawned_at_ms: state.elapsed_ms,
        });
    }
}
