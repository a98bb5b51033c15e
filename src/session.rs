//! Game session controller
//!
//! Owns every piece of mutable session state: the `GameState`, the
//! `Spawner`, the held-key input, and the high-score lifecycle. External
//! collaborators (keyboard provider, frame-clock driver, score store)
//! talk only to this type.

use crate::highscores::ScoreStore;
use crate::sim::{tick, Bullet, GameState, SessionPhase, Spawner, TickInput};
use crate::tuning::Tuning;

/// Rotation keys the controller tracks as held state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

/// One play-through from start/restart to game-over
pub struct Session<S: ScoreStore> {
    state: GameState,
    spawner: Spawner,
    input: TickInput,
    store: S,
    high_score: f64,
    /// Frame-clock subscription: while true, `tick` advances the sim.
    /// Dropped synchronously by `end`, re-acquired by `restart`.
    clock_active: bool,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        let high_score = store.read();
        log::info!("New session (seed {}), high score {:.1}s", seed, high_score);
        Self {
            state: GameState::new(tuning),
            spawner: Spawner::new(seed),
            input: TickInput::default(),
            store,
            high_score,
            clock_active: true,
        }
    }

    /// Begin play. `new` already leaves the session running; calling
    /// this on a fresh session is harmless.
    pub fn start(&mut self) {
        self.restart();
    }

    /// Reset to a fresh running session: entities cleared, ammo and
    /// score back to start values, clock re-acquired
    pub fn restart(&mut self) {
        self.state.reset();
        self.spawner.reset();
        self.input = TickInput::default();
        self.clock_active = true;
        log::info!("Session restarted");
    }

    /// Fire a bullet from the player's current position and heading.
    /// Silently ignored when the session is over or ammo is exhausted -
    /// an empty trigger is not an error.
    pub fn request_fire(&mut self) {
        if !self.is_running() || self.state.ammo == 0 {
            return;
        }
        let bullet = Bullet::fired_from(&self.state.player, self.state.tuning.bullet_speed);
        self.state.bullets.push(bullet);
        self.state.ammo -= 1;
    }

    /// Update held rotation state; consumed by every subsequent tick
    pub fn set_rotation(&mut self, dir: Rotation, held: bool) {
        match dir {
            Rotation::Left => self.input.rotate_left = held,
            Rotation::Right => self.input.rotate_right = held,
        }
    }

    /// One frame: spawn due entities, then advance the simulation.
    /// No-op unless the session is running.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.is_running() {
            return;
        }
        self.spawner.tick(&mut self.state, dt_ms);
        tick(&mut self.state, &self.input, dt_ms);

        if self.state.phase == SessionPhase::Over {
            self.end();
        }
    }

    /// Terminal transition: stop the clock and settle the high score.
    /// Idempotent - repeat calls in the same tick change nothing and
    /// never double-write the score store.
    pub fn end(&mut self) {
        if !self.clock_active {
            return;
        }
        self.clock_active = false;
        self.state.phase = SessionPhase::Over;

        let final_score = self.state.score;
        if final_score > self.high_score {
            self.high_score = final_score;
            self.store.write(final_score);
        }
        log::info!(
            "Session ended: score {:.1}s, best {:.1}s",
            final_score,
            self.high_score
        );
    }

    pub fn is_running(&self) -> bool {
        self.clock_active && self.state.is_running()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for drivers that adjust live difficulty
    /// knobs such as `enemy_speed`
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn score(&self) -> f64 {
        self.state.score
    }

    pub fn high_score(&self) -> f64 {
        self.high_score
    }

    pub fn ammo(&self) -> u32 {
        self.state.ammo
    }

    /// Direct access to the score store (mainly for tests)
    pub fn store(&self) -> &S {
        &self.store
    }
}
