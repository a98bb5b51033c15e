//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the `Spawner`
//! - No wall-clock reads; time arrives as per-tick deltas
//! - Index-safe removal during collision passes
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{bullet_hits_bomb, bullet_hits_enemy, circles_overlap, enemy_hits_player};
pub use spawn::Spawner;
pub use state::{Bomb, Bullet, Enemy, GameState, Player, SessionPhase};
pub use tick::{tick, TickInput};
