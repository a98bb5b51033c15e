//! Per-tick state transition
//!
//! `tick` advances every entity one step and resolves collisions. It is
//! deterministic: given the same state, input, and delta it always
//! produces the same result. All randomness stays in the `Spawner`.
//!
//! Time model: bullet and enemy displacement are fixed per-tick steps,
//! while score and bomb age scale with the wall-clock delta.

use super::collision::{bullet_hits_bomb, bullet_hits_enemy, enemy_hits_player};
use super::state::{GameState, SessionPhase};
use crate::{angle_to, heading_vec, in_playfield};

/// Held input consumed by one tick. Fire is a discrete controller
/// operation (`Session::request_fire`), not a held state, so it does
/// not appear here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
}

/// Advance the game state by one tick of `dt_ms` wall-clock milliseconds.
///
/// No-op when the session is over. Otherwise the passes run in a fixed
/// order: rotation, bullets, bombs, enemies, terminal check. Within one
/// call the transition is atomic as far as any outside reader is
/// concerned.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if state.phase == SessionPhase::Over {
        return;
    }

    state.elapsed_ms += dt_ms as f64;
    state.score += (dt_ms as f64) / 1000.0;

    // Rotation input. Both keys held in the same tick cancel out; the
    // angle is never clamped, it wraps naturally through cos/sin.
    if input.rotate_left {
        state.player.angle -= state.tuning.player_rotation_speed;
    }
    if input.rotate_right {
        state.player.angle += state.tuning.player_rotation_speed;
    }

    advance_bullets(state);
    let bomb_fatal = advance_bombs(state);
    let enemy_fatal = advance_enemies(state);

    if bomb_fatal || enemy_fatal {
        state.phase = SessionPhase::Over;
        log::info!(
            "Session over at {:.1}s ({})",
            state.score,
            if bomb_fatal { "bomb hit" } else { "enemy contact" }
        );
    }
}

/// Move every bullet one step and salvage the ones leaving the
/// playfield: each removal refunds one ammo.
fn advance_bullets(state: &mut GameState) {
    let w = state.tuning.playfield_width;
    let h = state.tuning.playfield_height;

    let mut salvaged: u32 = 0;
    for bullet in &mut state.bullets {
        bullet.pos += bullet.dir * bullet.speed;
    }
    state.bullets.retain(|b| {
        if in_playfield(b.pos, w, h) {
            true
        } else {
            salvaged += 1;
            false
        }
    });
    state.ammo += salvaged;
}

/// Expire old bombs, then test the survivors against every live
/// bullet. Any contact is fatal to the session. Returns true on
/// contact. Blink state is cosmetic; a blinking bomb is still live.
fn advance_bombs(state: &mut GameState) -> bool {
    let now = state.elapsed_ms;
    let lifetime = state.tuning.bomb_lifetime_ms;
    state.bombs.retain(|bomb| !bomb.expired(now, lifetime));

    state
        .bombs
        .iter()
        .any(|bomb| state.bullets.iter().any(|b| bullet_hits_bomb(b, bomb)))
}

/// Pure pursuit, recomputed fresh every tick (no steering inertia),
/// then contact resolution. Enemy-player contact is fatal. Enemy-bullet
/// pairs are collected first and applied after the scan so removal
/// never skips or double-visits an element; each pair refunds one ammo,
/// and an enemy can only die once even if several bullets overlap it.
fn advance_enemies(state: &mut GameState) -> bool {
    let player = state.player;

    for enemy in &mut state.enemies {
        let angle = angle_to(enemy.pos, player.pos);
        enemy.pos += heading_vec(angle) * enemy.speed;
    }

    let fatal = state.enemies.iter().any(|e| enemy_hits_player(e, &player));

    let mut killed_enemies: Vec<usize> = Vec::new();
    let mut used_bullets: Vec<usize> = Vec::new();
    for (ei, enemy) in state.enemies.iter().enumerate() {
        for (bi, bullet) in state.bullets.iter().enumerate() {
            if used_bullets.contains(&bi) {
                continue;
            }
            if bullet_hits_enemy(bullet, enemy) {
                killed_enemies.push(ei);
                used_bullets.push(bi);
                break;
            }
        }
    }

    if !killed_enemies.is_empty() {
        let mut ei = 0;
        state.enemies.retain(|_| {
            let keep = !killed_enemies.contains(&ei);
            ei += 1;
            keep
        });
        let mut bi = 0;
        state.bullets.retain(|_| {
            let keep = !used_bullets.contains(&bi);
            bi += 1;
            keep
        });
        state.ammo += killed_enemies.len() as u32;
    }

    fatal
}
