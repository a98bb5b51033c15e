//! Collision detection
//!
//! Everything here is a circle-circle test using simple radius sums.
//! No swept/continuous collision: tunneling at high speed or low frame
//! rate is an accepted approximation.

use glam::Vec2;

use super::state::{Bomb, Bullet, Enemy, Player};

/// Circle-circle overlap: centers closer than the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Enemy touching the player - fatal
pub fn enemy_hits_player(enemy: &Enemy, player: &Player) -> bool {
    circles_overlap(enemy.pos, enemy.hit_radius(), player.pos, player.hit_radius())
}

/// Bullet touching an enemy - kills the enemy, salvages the bullet
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    circles_overlap(bullet.pos, bullet.hit_radius(), enemy.pos, enemy.hit_radius())
}

/// Bullet touching a bomb - fatal
pub fn bullet_hits_bomb(bullet: &Bullet, bomb: &Bomb) -> bool {
    circles_overlap(bullet.pos, bullet.hit_radius(), bomb.pos, bomb.hit_radius())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            size: ENEMY_SIZE,
            speed: ENEMY_BASE_SPEED,
        }
    }

    fn bullet_at(x: f32, y: f32) -> Bullet {
        Bullet {
            pos: Vec2::new(x, y),
            dir: Vec2::new(0.0, -1.0),
            speed: BULLET_SPEED,
            size: BULLET_SIZE,
        }
    }

    #[test]
    fn enemy_player_contact_uses_half_sizes() {
        let player = Player::default(); // (400, 525), size 25
        // Combined hit radius is (25 + 25) / 2 = 25
        assert!(enemy_hits_player(&enemy_at(400.0, 526.0), &player));
        assert!(enemy_hits_player(&enemy_at(400.0, 549.0), &player));
        assert!(!enemy_hits_player(&enemy_at(400.0, 550.0), &player));
    }

    #[test]
    fn bullet_enemy_threshold() {
        // Threshold: enemy.size/2 + bullet.size = 12.5 + 4 = 16.5
        let enemy = enemy_at(100.0, 100.0);
        assert!(bullet_hits_enemy(&bullet_at(100.0, 116.0), &enemy));
        assert!(!bullet_hits_enemy(&bullet_at(100.0, 117.0), &enemy));
    }

    #[test]
    fn bullet_bomb_threshold() {
        // Threshold: bomb.size + bullet.size = 18 + 4 = 22
        let bomb = Bomb {
            pos: Vec2::new(400.0, 300.0),
            size: BOMB_SIZE,
            spawned_at_ms: 0.0,
        };
        assert!(bullet_hits_bomb(&bullet_at(400.0, 321.0), &bomb));
        assert!(!bullet_hits_bomb(&bullet_at(400.0, 322.0), &bomb));
    }
}
