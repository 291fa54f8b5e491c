mod bullet;
mod enemy;
mod player;
mod power_up;

// Re-export all public types
pub use bullet::{BULLET_SIZE, BULLET_SPEED, Bullet};
pub use enemy::{ENEMY_SIZE, Enemy};
pub use player::{FIRE_COOLDOWN, PLAYER_SIZE, PLAYER_SPEED, Player};
pub use power_up::{
    AppliedEffect, POWER_UP_DESPAWN_Y, POWER_UP_SIZE, POWER_UP_SPEED, PowerUp, PowerUpKind,
    apply_effect,
};

use glam::Vec2;

/// Axis-aligned box anchored at the owning entity's top-left position.
/// All collision in the game is overlap testing between these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: size.x,
            h: size.y,
        }
    }

    /// Strict AABB overlap test; touching edges do not count.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}
