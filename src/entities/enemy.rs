use glam::Vec2;

use super::Bounds;

/// Sprite size in world pixels.
pub const ENEMY_SIZE: Vec2 = Vec2::new(48.0, 36.0);

#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// Downward speed in px/sec, handed out by the wave state at spawn.
    pub velocity: f32,
    pub health: i32,
    pub active: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, velocity: f32) -> Self {
        Self {
            pos,
            velocity,
            health: 1,
            active: true,
        }
    }

    /// Descends; removal is the game loop's call, never the enemy's own.
    pub fn update(&mut self, dt: f32) {
        self.pos.y += self.velocity * dt;
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn destroyed(&self) -> bool {
        self.health <= 0
    }

    /// True once the top edge has passed the bottom of the screen.
    pub fn past_bottom(&self, screen_height: f32) -> bool {
        self.pos.y > screen_height
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.pos, ENEMY_SIZE)
    }
}
