use glam::Vec2;

use super::Bounds;

/// Upward speed of every bullet, px/sec.
pub const BULLET_SPEED: f32 = 350.0;

/// Sprite size in world pixels.
pub const BULLET_SIZE: Vec2 = Vec2::new(6.0, 16.0);

#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub active: bool,
}

impl Bullet {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, active: true }
    }

    /// Moves up; once the whole sprite has left the top of the screen the
    /// bullet is flagged for the next sweep.
    pub fn update(&mut self, dt: f32) {
        self.pos.y -= BULLET_SPEED * dt;
        if self.pos.y + BULLET_SIZE.y < 0.0 {
            self.active = false;
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.pos, BULLET_SIZE)
    }
}
