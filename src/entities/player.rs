use glam::Vec2;

use super::Bounds;
use super::bullet::{BULLET_SIZE, Bullet};

/// Sprite size in world pixels.
pub const PLAYER_SIZE: Vec2 = Vec2::new(52.0, 36.0);

/// Horizontal movement speed, px/sec.
pub const PLAYER_SPEED: f32 = 320.0;

/// Minimum seconds between shots.
pub const FIRE_COOLDOWN: f32 = 0.20;

/// The player ship: horizontal movement, a bullet magazine with a fire
/// cooldown, lives, score, and (arsenal rules) banked power-up charges.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub speed: f32,
    pub health: i32,
    pub lives: i32,
    pub score: u32,
    pub bullets: Vec<Bullet>,
    /// Seconds until the next shot is allowed.
    pub fire_timer: f32,
    /// Banked charges, spent with the activation keys under arsenal rules.
    pub nukes_held: u32,
    pub slows_held: u32,
}

impl Player {
    pub fn new(pos: Vec2, lives: i32) -> Self {
        Self {
            pos,
            speed: PLAYER_SPEED,
            health: 1,
            lives,
            score: 0,
            bullets: Vec::new(),
            fire_timer: 0.0,
            nukes_held: 0,
            slows_held: 0,
        }
    }

    /// Moves horizontally by `dx` world pixels, clamped to `[0, max_x]`.
    pub fn slide(&mut self, dx: f32, max_x: f32) {
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }

    /// Fires a bullet centered above the ship, its bottom edge touching the
    /// ship's top edge. Silently ignored while the cooldown is running.
    /// Returns whether a bullet actually left the barrel.
    pub fn shoot(&mut self) -> bool {
        if self.fire_timer > 0.0 {
            return false;
        }
        self.fire_timer = FIRE_COOLDOWN;

        let bx = self.pos.x + PLAYER_SIZE.x / 2.0 - BULLET_SIZE.x / 2.0;
        let by = self.pos.y - BULLET_SIZE.y;
        self.bullets.push(Bullet::new(Vec2::new(bx, by)));
        true
    }

    /// Advances the cooldown and every owned bullet, then sweeps the
    /// inactive ones.
    pub fn update(&mut self, dt: f32) {
        self.fire_timer = (self.fire_timer - dt).max(0.0);
        for bullet in &mut self.bullets {
            bullet.update(dt);
        }
        self.sweep_bullets();
    }

    /// Lazy removal of bullets flagged inactive.
    pub fn sweep_bullets(&mut self) {
        self.bullets.retain(|b| b.active);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn destroyed(&self) -> bool {
        self.health <= 0
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.pos, PLAYER_SIZE)
    }
}
