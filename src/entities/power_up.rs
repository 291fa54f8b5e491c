use glam::Vec2;

use super::Bounds;
use super::enemy::Enemy;
use super::player::Player;
use crate::rules::SlowRule;

/// Sprite size in world pixels.
pub const POWER_UP_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// Falling speed, px/sec.
pub const POWER_UP_SPEED: f32 = 80.0;

/// Uncollected power-ups are dropped once they fall this far, so the
/// collection cannot grow without bound.
pub const POWER_UP_DESPAWN_Y: f32 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Clears every enemy on screen, scoring one point per ship.
    Nuke,
    /// Reduces the enemy descent velocity.
    Slow,
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub active: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        Self {
            pos,
            kind,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.y += POWER_UP_SPEED * dt;
        if self.pos.y > POWER_UP_DESPAWN_Y {
            self.active = false;
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.pos, POWER_UP_SIZE)
    }
}

/// What applying a power-up did. The game loop owns the wave state and
/// threads any velocity change back into it; nothing in here writes to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppliedEffect {
    /// Every enemy destroyed; score already credited, one point per ship.
    Cleared { ships: u32 },
    /// Enemy descent velocity should become the contained value.
    Slowed { velocity: f32 },
}

/// Applies a power-up by kind. `velocity` is the current enemy descent
/// velocity; the slow rule decides how far it drops.
pub fn apply_effect(
    kind: PowerUpKind,
    player: &mut Player,
    enemies: &mut Vec<Enemy>,
    velocity: f32,
    slow: &SlowRule,
) -> AppliedEffect {
    match kind {
        PowerUpKind::Nuke => {
            let ships = enemies.len() as u32;
            player.score += ships;
            enemies.clear();
            AppliedEffect::Cleared { ships }
        }
        PowerUpKind::Slow => AppliedEffect::Slowed {
            velocity: slow.apply(velocity),
        },
    }
}
