//! Wave progression: level counter, wave size, and the enemy descent
//! velocity derived from them. Owned solely by the game loop.

use crate::rules::Rules;

#[derive(Debug, Clone, PartialEq)]
pub struct WaveState {
    /// Wave counter; the first spawned wave is level 1.
    pub level: u32,
    /// Enemies per wave; grows by one each wave.
    pub wave_length: u32,
    /// Velocity handed to newly spawned enemies. Slow power-ups may pull
    /// this below the level-derived value until it is recomputed.
    pub enemy_velocity: f32,
    base_velocity: f32,
    velocity_per_level: f32,
}

impl WaveState {
    pub fn new(rules: &Rules) -> Self {
        Self {
            level: 0,
            wave_length: rules.initial_wave_length,
            enemy_velocity: rules.base_enemy_velocity,
            base_velocity: rules.base_enemy_velocity,
            velocity_per_level: rules.velocity_per_level,
        }
    }

    /// Velocity the current level calls for, ignoring any active slow.
    pub fn level_velocity(&self) -> f32 {
        self.base_velocity + self.level.saturating_sub(1) as f32 * self.velocity_per_level
    }

    /// Moves to the next wave: one level up, one more enemy, velocity
    /// recomputed (shedding any slow effect).
    pub fn advance(&mut self) {
        self.level += 1;
        self.wave_length += 1;
        self.enemy_velocity = self.level_velocity();
    }

    /// Undoes a slow effect by recomputing the level-derived velocity.
    pub fn restore_velocity(&mut self) {
        self.enemy_velocity = self.level_velocity();
    }
}
