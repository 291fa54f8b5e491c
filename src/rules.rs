//! Rule profiles: the compile-time tunables that distinguish the two
//! shipped rule sets. Everything here is plain data; the game loop reads
//! it and never writes it.

/// How a collected Slow power-up changes the enemy descent velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlowRule {
    /// Scale the current velocity; the level-derived value is restored
    /// after `duration` seconds.
    Scale { factor: f32, duration: f32 },
    /// Knock a flat amount off the velocity, never dropping below `floor`.
    /// Lasts until the next wave recomputes the velocity.
    Step { amount: f32, floor: f32 },
}

impl SlowRule {
    pub fn apply(&self, velocity: f32) -> f32 {
        match *self {
            SlowRule::Scale { factor, .. } => velocity * factor,
            SlowRule::Step { amount, floor } => (velocity - amount).max(floor),
        }
    }
}

/// How collected power-ups reach the battlefield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PowerUpPolicy {
    /// Power-ups take effect the moment the player touches them.
    OnContact,
    /// Power-ups are banked as charges and spent with the activation keys,
    /// at most one per `cooldown` seconds.
    Stockpile { cooldown: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub screen_width: f32,
    pub screen_height: f32,
    pub initial_lives: i32,
    pub base_enemy_velocity: f32,
    pub velocity_per_level: f32,
    pub initial_wave_length: u32,
    /// Hard cap on concurrent enemies, enforced when a wave spawns.
    pub enemy_cap: Option<u32>,
    /// Whether an enemy reaching the player removes the enemy and costs a
    /// life.
    pub ram_damage: bool,
    pub power_ups: PowerUpPolicy,
    pub slow: SlowRule,
}

impl Rules {
    /// The classic rule set: power-ups on contact, a timed slow effect,
    /// enemies only dangerous once they slip past the bottom.
    pub fn classic() -> Self {
        Self {
            screen_width: 700.0,
            screen_height: 450.0,
            initial_lives: 3,
            base_enemy_velocity: 60.0,
            velocity_per_level: 12.0,
            initial_wave_length: 3,
            enemy_cap: None,
            ram_damage: false,
            power_ups: PowerUpPolicy::OnContact,
            slow: SlowRule::Scale {
                factor: 0.6,
                duration: 5.0,
            },
        }
    }

    /// The arsenal rule set: banked power-ups spent manually, ramming
    /// enemies, and capped waves on a slightly wider screen.
    pub fn arsenal() -> Self {
        Self {
            screen_width: 720.0,
            screen_height: 450.0,
            initial_lives: 3,
            base_enemy_velocity: 60.0,
            velocity_per_level: 12.0,
            initial_wave_length: 3,
            enemy_cap: Some(6),
            ram_damage: true,
            power_ups: PowerUpPolicy::Stockpile { cooldown: 0.3 },
            slow: SlowRule::Step {
                amount: 30.0,
                floor: 24.0,
            },
        }
    }
}
