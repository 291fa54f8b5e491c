//! Per-frame game orchestration: input application, entity updates,
//! collision passes, power-up handling, wave spawning, and the
//! playing/game-over state machine.

use glam::Vec2;
use rand::Rng;

use crate::entities::{
    AppliedEffect, Enemy, PLAYER_SIZE, Player, PowerUp, PowerUpKind, apply_effect,
};
use crate::rules::{PowerUpPolicy, Rules, SlowRule};
use crate::wave::WaveState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

/// Logical input sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub nuke: bool,
    pub slow: bool,
    pub restart: bool,
}

/// What happened during a frame that the shell reacts to.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameEvents {
    pub fired: bool,
}

pub struct Game {
    pub rules: Rules,
    pub state: GameState,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub wave: WaveState,
    /// Seconds left until a contact-rule slow effect is undone.
    pub slow_restore: f32,
    /// Seconds left until the next stockpile activation is allowed.
    pub activation_timer: f32,
}

impl Game {
    pub fn new(rules: Rules) -> Self {
        let mut game = Self {
            state: GameState::Playing,
            player: Player::new(Self::player_spawn(&rules), rules.initial_lives),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            wave: WaveState::new(&rules),
            slow_restore: 0.0,
            activation_timer: 0.0,
            rules,
        };
        game.spawn_next_wave();
        game
    }

    fn player_spawn(rules: &Rules) -> Vec2 {
        Vec2::new(
            rules.screen_width / 2.0 - PLAYER_SIZE.x / 2.0,
            rules.screen_height - 70.0,
        )
    }

    /// Advances the whole world by `dt` seconds of the sampled input.
    /// Frozen in game over except for the restart input.
    pub fn update(&mut self, dt: f32, input: &FrameInput) -> FrameEvents {
        let mut events = FrameEvents::default();

        if self.state == GameState::GameOver {
            if input.restart {
                self.reset();
            }
            return events;
        }

        self.apply_movement(dt, input);
        if input.fire {
            events.fired = self.player.shoot();
        }

        self.activation_timer = (self.activation_timer - dt).max(0.0);
        if let PowerUpPolicy::Stockpile { cooldown } = self.rules.power_ups {
            self.try_activate(input, cooldown);
        }

        self.player.update(dt);
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
        self.remove_grounded_enemies();

        for power_up in &mut self.power_ups {
            power_up.update(dt);
        }
        self.power_ups.retain(|p| p.active);

        self.check_bullet_enemy_collisions();
        if self.rules.ram_damage {
            self.check_ram_collisions();
        }
        self.collect_power_ups();

        if self.enemies.is_empty() {
            self.spawn_next_wave();
        }

        if self.slow_restore > 0.0 {
            self.slow_restore -= dt;
            if self.slow_restore <= 0.0 {
                self.set_descent_velocity(self.wave.level_velocity());
                log::debug!("slow effect expired, back to {:.0} px/s", self.wave.enemy_velocity);
            }
        }

        if self.player.lives <= 0 {
            log::info!(
                "game over at level {} with score {}",
                self.wave.level,
                self.player.score
            );
            self.state = GameState::GameOver;
        }

        events
    }

    /// Full restart: collections cleared, progression back to initial
    /// values, then the first wave comes in immediately.
    pub fn reset(&mut self) {
        self.player = Player::new(Self::player_spawn(&self.rules), self.rules.initial_lives);
        self.enemies.clear();
        self.power_ups.clear();
        self.wave = WaveState::new(&self.rules);
        self.slow_restore = 0.0;
        self.activation_timer = 0.0;
        self.state = GameState::Playing;
        log::info!("restart");
        self.spawn_next_wave();
    }

    fn apply_movement(&mut self, dt: f32, input: &FrameInput) {
        let mut dx = 0.0;
        if input.left {
            dx -= self.player.speed * dt;
        }
        if input.right {
            dx += self.player.speed * dt;
        }
        let max_x = self.rules.screen_width - PLAYER_SIZE.x;
        self.player.slide(dx, max_x);
    }

    /// Spends one banked charge if an activation key is held and the shared
    /// cooldown has elapsed. Nuke wins when both keys are down.
    fn try_activate(&mut self, input: &FrameInput, cooldown: f32) {
        if self.activation_timer > 0.0 {
            return;
        }
        let kind = if input.nuke && self.player.nukes_held > 0 {
            self.player.nukes_held -= 1;
            PowerUpKind::Nuke
        } else if input.slow && self.player.slows_held > 0 {
            self.player.slows_held -= 1;
            PowerUpKind::Slow
        } else {
            return;
        };
        self.activation_timer = cooldown;
        self.apply_power_up(kind);
    }

    /// Applies a power-up effect, threading any velocity change back into
    /// the wave state and the ships already on screen.
    fn apply_power_up(&mut self, kind: PowerUpKind) {
        let outcome = apply_effect(
            kind,
            &mut self.player,
            &mut self.enemies,
            self.wave.enemy_velocity,
            &self.rules.slow,
        );
        match outcome {
            AppliedEffect::Cleared { ships } => {
                log::info!("nuke cleared {ships} ships");
            }
            AppliedEffect::Slowed { velocity } => {
                self.set_descent_velocity(velocity);
                if let SlowRule::Scale { duration, .. } = self.rules.slow {
                    self.slow_restore = duration;
                }
                log::info!("enemies slowed to {velocity:.0} px/s");
            }
        }
    }

    /// Writes a new descent velocity into the wave state and every live
    /// ship. The wave state is the single owner; ships carry a copy.
    fn set_descent_velocity(&mut self, velocity: f32) {
        self.wave.enemy_velocity = velocity;
        for enemy in &mut self.enemies {
            enemy.velocity = velocity;
        }
    }

    /// Enemies that slip past the bottom edge each cost one life.
    fn remove_grounded_enemies(&mut self) {
        let bottom = self.rules.screen_height;
        let before = self.enemies.len();
        let lives = &mut self.player.lives;
        self.enemies.retain(|e| {
            if e.past_bottom(bottom) {
                *lives -= 1;
                false
            } else {
                true
            }
        });
        if self.enemies.len() < before {
            log::debug!(
                "{} ship(s) broke through, {} lives left",
                before - self.enemies.len(),
                self.player.lives
            );
        }
    }

    /// First-hit-only scan: each bullet downs at most one enemy per frame,
    /// each hit scores one point. Both sides are swept afterwards.
    fn check_bullet_enemy_collisions(&mut self) {
        let mut kills = 0u32;
        for bullet in &mut self.player.bullets {
            if !bullet.active {
                continue;
            }
            for enemy in &mut self.enemies {
                if !enemy.active {
                    continue;
                }
                if bullet.bounds().intersects(&enemy.bounds()) {
                    bullet.active = false;
                    enemy.active = false;
                    kills += 1;
                    break;
                }
            }
        }
        self.player.score += kills;
        self.player.sweep_bullets();
        self.enemies.retain(|e| e.active);
    }

    /// Ships that reach the player explode on contact, one life each.
    /// Several overlapping ships in one frame cost several lives.
    fn check_ram_collisions(&mut self) {
        let player_bounds = self.player.bounds();
        let before = self.enemies.len();
        let lives = &mut self.player.lives;
        self.enemies.retain(|e| {
            if e.bounds().intersects(&player_bounds) {
                *lives -= 1;
                false
            } else {
                true
            }
        });
        if self.enemies.len() < before {
            log::debug!("rammed, {} lives left", self.player.lives);
        }
    }

    /// Power-ups touching the player leave the field; contact rules apply
    /// them on the spot, stockpile rules bank a charge instead.
    fn collect_power_ups(&mut self) {
        let player_bounds = self.player.bounds();
        let mut collected = Vec::new();
        self.power_ups.retain(|p| {
            if p.bounds().intersects(&player_bounds) {
                collected.push(p.kind);
                false
            } else {
                true
            }
        });
        for kind in collected {
            match self.rules.power_ups {
                PowerUpPolicy::OnContact => self.apply_power_up(kind),
                PowerUpPolicy::Stockpile { .. } => {
                    match kind {
                        PowerUpKind::Nuke => self.player.nukes_held += 1,
                        PowerUpKind::Slow => self.player.slows_held += 1,
                    }
                    log::debug!(
                        "banked {kind:?}, holding {} nukes / {} slows",
                        self.player.nukes_held,
                        self.player.slows_held
                    );
                }
            }
        }
    }

    /// Brings in the next, larger wave and its occasional power-ups.
    pub fn spawn_next_wave(&mut self) {
        self.wave.advance();
        let mut rng = rand::rng();

        let mut count = self.wave.wave_length as usize;
        if let Some(cap) = self.rules.enemy_cap {
            count = count.min((cap as usize).saturating_sub(self.enemies.len()));
        }
        for _ in 0..count {
            // Staggered entry: anywhere above the screen, inside the side
            // margins.
            let x = rng.random_range(10.0..self.rules.screen_width - 60.0);
            let y = -rng.random_range(20.0..600.0);
            self.enemies
                .push(Enemy::new(Vec2::new(x, y), self.wave.enemy_velocity));
        }

        if self.wave.level.is_multiple_of(2) {
            self.drop_power_up(PowerUpKind::Nuke);
        }
        if self.wave.level.is_multiple_of(3) {
            self.drop_power_up(PowerUpKind::Slow);
        }

        log::info!(
            "wave {}: {} ships incoming at {:.0} px/s",
            self.wave.level,
            count,
            self.wave.enemy_velocity
        );
    }

    fn drop_power_up(&mut self, kind: PowerUpKind) {
        let mut rng = rand::rng();
        let x = rng.random_range(10.0..self.rules.screen_width - 40.0);
        let y = -rng.random_range(20.0..200.0);
        self.power_ups.push(PowerUp::new(kind, Vec2::new(x, y)));
    }
}
