/// Integration tests for the game loop
///
/// These tests drive [`Game::update`] directly and verify the interactions
/// it orchestrates: collision passes, power-up handling, wave spawning,
/// and the playing/game-over state machine.
use glam::Vec2;
use nova_strike::entities::ENEMY_SIZE;
use nova_strike::{Bullet, Enemy, FrameInput, Game, GameState, PowerUp, PowerUpKind, Rules};

fn no_input() -> FrameInput {
    FrameInput::default()
}

/// A game with the initial wave cleared out, so tests can stage their own
/// battlefield.
fn staged(rules: Rules) -> Game {
    let mut game = Game::new(rules);
    game.enemies.clear();
    game.power_ups.clear();
    game
}

#[test]
fn test_bullet_hit_removes_enemy_and_scores_once() {
    let mut game = staged(Rules::classic());
    game.enemies.push(Enemy::new(Vec2::new(200.0, 100.0), 60.0));
    game.enemies.push(Enemy::new(Vec2::new(500.0, 100.0), 60.0));
    game.player.bullets.push(Bullet::new(Vec2::new(210.0, 110.0)));

    game.update(0.0, &no_input());

    assert_eq!(game.player.score, 1);
    assert_eq!(game.enemies.len(), 1);
    assert_eq!(game.enemies[0].pos.x, 500.0);
    assert!(game.player.bullets.is_empty());
}

#[test]
fn test_bullet_downs_at_most_one_enemy_per_frame() {
    let mut game = staged(Rules::classic());
    // Two enemies stacked on top of each other, one bullet through both.
    game.enemies.push(Enemy::new(Vec2::new(200.0, 100.0), 60.0));
    game.enemies.push(Enemy::new(Vec2::new(205.0, 105.0), 60.0));
    game.player.bullets.push(Bullet::new(Vec2::new(210.0, 110.0)));

    game.update(0.0, &no_input());

    assert_eq!(game.player.score, 1);
    assert_eq!(game.enemies.len(), 1);
}

#[test]
fn test_grounded_enemy_costs_a_life() {
    let mut game = staged(Rules::classic());
    game.enemies.push(Enemy::new(Vec2::new(100.0, 451.0), 60.0));
    game.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), 60.0));

    game.update(0.0, &no_input());

    assert_eq!(game.player.lives, 2);
    assert_eq!(game.enemies.len(), 1);
}

#[test]
fn test_each_grounded_enemy_costs_its_own_life() {
    let mut game = staged(Rules::classic());
    game.enemies.push(Enemy::new(Vec2::new(100.0, 451.0), 60.0));
    game.enemies.push(Enemy::new(Vec2::new(300.0, 500.0), 60.0));
    game.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), 60.0));

    game.update(0.0, &no_input());

    assert_eq!(game.player.lives, 1);
    assert_eq!(game.enemies.len(), 1);
}

#[test]
fn test_contact_nuke_applies_on_touch() {
    let mut game = staged(Rules::classic());
    game.enemies.push(Enemy::new(Vec2::new(100.0, 50.0), 60.0));
    game.enemies.push(Enemy::new(Vec2::new(300.0, 80.0), 60.0));
    game.power_ups
        .push(PowerUp::new(PowerUpKind::Nuke, game.player.pos));
    let level_before = game.wave.level;

    game.update(0.0, &no_input());

    // Both ships scored, the field was cleared, and the next wave came in.
    assert_eq!(game.player.score, 2);
    assert_eq!(game.wave.level, level_before + 1);
    assert!(game.enemies.iter().all(|e| e.pos.y < 0.0));
}

#[test]
fn test_contact_slow_scales_then_restores_exactly_once() {
    let mut game = staged(Rules::classic());
    game.enemies
        .push(Enemy::new(Vec2::new(100.0, 10.0), game.wave.enemy_velocity));
    game.power_ups
        .push(PowerUp::new(PowerUpKind::Slow, game.player.pos));

    game.update(0.0, &no_input());
    assert!((game.wave.enemy_velocity - 36.0).abs() < 1e-3);
    assert!((game.enemies[0].velocity - 36.0).abs() < 1e-3);

    // Three seconds in: still slowed.
    game.update(3.0, &no_input());
    assert!((game.wave.enemy_velocity - 36.0).abs() < 1e-3);

    // Past the five second duration: restored to the level-derived value.
    game.update(2.5, &no_input());
    assert_eq!(game.wave.enemy_velocity, 60.0);
    assert_eq!(game.enemies[0].velocity, 60.0);
}

#[test]
fn test_stockpile_collection_banks_charges() {
    let mut game = staged(Rules::arsenal());
    game.enemies.push(Enemy::new(Vec2::new(100.0, 50.0), 60.0));
    game.power_ups
        .push(PowerUp::new(PowerUpKind::Nuke, game.player.pos));
    game.power_ups
        .push(PowerUp::new(PowerUpKind::Slow, game.player.pos));
    let velocity = game.wave.enemy_velocity;

    game.update(0.0, &no_input());

    assert_eq!(game.player.nukes_held, 1);
    assert_eq!(game.player.slows_held, 1);
    assert!(game.power_ups.is_empty());
    // Banking is inert: nothing fired, nothing slowed.
    assert_eq!(game.enemies.len(), 1);
    assert_eq!(game.wave.enemy_velocity, velocity);
    assert_eq!(game.player.score, 0);
}

#[test]
fn test_stockpile_activation_consumes_charge_and_respects_cooldown() {
    let mut game = staged(Rules::arsenal());
    game.enemies.push(Enemy::new(Vec2::new(100.0, 50.0), 60.0));
    game.enemies.push(Enemy::new(Vec2::new(300.0, 80.0), 60.0));
    game.enemies.push(Enemy::new(Vec2::new(500.0, 110.0), 60.0));
    game.player.nukes_held = 1;
    game.player.slows_held = 1;

    let nuke_input = FrameInput {
        nuke: true,
        ..FrameInput::default()
    };
    game.update(0.0, &nuke_input);

    assert_eq!(game.player.score, 3);
    assert_eq!(game.player.nukes_held, 0);
    // The cleared field triggered the next wave.
    assert_eq!(game.wave.level, 2);

    // The shared cooldown blocks the slow charge in the very next frame.
    let slow_input = FrameInput {
        slow: true,
        ..FrameInput::default()
    };
    game.update(0.0, &slow_input);
    assert_eq!(game.player.slows_held, 1);

    // Once the cooldown has elapsed the charge goes through: 72 - 30.
    game.update(0.4, &slow_input);
    assert_eq!(game.player.slows_held, 0);
    assert_eq!(game.wave.enemy_velocity, 42.0);
}

#[test]
fn test_stockpile_activation_without_charges_is_a_noop() {
    let mut game = staged(Rules::arsenal());
    game.enemies.push(Enemy::new(Vec2::new(100.0, 50.0), 60.0));
    game.enemies.push(Enemy::new(Vec2::new(300.0, 80.0), 60.0));
    let velocity = game.wave.enemy_velocity;

    let input = FrameInput {
        nuke: true,
        slow: true,
        ..FrameInput::default()
    };
    game.update(0.0, &input);

    assert_eq!(game.player.score, 0);
    assert_eq!(game.enemies.len(), 2);
    assert_eq!(game.wave.enemy_velocity, velocity);
}

#[test]
fn test_ram_costs_a_life_under_arsenal_rules() {
    let mut game = staged(Rules::arsenal());
    game.enemies.push(Enemy::new(game.player.pos, 60.0));
    game.enemies.push(Enemy::new(Vec2::new(10.0, 10.0), 60.0));

    game.update(0.0, &no_input());

    assert_eq!(game.player.lives, 2);
    assert_eq!(game.enemies.len(), 1);
}

#[test]
fn test_ram_is_harmless_under_classic_rules() {
    let mut game = staged(Rules::classic());
    game.enemies.push(Enemy::new(game.player.pos, 60.0));
    game.enemies.push(Enemy::new(Vec2::new(10.0, 10.0), 60.0));

    game.update(0.0, &no_input());

    assert_eq!(game.player.lives, 3);
    assert_eq!(game.enemies.len(), 2);
}

#[test]
fn test_wave_spawns_stay_capped_and_in_bounds() {
    let mut game = Game::new(Rules::arsenal());
    for _ in 0..6 {
        assert!(game.enemies.len() <= 6);
        for enemy in &game.enemies {
            assert!(enemy.pos.x >= 0.0);
            assert!(enemy.pos.x + ENEMY_SIZE.x <= game.rules.screen_width);
            // Staggered entry from above the screen.
            assert!(enemy.pos.y < 0.0);
        }
        game.enemies.clear();
        game.update(0.0, &no_input());
    }
}

#[test]
fn test_classic_waves_grow_and_speed_up() {
    let mut game = Game::new(Rules::classic());
    assert_eq!(game.wave.level, 1);
    assert_eq!(game.enemies.len(), 4);
    assert_eq!(game.wave.enemy_velocity, 60.0);

    game.enemies.clear();
    game.update(0.0, &no_input());

    assert_eq!(game.wave.level, 2);
    assert_eq!(game.enemies.len(), 5);
    assert_eq!(game.wave.enemy_velocity, 72.0);
}

#[test]
fn test_power_up_drop_schedule() {
    let mut game = Game::new(Rules::classic());
    // Level 1: nothing drops.
    assert!(game.power_ups.is_empty());

    let count = |game: &Game, kind: PowerUpKind| {
        game.power_ups.iter().filter(|p| p.kind == kind).count()
    };

    // Level 2: a nuke.
    game.enemies.clear();
    game.update(0.0, &no_input());
    assert_eq!(count(&game, PowerUpKind::Nuke), 1);
    assert_eq!(count(&game, PowerUpKind::Slow), 0);

    // Level 3: a slow joins the uncollected nuke.
    game.enemies.clear();
    game.update(0.0, &no_input());
    assert_eq!(count(&game, PowerUpKind::Nuke), 1);
    assert_eq!(count(&game, PowerUpKind::Slow), 1);

    // Level 4: another nuke.
    game.enemies.clear();
    game.update(0.0, &no_input());
    assert_eq!(count(&game, PowerUpKind::Nuke), 2);
    assert_eq!(count(&game, PowerUpKind::Slow), 1);
}

#[test]
fn test_game_over_freezes_the_world() {
    let mut game = Game::new(Rules::classic());
    game.player.lives = 0;
    game.update(0.0, &no_input());
    assert_eq!(game.state, GameState::GameOver);

    let positions: Vec<(f32, f32)> = game.enemies.iter().map(|e| (e.pos.x, e.pos.y)).collect();
    let score = game.player.score;
    let level = game.wave.level;

    for _ in 0..5 {
        game.update(1.0, &no_input());
    }

    assert_eq!(game.state, GameState::GameOver);
    let after: Vec<(f32, f32)> = game.enemies.iter().map(|e| (e.pos.x, e.pos.y)).collect();
    assert_eq!(positions, after);
    assert_eq!(game.player.score, score);
    assert_eq!(game.wave.level, level);
}

#[test]
fn test_restart_resets_everything_and_spawns_the_first_wave() {
    let mut game = Game::new(Rules::arsenal());
    game.player.score = 99;
    game.player.nukes_held = 2;
    game.player.slows_held = 1;
    game.wave.enemy_velocity = 10.0;
    game.player.lives = 0;
    game.update(0.0, &no_input());
    assert_eq!(game.state, GameState::GameOver);

    let restart = FrameInput {
        restart: true,
        ..FrameInput::default()
    };
    game.update(0.0, &restart);

    assert_eq!(game.state, GameState::Playing);
    assert_eq!(game.player.lives, 3);
    assert_eq!(game.player.score, 0);
    assert_eq!(game.player.nukes_held, 0);
    assert_eq!(game.player.slows_held, 0);
    assert!(game.player.bullets.is_empty());
    assert_eq!(game.wave.level, 1);
    assert_eq!(game.wave.enemy_velocity, 60.0);
    // Exactly one wave spawned, no power-ups on level 1.
    assert_eq!(game.enemies.len(), 4);
    assert!(game.power_ups.is_empty());
}

#[test]
fn test_fire_input_spawns_one_bullet_per_cooldown() {
    let mut game = Game::new(Rules::classic());
    let fire = FrameInput {
        fire: true,
        ..FrameInput::default()
    };

    let events = game.update(0.0, &fire);
    assert!(events.fired);
    assert_eq!(game.player.bullets.len(), 1);

    // Still inside the 0.20 s window.
    let events = game.update(0.0, &fire);
    assert!(!events.fired);
    assert_eq!(game.player.bullets.len(), 1);
}

#[test]
fn test_movement_clamps_at_left_edge() {
    let mut game = Game::new(Rules::classic());
    let left = FrameInput {
        left: true,
        ..FrameInput::default()
    };
    for _ in 0..25 {
        game.update(0.1, &left);
    }
    assert_eq!(game.player.pos.x, 0.0);
}

#[test]
fn test_movement_clamps_at_right_edge() {
    let mut game = Game::new(Rules::classic());
    let right = FrameInput {
        right: true,
        ..FrameInput::default()
    };
    for _ in 0..25 {
        game.update(0.1, &right);
    }
    assert_eq!(
        game.player.pos.x,
        game.rules.screen_width - nova_strike::entities::PLAYER_SIZE.x
    );
}
