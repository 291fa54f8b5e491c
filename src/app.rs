use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::game::{FrameInput, Game};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::rules::{PowerUpPolicy, Rules};

/// The application shell: frame timing, input wiring, rendering, audio.
/// All game semantics live in [`Game`].
pub struct App {
    running: bool,
    game: Game,
    /// Frames info
    frame_count: u64,
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    pub fn new(rules: Rules) -> Self {
        Self {
            running: true,
            game: Game::new(rules),
            frame_count: 0,
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager: AudioManager::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }
            // Cap dt so a stalled terminal doesn't teleport entities.
            let dt = frame_time.as_secs_f32().min(0.1);

            let show_charges =
                matches!(self.game.rules.power_ups, PowerUpPolicy::Stockpile { .. });
            terminal.draw(|frame| {
                let view = RenderView {
                    state: self.game.state,
                    player: &self.game.player,
                    enemies: &self.game.enemies,
                    power_ups: &self.game.power_ups,
                    level: self.game.wave.level,
                    screen_width: self.game.rules.screen_width,
                    screen_height: self.game.rules.screen_height,
                    show_charges,
                    frame_count: self.frame_count,
                    fps: self.fps,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;
            self.frame_count += 1;

            // Poll input events and fold the actions into this frame's input
            self.input_manager.poll_events(&self.game.state)?;
            let actions = self.input_manager.get_actions(&self.game.state);
            let input = self.frame_input(&actions);

            let events = self.game.update(dt, &input);
            if events.fired {
                self.audio_manager.play_fire_sound();
            }

            // Small sleep to maintain ~60 FPS and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(8));
        }
        Ok(())
    }

    fn frame_input(&mut self, actions: &[InputAction]) -> FrameInput {
        let mut input = FrameInput::default();
        for action in actions {
            match action {
                InputAction::Quit => self.running = false,
                InputAction::MoveLeft => input.left = true,
                InputAction::MoveRight => input.right = true,
                InputAction::Fire => input.fire = true,
                InputAction::ActivateNuke => input.nuke = true,
                InputAction::ActivateSlow => input.slow = true,
                InputAction::Restart => input.restart = true,
            }
        }
        input
    }
}
