use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::game::GameState;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Fire,
    ActivateNuke,
    ActivateSlow,
    Restart,
    Quit,
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: bool,
    right: bool,
    fire: bool,
    nuke: bool,
    slow: bool,
}

/// Manages input polling and translates raw key events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
        }
    }

    /// Polls for all input events and stores one-shot actions
    /// Should be called once per frame before getting actions
    pub fn poll_events(&mut self, game_state: &GameState) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event, game_state);
                }
                Event::Mouse(_) => {
                    // Mouse events currently ignored
                }
                Event::Resize(_, _) => {
                    // Resize events handled elsewhere
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: &GameState) {
        match key_event.kind {
            KeyEventKind::Press => {
                self.handle_key_press(key_event, game_state);
            }
            KeyEventKind::Release => {
                self.handle_key_release(key_event.code);
            }
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: &GameState) {
        // Quit keys work in any state
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        // Restart is only meaningful once the run is over
        if *game_state == GameState::GameOver {
            if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                self.oneshot_actions.push(InputAction::Restart);
            }
            return;
        }

        // Continuous action keys (only tracked while playing)
        match key_event.code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = true;
                self.key_state.right = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = true;
                self.key_state.left = false;
            }
            KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.key_state.fire = true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.key_state.nuke = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.key_state.slow = true;
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.key_state.fire = false;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.key_state.nuke = false;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.key_state.slow = false;
            }
            _ => {}
        }
    }

    /// Returns all actions for this frame (both continuous and one-shot)
    /// Must be called after poll_events()
    pub fn get_actions(&self, game_state: &GameState) -> Vec<InputAction> {
        let mut actions = Vec::new();

        actions.extend_from_slice(&self.oneshot_actions);

        if *game_state == GameState::Playing {
            if self.key_state.left {
                actions.push(InputAction::MoveLeft);
            }
            if self.key_state.right {
                actions.push(InputAction::MoveRight);
            }
            if self.key_state.fire {
                actions.push(InputAction::Fire);
            }
            if self.key_state.nuke {
                actions.push(InputAction::ActivateNuke);
            }
            if self.key_state.slow {
                actions.push(InputAction::ActivateSlow);
            }
        }

        actions
    }
}
