use glam::Vec2;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::{Enemy, Player, PowerUp, PowerUpKind};
use crate::game::GameState;

const PLAYER_SPRITE: [&str; 3] = ["  ^  ", " /|\\ ", "<===>"];
const ENEMY_SPRITE: [&str; 3] = [" \\^/ ", "[ooo]", " /v\\ "];

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub state: GameState,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub power_ups: &'a [PowerUp],
    pub level: u32,
    /// World dimensions in pixels; the renderer scales them onto the
    /// terminal cell grid.
    pub screen_width: f32,
    pub screen_height: f32,
    /// Whether the HUD shows banked power-up charges (stockpile rules).
    pub show_charges: bool,
    pub frame_count: u64,
    pub fps: u32,
    pub area: Rect,
}

impl RenderView<'_> {
    /// Maps a world position to a terminal cell, or None when the point is
    /// outside the visible area (e.g. entities still above the screen).
    fn to_cell(&self, pos: Vec2) -> Option<(u16, u16)> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let cx = (pos.x / self.screen_width * self.area.width as f32) as u16;
        let cy = (pos.y / self.screen_height * self.area.height as f32) as u16;
        if cx >= self.area.width || cy >= self.area.height {
            return None;
        }
        Some((self.area.x + cx, self.area.y + cy))
    }
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.state {
            GameState::Playing => self.render_game(frame, view),
            GameState::GameOver => self.render_game_over(frame, view),
        }
    }

    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        // Render stars (simple background)
        if view.frame_count % 10 < 5 {
            let star_text = (0..area.height)
                .map(|_| {
                    let mut rng = rand::rng();
                    if rng.random_bool(0.05) { "." } else { " " }
                })
                .collect::<Vec<_>>()
                .join("\n");
            frame.render_widget(
                Paragraph::new(star_text).style(Style::default().fg(Color::DarkGray)),
                area,
            );
        }

        // Render enemies
        for enemy in view.enemies {
            self.render_sprite(
                frame,
                view,
                enemy.pos,
                &ENEMY_SPRITE,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
        }

        // Render power-ups
        for power_up in view.power_ups {
            if let Some((cx, cy)) = view.to_cell(power_up.pos) {
                let (text, color) = match power_up.kind {
                    PowerUpKind::Nuke => ("(N)", Color::LightRed),
                    PowerUpKind::Slow => ("(S)", Color::Cyan),
                };
                let cell = Rect {
                    x: cx,
                    y: cy,
                    width: (text.len() as u16).min(area.right().saturating_sub(cx)),
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new(text)
                        .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    cell,
                );
            }
        }

        // Render bullets
        for bullet in &view.player.bullets {
            if let Some((cx, cy)) = view.to_cell(bullet.pos) {
                let cell = Rect {
                    x: cx,
                    y: cy,
                    width: 1,
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new("|").style(Style::default().fg(Color::Yellow)),
                    cell,
                );
            }
        }

        // Render player
        self.render_sprite(
            frame,
            view,
            view.player.pos,
            &PLAYER_SPRITE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );

        self.render_hud(frame, view);
    }

    /// Draws a multi-line sprite anchored at a world position, clipped to
    /// the visible area.
    fn render_sprite(
        &self,
        frame: &mut Frame,
        view: &RenderView,
        pos: Vec2,
        sprite: &[&'static str],
        style: Style,
    ) {
        let Some((cx, cy)) = view.to_cell(pos) else {
            return;
        };
        let area = view.area;
        for (i, line) in sprite.iter().enumerate() {
            let y = cy + i as u16;
            if y >= area.bottom() {
                break;
            }
            let width = (line.len() as u16).min(area.right().saturating_sub(cx));
            if width == 0 {
                continue;
            }
            let row = Rect {
                x: cx,
                y,
                width,
                height: 1,
            };
            frame.render_widget(Paragraph::new(*line).style(style), row);
        }
    }

    fn render_hud(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let mut spans = vec![
            Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.player.lives),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.player.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Level: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.level),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if view.show_charges {
            spans.push(Span::styled(
                "  Nukes: ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                format!("{}", view.player.nukes_held),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                "  Slows: ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                format!("{}", view.player.slows_held),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled(
            format!("  FPS: {}", view.fps),
            Style::default().fg(Color::DarkGray),
        ));

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), stats_area);

        let hint = if view.show_charges {
            "[A/D: Move] [Space: Fire] [N: Nuke] [S: Slow] [Q: Quit]"
        } else {
            "[A/D: Move] [Space: Fire] [Q: Quit]"
        };
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            )))
            .centered(),
            controls_area,
        );
    }

    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        YOU LOST!          ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.player.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("Reached Level: {}", view.level))
                .centered()
                .cyan(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            view.area,
        );
    }
}
