use color_eyre::Result;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::OpenOptions;
use std::io::stdout;

use nova_strike::app::App;
use nova_strike::rules::Rules;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let rules = match std::env::args().nth(1).as_deref() {
        Some("arsenal") => Rules::arsenal(),
        _ => Rules::classic(),
    };
    log::info!(
        "starting {}x{} world",
        rules.screen_width,
        rules.screen_height
    );

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::debug!("keyboard enhancement supported: {supports_keyboard_enhancement}");

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(rules).run(&mut terminal);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if supports_keyboard_enhancement {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }

    terminal.show_cursor()?;

    result
}

/// Log to a file: stderr belongs to the alternate screen while we run.
fn init_logging() -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}
