use std::fs::{File, OpenOptions};
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::subscriber::NoSubscriber;
use tracing::{debug, info};

use crate::config::KeyBindingsConfig;

mod app;
pub mod constants;
mod form;
mod handlers;
mod view;
mod widgets;

use self::app::App;
use self::constants::TUI_TICK_RATE_MS;
use self::view::Ui;

/// Launch the interactive TUI.
///
/// Tracing output would corrupt the alternate screen, so events are dropped
/// unless `log_file` names a file to append them to.
pub fn run(keybindings: KeyBindingsConfig, log_file: Option<&Path>) -> Result<()> {
    let log_writer = log_file.map(open_log_file).transpose()?;

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = match log_writer {
        Some(file) => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(crate::env_filter("debug"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .finish();
            tracing::subscriber::with_default(subscriber, || run_event_loop(&mut terminal, keybindings))
        }
        None => tracing::subscriber::with_default(NoSubscriber::default(), || {
            run_event_loop(&mut terminal, keybindings)
        }),
    };

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file: {}", path.display()))
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    keybindings: KeyBindingsConfig,
) -> Result<()> {
    let mut ui = Ui::new(App::new(), keybindings);
    info!("tui session started");

    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(TUI_TICK_RATE_MS);

    loop {
        terminal.draw(|f| ui.draw(f))?;
        if ui.should_quit {
            break;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();

        if event::poll(timeout)?
            && let CrosstermEvent::Key(key) = event::read()?
        {
            ui.handle_key(key);
        }

        if last_tick.elapsed() >= tick_rate {
            ui.tick();
            last_tick = Instant::now();
        }
    }

    debug!(tasks = ui.app.controller().store().len(), "tui session finished");
    Ok(())
}
