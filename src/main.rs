// src/main.rs
use std::{io, path::PathBuf, time::Duration};
use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

mod app;
mod config;
mod controller;
mod database;
mod environment;
mod i18n;
mod input;
mod logging;
mod models;
mod theme;
mod ui;

use app::App;
use config::Settings;
use environment::EnvironmentInfo;
use i18n::Strings;
use theme::Theme;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Locale tag to use instead of the host locale, e.g. de-DE
    #[arg(long)]
    lang: Option<String>,

    /// Additional configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.config.as_deref())?;

    let level = if cli.verbose { "debug" } else { settings.log_level.as_str() };
    if let Some(path) = settings.log_path() {
        // The app is usable without a log file.
        if let Err(e) = logging::init(&path, level) {
            eprintln!("logging disabled: {e:#}");
        }
    }

    let lang = cli.lang.as_deref().or(settings.lang.as_deref());
    let strings = Strings::from_host(lang);
    tracing::info!(locale = strings.current_locale(), "starting potato");

    let mut app = App::new(strings, EnvironmentInfo::capture());

    let result = {
        let _guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        run(&mut terminal, &mut app)
    };
    app.detach();
    tracing::info!("exiting potato");
    result
}

/// Raw mode plus alternate screen, undone on drop even on error or panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let theme = Theme::default();
    loop {
        if app.take_redraw() {
            terminal.draw(|f| ui::render(f, app, &theme))?;
        }
        // Deferred work sees the frame that was just drawn.
        if app.has_deferred() {
            app.run_deferred();
            continue;
        }

        if event::poll(Duration::from_millis(200))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if !input::handle_key(app, key_event) {
                        break;
                    }
                }
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }
    }
    Ok(())
}
