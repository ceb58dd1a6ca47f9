mod app;
mod config;
mod domain;
mod input;
mod logging;
mod timers;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use chrono::{DateTime, Local, NaiveDate};
use clap::{Parser, Subcommand};
use config::{parse_date, Config, LoadedConfig};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "focusplan")]
#[command(about = "A terminal focus planner: five daily tasks, a focus goal and a date-tagged calendar", long_about = None)]
struct Cli {
    /// Config file (TOML). Defaults to <config dir>/focusplan/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Initially selected calendar date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    date: Option<String>,

    /// More log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Print the effective configuration as TOML
    Config,
}

/// Load the config file and apply command line overrides
fn effective_config(cli: &Cli) -> Result<LoadedConfig> {
    let mut loaded = Config::load(cli.config.as_deref())?;
    if cli.dark {
        loaded.config.dark_mode = true;
    }
    Ok(loaded)
}

fn start_date(cli: &Cli) -> Result<Option<NaiveDate>> {
    Ok(cli.date.as_deref().map(parse_date).transpose()?)
}

/// Initial state for a session starting at `now`
fn build_app(cfg: &Config, start_date: Option<NaiveDate>, now: DateTime<Local>) -> AppState {
    let mut app = AppState::new(cfg, now);
    if let Some(date) = start_date {
        app.select_date(date);
    }
    app
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = effective_config(&cli)?;

    match cli.command {
        Some(Commands::Config) => {
            print!("{}", loaded.config.to_toml().context("Failed to render config")?);
            Ok(())
        }
        None => {
            let start = start_date(&cli)?;
            run_tui(&loaded, start, cli.verbose)
        }
    }
}

fn run_tui(loaded: &LoadedConfig, start_date: Option<NaiveDate>, verbose: u8) -> Result<()> {
    let cfg = &loaded.config;

    // Logging is best effort; the planner works without it
    let _log_guard = match cfg.log_path() {
        Some(path) => match logging::init_tracing(&path, verbose) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Logging disabled: {:#}", e);
                None
            }
        },
        None => None,
    };
    loaded.log_source();
    info!(dark_mode = cfg.dark_mode, tick_ms = cfg.tick_ms, "starting focusplan");

    let mut app = build_app(cfg, start_date, Local::now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, cfg);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.teardown();

    if let Err(err) = &result {
        error!(error = %err, "planner exited with error");
    }
    info!("focusplan stopped");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    cfg: &Config,
) -> Result<()> {
    let tick_rate = cfg.tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Fire due timers
        app.tick(Local::now());
    }
}
