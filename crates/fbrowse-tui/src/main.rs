//! fbrowse: a terminal file browser built with ratatui.
//!
//! This binary loads the configuration, initialises logging and the
//! terminal, runs the event loop, and restores the terminal on exit or
//! panic.

mod app;
mod input;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fbrowse_core::config::settings::LogConfig;
use fbrowse_core::{Config, CoreError, Keymap};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::input::handle_key;
use crate::render::render;

/// Command-line arguments: `fbrowse [--config PATH] [DIR]`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    start_dir: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter.next().context("--config requires a path")?;
            parsed.config = Some(PathBuf::from(path));
        } else if parsed.start_dir.is_none() {
            parsed.start_dir = Some(PathBuf::from(arg));
        } else {
            anyhow::bail!("unexpected argument: {arg}");
        }
    }
    Ok(parsed)
}

/// Default config location: `$XDG_CONFIG_HOME/fbrowse` or `~/.config/fbrowse`.
fn default_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("fbrowse"))
}

/// Loads the config file. A missing default file yields the defaults; an
/// explicitly requested file must exist.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_dir() {
            Some(dir) => dir.join("config.toml"),
            None => return Ok((Config::default(), None)),
        },
    };
    match Config::load(&path) {
        Ok(config) => Ok((config, Some(path))),
        Err(CoreError::NotFound(_)) if explicit.is_none() => Ok((Config::default(), None)),
        Err(e) => Err(e).with_context(|| format!("failed to load {}", path.display())),
    }
}

/// Loads `keymap.toml` from the directory holding the config file, if any.
fn load_keymap(config_path: Option<&Path>) -> anyhow::Result<Keymap> {
    let keymap_path = config_path
        .and_then(Path::parent)
        .map(|dir| dir.join("keymap.toml"))
        .or_else(|| default_config_dir().map(|dir| dir.join("keymap.toml")));
    let Some(path) = keymap_path else {
        return Ok(Keymap::default());
    };
    match Keymap::load(&path) {
        Ok(keymap) => Ok(keymap),
        Err(CoreError::NotFound(_)) => Ok(Keymap::default()),
        Err(e) => Err(e).with_context(|| format!("failed to load {}", path.display())),
    }
}

fn parse_level(level: &str) -> tracing::Level {
    level.parse().unwrap_or(tracing::Level::INFO)
}

/// Initializes tracing (logs go to a file to avoid terminal interference).
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let path = log
        .file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("fbrowse.log"));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(parse_level(&log.level))
        .init();
    Ok(())
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let (config, config_path) = load_config(args.config.as_deref())?;
    let keymap = load_keymap(config_path.as_deref())?;

    init_logging(&config.log)?;

    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let start_dir = args.start_dir.unwrap_or_else(|| config.start_dir(&cwd));
    let home_dir = config.home_dir(&cwd);
    tracing::info!(
        "starting in {} (home {})",
        start_dir.display(),
        home_dir.display()
    );

    let mut app = App::new(&start_dir, &home_dir, &config, keymap)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        tracing::error!("{e:#}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows terminals report releases as well as presses.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let action = handle_key(key, app.mode(), app.keymap());
            app.apply(action);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
