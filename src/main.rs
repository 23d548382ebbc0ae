//! people-picker binary entry point.
//!
//! Parses flags, sets up file logging and the tokio runtime, then runs the
//! TUI event loop in raw mode and restores the terminal on exit.
//!
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use people_picker::app::{self, AppState, PickerConfig};
use people_picker::error::{Context, Result, simple_error};
use people_picker::people::HttpPeopleSource;

/// Search a remote people directory and show the selected person's address.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// URL returning a JSON array of people.
    #[arg(long, env = "PEOPLE_PICKER_ENDPOINT")]
    endpoint: Option<String>,

    /// Locale used to sort by last name (BCP-47, e.g. en-US, sv-SE).
    #[arg(long)]
    locale: Option<String>,

    /// Show records as fetched instead of deriving demo suffixes and titles.
    #[arg(long)]
    no_demo_extras: bool,

    /// Settings file; defaults to picker.conf in the config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log destination. Verbosity follows RUST_LOG (default: info).
    #[arg(long, default_value = "people-picker.log")]
    log_file: PathBuf,
}

impl Args {
    fn picker_config(&self) -> PickerConfig {
        let path = match &self.config {
            Some(p) => p.to_string_lossy().into_owned(),
            None => app::config_file_write_path("picker.conf"),
        };
        let mut cfg = PickerConfig::load_or_init(&path);
        if let Some(endpoint) = &self.endpoint {
            cfg.endpoint = endpoint.clone();
        }
        if let Some(locale) = &self.locale {
            cfg.locale = locale.clone();
        }
        if self.no_demo_extras {
            cfg.demo_extras = false;
        }
        cfg
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_ctx(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> std::io::Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let args = Args::parse();
    if !std::io::stdout().is_terminal() {
        return Err(simple_error("people-picker requires an interactive terminal"));
    }
    init_logging(&args.log_file)?;

    let config = args.picker_config();
    tracing::info!(endpoint = %config.endpoint, locale = %config.locale, demo_extras = config.demo_extras, "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .with_ctx(|| "build tokio runtime".to_string())?;
    let source = HttpPeopleSource::new(config.endpoint.clone());
    let state = AppState::new(&config);

    let mut terminal = init_terminal().with_ctx(|| "init terminal".to_string())?;

    let res = app::run(&mut terminal, runtime.handle(), source, state);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err}");
    }
    Ok(())
}
