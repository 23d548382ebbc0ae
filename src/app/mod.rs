//! Application state types and entry glue.
//!
//! `AppState` owns the fetched people, the filtered view of them, the
//! highlighted row and the selection. It is mutated only by the event loop
//! in [`update`], either when the fetch completes or on user input.
//!
pub mod config;
pub mod keymap;
pub mod update;

use std::path::PathBuf;
use std::time::Instant;

use ratatui::style::Color;
use tracing::{debug, error, info, warn};

use crate::people::{self, Enrich, FetchError, LastNameOrder, Person};

pub use config::PickerConfig;
pub use keymap::Keymap;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Modal,
}

/// Progress of the single people fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Modal overlays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState {
    Help { scroll: u16 },
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub error: Color,
}

impl Theme {
    /// Catppuccin Mocha.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            error: Color::Rgb(0xf3, 0x8b, 0xa8),        // red
        }
    }

    /// Load from a `key = value` file. Unknown or missing keys keep `mocha`.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        let mut theme = Self::mocha();
        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(|s| s.trim()).unwrap_or("");
            let val = parts.next().map(|s| s.trim()).unwrap_or("");
            let Some(color) = Self::parse_color(val) else {
                continue;
            };
            match key {
                "text" => theme.text = color,
                "muted" => theme.muted = color,
                "title" => theme.title = color,
                "border" => theme.border = color,
                "header_bg" => theme.header_bg = color,
                "header_fg" => theme.header_fg = color,
                "status_bg" => theme.status_bg = color,
                "status_fg" => theme.status_fg = color,
                "highlight_fg" => theme.highlight_fg = color,
                "highlight_bg" => theme.highlight_bg = color,
                "error" => theme.error = color,
                _ => {}
            }
        }
        theme
    }

    /// Hex (`#RRGGBB` or `RRGGBB`) or `reset`.
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Color::Rgb(r, g, b))
    }

    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# people-picker theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");

        fn color_to_str(c: Color) -> String {
            match c {
                Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
                _ => "reset".to_string(),
            }
        }

        let mut kv = |k: &str, v: Color| {
            let _ = writeln!(&mut buf, "{} = {}", k, color_to_str(v));
        };
        kv("text", self.text);
        kv("muted", self.muted);
        kv("title", self.title);
        kv("border", self.border);
        kv("header_bg", self.header_bg);
        kv("header_fg", self.header_fg);
        kv("status_bg", self.status_bg);
        kv("status_fg", self.status_fg);
        kv("highlight_fg", self.highlight_fg);
        kv("highlight_bg", self.highlight_bg);
        kv("error", self.error);

        std::fs::write(path, buf)
    }

    /// Load `path` if present, else the config directory copy, else write `mocha` to `path`.
    pub fn load_or_init(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        if let Some(existing) = config_file_read_path("theme.conf") {
            return Self::from_file(&existing).unwrap_or_else(Self::mocha);
        }
        let t = Self::mocha();
        if let Err(e) = t.write_file(path) {
            warn!(error = %e, "could not write default theme");
        }
        t
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

/// `<config dir>/people-picker`, e.g. `~/.config/people-picker` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("people-picker"))
}

/// Existing config file `name` in [`config_dir`], if any.
pub fn config_file_read_path(name: &str) -> Option<String> {
    let path = config_dir()?.join(name);
    path.exists().then(|| path.to_string_lossy().into_owned())
}

/// Where a config file named `name` should be written; creates the directory.
/// Falls back to the working directory when no config directory is known.
pub fn config_file_write_path(name: &str) -> String {
    match config_dir() {
        Some(dir) if std::fs::create_dir_all(&dir).is_ok() => {
            dir.join(name).to_string_lossy().into_owned()
        }
        _ => name.to_string(),
    }
}

pub struct AppState {
    pub started_at: Instant,
    pub people_all: Vec<Person>,
    pub people: Vec<Person>,
    pub highlighted: usize,
    pub selected_id: Option<u64>,
    pub rows_per_page: usize,
    pub load: LoadState,
    pub input_mode: InputMode,
    pub search_query: String,
    pub theme: Theme,
    pub keymap: Keymap,
    pub modal: Option<ModalState>,
    pub endpoint: String,
    order: LastNameOrder,
    enrich: Box<dyn Enrich + Send + Sync>,
}

impl AppState {
    /// State for `config`, with theme and keybindings read from the config directory.
    pub fn new(config: &PickerConfig) -> Self {
        let theme = Theme::load_or_init(&config_file_write_path("theme.conf"));
        let keymap = Keymap::load_or_init(&config_file_write_path("keybinds.conf"));
        Self::with_parts(config, theme, keymap)
    }

    /// State without touching the filesystem.
    pub fn with_parts(config: &PickerConfig, theme: Theme, keymap: Keymap) -> Self {
        Self {
            started_at: Instant::now(),
            people_all: Vec::new(),
            people: Vec::new(),
            highlighted: 0,
            selected_id: None,
            rows_per_page: 10,
            load: LoadState::Loading,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme,
            keymap,
            modal: None,
            endpoint: config.endpoint.clone(),
            order: LastNameOrder::for_locale(&config.locale),
            enrich: people::enrich::from_flag(config.demo_extras),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Install the fetch result. Success decorates, sorts and shows the list;
    /// failure clears loading and keeps the message for display.
    pub fn on_people_loaded(&mut self, result: Result<Vec<Person>, FetchError>) {
        self.selected_id = None;
        self.highlighted = 0;
        match result {
            Ok(fetched) => {
                info!(count = fetched.len(), "people loaded");
                self.people_all = people::prepare(fetched, self.enrich.as_ref(), &self.order);
                self.load = LoadState::Ready;
            }
            Err(e) => {
                error!(error = %e, endpoint = %self.endpoint, "failed to fetch people");
                self.people_all.clear();
                self.load = LoadState::Failed(e.to_string());
            }
        }
        crate::search::apply_search(self);
    }

    pub fn highlighted_person(&self) -> Option<&Person> {
        self.people.get(self.highlighted)
    }

    /// The selection, looked up by id among all fetched people.
    pub fn selected_person(&self) -> Option<&Person> {
        let id = self.selected_id?;
        self.people_all.iter().find(|p| p.id == id)
    }

    pub fn is_selected(&self, person: &Person) -> bool {
        self.selected_id == Some(person.id)
    }

    pub fn select_highlighted(&mut self) {
        if let Some(p) = self.highlighted_person() {
            let id = p.id;
            debug!(id, label = %p.label(), "selected");
            self.selected_id = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selected_id.take().is_some() {
            debug!("selection cleared");
        }
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.highlighted + 1 < self.people.len() {
            self.highlighted += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(self.rows_per_page.max(1));
    }

    pub fn page_down(&mut self) {
        let next = self.highlighted.saturating_add(self.rows_per_page.max(1));
        self.highlighted = next.min(self.people.len().saturating_sub(1));
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
