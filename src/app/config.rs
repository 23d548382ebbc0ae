//! Picker configuration: parse/write `picker.conf`.
//!
//! The file uses the same `key = value` format as `theme.conf` and
//! `keybinds.conf`. Command-line flags override whatever it holds.

use crate::error::{Context, Result};
use crate::people::DEFAULT_ENDPOINT;
use crate::people::order::DEFAULT_LOCALE;

/// Settings that decide where people come from and how they are prepared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerConfig {
    /// URL answering `GET` with a JSON array of people.
    pub endpoint: String,
    /// BCP-47 tag for last-name collation.
    pub locale: String,
    /// Fill suffix/title from the record position (placeholder data only).
    pub demo_extras: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            demo_extras: true,
        }
    }
}

impl PickerConfig {
    /// Load from `path`, falling back to the config directory; if neither
    /// exists, write defaults to `path` and return them.
    pub fn load_or_init(path: &str) -> Self {
        let p = std::path::Path::new(path);
        if p.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        if let Some(existing) = crate::app::config_file_read_path("picker.conf") {
            return Self::from_file(&existing).unwrap_or_default();
        }
        let cfg = Self::default();
        if let Err(e) = cfg.write_file(path) {
            tracing::warn!(error = %e, "could not write default picker config");
        }
        cfg
    }

    /// Parse `key = value` lines over the defaults. Comments, blank lines and
    /// unknown keys are skipped; `None` only when the file cannot be read.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        let mut cfg = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let lhs = parts.next().map(|s| s.trim()).unwrap_or("");
            let rhs = parts.next().map(|s| s.trim()).unwrap_or("");
            if lhs.is_empty() || rhs.is_empty() {
                continue;
            }
            match lhs {
                "endpoint" => cfg.endpoint = rhs.to_string(),
                "locale" => cfg.locale = rhs.to_string(),
                "demo_extras" => cfg.demo_extras = parse_bool(rhs),
                _ => {}
            }
        }
        cfg
    }

    pub fn write_file(&self, path: &str) -> Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# people-picker settings\n");
        buf.push_str("# endpoint: URL returning a JSON array of people\n");
        buf.push_str("# locale: BCP-47 tag used to sort by last name\n");
        buf.push_str("# demo_extras: true to derive suffix/title from list position\n\n");
        let _ = writeln!(&mut buf, "endpoint = {}", self.endpoint);
        let _ = writeln!(&mut buf, "locale = {}", self.locale);
        let _ = writeln!(&mut buf, "demo_extras = {}", self.demo_extras);
        std::fs::write(path, buf).with_ctx(|| format!("write {path}"))
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_overrides_defaults_and_skips_noise() {
        let cfg = PickerConfig::parse(
            "# comment\n\nendpoint = http://localhost:9000/people\nlocale= sv-SE\nbogus = 1\ndemo_extras = off\nnovalue =\n",
        );
        assert_eq!(cfg.endpoint, "http://localhost:9000/people");
        assert_eq!(cfg.locale, "sv-SE");
        assert!(!cfg.demo_extras);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(PickerConfig::parse(""), PickerConfig::default());
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.conf");
        let path = path.to_str().unwrap();
        let cfg = PickerConfig {
            endpoint: "http://example.test/u".into(),
            locale: "de".into(),
            demo_extras: false,
        };
        cfg.write_file(path).unwrap();
        assert_eq!(PickerConfig::from_file(path), Some(cfg));
    }
}
