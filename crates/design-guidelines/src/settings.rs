use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::render::OutputFormat;

/// File name inside the settings directory.
const SETTINGS_FILE: &str = "settings.json";

/// Per-project preferences, read once at startup.
///
/// The file is user-edited; the server never writes it. Fields absent from
/// the file keep their defaults, and a file that fails to parse is ignored
/// entirely. The server must not refuse to start over settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hint for hosts that re-inject the active design system into context.
    pub auto_inject_design_system: bool,
    /// Stack appended to `design_system` results when the call names none.
    pub default_stack: Option<String>,
    /// Summary flavor used when the call names none.
    pub default_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_inject_design_system: false,
            default_stack: None,
            default_format: OutputFormat::Markdown,
        }
    }
}

impl Settings {
    /// Load settings from `<dir>/settings.json`.
    pub fn load(dir: &Path) -> Settings {
        let path = dir.join(SETTINGS_FILE);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) => return Settings::default(),
        };
        match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring malformed settings file");
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();

        let settings = Settings::load(dir.path());

        assert_eq!(settings, Settings::default());
        assert!(!settings.auto_inject_design_system);
        assert_eq!(settings.default_stack, None);
        assert_eq!(settings.default_format, OutputFormat::Markdown);
    }

    #[test]
    fn full_file_round_trips() {
        let dir = TempDir::new().unwrap();
        let custom = Settings {
            auto_inject_design_system: true,
            default_stack: Some("react".to_string()),
            default_format: OutputFormat::Ascii,
        };
        let json = serde_json::to_string_pretty(&custom).unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), json).unwrap();

        assert_eq!(Settings::load(dir.path()), custom);
    }

    #[test]
    fn partial_file_fills_missing_fields_from_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"auto_inject_design_system": true}"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path());

        assert!(settings.auto_inject_design_system);
        assert_eq!(settings.default_stack, None);
        assert_eq!(settings.default_format, OutputFormat::Markdown);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{not json").unwrap();

        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn wrongly_typed_field_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"default_stack": 3, "default_format": "ascii"}"#,
        )
        .unwrap();

        assert_eq!(Settings::load(dir.path()), Settings::default());
    }
}
