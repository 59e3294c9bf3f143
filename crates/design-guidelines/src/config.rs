use std::path::PathBuf;

use crate::error::AppError;

/// Baked in at compile time so `cargo run` finds the bundled corpus without
/// any environment setup. Installed binaries set `DESIGN_DATA_DIR` instead.
const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data");

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the CSV knowledge base.
    pub data_dir: PathBuf,
    /// Directory `design-system/` output trees are created under.
    pub output_dir: PathBuf,
    /// Directory holding the optional `settings.json` file.
    pub settings_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `DESIGN_DATA_DIR`: CSV knowledge base directory (defaults to the bundled data)
    /// - `DESIGN_OUTPUT_DIR`: where generated documents are written (defaults to ".")
    /// - `DESIGN_SETTINGS_DIR`: settings location (defaults to `<output>/.design-guidelines`)
    pub fn from_env() -> Result<Self, AppError> {
        let data_dir =
            env_path("DESIGN_DATA_DIR").unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        if !data_dir.is_dir() {
            return Err(AppError::Config(format!(
                "data directory not found: {} (set DESIGN_DATA_DIR)",
                data_dir.display()
            )));
        }

        // Validate that the data directory contains the reasoning rules file
        let reasoning_file = data_dir.join("ui-reasoning.csv");
        if !reasoning_file.exists() {
            return Err(AppError::Config(format!(
                "ui-reasoning.csv not found at {}",
                reasoning_file.display()
            )));
        }

        let output_dir = env_path("DESIGN_OUTPUT_DIR").unwrap_or_else(|| PathBuf::from("."));
        let settings_dir = env_path("DESIGN_SETTINGS_DIR")
            .unwrap_or_else(|| output_dir.join(".design-guidelines"));

        Ok(Self {
            data_dir,
            output_dir,
            settings_dir,
        })
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
