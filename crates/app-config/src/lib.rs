// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, DataSettings, Settings};

/// Loads the application settings from the `config` directory.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(Path::new("config"))
}

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `base.toml` file.
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`).
/// 3. Merges settings from environment variables.
pub fn load_settings_from(config_dir: &Path) -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base")))
        .add_source(File::from(config_dir.join(&environment)).required(false))
        // e.g. `APP_SCREENER__MIN_SCORE=5`. The prefix is `APP`, separator is `__`.
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const BASE: &str = r#"
        [app]
        environment = "development"
        log_level = "info"

        [data]
        dir = "data"

        [screener]
        universe = ["PLTR", "SOFI"]

        [sectors]
        unknown_label = "不明"

        [sectors.labels]
        Technology = "情報技術"
    "#;

    #[test]
    fn test_loads_base_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("base.toml"), BASE).unwrap();

        let settings = load_settings_from(dir.path()).unwrap();
        assert_eq!(settings.screener.universe, vec!["PLTR", "SOFI"]);
        assert_eq!(settings.screener.min_history_rows, 30);
        assert_eq!(settings.screener.min_score, 4);
        assert_eq!(settings.screener.threads, None);
        assert_eq!(settings.levels, risk::LevelSettings::default());
        assert_eq!(settings.sectors.unknown_label, "不明");
        let sectors = screener::SectorLookup::new(&settings.sectors);
        assert_eq!(sectors.label(Some("Technology")), "情報技術");
    }

    #[test]
    fn test_missing_base_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_settings_from(dir.path()),
            Err(Error::LoadError(_))
        ));
    }
}
