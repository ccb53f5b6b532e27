// In crates/app-config/src/types.rs

use risk::LevelSettings;
use screener::{ScreenerSettings, SectorSettings};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Where daily market data is read from.
    pub data: DataSettings,
    /// The ticker universe and ranking thresholds.
    pub screener: ScreenerSettings,
    #[serde(default)]
    pub levels: LevelSettings,
    #[serde(default)]
    pub sectors: SectorSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DataSettings {
    /// Directory holding one `<TICKER>.json` file per ticker.
    pub dir: String,
}
