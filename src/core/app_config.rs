// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

use std::time::Duration;

/// Application-level configuration for chip-filter
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI and input settings
    pub ui: UiSettings,

    /// Log sink settings
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Enable mouse support
    pub mouse_enabled: bool,

    /// How long the event loop waits for input before redrawing
    pub poll_interval: Duration,

    /// Cells scrolled per wheel notch or `[`/`]` press
    pub scroll_step: u16,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file name (relative to the working directory)
    pub file: String,

    /// Default filter directive; RUST_LOG takes precedence
    pub level: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            poll_interval: Duration::from_millis(compiled::POLL_INTERVAL_MS),
            scroll_step: compiled::SCROLL_STEP,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: compiled::LOG_FILE.to_string(),
            level: compiled::LOG_LEVEL.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
