// Configuration validation module

use crate::config::{load_config, AppConfig, ConfigError};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, warn};

/// Load and validate configuration
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let config = load_config(config_path).inspect_err(|e| {
        warn!(error = %e, "failed to load configuration");
    })?;
    validate_config(&config)?;
    info!(rows = config.filter_rows.len(), "configuration loaded");
    Ok(config)
}

/// Check the invariants the filter rows rely on
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.filter_rows.is_empty() {
        return Err(ConfigError::Invalid("no filter rows configured".to_string()));
    }

    let mut hwnds = HashSet::new();
    for row in &config.filter_rows {
        if !hwnds.insert(row.hwnd.as_str()) {
            return Err(ConfigError::Invalid(format!("duplicate filter row hwnd '{}'", row.hwnd)));
        }
        if row.items.is_empty() {
            return Err(ConfigError::Invalid(format!("filter row '{}' has no items", row.hwnd)));
        }
        if row.row_element_size == 0 {
            warn!(hwnd = %row.hwnd, "row_element_size is 0, the row will not be visible");
        }

        let mut ids = HashSet::new();
        for item in &row.items {
            if let Some(id) = item.id.as_deref() {
                if !ids.insert(id) {
                    return Err(ConfigError::Invalid(format!(
                        "filter row '{}' has duplicate item id '{}'",
                        row.hwnd, id
                    )));
                }
            }
        }
    }

    Ok(())
}
