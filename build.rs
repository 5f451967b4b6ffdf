// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = match fs::read_to_string("src/config.yaml") {
        Ok(content) => parse_config(&content),
        Err(_) => CompiledConfig::default(),
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const POLL_INTERVAL_MS: u64 = {poll_interval_ms};
pub const SCROLL_STEP: u16 = {scroll_step};

pub const LOG_FILE: &str = "{log_file}";
pub const LOG_LEVEL: &str = "{log_level}";
"#,
        mouse_enabled = config.mouse_enabled,
        poll_interval_ms = config.poll_interval_ms,
        scroll_step = config.scroll_step,
        log_file = config.log_file.escape_default(),
        log_level = config.log_level.escape_default(),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    mouse_enabled: bool,
    poll_interval_ms: u64,
    scroll_step: u16,
    log_file: String,
    log_level: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            poll_interval_ms: 50,
            scroll_step: 4,
            log_file: "chip-filter.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_ui = false;
    let mut in_logging = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Top-level keys start a new section
        if !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_ui = trimmed.starts_with("ui:");
            in_logging = trimmed.starts_with("logging:");
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        if in_ui {
            match key {
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                "poll_interval_ms" => config.poll_interval_ms = value.parse().unwrap_or(50),
                "scroll_step" => config.scroll_step = value.parse().unwrap_or(4),
                _ => {}
            }
        } else if in_logging {
            match key {
                "file" => config.log_file = unquote(value).to_string(),
                "level" => config.log_level = unquote(value).to_string(),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}
