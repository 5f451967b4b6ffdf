// Chip Filter Library
// Terminal demo of the filter chip row and round button widgets

// Core infrastructure - app state, compiled settings, events
pub mod core;

// YAML configuration loading and validation
pub mod config;
pub mod config_validation;

// File logging
pub mod logging;

// Screen rendering
pub mod render;

// Re-export commonly used items for convenience
pub use core::{App, AppConfig, AppEvent, EventHandler};
pub use logging::init_logging;
pub use render::render_app;
