// Managers module
// Provides OOP-style manager wrappers for TUI components

pub mod filter_row;

pub use filter_row::FilterRowManager;

// Re-export YAML configuration types from filter_row module
pub use filter_row::{
    FilterRowConfigYaml,
    FilterItemYaml,
    GridRowYaml,
    ButtonColorsYaml,
    convert_filter_row_config,
    create_filter_items,
};
