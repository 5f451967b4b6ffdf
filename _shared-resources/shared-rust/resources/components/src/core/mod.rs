// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod filter_state;
pub mod view_config;

pub use filter_state::{
    FilterChange, FilterItem, FilterRowState, FilterStateError,
    RowViewport, SubscriptionId,
};
pub use view_config::{
    calculate_height, BackgroundColors, EdgeInsets, FilterRowConfig, GridRow,
    IconAlignment, IconSize, ImageConfig, RoundButtonConfig, TextConfig,
    DEFAULT_CHIP_IMAGE,
};
