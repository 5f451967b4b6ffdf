// Shared TUI components library
// Filter chip rows and round toggle buttons for ratatui interfaces

// Core infrastructure: row state and style configuration
pub mod core;
// GUI elements (visual components)
pub mod elements;
// OOP-style manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
// filter_row exists in both elements and managers (FilterRow widget vs FilterRowManager)
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;
