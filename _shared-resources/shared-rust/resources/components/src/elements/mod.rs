// GUI Elements module
// Visual components that render UI elements

pub mod filter_row;
pub mod lazy_grid;
pub mod round_button;

pub use filter_row::*;
pub use lazy_grid::*;
pub use round_button::*;
