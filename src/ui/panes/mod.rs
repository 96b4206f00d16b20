//! TUI pane rendering
//!
//! - [`bars`]: the bar chart of the array being sorted, with the touched
//!   pair and the completion sweep emphasized
//! - [`status`]: bottom status bar with keybindings, tick rate, and run
//!   phase

pub mod bars;
pub mod status;

pub use bars::render_bars_pane;
pub use status::render_status_bar;
