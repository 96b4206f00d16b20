//! Terminal user interface built on [ratatui](https://docs.rs/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state and the driver event loop (speed keys,
//!   quit, periodic redraw)
//! - **[`panes`]** — stateless render functions for the bar chart and the
//!   status bar
//! - **[`theme`]** — centralized color palette
//!
//! The entry point for consumers is [`App`]: construct it with a running
//! [`Scheduler`] and call [`App::run`] to enter the event loop.
//!
//! [`Scheduler`]: crate::scheduler::Scheduler
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
