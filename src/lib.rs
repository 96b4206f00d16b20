//! # Introduction
//!
//! sortviz animates sorting algorithms as a bar chart in the terminal. Each
//! algorithm runs as a resumable step function: every tick of a periodic
//! clock performs one minimal unit of visible work (a comparison, a swap, or
//! a bucket move), then control returns to the event loop so the viewer can
//! change the animation speed or quit mid-sort.
//!
//! ## Architecture
//!
//! ```text
//! clock tick → Scheduler → SortStep::step → ArrayStore → ui (BarChart)
//! ```
//!
//! 1. [`store`] — the shared mutable array being sorted plus the highlighted
//!    indices a step just touched.
//! 2. [`algorithms`] — the step-function contract, the registry of the eight
//!    algorithm variants, and the bucket list used by radix sort.
//! 3. [`scheduler`] — owns the active algorithm state and the clock thread;
//!    fires exactly one step per tick and rebinds the clock on speed changes
//!    without losing algorithm progress.
//! 4. [`ui`] — ratatui-based TUI; renders frame snapshots taken from the
//!    scheduler and maps key events to speed/quit controls.

pub mod algorithms;
pub mod scheduler;
pub mod store;
pub mod ui;
