//! Stepper scheduler
//!
//! The scheduler owns the active algorithm state and the clock that drives
//! it: one [`SortStep::step`] per tick. The clock runs on its own thread
//! (the original program used an SDL timer callback), so the run state sits
//! behind an `Arc<Mutex<_>>` shared between the clock thread and the driver
//! (UI) thread.
//!
//! # Disarm barrier
//!
//! Speed changes and `stop()` tear the clock down by dropping its shutdown
//! channel sender and then **joining** the clock thread. The join guarantees
//! no step is in flight or queued when algorithm state is destroyed or a new
//! clock is armed — rearming never loses progress because all progress lives
//! in the algorithm state, not in the clock. The thread waits on
//! `recv_timeout(period)`, so a disarm wakes it promptly instead of after a
//! full period.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::algorithms::{SortStep, StepResult, REGISTRY};
use crate::store::{ArrayStore, Highlight};

/// Available tick rates in steps per second
pub const RATE_TABLE: [u32; 8] = [1, 2, 5, 10, 50, 100, 250, 500];

/// Index into [`RATE_TABLE`] used at startup and on speed reset
pub const DEFAULT_RATE_INDEX: usize = 5;

/// Where the animation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// The algorithm is still stepping
    Sorting,
    /// Sorting finished; the completion sweep has highlighted `swept`
    /// elements so far (one more per tick)
    Flourish { swept: usize },
    /// Sweep complete or scheduler stopped; the clock no longer rearms
    Finished,
}

/// Everything the clock thread and the driver share.
struct RunState {
    store: ArrayStore,
    /// `None` when idle — the state has been destroyed
    algorithm: Option<Box<dyn SortStep>>,
    phase: RunPhase,
    /// Number of `Continue` steps taken so far
    steps: u64,
}

/// Immutable snapshot handed to the presentation layer once per render.
#[derive(Debug, Clone)]
pub struct Frame {
    pub values: Vec<i32>,
    pub highlight: Highlight,
    pub phase: RunPhase,
    pub steps: u64,
}

struct Clock {
    shutdown: Sender<()>,
    handle: JoinHandle<()>,
}

/// Drives one step per tick and owns the active algorithm state.
pub struct Scheduler {
    shared: Arc<Mutex<RunState>>,
    clock: Option<Clock>,
    rate_index: usize,
}

impl Scheduler {
    /// Wrap an already-shuffled store; no algorithm is active yet
    pub fn new(store: ArrayStore) -> Self {
        Scheduler {
            shared: Arc::new(Mutex::new(RunState {
                store,
                algorithm: None,
                phase: RunPhase::Finished,
                steps: 0,
            })),
            clock: None,
            rate_index: DEFAULT_RATE_INDEX,
        }
    }

    /// Select an algorithm from [`REGISTRY`] by index, create its state, and
    /// arm the clock at the current rate.
    ///
    /// The index must be valid; the CLI rejects out-of-range selections
    /// before a scheduler exists.
    pub fn start(&mut self, index: usize) {
        self.disarm();
        let entry = &REGISTRY[index];
        {
            let mut state = self.shared.lock().expect("run state poisoned");
            state.algorithm = Some((entry.create)(&state.store));
            state.phase = RunPhase::Sorting;
            state.steps = 0;
        }
        self.arm();
    }

    /// Current tick rate in steps per second
    pub fn rate(&self) -> u32 {
        RATE_TABLE[self.rate_index]
    }

    /// Switch to `index` in [`RATE_TABLE`] (clamped), tearing down and
    /// rearming the clock. Algorithm progress is untouched: it lives in the
    /// state, not in the clock.
    pub fn set_speed(&mut self, index: usize) {
        let index = index.min(RATE_TABLE.len() - 1);
        if index == self.rate_index {
            return;
        }
        let was_armed = self.clock.is_some();
        self.disarm();
        self.rate_index = index;
        if was_armed && !self.finished() {
            self.arm();
        }
    }

    pub fn speed_up(&mut self) {
        if self.rate_index + 1 < RATE_TABLE.len() {
            self.set_speed(self.rate_index + 1);
        }
    }

    pub fn speed_down(&mut self) {
        if self.rate_index > 0 {
            self.set_speed(self.rate_index - 1);
        }
    }

    pub fn reset_speed(&mut self) {
        self.set_speed(DEFAULT_RATE_INDEX);
    }

    /// Disarm the clock and destroy the active algorithm state.
    ///
    /// The disarm join guarantees no step is in flight when the state drops;
    /// afterwards the scheduler is idle and only the store remains.
    pub fn stop(&mut self) {
        self.disarm();
        let mut state = self.shared.lock().expect("run state poisoned");
        state.algorithm = None;
        state.phase = RunPhase::Finished;
    }

    /// Snapshot the run state for rendering
    pub fn frame(&self) -> Frame {
        let state = self.shared.lock().expect("run state poisoned");
        Frame {
            values: state.store.values().to_vec(),
            highlight: state.store.highlight(),
            phase: state.phase,
            steps: state.steps,
        }
    }

    /// Whether the animation (sort plus sweep) has run to completion
    pub fn finished(&self) -> bool {
        self.shared.lock().expect("run state poisoned").phase == RunPhase::Finished
    }

    fn period(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.rate()))
    }

    fn arm(&mut self) {
        let (shutdown, ticks) = mpsc::channel::<()>();
        let shared = Arc::clone(&self.shared);
        let period = self.period();
        let handle = thread::spawn(move || loop {
            match ticks.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if !tick(&shared) {
                        break;
                    }
                }
                // Sender dropped: disarm requested
                _ => break,
            }
        });
        self.clock = Some(Clock { shutdown, handle });
    }

    /// Tear down the clock, waiting for any in-flight step to finish.
    fn disarm(&mut self) {
        if let Some(clock) = self.clock.take() {
            drop(clock.shutdown);
            // The join is the synchronizing barrier from the concurrency
            // contract: after it returns, no step can run on this clock.
            let _ = clock.handle.join();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One clock tick. Returns `false` once the clock should stop rearming.
fn tick(shared: &Mutex<RunState>) -> bool {
    let mut state = shared.lock().expect("run state poisoned");
    let state = &mut *state;
    match state.phase {
        RunPhase::Sorting => {
            let Some(algorithm) = state.algorithm.as_mut() else {
                return false;
            };
            match algorithm.step(&mut state.store) {
                StepResult::Continue => state.steps += 1,
                StepResult::Done => {
                    state.store.clear_highlight();
                    state.phase = RunPhase::Flourish { swept: 0 };
                }
            }
            true
        }
        RunPhase::Flourish { swept } => {
            if swept < state.store.len() {
                state.phase = RunPhase::Flourish { swept: swept + 1 };
                true
            } else {
                state.phase = RunPhase::Finished;
                false
            }
        }
        RunPhase::Finished => false,
    }
}
