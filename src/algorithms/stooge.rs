//! Stooge sort, one end-pair comparison per step
//!
//! The textbook algorithm is recursive; here the recursion is an explicit
//! frame stack stored in the state so a step can return to the scheduler
//! between comparisons.

use super::{SortStep, StepResult};
use crate::store::{ArrayStore, Highlight};

/// One suspended `stooge(lo, hi)` activation.
///
/// `stage` records which of the three recursive calls have been issued:
/// 0 = end-pair comparison pending, 1–3 = that many children dispatched.
#[derive(Clone, Copy)]
struct Frame {
    lo: usize,
    hi: usize,
    stage: u8,
}

/// Resumable stooge sort driven by an explicit call stack.
pub struct StoogeSort {
    stack: Vec<Frame>,
    done: bool,
}

impl StoogeSort {
    pub fn new(store: &ArrayStore) -> Self {
        let n = store.len();
        StoogeSort {
            stack: if n < 2 {
                Vec::new()
            } else {
                vec![Frame {
                    lo: 0,
                    hi: n - 1,
                    stage: 0,
                }]
            },
            done: n < 2,
        }
    }

    fn set_top_stage(&mut self, stage: u8) {
        if let Some(top) = self.stack.last_mut() {
            top.stage = stage;
        }
    }
}

impl SortStep for StoogeSort {
    fn step(&mut self, store: &mut ArrayStore) -> StepResult {
        if self.done {
            store.clear_highlight();
            return StepResult::Done;
        }

        // Unwind finished activations until a comparison is pending
        let frame = loop {
            let top = match self.stack.last() {
                Some(frame) => *frame,
                None => {
                    self.done = true;
                    store.clear_highlight();
                    return StepResult::Done;
                }
            };
            let third = (top.hi - top.lo + 1) / 3;
            match top.stage {
                0 => break top,
                1 => {
                    self.set_top_stage(2);
                    self.stack.push(Frame {
                        lo: top.lo + third,
                        hi: top.hi,
                        stage: 0,
                    });
                }
                2 => {
                    self.set_top_stage(3);
                    self.stack.push(Frame {
                        lo: top.lo,
                        hi: top.hi - third,
                        stage: 0,
                    });
                }
                _ => {
                    self.stack.pop();
                }
            }
        };

        let (lo, hi) = (frame.lo, frame.hi);
        store.set_highlight(Highlight::Pair(lo, hi));
        if store.value(lo) > store.value(hi) {
            store.swap(lo, hi);
        }

        if hi - lo + 1 > 2 {
            let third = (hi - lo + 1) / 3;
            self.set_top_stage(1);
            self.stack.push(Frame {
                lo,
                hi: hi - third,
                stage: 0,
            });
        } else {
            self.stack.pop();
            if self.stack.is_empty() {
                self.done = true;
            }
        }

        StepResult::Continue
    }
}
