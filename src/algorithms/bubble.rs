//! Bubble sort, one adjacent comparison per step

use super::{SortStep, StepResult};
use crate::store::{ArrayStore, Highlight};

/// Resumable bubble sort.
///
/// `pass` counts completed passes (the last `pass` elements are already in
/// place), `cursor` walks the unsorted prefix. A pass that performs no swap
/// ends the sort early.
pub struct BubbleSort {
    pass: usize,
    cursor: usize,
    swapped: bool,
    done: bool,
}

impl BubbleSort {
    pub fn new(store: &ArrayStore) -> Self {
        BubbleSort {
            pass: 0,
            cursor: 0,
            swapped: false,
            done: store.len() < 2,
        }
    }
}

impl SortStep for BubbleSort {
    fn step(&mut self, store: &mut ArrayStore) -> StepResult {
        if self.done {
            store.clear_highlight();
            return StepResult::Done;
        }

        let n = store.len();
        let (a, b) = (self.cursor, self.cursor + 1);
        store.set_highlight(Highlight::Pair(a, b));
        if store.value(a) > store.value(b) {
            store.swap(a, b);
            self.swapped = true;
        }

        self.cursor += 1;
        if self.cursor + 1 >= n - self.pass {
            // Pass complete
            if !self.swapped {
                self.done = true;
            } else {
                self.pass += 1;
                self.cursor = 0;
                self.swapped = false;
                if n - self.pass < 2 {
                    self.done = true;
                }
            }
        }

        StepResult::Continue
    }
}
