//! Insertion sort, one comparison (with its swap) per step

use super::{SortStep, StepResult};
use crate::store::{ArrayStore, Highlight};

/// Resumable insertion sort.
///
/// `frontier` is the first unsorted index; `cursor` walks the frontier
/// element down into the sorted prefix one exchange at a time.
pub struct InsertionSort {
    frontier: usize,
    cursor: usize,
    done: bool,
}

impl InsertionSort {
    pub fn new(store: &ArrayStore) -> Self {
        InsertionSort {
            frontier: 1,
            cursor: 1,
            done: store.len() < 2,
        }
    }
}

impl SortStep for InsertionSort {
    fn step(&mut self, store: &mut ArrayStore) -> StepResult {
        if self.done {
            store.clear_highlight();
            return StepResult::Done;
        }

        if self.cursor > 0 && store.value(self.cursor - 1) > store.value(self.cursor) {
            store.set_highlight(Highlight::Pair(self.cursor - 1, self.cursor));
            store.swap(self.cursor - 1, self.cursor);
            self.cursor -= 1;
        } else {
            // Element settled; advance the frontier
            store.set_highlight(Highlight::One(self.cursor));
            self.frontier += 1;
            self.cursor = self.frontier;
            if self.frontier >= store.len() {
                self.done = true;
            }
        }

        StepResult::Continue
    }
}
