//! Selection sort, one comparison per step

use super::{SortStep, StepResult};
use crate::store::{ArrayStore, Highlight};

/// Resumable selection sort.
///
/// `sorted` is the boundary of the sorted prefix, `scan` the cursor of the
/// current minimum scan, `min` the index of the smallest value seen so far.
/// The swap that closes a scan happens inside the scan's final comparison
/// step, so the number of `Continue` steps equals the number of comparisons.
pub struct SelectionSort {
    sorted: usize,
    scan: usize,
    min: usize,
    done: bool,
}

impl SelectionSort {
    pub fn new(store: &ArrayStore) -> Self {
        SelectionSort {
            sorted: 0,
            scan: 1,
            min: 0,
            done: store.len() < 2,
        }
    }
}

impl SortStep for SelectionSort {
    fn step(&mut self, store: &mut ArrayStore) -> StepResult {
        if self.done {
            store.clear_highlight();
            return StepResult::Done;
        }

        let n = store.len();
        store.set_highlight(Highlight::Pair(self.scan, self.min));
        if store.value(self.scan) < store.value(self.min) {
            self.min = self.scan;
        }

        self.scan += 1;
        if self.scan == n {
            // Scan complete: settle the minimum and open the next scan
            if self.min != self.sorted {
                store.swap(self.sorted, self.min);
            }
            self.sorted += 1;
            self.min = self.sorted;
            self.scan = self.sorted + 1;
            if self.sorted + 1 >= n {
                self.done = true;
            }
        }

        StepResult::Continue
    }
}
