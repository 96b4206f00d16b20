//! Odd-even (brick) sort, one adjacent comparison per step

use super::{SortStep, StepResult};
use crate::store::{ArrayStore, Highlight};

/// Resumable odd-even transposition sort.
///
/// Alternates passes over even-based and odd-based pairs. The sort is done
/// once two consecutive passes complete without a swap. Empty passes (odd
/// pass on a two-element array) are skipped inside the step that closes the
/// previous pass, so every step performs exactly one comparison.
pub struct OddEvenSort {
    parity: usize,
    cursor: usize,
    swapped: bool,
    prev_swapped: bool,
    done: bool,
}

impl OddEvenSort {
    pub fn new(store: &ArrayStore) -> Self {
        OddEvenSort {
            parity: 0,
            cursor: 0,
            swapped: false,
            // Seeded true so the sort never ends before the first real pass
            prev_swapped: true,
            done: store.len() < 2,
        }
    }
}

impl SortStep for OddEvenSort {
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

        self.cursor += 2;
        while self.cursor + 1 >= n {
            // Pass complete
            if !self.swapped && !self.prev_swapped {
                self.done = true;
                break;
            }
            self.prev_swapped = self.swapped;
            self.swapped = false;
            self.parity = 1 - self.parity;
            self.cursor = self.parity;
        }

        StepResult::Continue
    }
}
