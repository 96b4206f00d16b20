//! Gnome sort, one look (and possible swap) per step

use super::{SortStep, StepResult};
use crate::store::{ArrayStore, Highlight};

/// Resumable gnome sort: a single position cursor that steps forward while
/// the pair behind it is ordered and swaps backward while it is not.
pub struct GnomeSort {
    pos: usize,
    done: bool,
}

impl GnomeSort {
    pub fn new(store: &ArrayStore) -> Self {
        GnomeSort {
            pos: 1,
            done: store.len() < 2,
        }
    }
}

impl SortStep for GnomeSort {
    fn step(&mut self, store: &mut ArrayStore) -> StepResult {
        if self.done {
            store.clear_highlight();
            return StepResult::Done;
        }

        if store.value(self.pos - 1) <= store.value(self.pos) {
            store.set_highlight(Highlight::One(self.pos));
            self.pos += 1;
            if self.pos >= store.len() {
                self.done = true;
            }
        } else {
            store.set_highlight(Highlight::Pair(self.pos - 1, self.pos));
            store.swap(self.pos - 1, self.pos);
            if self.pos > 1 {
                self.pos -= 1;
            }
        }

        StepResult::Continue
    }
}
