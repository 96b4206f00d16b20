//! LSD radix sort, one element moved per step

use super::buckets::BucketList;
use super::{SortStep, StepResult};
use crate::store::{ArrayStore, Highlight};

const DIGIT_CLASSES: usize = 10;

enum Pass {
    /// Copying element `index` into its digit bucket
    Distribute { index: usize },
    /// Writing drained bucket elements back starting at `write`
    Collect { digit: usize, write: usize },
}

/// Resumable least-significant-digit radix sort.
///
/// `place` is the current power-of-ten digit place. A distribute step moves
/// one element into its bucket; a collect step drains one element back into
/// the array. When a collect pass completes and `place` exceeds the largest
/// element, the sort is done. Bucket appends keep arrival order, which makes
/// each pass stable.
pub struct RadixSort {
    place: i32,
    pass: Pass,
    buckets: BucketList,
    max_value: i32,
    done: bool,
}

impl RadixSort {
    pub fn new(store: &ArrayStore) -> Self {
        RadixSort {
            place: 1,
            pass: Pass::Distribute { index: 0 },
            buckets: BucketList::new(DIGIT_CLASSES),
            max_value: store.values().iter().copied().max().unwrap_or(0),
            done: store.len() < 2,
        }
    }
}

impl SortStep for RadixSort {
    fn step(&mut self, store: &mut ArrayStore) -> StepResult {
        if self.done {
            store.clear_highlight();
            return StepResult::Done;
        }

        match self.pass {
            Pass::Distribute { index } => {
                let value = store.value(index);
                let digit = ((value / self.place) % 10) as usize;
                self.buckets.bucket_mut(digit).append(value);
                store.set_highlight(Highlight::One(index));

                if index + 1 == store.len() {
                    self.pass = Pass::Collect { digit: 0, write: 0 };
                } else {
                    self.pass = Pass::Distribute { index: index + 1 };
                }
            }
            Pass::Collect { mut digit, write } => {
                // Skip empty buckets; draining one element is the step
                while self.buckets.bucket(digit).is_empty() {
                    digit += 1;
                }
                // Invariant: buckets hold exactly len() elements, so a
                // non-empty bucket exists while write < len()
                let value = self
                    .buckets
                    .bucket_mut(digit)
                    .remove_at(0)
                    .expect("non-empty bucket");
                store.set(write, value);
                store.set_highlight(Highlight::One(write));

                if write + 1 == store.len() {
                    // Pass complete
                    self.place *= 10;
                    if self.place > self.max_value {
                        self.done = true;
                    } else {
                        self.buckets.clear();
                        self.pass = Pass::Distribute { index: 0 };
                    }
                } else {
                    self.pass = Pass::Collect {
                        digit,
                        write: write + 1,
                    };
                }
            }
        }

        StepResult::Continue
    }
}
