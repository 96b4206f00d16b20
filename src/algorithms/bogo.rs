//! Bogosort, one order check per step (a reshuffle is one step)

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::{SortStep, StepResult};
use crate::store::{ArrayStore, Highlight};

enum Phase {
    /// Scanning for disorder at pair `(index, index + 1)`
    Check(usize),
    /// A scan found disorder; reshuffle everything
    Shuffle,
}

/// Resumable bogosort.
///
/// Scans adjacent pairs one step at a time; the first out-of-order pair
/// triggers a full reshuffle (one visible unit — the whole array changes at
/// once), after which the scan restarts. Owns its RNG so progress survives
/// across ticks and tests can pin the seed.
pub struct BogoSort {
    phase: Phase,
    rng: SmallRng,
    done: bool,
}

impl BogoSort {
    pub fn new(store: &ArrayStore) -> Self {
        Self::with_seed(store, rand::random())
    }

    /// Deterministic variant for tests
    pub fn with_seed(store: &ArrayStore, seed: u64) -> Self {
        BogoSort {
            phase: Phase::Check(0),
            rng: SmallRng::seed_from_u64(seed),
            done: store.len() < 2,
        }
    }
}

impl SortStep for BogoSort {
    fn step(&mut self, store: &mut ArrayStore) -> StepResult {
        if self.done {
            store.clear_highlight();
            return StepResult::Done;
        }

        match self.phase {
            Phase::Check(i) => {
                store.set_highlight(Highlight::Pair(i, i + 1));
                if store.value(i) <= store.value(i + 1) {
                    if i + 2 >= store.len() {
                        // Every pair checked out
                        self.done = true;
                    } else {
                        self.phase = Phase::Check(i + 1);
                    }
                } else {
                    self.phase = Phase::Shuffle;
                }
            }
            Phase::Shuffle => {
                store.shuffle(&mut self.rng);
                store.clear_highlight();
                self.phase = Phase::Check(0);
            }
        }

        StepResult::Continue
    }
}
