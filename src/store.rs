//! Shared array store
//!
//! This module provides [`ArrayStore`], the single mutable resource every
//! algorithm operates on: the sequence of values being sorted and the
//! [`Highlight`] marking the positions the most recent step touched.
//!
//! The store is created once per run, before any algorithm starts, by filling
//! `[1..=N]` scaled to the canvas height and then shuffling uniformly. Its
//! length never changes afterwards; algorithms only reorder values in place.

use rand::seq::SliceRandom;
use rand::Rng;

/// Virtual canvas width in pixels; together with [`BAR_WIDTH`] it determines
/// the number of values to sort.
pub const CANVAS_WIDTH: usize = 800;

/// Virtual canvas height in pixels; values are scaled so the tallest bar
/// reaches the top of the canvas.
pub const CANVAS_HEIGHT: usize = 600;

/// Width of one bar in canvas pixels.
pub const BAR_WIDTH: usize = 10;

/// The 0, 1, or 2 indices the most recent step touched.
///
/// Used only for rendering emphasis, never for algorithm correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    One(usize),
    Pair(usize, usize),
}

impl Highlight {
    /// Whether `index` is one of the highlighted positions
    pub fn contains(self, index: usize) -> bool {
        match self {
            Highlight::None => false,
            Highlight::One(a) => a == index,
            Highlight::Pair(a, b) => a == index || b == index,
        }
    }
}

/// The shared mutable array being sorted.
///
/// Exactly one store exists per run; it outlives any single algorithm's
/// state. Steps mutate it through [`swap`](ArrayStore::swap) /
/// [`set`](ArrayStore::set) and record what they touched with
/// [`set_highlight`](ArrayStore::set_highlight).
#[derive(Debug, Clone)]
pub struct ArrayStore {
    values: Vec<i32>,
    highlight: Highlight,
}

impl ArrayStore {
    /// Build a store sized from the virtual canvas: `CANVAS_WIDTH /
    /// BAR_WIDTH` values, heights `(i + 1) * (CANVAS_HEIGHT / N)`.
    ///
    /// The result is in ascending order; call [`shuffle`](Self::shuffle)
    /// before handing it to an algorithm.
    pub fn from_canvas() -> Self {
        let len = CANVAS_WIDTH / BAR_WIDTH;
        let scale = CANVAS_HEIGHT as f64 / len as f64;
        let values = (1..=len).map(|i| (i as f64 * scale) as i32).collect();
        ArrayStore {
            values,
            highlight: Highlight::None,
        }
    }

    /// Build a store from explicit values (used by tests and benchmarks)
    pub fn from_values(values: Vec<i32>) -> Self {
        ArrayStore {
            values,
            highlight: Highlight::None,
        }
    }

    /// Uniform Fisher–Yates shuffle
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.values.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn value(&self, index: usize) -> i32 {
        self.values[index]
    }

    /// Overwrite the value at `index`
    pub fn set(&mut self, index: usize, value: i32) {
        self.values[index] = value;
    }

    /// Exchange the values at `a` and `b`
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    /// Whether the values are in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Record the positions the current step touched.
    ///
    /// Indices must be within `[0, len)`.
    pub fn set_highlight(&mut self, highlight: Highlight) {
        debug_assert!(match highlight {
            Highlight::None => true,
            Highlight::One(a) => a < self.values.len(),
            Highlight::Pair(a, b) => a < self.values.len() && b < self.values.len(),
        });
        self.highlight = highlight;
    }

    pub fn clear_highlight(&mut self) {
        self.highlight = Highlight::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn canvas_store_has_expected_shape() {
        let store = ArrayStore::from_canvas();
        assert_eq!(store.len(), CANVAS_WIDTH / BAR_WIDTH);
        assert!(store.is_sorted());
        // Tallest bar reaches the canvas top
        assert_eq!(store.values().last(), Some(&(CANVAS_HEIGHT as i32)));
    }

    #[test]
    fn shuffle_preserves_the_multiset() {
        let mut store = ArrayStore::from_canvas();
        let mut before = store.values().to_vec();
        let mut rng = StdRng::seed_from_u64(7);
        store.shuffle(&mut rng);
        let mut after = store.values().to_vec();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn highlight_membership() {
        let mut store = ArrayStore::from_values(vec![3, 1, 2]);
        assert!(!store.highlight().contains(0));
        store.set_highlight(Highlight::Pair(0, 2));
        assert!(store.highlight().contains(0));
        assert!(!store.highlight().contains(1));
        assert!(store.highlight().contains(2));
        store.clear_highlight();
        assert_eq!(store.highlight(), Highlight::None);
    }
}
