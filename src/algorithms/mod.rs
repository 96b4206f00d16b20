//! Sorting algorithms as resumable state machines
//!
//! Every algorithm variant implements the same contract:
//!
//! - `create` (a plain fn in [`REGISTRY`]) allocates the variant's private
//!   progress state from a read-only view of the store; it never reorders
//!   the values (the store is already shuffled before any algorithm starts).
//! - [`SortStep::step`] performs one minimal unit of visible work — a single
//!   comparison, swap, or bucket move — and reports [`StepResult::Continue`]
//!   or [`StepResult::Done`]. Calls are strictly sequential but may arrive at
//!   arbitrary intervals; all progress (loop cursors, pass flags, bucket
//!   contents) therefore lives in the state struct, never on the call stack.
//! - destruction is `Drop`: the scheduler drops the boxed state exactly once
//!   when it stops.
//!
//! The scheduler only ever observes `Continue` vs `Done`; the progress fields
//! belong to the variant alone.

mod bogo;
mod bubble;
pub mod buckets;
mod gnome;
mod insertion;
mod odd_even;
mod radix;
mod selection;
mod stooge;

pub use bogo::BogoSort;
pub use bubble::BubbleSort;
pub use gnome::GnomeSort;
pub use insertion::InsertionSort;
pub use odd_even::OddEvenSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;
pub use stooge::StoogeSort;

use crate::store::ArrayStore;

/// Outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// More work remains; the store's highlight marks the touched indices
    Continue,
    /// Sorting is complete: the array is fully ordered and the highlight
    /// has been cleared
    Done,
}

/// A resumable sorting algorithm.
///
/// `step` must be safe to call repeatedly at irregular intervals; once it
/// has returned [`StepResult::Done`] it keeps returning `Done`.
pub trait SortStep: Send {
    fn step(&mut self, store: &mut ArrayStore) -> StepResult;
}

/// Constructor signature shared by every variant
pub type CreateFn = fn(&ArrayStore) -> Box<dyn SortStep>;

/// One registry row: display name plus constructor
pub struct AlgorithmEntry {
    pub name: &'static str,
    pub create: CreateFn,
}

fn create_bubble(store: &ArrayStore) -> Box<dyn SortStep> {
    Box::new(BubbleSort::new(store))
}

fn create_selection(store: &ArrayStore) -> Box<dyn SortStep> {
    Box::new(SelectionSort::new(store))
}

fn create_bogo(store: &ArrayStore) -> Box<dyn SortStep> {
    Box::new(BogoSort::new(store))
}

fn create_insertion(store: &ArrayStore) -> Box<dyn SortStep> {
    Box::new(InsertionSort::new(store))
}

fn create_gnome(store: &ArrayStore) -> Box<dyn SortStep> {
    Box::new(GnomeSort::new(store))
}

fn create_odd_even(store: &ArrayStore) -> Box<dyn SortStep> {
    Box::new(OddEvenSort::new(store))
}

fn create_stooge(store: &ArrayStore) -> Box<dyn SortStep> {
    Box::new(StoogeSort::new(store))
}

fn create_radix(store: &ArrayStore) -> Box<dyn SortStep> {
    Box::new(RadixSort::new(store))
}

/// The fixed, ordered table of algorithm variants.
///
/// The CLI selects an entry by index; `-1` maps to the last row.
pub const REGISTRY: &[AlgorithmEntry] = &[
    AlgorithmEntry {
        name: "Bubble Sort",
        create: create_bubble,
    },
    AlgorithmEntry {
        name: "Selection Sort",
        create: create_selection,
    },
    AlgorithmEntry {
        name: "Bogosort",
        create: create_bogo,
    },
    AlgorithmEntry {
        name: "Insertion Sort",
        create: create_insertion,
    },
    AlgorithmEntry {
        name: "Gnome Sort",
        create: create_gnome,
    },
    AlgorithmEntry {
        name: "Odd-even Sort",
        create: create_odd_even,
    },
    AlgorithmEntry {
        name: "Stooge Sort",
        create: create_stooge,
    },
    AlgorithmEntry {
        name: "Radix Sort",
        create: create_radix,
    },
];
