//! Bucket list for distribution sorts
//!
//! Radix sort groups elements by digit into ten buckets during a distribute
//! pass, then drains them back into the array in bucket order. The original
//! structure was a singly linked list walked by index; here each bucket is a
//! `VecDeque` so front removal during a drain is O(1) and there is no pointer
//! chasing.
//!
//! Within one bucket insertion order is preserved — the stability radix sort
//! depends on.

use std::collections::VecDeque;

/// One ordered bucket of values
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    items: VecDeque<i32>,
}

impl Bucket {
    pub fn new() -> Self {
        Bucket {
            items: VecDeque::new(),
        }
    }

    /// Insert at the front of the bucket
    pub fn insert_front(&mut self, value: i32) {
        self.items.push_front(value);
    }

    /// Append at the back of the bucket
    pub fn append(&mut self, value: i32) {
        self.items.push_back(value);
    }

    /// Remove and return the value at `index`, or `None` if out of range.
    ///
    /// `remove_at(0)` pops in list order, which is how a drain walks the
    /// bucket.
    pub fn remove_at(&mut self, index: usize) -> Option<i32> {
        self.items.remove(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in list order
    pub fn iter(&self) -> impl Iterator<Item = &i32> {
        self.items.iter()
    }
}

/// A fixed set of buckets keyed by digit value.
#[derive(Debug, Clone)]
pub struct BucketList {
    buckets: Vec<Bucket>,
}

impl BucketList {
    /// One bucket per digit class
    pub fn new(classes: usize) -> Self {
        BucketList {
            buckets: vec![Bucket::new(); classes],
        }
    }

    pub fn bucket(&self, digit: usize) -> &Bucket {
        &self.buckets[digit]
    }

    pub fn bucket_mut(&mut self, digit: usize) -> &mut Bucket {
        &mut self.buckets[digit]
    }

    /// Number of digit classes
    pub fn classes(&self) -> usize {
        self.buckets.len()
    }

    /// Total element count across all buckets
    pub fn total_len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    /// Empty every bucket (start of a new digit pass)
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.items.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_append_order() {
        let mut bucket = Bucket::new();
        for v in [5, 3, 5, 1] {
            bucket.append(v);
        }

        let mut drained = Vec::new();
        while let Some(v) = bucket.remove_at(0) {
            drained.push(v);
        }
        assert_eq!(drained, vec![5, 3, 5, 1]);
        assert!(bucket.is_empty());
    }

    #[test]
    fn insert_front_reverses() {
        let mut bucket = Bucket::new();
        for v in [1, 2, 3] {
            bucket.insert_front(v);
        }
        assert_eq!(bucket.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn remove_at_out_of_range_is_none() {
        let mut bucket = Bucket::new();
        bucket.append(9);
        assert_eq!(bucket.remove_at(5), None);
        assert_eq!(bucket.remove_at(0), Some(9));
        assert_eq!(bucket.remove_at(0), None);
    }

    #[test]
    fn total_len_tracks_distribution() {
        let mut list = BucketList::new(10);
        list.bucket_mut(3).append(13);
        list.bucket_mut(3).append(23);
        list.bucket_mut(7).append(7);
        assert_eq!(list.total_len(), 3);
        list.clear();
        assert_eq!(list.total_len(), 0);
    }
}
