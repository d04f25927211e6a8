//! Fixed-capacity binary min-heap with an index map from value to heap slot, which is what makes
//! [decrease_key](IndexedMinHeap::decrease_key) O(log n) instead of a linear search.
use fxhash::FxHashMap;
use std::hash::Hash;
use thiserror::Error;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapError {
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("heap is empty")]
    EmptyHeap,
    #[error("value is not in the heap")]
    NotFound,
    #[error("value is already in the heap")]
    DuplicateValue,
}

/// Binary min-heap over `(value, priority)` pairs.
///
/// Slots are 1-indexed: the parent of slot `i` is `i / 2`, its children are `2i` and `2i + 1`.
/// Slot `i` is stored at `entries[i - 1]`. `positions` maps every value currently in the heap to
/// its slot and is rewritten on every swap.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<T, P> {
    entries: Vec<(T, P)>,
    positions: FxHashMap<T, usize>,
    capacity: usize,
}

impl<T, P> IndexedMinHeap<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord + Copy,
{
    /// Creates an empty heap with room for exactly `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(capacity);
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            positions,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }
    /// Current priority of `value`, if it is in the heap.
    pub fn priority_of(&self, value: &T) -> Option<P> {
        self.positions.get(value).map(|&slot| self.key(slot))
    }

    /// Appends `value` at the next free slot and sifts it up.
    pub fn insert(&mut self, value: T, priority: P) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.positions.contains_key(&value) {
            return Err(HeapError::DuplicateValue);
        }
        self.entries.push((value.clone(), priority));
        let slot = self.entries.len();
        self.positions.insert(value, slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Returns the value with the smallest priority without removing it.
    pub fn find_min(&self) -> Result<&T, HeapError> {
        self.entries
            .first()
            .map(|(value, _)| value)
            .ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the value with the smallest priority. The last entry takes over the
    /// root slot and is sifted down.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let (root, _) = self.entries.swap_remove(0);
        self.positions.remove(&root);
        if !self.entries.is_empty() {
            self.update_position(1);
            self.sift_down(1);
        }
        Ok(root)
    }

    /// Lowers the priority of `value` and sifts it up.
    ///
    /// `new_priority` must not exceed the current priority: the entry is never sifted down, so a
    /// larger key leaves the heap unordered. This is only checked in debug builds.
    pub fn decrease_key(&mut self, value: &T, new_priority: P) -> Result<(), HeapError> {
        let slot = *self.positions.get(value).ok_or(HeapError::NotFound)?;
        debug_assert!(
            new_priority <= self.key(slot),
            "decrease_key called with a higher priority"
        );
        self.entries[slot - 1].1 = new_priority;
        self.sift_up(slot);
        Ok(())
    }

    fn key(&self, slot: usize) -> P {
        self.entries[slot - 1].1
    }

    fn update_position(&mut self, slot: usize) {
        if let Some(position) = self.positions.get_mut(&self.entries[slot - 1].0) {
            *position = slot;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a - 1, b - 1);
        self.update_position(a);
        self.update_position(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 1 {
            let parent = slot / 2;
            if self.key(parent) > self.key(slot) {
                self.swap(parent, slot);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Index of the smaller child of `slot`. Only valid when `2 * slot <= len`.
    fn min_child(&self, slot: usize) -> usize {
        let left = slot * 2;
        let right = left + 1;
        if right > self.len() || self.key(left) < self.key(right) {
            left
        } else {
            right
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        while slot * 2 <= self.len() {
            let child = self.min_child(slot);
            if self.key(slot) > self.key(child) {
                self.swap(slot, child);
                slot = child;
            } else {
                break;
            }
        }
    }

    /// Checks the ordering of every parent/child pair and that the index map agrees with the
    /// storage.
    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        for slot in 2..=self.len() {
            assert!(self.key(slot / 2) <= self.key(slot));
        }
        assert_eq!(self.positions.len(), self.entries.len());
        for (slot, (value, _)) in self.entries.iter().enumerate() {
            assert_eq!(self.positions.get(value), Some(&(slot + 1)));
        }
    }
}
